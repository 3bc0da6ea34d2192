//! Auth container swapping between login and its sibling screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the active `AuthAction`. Child screens never switch themselves; they
//! report the requested action and this page re-renders. The shared notice
//! banner and the language picker sit above whichever screen is active.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::auth_notice::AuthNotice;
use crate::components::lang_switcher::LangSwitcher;
use crate::i18n::{Catalog, Translate, keys};
use crate::pages::login::LoginPage;
use crate::state::login::AuthAction;

/// Title key of the document for each screen.
fn title_key(action: AuthAction) -> &'static str {
    match action {
        AuthAction::Login => keys::LOGIN_TITLE,
        AuthAction::ForgotPassword => keys::FORGOT_TITLE,
        AuthAction::Register => keys::REGISTER_TITLE,
    }
}

/// `/login` route.
#[component]
pub fn AuthPage() -> impl IntoView {
    let catalog = expect_context::<Memo<Catalog>>();
    let action = RwSignal::new(AuthAction::Login);

    let on_action_change = Callback::new(move |mode: AuthAction| {
        log::debug!("auth screen -> {}", mode.as_str());
        action.set(mode);
    });
    let back = Callback::new(move |()| action.set(AuthAction::Login));

    view! {
        <Title text=move || catalog.with(|c| c.tr(title_key(action.get())))/>
        <div class="auth-page">
            <div class="auth-card">
                <LangSwitcher/>
                <AuthNotice/>
                {move || match action.get() {
                    AuthAction::Login => view! { <LoginPage action=action on_action_change=on_action_change/> }.into_any(),
                    AuthAction::ForgotPassword => view! {
                        <InfoPanel title_key=keys::FORGOT_TITLE desc_key=keys::FORGOT_DESC on_back=back/>
                    }
                    .into_any(),
                    AuthAction::Register => view! {
                        <InfoPanel title_key=keys::REGISTER_TITLE desc_key=keys::REGISTER_DESC on_back=back/>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

/// Sibling screen with a title, a short explanation, and a way back.
#[component]
fn InfoPanel(title_key: &'static str, desc_key: &'static str, on_back: Callback<()>) -> impl IntoView {
    let catalog = expect_context::<Memo<Catalog>>();
    let t = move |key: &'static str| catalog.with(|c| c.tr(key));

    view! {
        <div class="auth-panel">
            <h3 class="auth-panel__title">{move || t(title_key)}</h3>
            <p class="auth-panel__desc">{move || t(desc_key)}</p>
            <button type="button" class="spinner-button" on:click=move |_| on_back.run(())>
                {move || t(keys::GENERAL_BACK_BUTTON)}
            </button>
        </div>
    }
}
