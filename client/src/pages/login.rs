//! Login screen: email + password form backed by `LoginScreen`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by `AuthPage` while the container's action is `Login`. The page
//! posts the demo hint on mount, clears the shared notice on unmount, and
//! asks the container to switch screens through `on_action_change`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::spinner_button::{SpinnerButton, SpinnerButtonOptions};
use crate::i18n::{Catalog, Translate, keys};
use crate::services::auth::{Authenticator, DemoAuthenticator};
use crate::state::auth::AuthState;
use crate::state::login::{AuthAction, LoginScreen, SubmitOutcome};
use crate::state::login_form::ControlErrors;
use crate::state::notice::NoticeState;

/// CSS classes of an input, flagged after a submit failed validation.
fn input_class(errors: &ControlErrors, attempted: bool) -> &'static str {
    if attempted && !errors.is_clean() { "auth-input auth-input--invalid" } else { "auth-input" }
}

#[component]
pub fn LoginPage(
    /// Active auth sub-screen, echoed back through `on_action_change`.
    #[prop(into)]
    action: Signal<AuthAction>,
    on_action_change: Callback<AuthAction>,
) -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let catalog = expect_context::<Memo<Catalog>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let authenticator = expect_context::<DemoAuthenticator>();
    let navigate = use_navigate();

    let screen = RwSignal::new(LoginScreen::new(action.get_untracked()));
    let form = Memo::new(move |_| screen.with(LoginScreen::form_state));
    let attempted = move || screen.with(|s| s.rejected);
    let t = move |key: &'static str| catalog.with(|c| c.tr(key));

    catalog.with_untracked(|tr| {
        notices.update(|n| screen.with_untracked(|s| s.initialize(n, tr)));
    });
    on_cleanup(move || {
        notices.try_update(LoginScreen::teardown);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form_state = form.get_untracked();
        let outcome = catalog
            .with_untracked(|tr| notices.try_update(|n| screen.try_update(|s| s.submit(&form_state, n, tr))))
            .flatten();
        let Some(SubmitOutcome::Authenticate(credentials)) = outcome else {
            return;
        };

        let authenticator = authenticator.clone();
        let navigate = navigate.clone();
        auth.update(AuthState::begin_sign_in);
        leptos::task::spawn_local(async move {
            let result = authenticator.login(&credentials).await;
            auth.update(|a| a.finish_sign_in(result.as_ref()));
            let route = catalog
                .try_with_untracked(|tr| notices.try_update(|n| screen.try_update(|s| s.settle(result.as_ref(), n, tr))))
                .flatten()
                .flatten()
                .flatten();
            if let Some(route) = route {
                navigate(route, NavigateOptions::default());
            }
        });
    };

    let request = move |mode: AuthAction| {
        screen.update(|s| s.request_alternate_action(mode, |m| on_action_change.run(m)));
    };

    view! {
        <div class="auth-panel auth-panel--login">
            <h3 class="auth-panel__title">{move || t(keys::LOGIN_TITLE)}</h3>
            <form class="auth-form" novalidate=true on:submit=on_submit>
                <input
                    class=move || form.with(|f| input_class(&f.email, attempted()))
                    type="email"
                    name="email"
                    autocomplete="off"
                    placeholder=move || t(keys::INPUT_EMAIL)
                    prop:value=move || screen.with(|s| s.credentials.email.clone())
                    on:input=move |ev| screen.update(|s| s.credentials.email = event_target_value(&ev))
                />
                <input
                    class=move || form.with(|f| input_class(&f.password, attempted()))
                    type="password"
                    name="password"
                    autocomplete="off"
                    placeholder=move || t(keys::INPUT_PASSWORD)
                    prop:value=move || screen.with(|s| s.credentials.password.clone())
                    on:input=move |ev| screen.update(|s| s.credentials.password = event_target_value(&ev))
                />
                <div class="auth-form__actions">
                    <a
                        href="#"
                        class="auth-link"
                        on:click=move |ev| {
                            ev.prevent_default();
                            request(AuthAction::ForgotPassword);
                        }
                    >
                        {move || t(keys::GENERAL_FORGOT_BUTTON)}
                    </a>
                    <SpinnerButton
                        label=Signal::derive(move || t(keys::GENERAL_SIGNIN_BUTTON))
                        loading_label=Signal::derive(move || t(keys::GENERAL_SIGNING_IN))
                        options=Signal::derive(move || SpinnerButtonOptions {
                            active: screen.with(|s| s.busy),
                            ..SpinnerButtonOptions::default()
                        })
                    />
                </div>
            </form>
            <p class="auth-panel__footer">
                <span>{move || t(keys::GENERAL_NO_ACCOUNT)}</span>
                " "
                <a
                    href="#"
                    class="auth-link"
                    on:click=move |ev| {
                        ev.prevent_default();
                        request(AuthAction::Register);
                    }
                >
                    {move || t(keys::GENERAL_SIGNUP_BUTTON)}
                </a>
            </p>
        </div>
    }
}
