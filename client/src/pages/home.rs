//! Landing route after sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows who is signed in. Without a user it redirects to `/login`, which is
//! also how signing out leaves the page.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::i18n::{Catalog, Translate, keys};
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let catalog = expect_context::<Memo<Catalog>>();
    install_unauth_redirect(auth, use_navigate());

    let t = move |key: &'static str| catalog.with(|c| c.tr(key));
    let signed_in_as = move || {
        let email = auth.with(|a| a.user.as_ref().map(|u| u.email.clone()).unwrap_or_default());
        catalog.with(|c| c.translate(keys::HOME_SIGNED_IN_AS, &[("email", &email)]))
    };

    view! {
        <Title text=move || t(keys::HOME_TITLE)/>
        <div class="home-page">
            <h1 class="home-page__title">{move || t(keys::HOME_TITLE)}</h1>
            <Show when=move || auth.with(|a| a.user.is_some())>
                <p class="home-page__identity">{signed_in_as}</p>
            </Show>
            <button type="button" class="spinner-button" on:click=move |_| auth.update(AuthState::sign_out)>
                {move || t(keys::HOME_SIGN_OUT)}
            </button>
        </div>
    }
}
