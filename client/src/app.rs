//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Html, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::i18n::{Catalog, Lang};
use crate::pages::{auth::AuthPage, home::HomePage};
use crate::services::auth::DemoAuthenticator;
use crate::state::{auth::AuthState, notice::NoticeState};
use crate::util::persistence;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared auth, notice, and language contexts plus the
/// authenticator, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let notices = RwSignal::new(NoticeState::default());
    let lang = RwSignal::new(Lang::default());
    let catalog = Memo::new(move |_| Catalog::for_lang(lang.get()));

    provide_context(auth);
    provide_context(notices);
    provide_context(lang);
    provide_context(catalog);
    provide_context(DemoAuthenticator::default());

    // SSR always renders the default language; the stored one applies after hydration.
    Effect::new(move || {
        let stored = persistence::load_lang();
        if stored != lang.get_untracked() {
            lang.set(stored);
        }
    });

    view! {
        <Html {..} lang=move || catalog.with(|c| c.lang().code())/>
        <Stylesheet id="leptos" href="/pkg/signin.css"/>
        <Title text="Sign in"/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=AuthPage/>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}
