//! Language picker for the auth screens.

use leptos::prelude::*;

use crate::i18n::{Catalog, Lang, Translate, keys};
use crate::util::persistence;

/// `<select>` bound to the shared language signal; persists the choice.
#[component]
pub fn LangSwitcher() -> impl IntoView {
    let lang = expect_context::<RwSignal<Lang>>();
    let catalog = expect_context::<Memo<Catalog>>();

    let on_change = move |ev: leptos::ev::Event| {
        let Some(next) = Lang::from_code(&event_target_value(&ev)) else {
            return;
        };
        lang.set(next);
        persistence::save_lang(next);
    };

    view! {
        <label class="lang-switcher">
            <span class="lang-switcher__label">{move || catalog.with(|c| c.tr(keys::GENERAL_LANGUAGE))}</span>
            <select class="lang-switcher__select" prop:value=move || lang.get().code() on:change=on_change>
                {Lang::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <option value=option.code()>
                                {move || catalog.with(|c| c.tr(option.label_key()))}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}
