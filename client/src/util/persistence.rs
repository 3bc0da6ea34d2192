//! Browser localStorage helpers for UI preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hydrate-only read/write glue; SSR paths no-op so server rendering stays
//! deterministic and always uses defaults.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::i18n::Lang;

/// Storage key of the language preference.
pub const LANG_STORAGE_KEY: &str = "signin_lang";

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        if storage.set_item(key, &raw).is_err() {
            log::warn!("could not persist {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Stored language preference, or the default language.
pub fn load_lang() -> Lang {
    load_json(LANG_STORAGE_KEY).unwrap_or_default()
}

pub fn save_lang(lang: Lang) {
    save_json(LANG_STORAGE_KEY, &lang);
}
