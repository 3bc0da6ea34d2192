//! Translation catalog for UI strings.
//!
//! DESIGN
//! ======
//! Dictionaries are nested JSON documents embedded at build time
//! (`client/i18n/*.json`). They are flattened into dotted keys such as
//! `AUTH.VALIDATION.REQUIRED`, and `{{name}}` placeholders are filled from the
//! caller's params. Lookup is synchronous so validation code can build
//! messages inline.
//!
//! ERROR HANDLING
//! ==============
//! A missing key resolves to the key itself and a missing param leaves its
//! placeholder untouched, so a gap in a dictionary shows up on screen instead
//! of failing the render.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod keys;

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const EN_JSON: &str = include_str!("../../i18n/en.json");
const FR_JSON: &str = include_str!("../../i18n/fr.json");

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").expect("placeholder pattern is a valid regex"));

static EN: LazyLock<Catalog> = LazyLock::new(|| Catalog::embedded(Lang::En, EN_JSON));
static FR: LazyLock<Catalog> = LazyLock::new(|| Catalog::embedded(Lang::Fr, FR_JSON));

/// Key + params lookup used by screens to build user-facing text.
pub trait Translate {
    fn translate(&self, key: &str, params: &[(&str, &str)]) -> String;

    /// Lookup without params.
    fn tr(&self, key: &str) -> String {
        self.translate(key, &[])
    }
}

/// Supported UI languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Fr,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Fr];

    /// BCP-47 code used for the `lang` attribute and the language picker.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Translation key of the language's display name.
    pub fn label_key(self) -> &'static str {
        match self {
            Self::En => keys::LANG_EN,
            Self::Fr => keys::LANG_FR,
        }
    }
}

/// Flattened dictionary for one language.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    lang: Lang,
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Shared catalog for `lang`, parsed once from the embedded dictionary.
    pub fn for_lang(lang: Lang) -> Self {
        match lang {
            Lang::En => EN.clone(),
            Lang::Fr => FR.clone(),
        }
    }

    /// Parse a nested JSON dictionary.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if `raw` is not valid JSON.
    pub fn from_json(lang: Lang, raw: &str) -> Result<Self, serde_json::Error> {
        let root: Value = serde_json::from_str(raw)?;
        let mut entries = HashMap::new();
        flatten("", &root, &mut entries);
        Ok(Self { lang, entries })
    }

    fn embedded(lang: Lang, raw: &str) -> Self {
        Self::from_json(lang, raw).unwrap_or_else(|e| {
            log::error!("dictionary for {} failed to parse: {e}", lang.code());
            Self { lang, entries: HashMap::new() }
        })
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl Translate for Catalog {
    fn translate(&self, key: &str, params: &[(&str, &str)]) -> String {
        match self.entries.get(key) {
            Some(template) => interpolate(template, params),
            None => {
                log::warn!("missing translation for {key} ({})", self.lang.code());
                key.to_owned()
            }
        }
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (name, child) in map {
                let key = if prefix.is_empty() { name.clone() } else { format!("{prefix}.{name}") };
                flatten(&key, child, out);
            }
        }
        Value::String(text) => {
            out.insert(prefix.to_owned(), text.clone());
        }
        Value::Null => {}
        other => {
            out.insert(prefix.to_owned(), other.to_string());
        }
    }
}

/// Replace `{{param}}` placeholders with values from `params`.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return template.to_owned();
    }
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            let name = &caps[1];
            params
                .iter()
                .find(|(key, _)| *key == name)
                .map_or_else(|| caps[0].to_owned(), |(_, value)| (*value).to_owned())
        })
        .into_owned()
}
