use super::*;

const ALL_KEYS: &[&str] = &[
    keys::GENERAL_SIGNIN_BUTTON,
    keys::GENERAL_SIGNING_IN,
    keys::GENERAL_FORGOT_BUTTON,
    keys::GENERAL_NO_ACCOUNT,
    keys::GENERAL_SIGNUP_BUTTON,
    keys::GENERAL_BACK_BUTTON,
    keys::GENERAL_LANGUAGE,
    keys::LOGIN_TITLE,
    keys::LOGIN_DEMO_NOTICE,
    keys::FORGOT_TITLE,
    keys::FORGOT_DESC,
    keys::REGISTER_TITLE,
    keys::REGISTER_DESC,
    keys::INPUT_EMAIL,
    keys::INPUT_PASSWORD,
    keys::VALIDATION_INVALID,
    keys::VALIDATION_REQUIRED,
    keys::VALIDATION_MIN_LENGTH,
    keys::VALIDATION_INVALID_LOGIN,
    keys::HOME_TITLE,
    keys::HOME_SIGNED_IN_AS,
    keys::HOME_SIGN_OUT,
    keys::LANG_EN,
    keys::LANG_FR,
];

// =============================================================
// Embedded dictionaries
// =============================================================

#[test]
fn every_key_is_present_in_every_language() {
    for lang in Lang::ALL {
        let catalog = Catalog::for_lang(lang);
        for key in ALL_KEYS {
            assert!(catalog.contains(key), "{key} missing for {}", lang.code());
        }
    }
}

#[test]
fn embedded_dictionaries_have_the_same_key_set() {
    let en = Catalog::for_lang(Lang::En);
    let fr = Catalog::for_lang(Lang::Fr);
    assert_eq!(en.entries.len(), fr.entries.len());
    assert!(!en.entries.is_empty());
    assert!(en.entries.keys().all(|key| fr.contains(key)));
}

#[test]
fn catalog_reports_its_language() {
    assert_eq!(Catalog::for_lang(Lang::Fr).lang(), Lang::Fr);
}

#[test]
fn catalog_language_yields_document_lang_code() {
    assert_eq!(Catalog::for_lang(Lang::En).lang().code(), "en");
    assert_eq!(Catalog::for_lang(Lang::Fr).lang().code(), "fr");
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn translate_fills_name_param() {
    let catalog = Catalog::for_lang(Lang::En);
    let name = catalog.tr(keys::INPUT_EMAIL);
    assert_eq!(catalog.translate(keys::VALIDATION_REQUIRED, &[("name", &name)]), "Email is required");
}

#[test]
fn translate_uses_selected_language() {
    let catalog = Catalog::for_lang(Lang::Fr);
    assert_eq!(catalog.tr(keys::VALIDATION_INVALID_LOGIN), "Les informations de connexion sont incorrectes");
}

#[test]
fn missing_key_resolves_to_key() {
    let catalog = Catalog::for_lang(Lang::En);
    assert_eq!(catalog.tr("AUTH.NOPE"), "AUTH.NOPE");
}

#[test]
fn from_json_flattens_nested_objects() {
    let catalog = Catalog::from_json(Lang::En, r#"{"A":{"B":{"C":"deep"},"D":"shallow","N":3}}"#).expect("valid json");
    assert_eq!(catalog.tr("A.B.C"), "deep");
    assert_eq!(catalog.tr("A.D"), "shallow");
    assert_eq!(catalog.tr("A.N"), "3");
    assert!(!catalog.contains("A.B"));
}

#[test]
fn from_json_rejects_malformed_input() {
    assert!(Catalog::from_json(Lang::En, "{not json").is_err());
}

// =============================================================
// Interpolation
// =============================================================

#[test]
fn interpolate_tolerates_whitespace_in_braces() {
    assert_eq!(interpolate("{{ name }} and {{min}}", &[("name", "Password"), ("min", "4")]), "Password and 4");
}

#[test]
fn interpolate_leaves_unknown_placeholders() {
    assert_eq!(interpolate("{{name}} / {{other}}", &[("name", "x")]), "x / {{other}}");
}

#[test]
fn interpolate_without_params_returns_template() {
    assert_eq!(interpolate("{{name}} is required", &[]), "{{name}} is required");
}

// =============================================================
// Lang
// =============================================================

#[test]
fn lang_default_is_english() {
    assert_eq!(Lang::default(), Lang::En);
}

#[test]
fn lang_from_code_is_case_insensitive() {
    assert_eq!(Lang::from_code("FR"), Some(Lang::Fr));
    assert_eq!(Lang::from_code(" en "), Some(Lang::En));
    assert_eq!(Lang::from_code("de"), None);
}

#[test]
fn lang_serializes_as_lowercase_code() {
    assert_eq!(serde_json::to_string(&Lang::Fr).expect("serialize"), "\"fr\"");
}
