use super::*;

#[test]
fn load_json_without_browser_storage_is_none() {
    assert_eq!(load_json::<Lang>(LANG_STORAGE_KEY), None);
}

#[test]
fn load_lang_falls_back_to_default() {
    save_lang(Lang::Fr);
    assert_eq!(load_lang(), Lang::default());
}
