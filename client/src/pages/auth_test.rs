use super::*;
use crate::i18n::Lang;

#[test]
fn title_key_follows_action() {
    assert_eq!(title_key(AuthAction::Login), keys::LOGIN_TITLE);
    assert_eq!(title_key(AuthAction::ForgotPassword), keys::FORGOT_TITLE);
    assert_eq!(title_key(AuthAction::Register), keys::REGISTER_TITLE);
}

#[test]
fn every_title_key_is_translated() {
    let catalog = Catalog::for_lang(Lang::En);
    for action in [AuthAction::Login, AuthAction::ForgotPassword, AuthAction::Register] {
        assert!(catalog.contains(title_key(action)), "{action:?}");
    }
}
