//! Dictionary keys used by the auth screens.

pub const GENERAL_SIGNIN_BUTTON: &str = "AUTH.GENERAL.SIGNIN_BUTTON";
pub const GENERAL_SIGNING_IN: &str = "AUTH.GENERAL.SIGNING_IN";
pub const GENERAL_FORGOT_BUTTON: &str = "AUTH.GENERAL.FORGOT_BUTTON";
pub const GENERAL_NO_ACCOUNT: &str = "AUTH.GENERAL.NO_ACCOUNT";
pub const GENERAL_SIGNUP_BUTTON: &str = "AUTH.GENERAL.SIGNUP_BUTTON";
pub const GENERAL_BACK_BUTTON: &str = "AUTH.GENERAL.BACK_BUTTON";
pub const GENERAL_LANGUAGE: &str = "AUTH.GENERAL.LANGUAGE";

pub const LOGIN_TITLE: &str = "AUTH.LOGIN.TITLE";
pub const LOGIN_DEMO_NOTICE: &str = "AUTH.LOGIN.DEMO_NOTICE";

pub const FORGOT_TITLE: &str = "AUTH.FORGOT.TITLE";
pub const FORGOT_DESC: &str = "AUTH.FORGOT.DESC";
pub const REGISTER_TITLE: &str = "AUTH.REGISTER.TITLE";
pub const REGISTER_DESC: &str = "AUTH.REGISTER.DESC";

pub const INPUT_EMAIL: &str = "AUTH.INPUT.EMAIL";
pub const INPUT_PASSWORD: &str = "AUTH.INPUT.PASSWORD";

pub const VALIDATION_INVALID: &str = "AUTH.VALIDATION.INVALID";
pub const VALIDATION_REQUIRED: &str = "AUTH.VALIDATION.REQUIRED";
pub const VALIDATION_MIN_LENGTH: &str = "AUTH.VALIDATION.MIN_LENGTH";
pub const VALIDATION_INVALID_LOGIN: &str = "AUTH.VALIDATION.INVALID_LOGIN";

pub const HOME_TITLE: &str = "HOME.TITLE";
pub const HOME_SIGNED_IN_AS: &str = "HOME.SIGNED_IN_AS";
pub const HOME_SIGN_OUT: &str = "HOME.SIGN_OUT";

pub const LANG_EN: &str = "LANG.EN";
pub const LANG_FR: &str = "LANG.FR";
