//! Login screen controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LoginPage` owns one `LoginScreen` in a signal and forwards UI events to
//! it. The controller never touches Leptos APIs: collaborators (notice board,
//! translator, navigation, action callback) are passed in per call so every
//! transition can be exercised from plain unit tests.
//!
//! SUBMIT FLOW
//! ===========
//! `submit` marks the screen busy and validates. A valid form yields the
//! credentials to authenticate; the page awaits the authenticator and hands
//! the result to `settle`, which either returns the route to navigate to or
//! posts the invalid-login notice. Busy is cleared on every path that ends the
//! attempt, and a submit while busy is ignored.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::i18n::{Translate, keys};
use crate::services::auth::{DEMO_EMAIL, DEMO_PASSWORD};
use crate::services::types::{Credentials, LoginResponse};
use crate::state::login_form::FormState;
use crate::state::notice::{NoticeState, Severity};

/// Route opened after a successful login.
pub const HOME_ROUTE: &str = "/";

/// Line separator used when several validation messages share one notice.
pub const ERROR_SEPARATOR: &str = "\n";

/// Auth sub-screen shown by the container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AuthAction {
    #[default]
    Login,
    ForgotPassword,
    Register,
}

impl AuthAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::ForgotPassword => "forgot-password",
            Self::Register => "register",
        }
    }
}

/// Result of starting a submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A previous attempt is still in flight; nothing changed.
    Busy,
    /// Local validation failed; the authenticator must not be called.
    Rejected,
    /// Validation passed; authenticate these credentials and call `settle`.
    Authenticate(Credentials),
}

/// State of the login screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginScreen {
    pub credentials: Credentials,
    pub busy: bool,
    pub errors: Vec<String>,
    /// The last submit failed local validation; inputs show their errors.
    pub rejected: bool,
    pub action: AuthAction,
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new(AuthAction::Login)
    }
}

impl LoginScreen {
    /// Fresh screen prefilled with the demo account.
    pub fn new(action: AuthAction) -> Self {
        Self {
            credentials: Credentials::new(DEMO_EMAIL, DEMO_PASSWORD),
            busy: false,
            errors: Vec::new(),
            rejected: false,
            action,
        }
    }

    pub fn form_state(&self) -> FormState {
        FormState::evaluate(&self.credentials)
    }

    /// Post the demo-account hint unless another notice is already showing.
    pub fn initialize(&self, notices: &mut NoticeState, tr: &impl Translate) {
        if notices.is_set() {
            return;
        }
        let message = tr.translate(keys::LOGIN_DEMO_NOTICE, &[("email", DEMO_EMAIL), ("password", DEMO_PASSWORD)]);
        notices.set(message, Severity::Success);
    }

    /// Drop whatever notice is showing.
    ///
    /// Takes no screen: it runs from the page's cleanup, after which the
    /// screen's own signal may already be gone.
    pub fn teardown(notices: &mut NoticeState) {
        notices.clear();
    }

    /// Start a login attempt against `form`.
    pub fn submit(&mut self, form: &FormState, notices: &mut NoticeState, tr: &impl Translate) -> SubmitOutcome {
        if self.busy {
            log::debug!("submit ignored: login already in flight");
            return SubmitOutcome::Busy;
        }
        self.busy = true;
        self.rejected = !self.validate(form, notices, tr);
        if self.rejected {
            return SubmitOutcome::Rejected;
        }
        SubmitOutcome::Authenticate(self.credentials.clone())
    }

    /// Finish the attempt started by `submit`.
    ///
    /// Returns the route to navigate to when `result` is a success.
    pub fn settle(
        &mut self,
        result: Option<&LoginResponse>,
        notices: &mut NoticeState,
        tr: &impl Translate,
    ) -> Option<&'static str> {
        self.busy = false;
        match result {
            Some(response) => {
                log::info!("login succeeded for {}", response.user.email);
                Some(HOME_ROUTE)
            }
            None => {
                notices.set(tr.tr(keys::VALIDATION_INVALID_LOGIN), Severity::Error);
                None
            }
        }
    }

    /// Itemized validation of `form`.
    ///
    /// A valid form returns `true` without side effects. Otherwise the error
    /// list is rebuilt in fixed order (email format, email required, password
    /// required, password length) and posted as one error notice.
    pub fn validate(&mut self, form: &FormState, notices: &mut NoticeState, tr: &impl Translate) -> bool {
        if form.is_valid() {
            return true;
        }

        self.errors.clear();
        let email = tr.tr(keys::INPUT_EMAIL);
        let password = tr.tr(keys::INPUT_PASSWORD);

        if form.email.email {
            self.errors.push(tr.translate(keys::VALIDATION_INVALID, &[("name", &email)]));
        }
        if form.email.required {
            self.errors.push(tr.translate(keys::VALIDATION_REQUIRED, &[("name", &email)]));
        }
        if form.password.required {
            self.errors.push(tr.translate(keys::VALIDATION_REQUIRED, &[("name", &password)]));
        }
        if let Some(violation) = form.password.min_length {
            let min = violation.required_length.to_string();
            self.errors.push(tr.translate(keys::VALIDATION_MIN_LENGTH, &[("name", &password), ("min", &min)]));
        }

        if self.errors.is_empty() {
            // Status is not valid but no itemized check fired (e.g. pending).
            log::warn!("login form {:?} without itemized errors", form.status);
        } else {
            notices.set(self.errors.join(ERROR_SEPARATOR), Severity::Error);
        }
        self.busy = false;
        false
    }

    /// Switch to another auth sub-screen and tell the container.
    pub fn request_alternate_action(&mut self, mode: AuthAction, emit: impl FnOnce(AuthAction)) {
        self.action = mode;
        emit(mode);
    }
}
