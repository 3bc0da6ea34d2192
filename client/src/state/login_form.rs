//! Typed validation state of the login form.
//!
//! DESIGN
//! ======
//! Each control exposes its failed constraints as plain flags, and the form
//! carries an aggregate status next to them. `evaluate` keeps the two in
//! agreement; a hand-built `FormState` may not (e.g. `Pending`), and the login
//! screen handles that case explicitly.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use crate::services::types::Credentials;
use crate::util::validators::{self, MinLengthError};

/// Minimum password length enforced by the login form.
pub const PASSWORD_MIN_LENGTH: usize = 4;

/// Aggregate status of a form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Valid,
    Invalid,
    /// A check is still outstanding; the form is not yet valid.
    Pending,
}

/// Failed constraints of one control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlErrors {
    pub required: bool,
    pub email: bool,
    pub min_length: Option<MinLengthError>,
}

impl ControlErrors {
    pub fn is_clean(&self) -> bool {
        !self.required && !self.email && self.min_length.is_none()
    }
}

/// Validation snapshot of the email + password form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub status: FormStatus,
    pub email: ControlErrors,
    pub password: ControlErrors,
}

impl FormState {
    /// Run the login form's validators over `credentials`.
    pub fn evaluate(credentials: &Credentials) -> Self {
        let email = ControlErrors {
            required: validators::fails_required(&credentials.email),
            email: validators::fails_email(&credentials.email),
            min_length: None,
        };
        let password = ControlErrors {
            required: validators::fails_required(&credentials.password),
            email: false,
            min_length: validators::min_length(&credentials.password, PASSWORD_MIN_LENGTH),
        };
        let status = if email.is_clean() && password.is_clean() { FormStatus::Valid } else { FormStatus::Invalid };
        Self { status, email, password }
    }

    pub fn is_valid(&self) -> bool {
        self.status == FormStatus::Valid
    }
}
