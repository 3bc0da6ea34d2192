//! Field validators for the auth forms.
//!
//! Each check reports whether a value *fails* its constraint. The email and
//! minimum-length checks let empty values through so that a blank field only
//! ever reports `required`.

#[cfg(test)]
#[path = "validators_test.rs"]
mod validators_test;

use std::sync::LazyLock;

use regex::Regex;

/// Longest address accepted by the email check.
pub const EMAIL_MAX_LENGTH: usize = 254;
/// Longest local part (before `@`) accepted by the email check.
pub const EMAIL_LOCAL_MAX_LENGTH: usize = 64;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

/// Details of a failed minimum-length check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinLengthError {
    pub required_length: usize,
    pub actual_length: usize,
}

/// `true` when a required value is missing.
pub fn fails_required(value: &str) -> bool {
    value.is_empty()
}

/// `true` when a non-empty value is not a well-formed email address.
pub fn fails_email(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    if value.len() > EMAIL_MAX_LENGTH {
        return true;
    }
    let Some((local, _)) = value.split_once('@') else {
        return true;
    };
    if local.len() > EMAIL_LOCAL_MAX_LENGTH {
        return true;
    }
    !EMAIL_PATTERN.is_match(value)
}

/// Returns the violation when a non-empty value is shorter than `min` characters.
pub fn min_length(value: &str, min: usize) -> Option<MinLengthError> {
    if value.is_empty() {
        return None;
    }
    let actual_length = value.chars().count();
    (actual_length < min).then_some(MinLengthError { required_length: min, actual_length })
}
