use super::*;

fn eval(email: &str, password: &str) -> FormState {
    FormState::evaluate(&Credentials::new(email, password))
}

#[test]
fn valid_credentials_produce_valid_status() {
    let form = eval("admin@demo.com", "demo");
    assert!(form.is_valid());
    assert!(form.email.is_clean());
    assert!(form.password.is_clean());
}

#[test]
fn empty_fields_only_report_required() {
    let form = eval("", "");
    assert_eq!(form.status, FormStatus::Invalid);
    assert_eq!(form.email, ControlErrors { required: true, email: false, min_length: None });
    assert_eq!(form.password, ControlErrors { required: true, email: false, min_length: None });
}

#[test]
fn malformed_email_and_short_password_report_format_and_length() {
    let form = eval("bad", "x");
    assert_eq!(form.status, FormStatus::Invalid);
    assert!(form.email.email);
    assert!(!form.email.required);
    assert!(!form.password.required);
    assert_eq!(
        form.password.min_length,
        Some(MinLengthError { required_length: PASSWORD_MIN_LENGTH, actual_length: 1 })
    );
}

#[test]
fn single_violation_invalidates_form() {
    assert_eq!(eval("admin@demo.com", "abc").status, FormStatus::Invalid);
    assert_eq!(eval("admin@", "demo").status, FormStatus::Invalid);
}

#[test]
fn default_form_state_is_valid_and_clean() {
    let form = FormState::default();
    assert!(form.is_valid());
    assert!(form.email.is_clean());
}

#[test]
fn pending_status_is_not_valid() {
    let form = FormState { status: FormStatus::Pending, ..FormState::default() };
    assert!(!form.is_valid());
}
