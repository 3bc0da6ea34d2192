use super::*;

#[test]
fn notice_state_default_is_empty() {
    let state = NoticeState::default();
    assert!(!state.is_set());
    assert!(state.current().is_none());
}

#[test]
fn set_overwrites_previous_notice() {
    let mut state = NoticeState::default();
    state.set("first", Severity::Success);
    state.set("second", Severity::Error);
    let notice = state.current().expect("notice");
    assert_eq!(notice.message, "second");
    assert_eq!(notice.severity, Severity::Error);
}

#[test]
fn clear_removes_notice() {
    let mut state = NoticeState::default();
    state.set("hello", Severity::Success);
    state.clear();
    assert!(!state.is_set());
}

#[test]
fn clear_on_empty_state_is_noop() {
    let mut state = NoticeState::default();
    state.clear();
    assert_eq!(state, NoticeState::default());
}

#[test]
fn lines_split_on_line_breaks_and_drop_blanks() {
    let notice = Notice { message: "one\n\ntwo\n".to_owned(), severity: Severity::Error };
    assert_eq!(notice.lines(), vec!["one", "two"]);
}

#[test]
fn severity_css_modifiers_are_distinct() {
    assert_eq!(Severity::Success.css_modifier(), "auth-notice--success");
    assert_eq!(Severity::Error.css_modifier(), "auth-notice--error");
}
