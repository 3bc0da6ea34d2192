//! Shared notice shown above the auth screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<NoticeState>` is provided by `App` and read by every auth
//! screen. There is a single current notice: each `set` replaces the previous
//! one (overwrite wins, nothing is queued) and screens clear it on teardown so
//! a stale message never follows the user to the next screen.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// Severity of the current notice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Success,
    Error,
}

impl Severity {
    /// CSS modifier used by the notice component.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "auth-notice--success",
            Self::Error => "auth-notice--error",
        }
    }
}

/// A user-facing status message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    /// Message split on line breaks, skipping blank lines.
    pub fn lines(&self) -> Vec<&str> {
        self.message.lines().filter(|line| !line.trim().is_empty()).collect()
    }
}

/// Holder for the process-wide current notice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    current: Option<Notice>,
}

impl NoticeState {
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn is_set(&self) -> bool {
        self.current.is_some()
    }

    /// Replace the current notice.
    pub fn set(&mut self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        log::debug!("notice set ({severity:?}): {message}");
        self.current = Some(Notice { message, severity });
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
