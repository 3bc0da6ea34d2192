//! Reusable UI components for the auth screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state (`NoticeState`, language, catalog) from
//! context and stay free of route-level orchestration, which lives in `pages`.

pub mod auth_notice;
pub mod lang_switcher;
pub mod spinner_button;
