//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `notice`, `login`) so each page and
//! component depends on a small focused model. Shared pieces are provided as
//! `RwSignal` contexts by `App`.

pub mod auth;
pub mod login;
pub mod login_form;
pub mod notice;
