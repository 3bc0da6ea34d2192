//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure checks from
//! page and component logic to improve reuse and testability.

pub mod auth;
pub mod persistence;
pub mod validators;
