//! Collaborator seams for the auth screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` defines the authentication contract and its demo implementation;
//! `types` holds the DTOs passed across it.

pub mod auth;
pub mod types;
