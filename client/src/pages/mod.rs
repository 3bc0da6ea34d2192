//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. `auth` is the container that swaps between the login
//! screen and its sibling panels.

pub mod auth;
pub mod home;
pub mod login;
