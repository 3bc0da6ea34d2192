//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written by the login page after a successful sign-in and read by the home
//! route to decide between rendering and redirecting to `/login`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::services::types::{LoginResponse, User};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Mark a login request as in flight.
    pub fn begin_sign_in(&mut self) {
        self.loading = true;
    }

    /// Record the user returned by a successful login.
    pub fn sign_in(&mut self, response: &LoginResponse) {
        self.user = Some(response.user.clone());
        self.loading = false;
    }

    /// Close the in-flight request; only a success changes the user.
    pub fn finish_sign_in(&mut self, result: Option<&LoginResponse>) {
        match result {
            Some(response) => self.sign_in(response),
            None => self.loading = false,
        }
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }
}
