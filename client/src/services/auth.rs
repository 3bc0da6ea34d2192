//! Authentication collaborator used by the login screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! The screen only needs "did it work" and, on success, who signed in. A
//! login that settles with `None` is a failure; no further cause is surfaced.
//! `DemoAuthenticator` stands in for a real backend and accepts a single
//! configured account.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;

use super::types::{Credentials, LoginResponse, User};

/// Demo account advertised by the login screen's initial notice.
pub const DEMO_EMAIL: &str = "admin@demo.com";
pub const DEMO_PASSWORD: &str = "demo";

/// Simulated round trip of the demo backend in the browser.
#[cfg(feature = "hydrate")]
const DEMO_LATENCY_MS: u32 = 400;

/// Single-shot asynchronous credential check.
pub trait Authenticator {
    /// Resolve to `Some` when the credentials are accepted.
    fn login(&self, credentials: &Credentials) -> impl Future<Output = Option<LoginResponse>>;
}

/// In-memory authenticator holding one account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoAuthenticator {
    account: Credentials,
}

impl Default for DemoAuthenticator {
    fn default() -> Self {
        Self::new(Credentials::new(DEMO_EMAIL, DEMO_PASSWORD))
    }
}

impl DemoAuthenticator {
    pub fn new(account: Credentials) -> Self {
        Self { account }
    }

    /// Synchronous check behind `login`.
    pub fn check(&self, credentials: &Credentials) -> Option<LoginResponse> {
        let email_matches = credentials.email.trim().eq_ignore_ascii_case(&self.account.email);
        if !email_matches || credentials.password != self.account.password {
            log::info!("demo login rejected for {}", credentials.email);
            return None;
        }
        let email = self.account.email.clone();
        let local = email.split('@').next().unwrap_or_default().to_owned();
        Some(LoginResponse {
            access_token: format!("demo-token-{local}"),
            user: User { id: format!("usr_{local}"), email, fullname: Some(local) },
        })
    }
}

impl Authenticator for DemoAuthenticator {
    async fn login(&self, credentials: &Credentials) -> Option<LoginResponse> {
        #[cfg(feature = "hydrate")]
        gloo_timers::future::TimeoutFuture::new(DEMO_LATENCY_MS).await;
        self.check(credentials)
    }
}
