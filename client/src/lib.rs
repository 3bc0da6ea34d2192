//! # client
//!
//! Leptos + WASM frontend for the sign-in flow.
//!
//! This crate contains the auth pages, shared notice/auth state, the
//! translation catalog, form validators, and the authentication collaborator
//! seam. The `server` crate renders it over SSR; the `hydrate` feature builds
//! the browser bundle.

pub mod app;
pub mod components;
pub mod i18n;
pub mod pages;
pub mod services;
pub mod state;
pub mod util;

/// WASM hydration entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
