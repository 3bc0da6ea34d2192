//! Tracing subscriber setup.
//!
//! `RUST_LOG` selects the filter; unset, blank, or unparsable values fall back
//! to [`DEFAULT_FILTER`].

#[cfg(test)]
#[path = "logging_test.rs"]
mod logging_test;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` does not provide one.
pub const DEFAULT_FILTER: &str = "info";

/// Build the filter for a raw `RUST_LOG` value.
pub fn filter_from(raw: Option<&str>) -> EnvFilter {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global fmt subscriber.
pub fn init() {
    let raw = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt().with_env_filter(filter_from(raw.as_deref())).init();
}
