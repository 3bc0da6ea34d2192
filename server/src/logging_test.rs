use tracing::level_filters::LevelFilter;

use super::*;

#[test]
fn unset_filter_defaults_to_info() {
    assert_eq!(filter_from(None).max_level_hint(), Some(LevelFilter::INFO));
}

#[test]
fn blank_filter_defaults_to_info() {
    assert_eq!(filter_from(Some("  ")).max_level_hint(), Some(LevelFilter::INFO));
}

#[test]
fn level_from_rust_log_is_honored() {
    assert_eq!(filter_from(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
    assert_eq!(filter_from(Some("warn")).max_level_hint(), Some(LevelFilter::WARN));
}

#[test]
fn per_target_directives_are_accepted() {
    assert_eq!(filter_from(Some("server=trace,warn")).max_level_hint(), Some(LevelFilter::TRACE));
}

#[test]
fn unparsable_filter_defaults_to_info() {
    assert_eq!(filter_from(Some("server=loud")).max_level_hint(), Some(LevelFilter::INFO));
}
