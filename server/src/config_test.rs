use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let env: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ServerConfig::from_lookup(|key| env.get(key).cloned())
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn empty_environment_uses_defaults() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.addr, SocketAddr::new(DEFAULT_BIND_ADDR, DEFAULT_PORT));
    assert_eq!(cfg.site_root, None);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = config_from(&[("PORT", "  "), ("BIND_ADDR", ""), ("SITE_ROOT", " ")]).unwrap();
    assert_eq!(cfg.addr.port(), DEFAULT_PORT);
    assert_eq!(cfg.addr.ip(), DEFAULT_BIND_ADDR);
    assert_eq!(cfg.site_root, None);
}

// =============================================================================
// Overrides
// =============================================================================

#[test]
fn explicit_values_override_defaults() {
    let cfg = config_from(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1"), ("SITE_ROOT", "dist/site")]).unwrap();
    assert_eq!(cfg.addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
    assert_eq!(cfg.site_root, Some(PathBuf::from("dist/site")));
}

#[test]
fn ipv6_bind_addr_is_accepted() {
    let cfg = config_from(&[("BIND_ADDR", "::1")]).unwrap();
    assert!(cfg.addr.is_ipv6());
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn invalid_port_is_rejected() {
    let err = config_from(&[("PORT", "eighty")]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value } if value == "eighty"));
    assert_eq!(err.to_string(), "invalid PORT \"eighty\"");
}

#[test]
fn out_of_range_port_is_rejected() {
    assert!(matches!(config_from(&[("PORT", "70000")]), Err(ConfigError::InvalidPort { .. })));
}

#[test]
fn invalid_bind_addr_is_rejected() {
    let err = config_from(&[("BIND_ADDR", "localhost")]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
}

#[test]
fn config_error_converts_into_serve_error() {
    let err: ServeError = ConfigError::InvalidPort { value: "x".to_owned() }.into();
    assert_eq!(err.to_string(), "invalid PORT \"x\"");
}
