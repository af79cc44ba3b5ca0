use super::*;

// =============================================================================
// Env manipulation requires unsafe in edition 2024. These tests must run
// with `--test-threads=1` to avoid env races.
// =============================================================================

unsafe fn clear_admin_env() {
    unsafe {
        std::env::remove_var("ADMIN_AUTH_PROVIDER");
        std::env::remove_var("ADMIN_API_BASE_URL");
        std::env::remove_var("ADMIN_REQUEST_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_defaults_to_demo() {
    unsafe { clear_admin_env() };
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.provider, AuthProviderKind::Demo);
    assert!(config.api_base_url.is_none());
    assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
}

#[test]
fn from_env_remote_requires_base_url() {
    unsafe {
        clear_admin_env();
        std::env::set_var("ADMIN_AUTH_PROVIDER", "remote");
    }
    let err = AppConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::MissingBaseUrl));
    unsafe { clear_admin_env() };
}

#[test]
fn from_env_remote_with_base_url() {
    unsafe {
        clear_admin_env();
        std::env::set_var("ADMIN_AUTH_PROVIDER", "remote");
        std::env::set_var("ADMIN_API_BASE_URL", "https://api.example.com/");
    }
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.provider, AuthProviderKind::Remote);
    assert_eq!(config.api_base_url.as_deref(), Some("https://api.example.com"));
    unsafe { clear_admin_env() };
}

#[test]
fn from_env_rejects_unknown_provider() {
    unsafe {
        clear_admin_env();
        std::env::set_var("ADMIN_AUTH_PROVIDER", "ldap");
    }
    let err = AppConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::UnknownProvider(name) if name == "ldap"));
    unsafe { clear_admin_env() };
}

#[test]
fn from_env_parses_timeout_override() {
    unsafe {
        clear_admin_env();
        std::env::set_var("ADMIN_REQUEST_TIMEOUT_SECS", "5");
    }
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.request_timeout_secs, 5);
    unsafe { clear_admin_env() };
}

#[test]
fn from_env_ignores_invalid_timeout() {
    unsafe {
        clear_admin_env();
        std::env::set_var("ADMIN_REQUEST_TIMEOUT_SECS", "soon");
    }
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    unsafe { clear_admin_env() };
}

#[test]
fn demo_config_has_no_base_url() {
    let config = AppConfig::demo();
    assert_eq!(config.provider, AuthProviderKind::Demo);
    assert!(config.api_base_url.is_none());
}
