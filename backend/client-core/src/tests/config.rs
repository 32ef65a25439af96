use crate::API_KEY_ENV_VAR;
use crate::config::AppConfig;
use crate::error::config::ConfigError;

use serial_test::serial;
use tempfile::TempDir;

/// **VALUE**: A missing config file yields defaults pointing at the public catalog.
#[test]
fn given_no_config_file_when_loaded_then_defaults() {
    let dir = TempDir::new().unwrap();

    let config = AppConfig::load(dir.path()).unwrap();

    assert_eq!(config.version, 1);
    assert_eq!(config.catalog.base_url, crate::CATALOG_BASE_URL);
    assert!(config.catalog.api_key.is_none());
}

/// **VALUE**: Verifies save then load returns the same settings.
///
/// **BUG THIS CATCHES**: Would catch a serde rename that makes saved configs unreadable.
#[test]
fn given_saved_config_when_loaded_then_values_preserved() {
    // GIVEN: A customised config saved to disk
    let dir = TempDir::new().unwrap();
    let mut config = AppConfig::default();
    config.catalog.page_size = Some(24);
    config.catalog.api_key = Some("abc".to_string());
    config.save(dir.path()).unwrap();

    // WHEN: Loading it back
    let loaded = AppConfig::load(dir.path()).unwrap();

    // THEN: Values survive
    assert_eq!(loaded.catalog.page_size, Some(24));
    assert_eq!(loaded.catalog.api_key.as_deref(), Some("abc"));
}

/// **VALUE**: A corrupted file is reported, not silently replaced.
#[test]
fn given_corrupt_config_when_loaded_then_parse_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();

    let result = AppConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

/// **VALUE**: Page sizes outside what the catalog accepts are rejected.
#[test]
fn given_out_of_range_page_size_when_validated_then_error() {
    let mut config = AppConfig::default();

    config.catalog.page_size = Some(0);
    assert!(config.validate().is_err());

    config.catalog.page_size = Some(101);
    assert!(config.validate().is_err());

    config.catalog.page_size = Some(100);
    assert!(config.validate().is_ok());
}

/// **VALUE**: A non-HTTP base URL fails validation before any request is attempted.
#[test]
fn given_non_http_base_url_when_validated_then_error() {
    let mut config = AppConfig::default();
    config.catalog.base_url = "ftp://catalog.example".to_string();

    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

/// **VALUE**: The environment variable overrides the config file key.
///
/// **BUG THIS CATCHES**: Would catch the precedence flipping, which would make it
/// impossible to override a checked-in config.
#[test]
#[serial]
fn given_env_and_config_key_when_resolved_then_env_wins() {
    let dir = TempDir::new().unwrap();
    let mut config = AppConfig::default();
    config.catalog.api_key = Some("from-config".to_string());

    unsafe { std::env::set_var(API_KEY_ENV_VAR, "from-env") };
    let key = config.resolve_api_key(dir.path()).unwrap();
    unsafe { std::env::remove_var(API_KEY_ENV_VAR) };

    assert_eq!(key.as_str(), "from-env");
}

/// **VALUE**: With no key anywhere, resolution names both places to set one.
#[test]
#[serial]
fn given_no_key_anywhere_when_resolved_then_missing_api_key() {
    let dir = TempDir::new().unwrap();
    unsafe { std::env::remove_var(API_KEY_ENV_VAR) };

    let result = AppConfig::default().resolve_api_key(dir.path());

    match result {
        Err(ConfigError::MissingApiKey { env_var, .. }) => assert_eq!(env_var, API_KEY_ENV_VAR),
        other => panic!("expected MissingApiKey, got {other:?}"),
    }
}
