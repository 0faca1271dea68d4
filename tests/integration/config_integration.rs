//! Integration tests for Configuration System

use linkpost::config::{ConfigLoader, LinkpostConfig};
use linkpost::error::ApiError;
use tempfile::TempDir;

#[test]
fn test_config_file_sets_every_section() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("test_config.toml");

    std::fs::write(
        &config_file,
        r#"
[backend]
base_url = "http://backend.internal:8080/"
connect_timeout_secs = 3
request_timeout_secs = 45

[schedule]
interval_secs = 3600
image_path = "images/latest.png"

[logging]
level = "debug"
format = "json"
output = "stdout"

[logging.modules]
"linkpost::schedule" = "trace"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.backend.base_url, "http://backend.internal:8080/");
    assert_eq!(config.backend.connect_timeout().as_secs(), 3);
    assert_eq!(config.backend.request_timeout().as_secs(), 45);
    assert_eq!(config.schedule.interval().as_secs(), 3600);
    assert_eq!(config.schedule.image_path, "images/latest.png");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
    assert_eq!(
        config.logging.modules.get("linkpost::schedule"),
        Some(&"trace".to_string())
    );
}

#[test]
fn test_partial_config_keeps_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("partial.toml");
    std::fs::write(&config_file, "[schedule]\ninterval_secs = 10\n").unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    let defaults = LinkpostConfig::default();
    assert_eq!(config.schedule.interval_secs, 10);
    assert_eq!(config.schedule.image_path, defaults.schedule.image_path);
    assert_eq!(config.logging.output, "stderr");
}

#[test]
fn test_invalid_values_fail_validation() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("bad.toml");
    std::fs::write(
        &config_file,
        r#"
[backend]
base_url = "localhost:5005"

[logging]
level = "chatty"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    let errors = config.validate().unwrap_err();
    assert_eq!(errors.len(), 2);
    assert!(matches!(config.ensure_valid(), Err(ApiError::ConfigError(_))));
}

#[test]
fn test_missing_explicit_config_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = ConfigLoader::load_from_file(&temp_dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ApiError::ConfigError(_))));
}
