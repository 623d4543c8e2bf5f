use dns_console_domain::config::{CliOverrides, ConfigError, ConsoleConfig, LogFormat};
use dns_console_domain::{SortDirection, SortField};
use std::time::Duration;

#[test]
fn test_config_default_values() {
    let config = ConsoleConfig::default();

    assert_eq!(config.api.base_url, "http://127.0.0.1:8080");
    assert_eq!(config.api.api_prefix, "/api/1");
    assert_eq!(config.api.request_timeout_secs, 10);
    assert!(config.api.token.is_none());
    assert_eq!(config.watcher.poll_interval(), Duration::from_secs(1));
    assert_eq!(config.watcher.poll_limit(), Some(600));
    assert!(!config.presentation.login_on_any_failure);
    assert_eq!(config.presentation.sort_field, SortField::UpdatedAt);
    assert_eq!(config.presentation.sort_direction, SortDirection::Desc);
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_partial_toml_fills_defaults() {
    let config = ConsoleConfig::from_toml(
        r#"
        [api]
        base_url = "http://10.0.0.2:80"

        [presentation]
        sort_field = "count"
        sort_direction = "asc"
        "#,
    )
    .unwrap();

    assert_eq!(config.api.base_url, "http://10.0.0.2:80");
    assert_eq!(config.api.api_prefix, "/api/1");
    assert_eq!(config.watcher.poll_interval_ms, 1000);
    let sort = config.presentation.initial_sort();
    assert_eq!(sort.field, SortField::Count);
    assert_eq!(sort.direction, SortDirection::Asc);
}

#[test]
fn test_config_zero_max_polls_is_unbounded() {
    let config = ConsoleConfig::from_toml(
        r#"
        [watcher]
        max_polls = 0
        "#,
    )
    .unwrap();

    assert_eq!(config.watcher.poll_limit(), None);
}

#[test]
fn test_config_rejects_bad_toml() {
    let result = ConsoleConfig::from_toml("[api\nbase_url = 1");
    assert!(result.is_err());
}

#[test]
fn test_config_validation_rejects_zero_poll_interval() {
    let mut config = ConsoleConfig::default();
    config.watcher.poll_interval_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validation_rejects_empty_base_url() {
    let mut config = ConsoleConfig::default();
    config.api.base_url = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_cli_overrides_win_over_file_values() {
    let config = ConsoleConfig::load(
        None,
        CliOverrides {
            base_url: Some("http://192.168.1.1:8080".to_string()),
            token: Some("secret".to_string()),
            log_level: Some("debug".to_string()),
            log_format: Some(LogFormat::Json),
        },
    )
    .unwrap();

    assert_eq!(config.api.base_url, "http://192.168.1.1:8080");
    assert_eq!(config.api.token.as_deref(), Some("secret"));
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn test_logging_format_from_toml() {
    let config = ConsoleConfig::from_toml(
        r#"
        [logging]
        format = "json"
        "#,
    )
    .unwrap();

    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.logging.level, "info");
    assert_eq!(ConsoleConfig::default().logging.format, LogFormat::Text);
}

#[test]
fn test_unknown_logging_format_is_a_parse_error() {
    let result = ConsoleConfig::from_toml(
        r#"
        [logging]
        format = "yaml"
        "#,
    );

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_missing_explicit_config_file_is_an_error() {
    let result = ConsoleConfig::load(
        Some("/nonexistent/dns-console.toml"),
        CliOverrides::default(),
    );
    assert!(result.is_err());
}
