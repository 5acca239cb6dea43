// Config loading and validation tests

use cloudboard::config::AppConfig;

const VALID_CONFIG: &str = r#"
[server]
port = 8050
host = "0.0.0.0"

[publishing]
broadcast_capacity = 16

[dashboard]
tick_interval_ms = 5000
stats_log_interval_secs = 60
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.server.port, 8050);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.publishing.broadcast_capacity, 16);
    assert_eq!(config.dashboard.tick_interval_ms, 5000);
    assert_eq!(config.dashboard.stats_log_interval_secs, 60);
}

#[test]
fn test_config_empty_string_uses_defaults() {
    let config = AppConfig::load_from_str("").expect("empty config");
    assert_eq!(config.server.port, 8050);
    assert_eq!(config.dashboard.tick_interval_ms, 5000);
    assert_eq!(config.publishing.broadcast_capacity, 16);
}

#[test]
fn test_config_partial_keeps_other_defaults() {
    let config = AppConfig::load_from_str("[server]\nport = 9000\n").expect("partial config");
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.dashboard.tick_interval_ms, 5000);
}

#[test]
fn test_config_validation_rejects_invalid_port() {
    let bad = VALID_CONFIG.replace("port = 8050", "port = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.port"));
}

#[test]
fn test_config_validation_rejects_empty_host() {
    let bad = VALID_CONFIG.replace("host = \"0.0.0.0\"", "host = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.host"));
}

#[test]
fn test_config_validation_rejects_zero_tick_interval() {
    let bad = VALID_CONFIG.replace("tick_interval_ms = 5000", "tick_interval_ms = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("dashboard.tick_interval_ms"));
}

#[test]
fn test_config_validation_rejects_zero_broadcast_capacity() {
    let bad = VALID_CONFIG.replace("broadcast_capacity = 16", "broadcast_capacity = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("publishing.broadcast_capacity"));
}

#[test]
fn test_config_rejects_malformed_toml() {
    assert!(AppConfig::load_from_str("[server\nport = 1").is_err());
}
