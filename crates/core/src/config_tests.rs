// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[test]
fn default_disables_ticking() {
    let config = EngineConfig::default();
    assert_eq!(config.timeout, Duration::ZERO);
    assert!(!config.ticking_enabled());
}

#[test]
fn from_millis_enables_ticking() {
    let config = EngineConfig::from_millis(100);
    assert_eq!(config.timeout, Duration::from_millis(100));
    assert!(config.ticking_enabled());
}

#[parameterized(
    millis = { "timeout = \"100ms\"", Duration::from_millis(100) },
    seconds = { "timeout = \"2s\"", Duration::from_secs(2) },
    zero = { "timeout = \"0s\"", Duration::ZERO },
    absent = { "", Duration::ZERO },
)]
fn parses_toml(content: &str, expected: Duration) {
    let config = EngineConfig::from_toml_str(content).unwrap();
    assert_eq!(config.timeout, expected);
}

#[test]
fn rejects_malformed_toml_duration() {
    let err = EngineConfig::from_toml_str("timeout = \"soon\"").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn rejects_unquoted_number() {
    assert!(EngineConfig::from_toml_str("timeout = 100").is_err());
}

#[parameterized(
    unset = { None, Duration::ZERO },
    blank = { Some("  "), Duration::ZERO },
    millis = { Some("250ms"), Duration::from_millis(250) },
    padded = { Some(" 1s "), Duration::from_secs(1) },
)]
fn reads_env_value(value: Option<&str>, expected: Duration) {
    let config = EngineConfig::from_env_value(value).unwrap();
    assert_eq!(config.timeout, expected);
}

#[test]
fn malformed_env_value_names_the_variable() {
    let err = EngineConfig::from_env_value(Some("fast")).unwrap_err();
    match &err {
        ConfigError::InvalidDuration { var, value, .. } => {
            assert_eq!(var, TIMEOUT_ENV);
            assert_eq!(value, "fast");
        }
        other => panic!("expected InvalidDuration, got {:?}", other),
    }
    assert!(err.to_string().contains("HELI_TIMEOUT"));
}

#[test]
fn round_trips_through_toml() {
    let config = EngineConfig::from_millis(1500);
    let content = toml::to_string(&config).unwrap();
    assert_eq!(EngineConfig::from_toml_str(&content).unwrap(), config);
}
