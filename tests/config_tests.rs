use std::time::Duration;

use chart_playground::PlaygroundConfig;
use chart_playground::config::{DEFAULT_REQUEST_TIMEOUT_MS, DEFAULT_USERS_ENDPOINT};
use chart_playground::error::PlaygroundError;

#[test]
fn default_config_is_valid() {
    let config = PlaygroundConfig::default();

    assert_eq!(config.users_endpoint, DEFAULT_USERS_ENDPOINT);
    assert_eq!(config.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
    assert_eq!(
        config.request_timeout(),
        Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS)
    );
    config.validate().expect("valid default");
}

#[test]
fn empty_json_object_uses_defaults() {
    let config = PlaygroundConfig::from_json_str("{}").expect("parse");
    assert_eq!(config, PlaygroundConfig::default());
}

#[test]
fn json_round_trip_preserves_overrides() {
    let config = PlaygroundConfig::default()
        .with_users_endpoint("http://127.0.0.1:8080/users")
        .with_request_timeout_ms(500);

    let json = config.to_json_pretty().expect("serialize");
    let parsed = PlaygroundConfig::from_json_str(&json).expect("parse");

    assert_eq!(parsed, config);
}

#[test]
fn rejects_non_http_scheme() {
    let err = PlaygroundConfig::from_json_str(r#"{ "users_endpoint": "ftp://example.com/users" }"#)
        .expect_err("ftp scheme");
    assert!(matches!(err, PlaygroundError::Config(_)));
}

#[test]
fn rejects_zero_timeout() {
    let err = PlaygroundConfig::default()
        .with_request_timeout_ms(0)
        .validate()
        .expect_err("zero timeout");
    assert!(matches!(err, PlaygroundError::Config(_)));
}

#[test]
fn rejects_malformed_json() {
    let err = PlaygroundConfig::from_json_str("{ users_endpoint").expect_err("malformed");
    assert!(matches!(err, PlaygroundError::Config(_)));
}
