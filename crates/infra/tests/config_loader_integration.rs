//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;

use ssoconnect_infra::config;
use ssoconnect_infra::{HttpClient, SsoAdapters};
use ssoconnect_domain::Provider;
use tempfile::NamedTempFile;

#[test]
fn test_load_config_from_json_file() {
    let json_content = r#"{
        "http": {
            "timeout_seconds": 10,
            "user_agent": "sso-connect/0.1",
            "debug": true
        },
        "facebook": {
            "client_id": "fb-app",
            "client_secret": "fb-secret"
        },
        "tiktok": {
            "client_key": "tt-key",
            "client_secret": "tt-secret",
            "redirect_uri": "https://app.example/tiktok"
        }
    }"#;

    let mut temp_file = NamedTempFile::with_suffix(".json").expect("Failed to create temp file");
    temp_file.write_all(json_content.as_bytes()).expect("Failed to write to temp file");

    let config = config::load_from_file(Some(temp_file.path().to_path_buf()))
        .expect("Failed to load config from JSON file");

    assert_eq!(config.http.timeout_seconds, 10);
    assert_eq!(config.http.user_agent.as_deref(), Some("sso-connect/0.1"));
    assert!(config.http.debug);

    let facebook = config.facebook.as_ref().expect("facebook section");
    assert_eq!(facebook.client_id, "fb-app");
    assert_eq!(facebook.client_secret, "fb-secret");
    assert!(config.google.is_none());

    let tiktok = config.tiktok.as_ref().expect("tiktok section");
    assert_eq!(tiktok.redirect_uri, "https://app.example/tiktok");

    let http = HttpClient::from_config(&config.http).expect("http client");
    let adapters = SsoAdapters::from_config(&config, http);
    assert_eq!(adapters.configured(), vec![Provider::Facebook, Provider::TikTok]);
}

#[test]
fn test_load_config_from_toml_file() {
    let toml_content = r#"
[google]
client_id = "web.apps.googleusercontent.com"

[tiktok]
client_key = "tt-key"
client_secret = "tt-secret"
redirect_uri = "https://app.example/tiktok"
"#;

    let mut temp_file = NamedTempFile::with_suffix(".toml").expect("Failed to create temp file");
    temp_file.write_all(toml_content.as_bytes()).expect("Failed to write to temp file");

    let config = config::load_from_file(Some(temp_file.path().to_path_buf()))
        .expect("Failed to load config from TOML file");

    assert_eq!(config.http.timeout_seconds, 30);
    assert!(!config.http.debug);
    assert_eq!(
        config.google.as_ref().map(|google| google.client_id.as_str()),
        Some("web.apps.googleusercontent.com")
    );
    assert!(config.facebook.is_none());
}

#[test]
fn test_invalid_toml_is_a_config_error() {
    let mut temp_file = NamedTempFile::with_suffix(".toml").expect("Failed to create temp file");
    temp_file.write_all(b"[google\nclient_id = ").expect("Failed to write to temp file");

    let result = config::load_from_file(Some(temp_file.path().to_path_buf()));
    assert!(matches!(result, Err(ssoconnect_domain::SsoError::Config(_))));
}
