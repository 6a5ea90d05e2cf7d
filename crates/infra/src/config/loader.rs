//! Configuration loader
//!
//! Loads SSO configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If no provider is configured there, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `SSO_HTTP_TIMEOUT_SECONDS`: Outbound request timeout (default 30)
//! - `SSO_HTTP_USER_AGENT`: Optional user agent
//! - `SSO_HTTP_DEBUG`: Log requests and response bodies (true/false)
//! - `SSO_FACEBOOK_CLIENT_ID`, `SSO_FACEBOOK_CLIENT_SECRET`
//! - `SSO_GOOGLE_CLIENT_ID`
//! - `SSO_TIKTOK_CLIENT_KEY`, `SSO_TIKTOK_CLIENT_SECRET`, `SSO_TIKTOK_REDIRECT_URI`
//!
//! A provider is enabled when all of its variables are set. Setting only some
//! of them is an error.
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./sso.json` or `./sso.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. `../sso.json` or `../sso.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use ssoconnect_domain::{
    FacebookConfig, GoogleConfig, HttpConfig, Result, SsoConfig, SsoError, TiktokConfig,
};

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `SsoError::Config` if configuration cannot be loaded from either
/// source, or a source is present but invalid.
pub fn load() -> Result<SsoConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `SsoError::Config` if no provider is configured, a provider is
/// only partially configured, or a value cannot be parsed.
pub fn load_from_env() -> Result<SsoConfig> {
    let timeout_seconds = match std::env::var("SSO_HTTP_TIMEOUT_SECONDS") {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|e| SsoError::Config(format!("Invalid HTTP timeout: {}", e)))?,
        Err(_) => HttpConfig::default().timeout_seconds,
    };

    let http = HttpConfig {
        timeout_seconds,
        user_agent: std::env::var("SSO_HTTP_USER_AGENT").ok(),
        debug: env_bool("SSO_HTTP_DEBUG", false),
    };

    let facebook =
        env_group("facebook", &["SSO_FACEBOOK_CLIENT_ID", "SSO_FACEBOOK_CLIENT_SECRET"])?.map(
            |mut values| FacebookConfig {
                client_secret: values.pop().unwrap_or_default(),
                client_id: values.pop().unwrap_or_default(),
            },
        );

    let google = env_group("google", &["SSO_GOOGLE_CLIENT_ID"])?
        .map(|mut values| GoogleConfig { client_id: values.pop().unwrap_or_default() });

    let tiktok = env_group(
        "tiktok",
        &["SSO_TIKTOK_CLIENT_KEY", "SSO_TIKTOK_CLIENT_SECRET", "SSO_TIKTOK_REDIRECT_URI"],
    )?
    .map(|mut values| TiktokConfig {
        redirect_uri: values.pop().unwrap_or_default(),
        client_secret: values.pop().unwrap_or_default(),
        client_key: values.pop().unwrap_or_default(),
    });

    let config = SsoConfig { http, facebook, google, tiktok };
    if !config.has_provider() {
        return Err(SsoError::Config("No SSO provider configured in environment".into()));
    }

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `SsoError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - No provider section is present
pub fn load_from_file(path: Option<PathBuf>) -> Result<SsoConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(SsoError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            SsoError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| SsoError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    if !config.has_provider() {
        return Err(SsoError::Config(format!(
            "No SSO provider configured in {}",
            config_path.display()
        )));
    }

    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<SsoConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| SsoError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| SsoError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(SsoError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidate_files(&cwd));
        candidates.push(cwd.join("../sso.json"));
        candidates.push(cwd.join("../sso.toml"));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidate_files(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidate_files(dir: &Path) -> [PathBuf; 4] {
    [dir.join("sso.json"), dir.join("sso.toml"), dir.join("config.json"), dir.join("config.toml")]
}

/// Read a group of variables that configure one provider.
///
/// Returns `Ok(None)` when none are set and the values in order when all are.
///
/// # Errors
/// Returns `SsoError::Config` naming the missing variables when only some are
/// set.
fn env_group(provider: &str, keys: &[&str]) -> Result<Option<Vec<String>>> {
    let values: Vec<Option<String>> =
        keys.iter().map(|key| std::env::var(key).ok().filter(|v| !v.is_empty())).collect();

    if values.iter().all(Option::is_none) {
        return Ok(None);
    }

    let missing: Vec<&str> = keys
        .iter()
        .zip(&values)
        .filter(|(_, value)| value.is_none())
        .map(|(key, _)| *key)
        .collect();

    if !missing.is_empty() {
        return Err(SsoError::Config(format!(
            "Incomplete {} configuration, missing: {}",
            provider,
            missing.join(", ")
        )));
    }

    Ok(Some(values.into_iter().flatten().collect()))
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
