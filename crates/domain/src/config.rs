//! Configuration structures for provider credentials and the HTTP transport

use serde::{Deserialize, Serialize};

/// Top-level configuration. Providers are optional so a deployment can enable
/// only the ones it uses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SsoConfig {
    /// Outbound HTTP settings.
    #[serde(default)]
    pub http: HttpConfig,
    /// Facebook app, if enabled.
    #[serde(default)]
    pub facebook: Option<FacebookConfig>,
    /// Google client, if enabled.
    #[serde(default)]
    pub google: Option<GoogleConfig>,
    /// TikTok app, if enabled.
    #[serde(default)]
    pub tiktok: Option<TiktokConfig>,
}

/// Facebook application credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacebookConfig {
    /// App id.
    pub client_id: String,
    /// App secret. Never serialized.
    #[serde(skip_serializing)]
    pub client_secret: String,
}

/// Google client id, used as the expected `aud` claim of ID tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleConfig {
    /// OAuth client id.
    pub client_id: String,
}

/// TikTok application credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TiktokConfig {
    /// Client key.
    pub client_key: String,
    /// Client secret. Never serialized.
    #[serde(skip_serializing)]
    pub client_secret: String,
    /// Redirect URI registered for the app.
    pub redirect_uri: String,
}

/// Outbound HTTP settings shared by every adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// `User-Agent` override.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Log request lines, statuses and redacted response bodies at debug level.
    #[serde(default)]
    pub debug: bool,
}

const fn default_timeout_seconds() -> u64 {
    30
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_seconds: default_timeout_seconds(), user_agent: None, debug: false }
    }
}

impl SsoConfig {
    /// Whether at least one provider section is present.
    pub fn has_provider(&self) -> bool {
        self.facebook.is_some() || self.google.is_some() || self.tiktok.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_section_defaults_when_missing() {
        let config: SsoConfig =
            serde_json::from_str(r#"{"google": {"client_id": "abc.apps"}}"#).unwrap();

        assert_eq!(config.http.timeout_seconds, 30);
        assert!(!config.http.debug);
        assert!(config.has_provider());
        assert!(config.facebook.is_none());
    }

    #[test]
    fn secrets_are_not_serialized() {
        let config = TiktokConfig {
            client_key: "key".into(),
            client_secret: "hunter2".into(),
            redirect_uri: "https://app.example/cb".into(),
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("key"));
        assert!(!json.contains("hunter2"));
    }
}
