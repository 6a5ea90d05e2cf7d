//! TikTok Login Kit types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Scope that must be granted before the user-info endpoint is called.
pub const TIKTOK_PROFILE_SCOPE: &str = "user.info.profile";

/// Token endpoint response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TikTokAccessToken {
    /// User access token.
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    /// User id within the app.
    pub open_id: String,
    /// Refresh token lifetime in seconds.
    pub refresh_expires_in: i64,
    /// Refresh token.
    pub refresh_token: String,
    /// Token type, `Bearer`.
    pub token_type: String,
    /// Comma-separated granted scopes.
    pub scope: String,
    /// Error code when the exchange failed.
    pub error: String,
    /// Error details.
    pub error_description: String,
    /// TikTok request id.
    pub log_id: String,
}

impl TikTokAccessToken {
    /// Granted scopes, split on commas.
    pub fn scopes(&self) -> impl Iterator<Item = &str> {
        self.scope.split(',')
    }

    /// Case-sensitive scope membership check.
    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes().any(|granted| granted == scope)
    }
}

/// Normalized TikTok user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TikTokProfile {
    /// User `open_id`.
    #[serde(rename = "sub")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Granted scopes.
    pub scope: String,
    /// Avatar URL.
    pub photo: String,
    /// TikTok username.
    pub username: String,
    /// Access token.
    pub token: String,
    /// Access token expiry.
    #[serde(rename = "expiredAt")]
    pub expired_at: DateTime<Utc>,
    /// Refresh token.
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
    /// Refresh token expiry.
    #[serde(rename = "refreshTokenExpiredAt")]
    pub refresh_token_expired_at: DateTime<Utc>,
}
