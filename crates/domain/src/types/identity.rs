//! Provider-neutral identity view

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{FacebookProfile, GoogleProfile, TikTokProfile};
use crate::errors::SsoError;

/// Supported identity providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Facebook Login.
    Facebook,
    /// Google Sign-In.
    Google,
    /// TikTok Login Kit.
    TikTok,
}

impl Provider {
    /// All providers in a stable order.
    pub const ALL: [Provider; 3] = [Provider::Facebook, Provider::Google, Provider::TikTok];

    /// Lowercase provider name, as used in config and serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Provider::Facebook => "facebook",
            Provider::Google => "google",
            Provider::TikTok => "tiktok",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = SsoError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "facebook" => Ok(Provider::Facebook),
            "google" => Ok(Provider::Google),
            "tiktok" => Ok(Provider::TikTok),
            other => Err(SsoError::Config(format!("unknown provider: {other}"))),
        }
    }
}

/// A signed-in user, independent of which provider resolved them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Provider that resolved the user.
    pub provider: Provider,
    /// Provider-specific user id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email, when the provider shares one.
    pub email: Option<String>,
    /// Picture URL, when present.
    pub photo: Option<String>,
    /// Provider access or ID token.
    pub token: String,
    /// Token expiry, when known.
    pub expires_at: Option<DateTime<Utc>>,
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

impl From<FacebookProfile> for UserIdentity {
    fn from(profile: FacebookProfile) -> Self {
        Self {
            provider: Provider::Facebook,
            id: profile.id,
            name: profile.name,
            email: non_empty(profile.email),
            photo: non_empty(profile.photo),
            token: profile.token,
            expires_at: profile.expired_at,
        }
    }
}

impl From<GoogleProfile> for UserIdentity {
    fn from(profile: GoogleProfile) -> Self {
        Self {
            provider: Provider::Google,
            id: profile.id,
            name: profile.name,
            email: non_empty(profile.email),
            photo: non_empty(profile.photo),
            token: profile.token,
            expires_at: None,
        }
    }
}

// TikTok does not expose an email address.
impl From<TikTokProfile> for UserIdentity {
    fn from(profile: TikTokProfile) -> Self {
        Self {
            provider: Provider::TikTok,
            id: profile.id,
            name: profile.name,
            email: None,
            photo: non_empty(profile.photo),
            token: profile.token,
            expires_at: Some(profile.expired_at),
        }
    }
}
