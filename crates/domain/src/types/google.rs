//! Google ID token claims

use serde::{Deserialize, Serialize};

/// Claims read from Google's token-info endpoint.
///
/// The zero value (see [`GoogleProfile::is_empty`]) is what an audience
/// rejection looks like.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleProfile {
    /// Google account id (`sub`).
    #[serde(default, rename = "sub")]
    pub id: String,
    /// Client id the token was issued to.
    #[serde(default)]
    pub aud: String,
    /// Account email.
    #[serde(default)]
    pub email: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Profile picture URL (`picture`).
    #[serde(default, rename = "picture")]
    pub photo: String,
    /// Echo of the ID token passed in; never read from the provider.
    #[serde(default, skip_deserializing)]
    pub token: String,
}

impl GoogleProfile {
    /// Whether this is the zero-valued profile.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
