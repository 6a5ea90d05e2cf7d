//! Facebook Graph profile types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile returned by the Graph `/me` endpoint, normalized for callers.
///
/// `photo` is the flattened `picture.data.url`. `token` starts as the
/// short-lived token and is replaced by the long-lived one once the exchange
/// succeeds, at which point `expired_at` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacebookProfile {
    /// App-scoped user id.
    #[serde(default)]
    pub id: String,
    /// Primary email, empty when not granted.
    #[serde(default)]
    pub email: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Profile picture URL.
    #[serde(default)]
    pub photo: String,
    /// Long-lived access token once exchanged.
    #[serde(default)]
    pub token: String,
    /// Expiry of the long-lived token.
    #[serde(default, rename = "expiredAt")]
    pub expired_at: Option<DateTime<Utc>>,
    /// Gender, empty when not granted.
    #[serde(default)]
    pub gender: String,
    /// Raw `picture` block as sent by Graph.
    #[serde(default)]
    pub picture: FacebookPicture,
}

/// `picture` block of a Graph response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacebookPicture {
    /// Picture details.
    #[serde(default)]
    pub data: FacebookPictureData,
}

/// Picture URL and dimensions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacebookPictureData {
    /// Picture URL.
    #[serde(default)]
    pub url: String,
    /// Width in pixels.
    #[serde(default)]
    pub width: u32,
    /// Height in pixels.
    #[serde(default)]
    pub height: u32,
}

/// Result of exchanging a short-lived token for a long-lived one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongLivedToken {
    /// Long-lived user token.
    pub access_token: String,
    /// Token type, usually `bearer`.
    pub token_type: String,
    /// Absolute expiry.
    pub expires_at: DateTime<Utc>,
}
