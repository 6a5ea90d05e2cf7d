//! Error types used by the SSO adapters

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{FacebookProfile, Provider};

/// Main error type for SSO lookups
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum SsoError {
    /// Connection, DNS, TLS or timeout failure while talking to a provider.
    #[error("Network error: {0}")]
    Network(String),

    /// The provider answered with a body that could not be decoded.
    #[error("Invalid {provider} response: {message}")]
    InvalidResponse {
        /// Provider that sent the body.
        provider: Provider,
        /// Decoder failure.
        message: String,
    },

    /// The provider reported an API-level error.
    #[error("{provider} error: {message}")]
    Provider {
        /// Provider that reported the error.
        provider: Provider,
        /// Message from the provider, or the HTTP status when it gave none.
        message: String,
    },

    /// The user did not grant a scope the application needs.
    #[error("Insufficient permissions: '{required}' was not granted (granted: '{granted}')")]
    InsufficientScope {
        /// Scope the lookup needs.
        required: String,
        /// Comma-separated scopes that were granted.
        granted: String,
    },

    /// The Facebook long-lived token exchange produced no token.
    ///
    /// The profile fetched with the short-lived token is kept so callers can
    /// still inspect it.
    #[error("Could not read account information")]
    AccountUnreadable {
        /// Profile read with the short-lived token.
        profile: Box<FacebookProfile>,
    },

    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure that is not attributable to a provider or to configuration.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SsoError {
    /// Provider the error originated from, when it is known.
    pub fn provider(&self) -> Option<Provider> {
        match self {
            Self::InvalidResponse { provider, .. } | Self::Provider { provider, .. } => {
                Some(*provider)
            }
            Self::InsufficientScope { .. } => Some(Provider::TikTok),
            Self::AccountUnreadable { .. } => Some(Provider::Facebook),
            Self::Network(_) | Self::Config(_) | Self::Internal(_) => None,
        }
    }

    /// Stable label suitable for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::InvalidResponse { .. } => "invalid_response",
            Self::Provider { .. } => "provider",
            Self::InsufficientScope { .. } => "insufficient_scope",
            Self::AccountUnreadable { .. } => "account_unreadable",
            Self::Config(_) => "config",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for SSO operations
pub type Result<T> = std::result::Result<T, SsoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_is_reported_for_provider_scoped_errors() {
        let err = SsoError::Provider { provider: Provider::TikTok, message: "bad".into() };
        assert_eq!(err.provider(), Some(Provider::TikTok));

        let err = SsoError::AccountUnreadable { profile: Box::default() };
        assert_eq!(err.provider(), Some(Provider::Facebook));

        assert_eq!(SsoError::Network("down".into()).provider(), None);
    }

    #[test]
    fn display_includes_provider_and_message() {
        let err = SsoError::InvalidResponse {
            provider: Provider::Google,
            message: "expected value".into(),
        };
        assert_eq!(err.to_string(), "Invalid google response: expected value");
    }

    #[test]
    fn insufficient_scope_names_missing_scope() {
        let err = SsoError::InsufficientScope {
            required: "user.info.profile".into(),
            granted: "user.info.basic".into(),
        };
        let message = err.to_string();
        assert!(message.contains("user.info.profile"));
        assert!(message.contains("user.info.basic"));
        assert_eq!(err.label(), "insufficient_scope");
    }
}
