//! Facebook Graph API adapter

use chrono::Utc;
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use ssoconnect_domain::{
    expires_at, FacebookConfig, FacebookProfile, LongLivedToken, Provider, Result, SsoError,
};
use tracing::{debug, info, warn};

use crate::http::{HttpClient, HttpResponse};

const GRAPH_API_URL: &str = "https://graph.facebook.com/v20.0";
const PROFILE_FIELDS: &str = "id,name,email,picture.type(large),gender";
const EXCHANGE_GRANT_TYPE: &str = "fb_exchange_token";

/// Facebook sign-in adapter
#[derive(Debug, Clone)]
pub struct FacebookClient {
    http_client: HttpClient,
    config: FacebookConfig,
    graph_url: String,
}

impl FacebookClient {
    /// Create an adapter for the Graph API using the given app credentials.
    pub fn new(config: FacebookConfig, http_client: HttpClient) -> Self {
        Self { http_client, config, graph_url: GRAPH_API_URL.to_string() }
    }

    /// Point the adapter at another Graph API base URL (version pinning,
    /// proxies, test servers).
    pub fn with_graph_url(mut self, url: impl Into<String>) -> Self {
        self.graph_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Resolve a short-lived user token into a profile carrying a long-lived
    /// token.
    ///
    /// # Errors
    /// - `SsoError::Network` if the profile request cannot be sent
    /// - `SsoError::Provider` if Graph reports an error
    /// - `SsoError::InvalidResponse` if the profile body cannot be decoded
    /// - `SsoError::AccountUnreadable` if the long-lived exchange yields no
    ///   token; the short-lived profile is attached
    pub async fn get_user_info(&self, token: &str) -> Result<FacebookProfile> {
        info!("Fetching Facebook profile");

        let request = self
            .http_client
            .request(Method::GET, format!("{}/me", self.graph_url))
            .query(&[("access_token", token), ("fields", PROFILE_FIELDS)]);
        let response = self.http_client.send(request).await?;

        let mut profile = parse_profile(&response)?;
        profile.photo = profile.picture.data.url.clone();
        profile.token = token.to_string();

        let Some(long_lived) = self.get_long_lived_token(token).await else {
            warn!(user_id = %profile.id, "Facebook long-lived token exchange returned no token");
            return Err(SsoError::AccountUnreadable { profile: Box::new(profile) });
        };

        profile.token = long_lived.access_token;
        profile.expired_at = Some(long_lived.expires_at);

        debug!(user_id = %profile.id, "Facebook profile resolved");
        Ok(profile)
    }

    /// Exchange a short-lived user token for a long-lived one.
    ///
    /// Returns `None` on transport failure, a non-200 status, an undecodable
    /// body or an empty token. The cause is logged and not surfaced.
    pub async fn get_long_lived_token(&self, token: &str) -> Option<LongLivedToken> {
        let request = self
            .http_client
            .request(Method::GET, format!("{}/oauth/access_token", self.graph_url))
            .query(&[
                ("grant_type", EXCHANGE_GRANT_TYPE),
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("fb_exchange_token", token),
            ]);

        let response = match self.http_client.send(request).await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "Facebook token exchange request failed");
                return None;
            }
        };

        if response.status != StatusCode::OK {
            warn!(status = response.status.as_u16(), "Facebook token exchange rejected");
            return None;
        }

        let payload: LongLivedTokenResponse = match serde_json::from_slice(&response.body) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(error = %err, "Facebook token exchange returned an undecodable body");
                return None;
            }
        };

        if payload.access_token.is_empty() {
            return None;
        }

        Some(LongLivedToken {
            access_token: payload.access_token,
            token_type: payload.token_type,
            expires_at: expires_at(Utc::now(), payload.expires_in),
        })
    }
}

fn parse_profile(response: &HttpResponse) -> Result<FacebookProfile> {
    if let Ok(GraphErrorEnvelope { error }) = serde_json::from_slice(&response.body) {
        return Err(SsoError::Provider {
            provider: Provider::Facebook,
            message: format!("{} ({}, code {})", error.message, error.kind, error.code),
        });
    }

    if !response.status.is_success() {
        return Err(SsoError::Provider {
            provider: Provider::Facebook,
            message: format!("Graph API returned HTTP {}", response.status.as_u16()),
        });
    }

    serde_json::from_slice(&response.body).map_err(|e| SsoError::InvalidResponse {
        provider: Provider::Facebook,
        message: format!("Failed to parse profile: {}", e),
    })
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LongLivedTokenResponse {
    access_token: String,
    expires_in: i64,
    token_type: String,
}

#[derive(Debug, Deserialize)]
struct GraphErrorEnvelope {
    error: GraphError,
}

#[derive(Debug, Deserialize)]
struct GraphError {
    #[serde(default)]
    message: String,
    #[serde(default, rename = "type")]
    kind: String,
    #[serde(default)]
    code: i64,
}
