//! TikTok Login Kit adapter

use chrono::Utc;
use reqwest::Method;
use serde::Deserialize;
use ssoconnect_domain::{
    expires_at, Provider, Result, SsoError, TikTokAccessToken, TikTokProfile, TiktokConfig,
    TIKTOK_PROFILE_SCOPE,
};
use tracing::{debug, info, warn};

use crate::http::HttpClient;

const TIKTOK_API_URL: &str = "https://open.tiktokapis.com/v2";
const OAUTH_GRANT_TYPE: &str = "authorization_code";
const USER_INFO_FIELDS: &str = "open_id,union_id,avatar_url,display_name,username";
const OK_CODE: &str = "ok";

/// TikTok sign-in adapter
#[derive(Debug, Clone)]
pub struct TikTokClient {
    http_client: HttpClient,
    config: TiktokConfig,
    api_url: String,
    user_info_bearer: bool,
}

impl TikTokClient {
    /// Create an adapter for the TikTok Open API v2.
    pub fn new(config: TiktokConfig, http_client: HttpClient) -> Self {
        Self {
            http_client,
            config,
            api_url: TIKTOK_API_URL.to_string(),
            user_info_bearer: false,
        }
    }

    /// Use another Open API base URL.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Send the access token as a bearer credential on the user-info request.
    ///
    /// Off by default, which matches the deployed integration.
    pub fn with_user_info_bearer(mut self, enabled: bool) -> Self {
        self.user_info_bearer = enabled;
        self
    }

    /// Exchange an authorization code for access and refresh tokens.
    ///
    /// # Errors
    /// - `SsoError::Network` if the request cannot be sent
    /// - `SsoError::InvalidResponse` if the body cannot be decoded
    pub async fn get_access_token(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<TikTokAccessToken> {
        let form = [
            ("client_key", self.config.client_key.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("grant_type", OAUTH_GRANT_TYPE),
            ("redirect_uri", redirect_uri),
            ("code", code),
        ];

        let request = self
            .http_client
            .request(Method::POST, format!("{}/oauth/token/", self.api_url))
            .form(&form);
        let response = self.http_client.send(request).await?;

        serde_json::from_slice(&response.body).map_err(|e| SsoError::InvalidResponse {
            provider: Provider::TikTok,
            message: format!("Failed to parse token response: {}", e),
        })
    }

    /// Resolve an authorization code into a TikTok profile.
    ///
    /// `redirect_uri` must match the one used to obtain the code; `None` uses
    /// the configured redirect URI.
    ///
    /// # Errors
    /// - any error from [`TikTokClient::get_access_token`], unchanged
    /// - `SsoError::InsufficientScope` if `user.info.profile` was not granted;
    ///   the user-info endpoint is not called in that case
    /// - `SsoError::Network` if the user-info request cannot be sent
    /// - `SsoError::Provider` if the user-info response code is not `ok`
    pub async fn get_user_info_by_code(
        &self,
        code: &str,
        redirect_uri: Option<&str>,
    ) -> Result<TikTokProfile> {
        info!("Exchanging TikTok authorization code");

        let redirect_uri = redirect_uri.unwrap_or(&self.config.redirect_uri);
        let token = self.get_access_token(code, redirect_uri).await.inspect_err(|err| {
            warn!(error = %err, "TikTok access token exchange failed");
        })?;

        if !token.has_scope(TIKTOK_PROFILE_SCOPE) {
            warn!(
                scope = %token.scope,
                error = %token.error,
                log_id = %token.log_id,
                "TikTok authorization is missing the profile scope"
            );
            return Err(SsoError::InsufficientScope {
                required: TIKTOK_PROFILE_SCOPE.to_string(),
                granted: token.scope,
            });
        }

        let mut request = self
            .http_client
            .request(Method::GET, format!("{}/user/info/", self.api_url))
            .query(&[("fields", USER_INFO_FIELDS)]);
        if self.user_info_bearer {
            request = request.bearer_auth(&token.access_token);
        }
        let response = self.http_client.send(request).await?;

        // An undecodable body has no `ok` code and is rejected below.
        let info: UserInfoResponse = serde_json::from_slice(&response.body).unwrap_or_else(|e| {
            debug!(error = %e, "TikTok user info body could not be decoded");
            UserInfoResponse::default()
        });

        if info.error.code != OK_CODE {
            warn!(
                code = %info.error.code,
                log_id = %info.error.log_id,
                "TikTok user info request rejected"
            );
            let message = if info.error.message.is_empty() {
                format!("user info request failed with HTTP {}", response.status.as_u16())
            } else {
                info.error.message
            };
            return Err(SsoError::Provider { provider: Provider::TikTok, message });
        }

        let now = Utc::now();
        let user = info.data.user;
        debug!(open_id = %user.open_id, "TikTok profile resolved");

        Ok(TikTokProfile {
            id: user.open_id,
            name: user.display_name,
            scope: token.scope,
            photo: user.avatar_url,
            username: user.username,
            token: token.access_token,
            expired_at: expires_at(now, token.expires_in),
            refresh_token: token.refresh_token,
            refresh_token_expired_at: expires_at(now, token.refresh_expires_in),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UserInfoResponse {
    data: UserInfoData,
    error: UserInfoError,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UserInfoData {
    user: TikTokUser,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TikTokUser {
    open_id: String,
    avatar_url: String,
    display_name: String,
    username: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UserInfoError {
    code: String,
    message: String,
    log_id: String,
}
