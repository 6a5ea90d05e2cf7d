//! Google ID token adapter

use reqwest::Method;
use ssoconnect_domain::{GoogleConfig, GoogleProfile, Provider, Result, SsoError};
use tracing::{debug, info, warn};

use crate::http::HttpClient;

const TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";

/// Google sign-in adapter
#[derive(Debug, Clone)]
pub struct GoogleClient {
    http_client: HttpClient,
    config: GoogleConfig,
    tokeninfo_url: String,
}

impl GoogleClient {
    /// Create an adapter that expects tokens issued to `config.client_id`.
    pub fn new(config: GoogleConfig, http_client: HttpClient) -> Self {
        Self { http_client, config, tokeninfo_url: TOKENINFO_URL.to_string() }
    }

    /// Use another token-info endpoint.
    pub fn with_tokeninfo_url(mut self, url: impl Into<String>) -> Self {
        self.tokeninfo_url = url.into();
        self
    }

    /// Validate an ID token against the configured client id.
    ///
    /// See [`GoogleClient::get_user_info_for_audience`].
    pub async fn get_user_info(&self, token: &str) -> Result<GoogleProfile> {
        self.get_user_info_for_audience(token, &self.config.client_id).await
    }

    /// Validate an ID token and return its profile claims.
    ///
    /// A token issued for another audience is not an error: the claims are
    /// discarded and the empty profile is returned. Check
    /// [`GoogleProfile::is_empty`] to detect the rejection.
    ///
    /// # Errors
    /// - `SsoError::Config` if `expected_client_id` is empty
    /// - `SsoError::Network` if the request cannot be sent
    /// - `SsoError::InvalidResponse` if the body is not a JSON object
    pub async fn get_user_info_for_audience(
        &self,
        token: &str,
        expected_client_id: &str,
    ) -> Result<GoogleProfile> {
        if expected_client_id.is_empty() {
            return Err(SsoError::Config("Google client id is empty".into()));
        }

        info!("Validating Google ID token");

        let request = self
            .http_client
            .request(Method::GET, &self.tokeninfo_url)
            .query(&[("id_token", token)]);
        let response = self.http_client.send(request).await?;

        let mut profile: GoogleProfile =
            serde_json::from_slice(&response.body).map_err(|e| SsoError::InvalidResponse {
                provider: Provider::Google,
                message: format!("Failed to parse token info: {}", e),
            })?;
        profile.token = token.to_string();

        if profile.aud != expected_client_id {
            warn!(
                status = response.status.as_u16(),
                audience = %profile.aud,
                "Google ID token audience mismatch; returning empty profile"
            );
            return Ok(GoogleProfile::default());
        }

        debug!(user_id = %profile.id, "Google profile resolved");
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    const CLIENT_ID: &str = "web.apps.googleusercontent.com";

    fn test_client(server: &MockServer) -> GoogleClient {
        let http_client = HttpClient::new().expect("http client");
        GoogleClient::new(GoogleConfig { client_id: CLIENT_ID.to_string() }, http_client)
            .with_tokeninfo_url(format!("{}/tokeninfo", server.uri()))
    }

    async fn mount_claims(server: &MockServer, aud: &str) {
        Mock::given(method("GET"))
            .and(path("/tokeninfo"))
            .and(query_param("id_token", "id-token-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "iss": "https://accounts.google.com",
                "sub": "110169484474386276334",
                "aud": aud,
                "email": "alice@example.com",
                "email_verified": "true",
                "name": "Alice",
                "picture": "https://lh3.googleusercontent.com/a/alice"
            })))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn maps_claims_when_audience_matches() {
        let server = MockServer::start().await;
        mount_claims(&server, CLIENT_ID).await;

        let profile = test_client(&server).get_user_info("id-token-1").await.expect("profile");

        assert_eq!(profile.id, "110169484474386276334");
        assert_eq!(profile.aud, CLIENT_ID);
        assert_eq!(profile.email, "alice@example.com");
        assert_eq!(profile.name, "Alice");
        assert_eq!(profile.photo, "https://lh3.googleusercontent.com/a/alice");
        assert_eq!(profile.token, "id-token-1");
    }

    #[tokio::test]
    async fn audience_mismatch_returns_empty_profile_without_error() {
        let server = MockServer::start().await;
        mount_claims(&server, "someone-else.apps.googleusercontent.com").await;

        let profile = test_client(&server).get_user_info("id-token-1").await.expect("no error");

        assert!(profile.is_empty());
        assert_eq!(profile, GoogleProfile::default());
    }

    #[tokio::test]
    async fn explicit_audience_overrides_configured_client() {
        let server = MockServer::start().await;
        mount_claims(&server, "mobile.apps.googleusercontent.com").await;

        let profile = test_client(&server)
            .get_user_info_for_audience("id-token-1", "mobile.apps.googleusercontent.com")
            .await
            .expect("profile");

        assert_eq!(profile.aud, "mobile.apps.googleusercontent.com");
        assert_eq!(profile.token, "id-token-1");
    }

    #[tokio::test]
    async fn invalid_token_response_is_an_empty_profile() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tokeninfo"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "invalid_token",
                "error_description": "Invalid Value"
            })))
            .mount(&server)
            .await;

        let profile = test_client(&server).get_user_info("garbage").await.expect("no error");
        assert!(profile.is_empty());
    }

    #[tokio::test]
    async fn non_json_body_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tokeninfo"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let result = test_client(&server).get_user_info("id-token-1").await;
        assert!(matches!(result, Err(SsoError::InvalidResponse { provider: Provider::Google, .. })));
    }

    #[tokio::test]
    async fn empty_expected_audience_is_rejected_before_any_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

        let result = test_client(&server).get_user_info_for_audience("id-token-1", "").await;
        assert!(matches!(result, Err(SsoError::Config(_))));
    }
}
