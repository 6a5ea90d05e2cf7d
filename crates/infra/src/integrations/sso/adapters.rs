//! Registry of the configured SSO adapters

use ssoconnect_domain::{Provider, Result, SsoConfig, SsoError, UserIdentity};
use tracing::info;

use super::{FacebookClient, GoogleClient, TikTokClient};
use crate::http::HttpClient;

/// The adapters enabled by configuration, sharing one [`HttpClient`].
#[derive(Debug, Clone, Default)]
pub struct SsoAdapters {
    facebook: Option<FacebookClient>,
    google: Option<GoogleClient>,
    tiktok: Option<TikTokClient>,
}

impl SsoAdapters {
    /// Build an adapter for every provider section present in `config`.
    pub fn from_config(config: &SsoConfig, http_client: HttpClient) -> Self {
        let adapters = Self {
            facebook: config
                .facebook
                .clone()
                .map(|facebook| FacebookClient::new(facebook, http_client.clone())),
            google: config.google.clone().map(|google| GoogleClient::new(google, http_client.clone())),
            tiktok: config.tiktok.clone().map(|tiktok| TikTokClient::new(tiktok, http_client)),
        };

        info!(providers = ?adapters.configured(), "SSO adapters initialised");
        adapters
    }

    /// Replace the Facebook adapter.
    pub fn with_facebook(mut self, client: FacebookClient) -> Self {
        self.facebook = Some(client);
        self
    }

    /// Replace the Google adapter.
    pub fn with_google(mut self, client: GoogleClient) -> Self {
        self.google = Some(client);
        self
    }

    /// Replace the TikTok adapter.
    pub fn with_tiktok(mut self, client: TikTokClient) -> Self {
        self.tiktok = Some(client);
        self
    }

    /// Providers that have an adapter.
    pub fn configured(&self) -> Vec<Provider> {
        Provider::ALL.into_iter().filter(|provider| self.is_configured(*provider)).collect()
    }

    /// Whether `provider` has an adapter.
    pub fn is_configured(&self, provider: Provider) -> bool {
        match provider {
            Provider::Facebook => self.facebook.is_some(),
            Provider::Google => self.google.is_some(),
            Provider::TikTok => self.tiktok.is_some(),
        }
    }

    /// # Errors
    /// Returns `SsoError::Config` if Facebook is not configured.
    pub fn facebook(&self) -> Result<&FacebookClient> {
        self.facebook.as_ref().ok_or_else(|| not_configured(Provider::Facebook))
    }

    /// # Errors
    /// Returns `SsoError::Config` if Google is not configured.
    pub fn google(&self) -> Result<&GoogleClient> {
        self.google.as_ref().ok_or_else(|| not_configured(Provider::Google))
    }

    /// # Errors
    /// Returns `SsoError::Config` if TikTok is not configured.
    pub fn tiktok(&self) -> Result<&TikTokClient> {
        self.tiktok.as_ref().ok_or_else(|| not_configured(Provider::TikTok))
    }

    /// Resolve a credential with the matching adapter.
    ///
    /// `credential` is the short-lived user token for Facebook, the ID token
    /// for Google and the authorization code for TikTok (exchanged with the
    /// configured redirect URI). Returns `Ok(None)` when Google rejects the
    /// token's audience.
    pub async fn resolve(
        &self,
        provider: Provider,
        credential: &str,
    ) -> Result<Option<UserIdentity>> {
        match provider {
            Provider::Facebook => {
                let profile = self.facebook()?.get_user_info(credential).await?;
                Ok(Some(profile.into()))
            }
            Provider::Google => {
                let profile = self.google()?.get_user_info(credential).await?;
                Ok((!profile.is_empty()).then(|| profile.into()))
            }
            Provider::TikTok => {
                let profile = self.tiktok()?.get_user_info_by_code(credential, None).await?;
                Ok(Some(profile.into()))
            }
        }
    }
}

fn not_configured(provider: Provider) -> SsoError {
    SsoError::Config(format!("{provider} sign-in is not configured"))
}

#[cfg(test)]
mod tests {
    use ssoconnect_domain::{GoogleConfig, TiktokConfig};

    use super::*;

    fn config_with_google_and_tiktok() -> SsoConfig {
        SsoConfig {
            google: Some(GoogleConfig { client_id: "web.apps".into() }),
            tiktok: Some(TiktokConfig {
                client_key: "key".into(),
                client_secret: "secret".into(),
                redirect_uri: "https://app.example/cb".into(),
            }),
            ..SsoConfig::default()
        }
    }

    #[test]
    fn builds_only_configured_adapters() {
        let adapters = SsoAdapters::from_config(
            &config_with_google_and_tiktok(),
            HttpClient::new().expect("http client"),
        );

        assert_eq!(adapters.configured(), vec![Provider::Google, Provider::TikTok]);
        assert!(adapters.google().is_ok());
        assert!(adapters.tiktok().is_ok());
    }

    #[test]
    fn missing_adapter_is_a_config_error() {
        let adapters = SsoAdapters::from_config(
            &config_with_google_and_tiktok(),
            HttpClient::new().expect("http client"),
        );

        match adapters.facebook() {
            Err(SsoError::Config(msg)) => assert!(msg.contains("facebook")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn resolve_fails_fast_for_unconfigured_provider() {
        let adapters = SsoAdapters::default();
        let result = adapters.resolve(Provider::TikTok, "code").await;
        assert!(matches!(result, Err(SsoError::Config(_))));
    }
}
