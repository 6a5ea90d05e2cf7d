//! Identity provider adapters
//!
//! Each adapter turns a provider credential into a normalized profile with a
//! short, linear sequence of HTTP calls.
//!
//! # Architecture
//!
//! - **Facebook**: `FacebookClient` - Graph `/me` lookup plus long-lived token exchange
//! - **Google**: `GoogleClient` - ID token check against the expected audience
//! - **TikTok**: `TikTokClient` - authorization code exchange, scope check, user info
//! - **Registry**: `SsoAdapters` - builds the configured adapters around one `HttpClient`
//!
//! # Usage
//!
//! ```no_run
//! use ssoconnect_infra::http::HttpClient;
//! use ssoconnect_infra::integrations::sso::GoogleClient;
//! use ssoconnect_domain::GoogleConfig;
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let http_client = HttpClient::new()?;
//! let config = GoogleConfig { client_id: "my-app.apps.googleusercontent.com".into() };
//! let client = GoogleClient::new(config, http_client);
//!
//! let profile = client.get_user_info("id-token-from-the-browser").await?;
//! if profile.is_empty() {
//!     // audience mismatch: the token was issued to another application
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - **Network errors**: returned as `SsoError::Network`, never retried
//! - **Undecodable bodies**: `SsoError::InvalidResponse`
//! - **Provider-reported errors**: `SsoError::Provider`
//! - **Google audience mismatch**: not an error, the profile is empty

pub mod adapters;
pub mod facebook;
pub mod google;
pub mod tiktok;

pub use adapters::SsoAdapters;
pub use facebook::FacebookClient;
pub use google::GoogleClient;
pub use tiktok::TikTokClient;
