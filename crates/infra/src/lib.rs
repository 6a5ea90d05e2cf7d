//! # SSO Connect Infrastructure
//!
//! I/O side of the SSO adapters.
//!
//! This crate contains:
//! - The injected HTTP client capability
//! - Conversions from `reqwest` errors into [`SsoError`](ssoconnect_domain::SsoError)
//! - Configuration loading from environment variables or files
//! - The Facebook, Google and TikTok adapters and the registry composing them
//!
//! ## Architecture
//! - Depends on `ssoconnect-domain` for records, config and errors
//! - Adapters are independent; they share nothing but an `HttpClient`

pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder, HttpResponse};
pub use integrations::sso::{FacebookClient, GoogleClient, SsoAdapters, TikTokClient};
