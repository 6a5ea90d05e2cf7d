//! # SSO Connect Domain
//!
//! Provider-neutral types for the SSO adapters.
//!
//! This crate contains:
//! - Normalized profile records for Facebook, Google and TikTok
//! - Provider credential and HTTP configuration structures
//! - The `SsoError` type and `Result` alias
//!
//! ## Architecture
//! - No dependencies on other SSO Connect crates
//! - No I/O; the adapters that talk to providers live in `ssoconnect-infra`

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
