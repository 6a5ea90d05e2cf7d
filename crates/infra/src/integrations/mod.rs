//! External service integrations

pub mod sso;
