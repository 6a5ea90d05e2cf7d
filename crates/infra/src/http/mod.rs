//! Outbound HTTP capability shared by the adapters

pub mod client;

pub use client::{redact_body, redact_url, HttpClient, HttpClientBuilder, HttpResponse};
