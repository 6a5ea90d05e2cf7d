//! Single-shot HTTP client with secret-safe debug logging

use std::time::Duration;

use reqwest::{Client as ReqwestClient, Method, RequestBuilder, StatusCode};
use serde_json::Value;
use ssoconnect_domain::{HttpConfig, Result};
use tracing::debug;
use url::Url;

use crate::errors::conversions::http_error;

/// Query parameters whose values never reach the logs.
const SENSITIVE_PARAMS: &[&str] =
    &["access_token", "client_secret", "fb_exchange_token", "id_token", "code"];

/// JSON body fields whose values never reach the logs.
const SENSITIVE_FIELDS: &[&str] = &["access_token", "refresh_token", "id_token", "client_secret"];

const REDACTED: &str = "REDACTED";

/// HTTP client injected into every adapter.
///
/// Cloning is cheap and shares the underlying connection pool. Requests are
/// sent exactly once; there is no retry.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: ReqwestClient,
    debug: bool,
}

/// Status and fully buffered body of a provider response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Response status; non-2xx is not an error at this layer.
    pub status: StatusCode,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Build a client from the `http` section of the configuration.
    pub fn from_config(config: &HttpConfig) -> Result<Self> {
        let mut builder = Self::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .debug(config.debug);

        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        builder.build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the request once and buffer the response body.
    ///
    /// Non-2xx statuses are returned as responses; only transport failures are
    /// errors.
    pub async fn send(&self, builder: RequestBuilder) -> Result<HttpResponse> {
        let request = builder.build().map_err(http_error)?;

        let method = request.method().clone();
        let url = redact_url(request.url());
        if self.debug {
            debug!(%method, %url, "sending HTTP request");
        }

        let response = self.client.execute(request).await.map_err(|err| {
            let err = err.without_url();
            debug!(%method, %url, error = %err, "HTTP request failed");
            http_error(err)
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(http_error)?.to_vec();

        if self.debug {
            debug!(
                %method,
                %url,
                %status,
                body = %redact_body(&body),
                "received HTTP response"
            );
        }

        Ok(HttpResponse { status, body })
    }

    /// Whether request/response debug logging is enabled.
    pub fn debug_enabled(&self) -> bool {
        self.debug
    }
}

/// Render a URL with sensitive query values replaced.
pub fn redact_url(url: &Url) -> String {
    if url.query().is_none() {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if SENSITIVE_PARAMS.contains(&&*key) {
                REDACTED.to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

/// Render a response body for logging with token fields replaced.
///
/// Bodies that are not JSON are summarized by their length only, since
/// form-encoded token responses would otherwise be logged verbatim.
pub fn redact_body(body: &[u8]) -> String {
    match serde_json::from_slice::<Value>(body) {
        Ok(mut value) => {
            redact_value(&mut value);
            value.to_string()
        }
        Err(_) => format!("<{} bytes, not JSON>", body.len()),
    }
}

fn redact_value(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, field) in map.iter_mut() {
                if SENSITIVE_FIELDS.contains(&key.as_str()) {
                    *field = Value::String(REDACTED.to_string());
                } else {
                    redact_value(field);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(redact_value),
        _ => {}
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
    default_headers: Option<reqwest::header::HeaderMap>,
    debug: bool,
    system_proxy: bool,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: None,
            default_headers: None,
            debug: false,
            system_proxy: true,
        }
    }
}

impl HttpClientBuilder {
    /// Total timeout for one request, body included.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `User-Agent` header sent with every request.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Headers added to every request.
    pub fn default_headers(mut self, headers: reqwest::header::HeaderMap) -> Self {
        self.default_headers = Some(headers);
        self
    }

    /// Log request lines, statuses and redacted bodies at debug level.
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Honor `HTTP_PROXY` / `HTTPS_PROXY` / `NO_PROXY`. On by default.
    pub fn system_proxy(mut self, enabled: bool) -> Self {
        self.system_proxy = enabled;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<HttpClient> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout);

        if !self.system_proxy {
            builder = builder.no_proxy();
        }

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        if let Some(headers) = self.default_headers {
            builder = builder.default_headers(headers);
        }

        let client = builder.build().map_err(http_error)?;

        Ok(HttpClient { client, debug: self.debug })
    }
}
