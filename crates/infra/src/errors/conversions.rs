//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use ssoconnect_domain::SsoError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub SsoError);

impl From<InfraError> for SsoError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<SsoError> for InfraError {
    fn from(value: SsoError) -> Self {
        InfraError(value)
    }
}

trait IntoSsoError {
    fn into_sso(self) -> SsoError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → SsoError */
/* -------------------------------------------------------------------------- */

impl IntoSsoError for HttpError {
    fn into_sso(self) -> SsoError {
        // The request URL carries secrets in its query string.
        let err = self.without_url();

        if err.is_builder() {
            return SsoError::Internal(format!("failed to build HTTP request: {err}"));
        }

        if err.is_timeout() {
            return SsoError::Network("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if err.is_connect() {
            return SsoError::Network("HTTP connection failure".into());
        }

        if let Some(status) = err.status() {
            return SsoError::Network(format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status")
            ));
        }

        SsoError::Network(err.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_sso())
    }
}

/// Shorthand used by the HTTP client for `map_err`.
pub(crate) fn http_error(err: HttpError) -> SsoError {
    InfraError::from(err).into()
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use std::io::Read;
    use std::net::TcpListener;
    use std::thread;

    use reqwest::{Client, StatusCode};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn http_status_error_maps_to_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(StatusCode::BAD_GATEWAY))
            .mount(&server)
            .await;

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err();

        let mapped: SsoError = InfraError::from(error).into();
        match mapped {
            SsoError::Network(msg) => assert!(msg.contains("502")),
            other => panic!("expected network error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn refused_connection_maps_to_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get(format!("http://{addr}")).send().await.unwrap_err();

        assert!(matches!(http_error(error), SsoError::Network(_)));
    }

    #[tokio::test]
    async fn dropped_connection_error_omits_query_secrets() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        // Accept, read the request and hang up without answering.
        let server = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
        });

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client
            .get(format!(
                "http://{addr}/oauth/access_token?client_secret=s3cr3t&fb_exchange_token=short-tok"
            ))
            .send()
            .await
            .unwrap_err();
        server.join().unwrap();

        let mapped = http_error(error).to_string();
        assert!(!mapped.contains("s3cr3t"), "{mapped}");
        assert!(!mapped.contains("short-tok"), "{mapped}");
    }

    #[test]
    fn invalid_url_maps_to_internal_error() {
        let client = Client::new();
        let error = client.get("not a url").build().unwrap_err();

        assert!(matches!(http_error(error), SsoError::Internal(_)));
    }
}
