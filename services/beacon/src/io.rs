//! HTTP client abstraction for testability

use async_trait::async_trait;

/// HTTP response from a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Abstraction over HTTP client for dependency injection
///
/// Browser futures are not `Send`, so the wasm build drops that bound.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(test, mockall::automock)]
pub trait HttpClient: Send + Sync {
    /// Send a GET request to the given URL
    ///
    /// Non-2xx statuses are not errors at this layer; only transport
    /// failures are.
    async fn get(&self, url: &str) -> crate::Result<HttpResponse>;
}

#[cfg(feature = "native")]
pub use self::native::ReqwestHttpClient;

#[cfg(feature = "native")]
mod native {
    use std::time::Duration;

    use async_trait::async_trait;

    use super::{HttpClient, HttpResponse};
    use crate::BeaconError;

    /// Production HTTP client using reqwest
    #[derive(Debug, Default, Clone)]
    pub struct ReqwestHttpClient {
        client: reqwest::Client,
    }

    impl ReqwestHttpClient {
        pub fn new() -> Self {
            Self::default()
        }

        /// Build a client that aborts each request after `timeout`.
        pub fn with_timeout(timeout: Option<Duration>) -> crate::Result<Self> {
            let mut builder = reqwest::Client::builder();
            if let Some(timeout) = timeout {
                builder = builder.timeout(timeout);
            }
            let client = builder
                .build()
                .map_err(|e| BeaconError::Config(format!("Building HTTP client: {}", e)))?;
            Ok(Self { client })
        }
    }

    #[async_trait]
    impl HttpClient for ReqwestHttpClient {
        async fn get(&self, url: &str) -> crate::Result<HttpResponse> {
            tracing::debug!("GET {}", url);
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|e| transport_error(url, &e))?;

            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| BeaconError::Http(format!("Reading response body: {}", e)))?;

            tracing::debug!("GET {} -> {} ({} bytes)", url, status, body.len());
            Ok(HttpResponse { status, body })
        }
    }

    fn transport_error(url: &str, err: &reqwest::Error) -> BeaconError {
        let message = format!("GET {} failed: {}", url, err);
        if is_connection_refused(err) {
            BeaconError::ConnectionRefused(message)
        } else {
            BeaconError::Http(message)
        }
    }

    /// Walk the source chain looking for an `ECONNREFUSED`.
    fn is_connection_refused(err: &(dyn std::error::Error + 'static)) -> bool {
        let mut source = Some(err);
        while let Some(e) = source {
            if let Some(io) = e.downcast_ref::<std::io::Error>() {
                if io.kind() == std::io::ErrorKind::ConnectionRefused {
                    return true;
                }
            }
            if e.to_string().to_ascii_lowercase().contains("connection refused") {
                return true;
            }
            source = e.source();
        }
        false
    }

}
