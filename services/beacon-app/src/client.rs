//! Browser transport for the shared fetch orchestrator

use async_trait::async_trait;
use beacon::io::{HttpClient, HttpResponse};
use beacon::BeaconError;

/// `fetch`-backed HTTP client
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserHttpClient;

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl HttpClient for BrowserHttpClient {
    async fn get(&self, url: &str) -> beacon::Result<HttpResponse> {
        tracing::debug!("GET {}", url);

        #[cfg(all(feature = "csr", target_arch = "wasm32"))]
        {
            let response = gloo_net::http::Request::get(url)
                .send()
                .await
                .map_err(|e| classify_fetch_error(url, &e.to_string()))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| BeaconError::Http(format!("{}: {}", url, e)))?;
            tracing::debug!("GET {} -> {}", url, status);
            Ok(HttpResponse { status, body })
        }

        #[cfg(not(all(feature = "csr", target_arch = "wasm32")))]
        {
            Err(BeaconError::Http(format!(
                "{}: the browser transport needs the csr build",
                url
            )))
        }
    }
}

/// Map a rejected `fetch` to a transport error.
///
/// Browsers do not expose the socket error, only a rejection message, so
/// an unreachable host is recognised by the engines' wording.
pub fn classify_fetch_error(url: &str, message: &str) -> BeaconError {
    const UNREACHABLE: [&str; 3] = ["Failed to fetch", "NetworkError", "Load failed"];

    let detail = format!("{}: {}", url, message);
    if UNREACHABLE.iter().any(|marker| message.contains(marker)) {
        BeaconError::ConnectionRefused(detail)
    } else {
        BeaconError::Http(detail)
    }
}
