//! Backend payload types and response decoding
//!
//! These types mirror the JSON bodies served by the companion backend and
//! are shared between the CLI and the browser app.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::io::HttpResponse;
use crate::BeaconError;

/// Fields the backend sent that this frontend does not interpret. Kept so a
/// decoded payload re-serializes to the body it came from.
pub type ExtraFields = serde_json::Map<String, serde_json::Value>;

/// Greeting returned by /api/hello
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelloPayload {
    pub message: String,
    pub data: HelloData,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Nested `data` object of the greeting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelloData {
    pub user: String,
    pub status: String,
    pub features: Vec<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Server status returned by /api/status
///
/// Numbers stay `serde_json::Number` so `125` and `125.0` are not conflated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusPayload {
    pub status: String,
    /// Seconds since the backend process started
    pub uptime: serde_json::Number,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_usage: Option<MemoryUsage>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl StatusPayload {
    pub fn uptime_seconds(&self) -> f64 {
        self.uptime.as_f64().unwrap_or_default()
    }
}

/// Process memory figures reported by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryUsage {
    /// Bytes
    pub heap_used: serde_json::Number,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl MemoryUsage {
    pub fn heap_used_bytes(&self) -> f64 {
        self.heap_used.as_f64().unwrap_or_default()
    }
}

/// Whether a body is (or embeds) an HTML document
pub fn looks_like_html(body: &str) -> bool {
    body.to_ascii_lowercase().contains("<!doctype html")
}

/// Decode a response into `T`.
///
/// The status code is checked first, then the body must be structured JSON
/// (an HTML document is reported separately), then it must match `T`.
pub fn decode_payload<T: DeserializeOwned>(
    url: &str,
    response: &HttpResponse,
) -> crate::Result<T> {
    if !(200..300).contains(&response.status) {
        return Err(BeaconError::Status {
            url: url.to_string(),
            status: response.status,
        });
    }

    let value: serde_json::Value = match serde_json::from_str(&response.body) {
        Ok(value) => value,
        Err(e) => {
            if looks_like_html(&response.body) {
                return Err(BeaconError::HtmlBody(url.to_string()));
            }
            return Err(BeaconError::InvalidPayload {
                url: url.to_string(),
                reason: format!("body is not JSON: {}", e),
            });
        }
    };

    if let serde_json::Value::String(text) = &value {
        if looks_like_html(text) {
            return Err(BeaconError::HtmlBody(url.to_string()));
        }
    }

    serde_json::from_value(value).map_err(|e| BeaconError::InvalidPayload {
        url: url.to_string(),
        reason: e.to_string(),
    })
}
