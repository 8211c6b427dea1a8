//! Error types for the beacon frontend

/// Shown when the backend host refuses the connection
pub const MSG_NOT_RESPONDING: &str = "Backend server is not responding";
/// Shown for any other transport failure (DNS, reset, timeout)
pub const MSG_NETWORK: &str = "Network connection error";
/// Shown when an endpoint answered with an HTML document instead of JSON
pub const MSG_HTML_BODY: &str = "Backend API not found - check deployment and URL configuration";
/// Shown for HTTP 404
pub const MSG_NOT_FOUND: &str = "API endpoints not found - check backend deployment";
/// Shown for HTTP 5xx
pub const MSG_SERVER_ERROR: &str = "Backend server error - please try again later";
/// Fallback for everything else
pub const MSG_GENERIC: &str = "Failed to connect to backend API";

/// Errors that can occur in the beacon frontend
#[derive(Debug, thiserror::Error)]
pub enum BeaconError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Connection refused: {0}")]
    ConnectionRefused(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Unexpected HTTP status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Received an HTML document instead of JSON from {0}")]
    HtmlBody(String),

    #[error("Invalid payload from {url}: {reason}")]
    InvalidPayload { url: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BeaconError {
    /// The single human-readable message shown in place of the payloads.
    pub fn user_message(&self) -> &'static str {
        match self {
            BeaconError::ConnectionRefused(_) => MSG_NOT_RESPONDING,
            BeaconError::Http(_) => MSG_NETWORK,
            BeaconError::HtmlBody(_) => MSG_HTML_BODY,
            BeaconError::Status { status: 404, .. } => MSG_NOT_FOUND,
            BeaconError::Status { status, .. } if *status >= 500 => MSG_SERVER_ERROR,
            _ => MSG_GENERIC,
        }
    }
}

/// Result type alias for beacon operations
pub type Result<T> = std::result::Result<T, BeaconError>;
