//! Static metadata about the client the frontend runs in

use serde::{Deserialize, Serialize};

/// User agent, language, platform and connectivity of the running client.
///
/// Captured once at startup; the browser app fills it from `navigator`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    pub user_agent: String,
    pub language: String,
    pub platform: String,
    pub on_line: bool,
}

impl ClientInfo {
    /// Metadata for the native CLI frontend.
    ///
    /// There is no connectivity check outside the browser, so `on_line`
    /// is always true here.
    pub fn native() -> Self {
        Self {
            user_agent: format!(
                "beacon/{} ({})",
                env!("CARGO_PKG_VERSION"),
                std::env::consts::OS
            ),
            language: language_from_locale(std::env::var("LANG").ok().as_deref()),
            platform: format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH),
            on_line: true,
        }
    }
}

/// Turn a POSIX locale such as `de_DE.UTF-8` into a language tag (`de-DE`).
pub fn language_from_locale(locale: Option<&str>) -> String {
    let tag = locale
        .and_then(|l| l.split(['.', '@']).next())
        .map(str::trim)
        .filter(|l| !l.is_empty() && *l != "C" && *l != "POSIX");

    match tag {
        Some(tag) => tag.replace('_', "-"),
        None => "en-US".to_string(),
    }
}
