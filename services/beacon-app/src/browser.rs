//! Browser runtime adapters: navigator metadata and the devtools console

use beacon::debug_panel::Console;
use beacon::environment::ClientInfo;
use beacon::orchestrator::FetchOutcome;

/// Build client metadata from raw navigator fields.
pub fn client_info_from(
    user_agent: Option<String>,
    language: Option<String>,
    platform: Option<String>,
    on_line: bool,
) -> ClientInfo {
    let present = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

    ClientInfo {
        user_agent: present(user_agent).unwrap_or_else(|| "unknown".to_string()),
        language: present(language).unwrap_or_else(|| "en-US".to_string()),
        platform: present(platform).unwrap_or_else(|| "unknown".to_string()),
        on_line,
    }
}

/// Read `navigator` once at startup
pub fn client_info() -> ClientInfo {
    #[cfg(feature = "csr")]
    {
        match web_sys::window().map(|w| w.navigator()) {
            Some(navigator) => client_info_from(
                navigator.user_agent().ok(),
                navigator.language(),
                navigator.platform().ok(),
                navigator.on_line(),
            ),
            None => client_info_from(None, None, None, false),
        }
    }

    #[cfg(not(feature = "csr"))]
    {
        ClientInfo::native()
    }
}

/// Devtools console
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserConsole;

impl Console for BrowserConsole {
    fn log(&self, line: &str) {
        #[cfg(feature = "csr")]
        web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(line));

        #[cfg(not(feature = "csr"))]
        tracing::info!(target: "beacon::console", "{}", line);
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        web_sys::console::clear();
    }
}

/// Console line for a failed fetch cycle, if it failed
pub fn failure_line(outcome: &FetchOutcome) -> Option<String> {
    outcome
        .as_ref()
        .err()
        .map(|e| format!("Error fetching data: {}", e))
}
