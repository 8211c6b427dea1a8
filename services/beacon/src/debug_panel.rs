//! Collapsible debug panel and the snapshot it displays
//!
//! The panel only ever reads orchestrator state. Its open/closed flag is
//! ephemeral UI state and is never persisted.

use std::collections::BTreeMap;
use std::sync::Mutex;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::config::{ResolvedConfig, BACKEND_URL_VAR, ENVIRONMENT_VAR};
use crate::environment::ClientInfo;
use crate::orchestrator::FetchState;

/// Presence flags derived from the current fetch state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateFlags {
    pub loading: bool,
    pub has_error: bool,
    pub has_backend_data: bool,
    pub has_server_status: bool,
}

impl StateFlags {
    pub fn of(state: &FetchState) -> Self {
        Self {
            loading: state.is_loading(),
            has_error: state.error().is_some(),
            has_backend_data: state.hello().is_some(),
            has_server_status: state.status().is_some(),
        }
    }
}

/// Read-only view of the page plus environment metadata. Rebuilt on every
/// render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugSnapshot {
    pub timestamp: String,
    pub environment: String,
    pub backend_url: String,
    pub state: StateFlags,
    pub environment_variables: BTreeMap<String, Option<String>>,
    #[serde(rename = "browserInfo")]
    pub client_info: ClientInfo,
}

impl DebugSnapshot {
    pub fn capture(
        state: &FetchState,
        config: &ResolvedConfig,
        client: &ClientInfo,
        now: DateTime<Utc>,
    ) -> Self {
        let mut environment_variables = BTreeMap::new();
        environment_variables.insert(
            ENVIRONMENT_VAR.to_string(),
            config.env_overrides.environment.clone(),
        );
        environment_variables.insert(
            BACKEND_URL_VAR.to_string(),
            config.env_overrides.backend_url.clone(),
        );

        Self {
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            environment: config.environment.clone(),
            backend_url: config.base_url.clone(),
            state: StateFlags::of(state),
            environment_variables,
            client_info: client.clone(),
        }
    }

    /// Indented JSON, as shown in the expanded panel
    pub fn to_pretty_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Destination of the panel's console actions
#[cfg_attr(test, mockall::automock)]
pub trait Console: Send + Sync {
    fn log(&self, line: &str);

    /// Wipe the transcript
    fn clear(&self);
}

/// Console backed by `tracing`; clearing resets the terminal screen.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingConsole;

impl Console for TracingConsole {
    fn log(&self, line: &str) {
        tracing::info!(target: "beacon::console", "{}", line);
    }

    fn clear(&self) {
        print!("\x1B[2J\x1B[1;1H");
    }
}

/// In-memory console transcript
#[derive(Debug, Default)]
pub struct MemoryConsole {
    lines: Mutex<Vec<String>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }
}

impl Console for MemoryConsole {
    fn log(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

/// Toggleable panel; starts collapsed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugPanel {
    open: bool,
}

impl DebugPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Flip the panel and return the new open flag
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Re-emit `snapshot` to the console.
    pub fn log_snapshot(
        &self,
        snapshot: &DebugSnapshot,
        console: &dyn Console,
    ) -> crate::Result<()> {
        let json = snapshot.to_pretty_json()?;
        console.log("Manual debug log triggered");
        console.log(&format!("Current debug info: {}", json));
        Ok(())
    }

    pub fn clear_console(&self, console: &dyn Console) {
        console.clear();
        console.log("Console cleared manually");
    }
}
