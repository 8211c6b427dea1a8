//! Beacon - demo frontend for a companion JSON backend
//!
//! Fetches `/api/hello` and `/api/status` concurrently, renders the result
//! and offers a collapsible debug panel.

pub mod api;
pub mod config;
pub mod debug_panel;
pub mod environment;
pub mod error;
pub mod io;
#[cfg(feature = "native")]
pub mod mock_backend;
pub mod orchestrator;
pub mod session;
pub mod view;

pub use config::{load_config, Config, EnvOverrides, ResolvedConfig};
pub use error::{BeaconError, Result};
pub use orchestrator::{FetchState, Orchestrator};
pub use session::{Command, Session};

use std::sync::Arc;

use crate::debug_panel::{Console, TracingConsole};
use crate::environment::ClientInfo;
use crate::io::HttpClient;

/// Builder for a frontend session.
///
/// Defaults to the reqwest transport, the tracing console and native client
/// metadata; tests swap them out.
pub struct BeaconBuilder {
    config: ResolvedConfig,
    http: Option<Arc<dyn HttpClient>>,
    console: Option<Arc<dyn Console>>,
    client: Option<ClientInfo>,
}

impl BeaconBuilder {
    pub fn new(config: ResolvedConfig) -> Self {
        Self {
            config,
            http: None,
            console: None,
            client: None,
        }
    }

    pub fn with_http_client(mut self, http: Arc<dyn HttpClient>) -> Self {
        self.http = Some(http);
        self
    }

    pub fn with_console(mut self, console: Arc<dyn Console>) -> Self {
        self.console = Some(console);
        self
    }

    pub fn with_client_info(mut self, client: ClientInfo) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> Result<Session> {
        let http = match self.http {
            Some(http) => http,
            None => default_http_client(&self.config)?,
        };
        let console = self
            .console
            .unwrap_or_else(|| Arc::new(TracingConsole) as Arc<dyn Console>);
        let client = self.client.unwrap_or_else(ClientInfo::native);

        tracing::debug!(
            "Building session: base_url={}, environment={}, timeout={:?}",
            self.config.base_url,
            self.config.environment,
            self.config.request_timeout
        );

        Ok(Session::new(
            Orchestrator::new(self.config, http),
            client,
            console,
        ))
    }
}

#[cfg(feature = "native")]
fn default_http_client(config: &ResolvedConfig) -> Result<Arc<dyn HttpClient>> {
    let client = io::ReqwestHttpClient::with_timeout(config.request_timeout)?;
    Ok(Arc::new(client))
}

#[cfg(not(feature = "native"))]
fn default_http_client(_config: &ResolvedConfig) -> Result<Arc<dyn HttpClient>> {
    Err(BeaconError::Config(
        "No HTTP client configured; use BeaconBuilder::with_http_client".to_string(),
    ))
}
