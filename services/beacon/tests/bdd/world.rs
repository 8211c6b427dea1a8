//! BDD test world for the beacon frontend

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use beacon::config::{Config, EnvOverrides, ResolvedConfig};
use beacon::debug_panel::MemoryConsole;
use beacon::environment::ClientInfo;
use beacon::io::{HttpClient, HttpResponse};
use beacon::{BeaconBuilder, BeaconError, Session};
use cucumber::World;

/// What a scripted endpoint does when requested
#[derive(Debug, Clone)]
pub enum Scripted {
    Respond { status: u16, body: String },
    Refuse,
    NetworkDown,
}

/// An HTTP client answering from a per-path script and recording requests.
///
/// Unscripted paths answer 404.
#[derive(Debug, Default)]
pub struct ScriptedHttpClient {
    pub script: Mutex<HashMap<String, Scripted>>,
    pub requests: Mutex<Vec<String>>,
}

impl ScriptedHttpClient {
    pub fn set(&self, path: &str, scripted: Scripted) {
        self.script
            .lock()
            .unwrap()
            .insert(path.to_string(), scripted);
    }

    pub fn requested(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl HttpClient for ScriptedHttpClient {
    async fn get(&self, url: &str) -> beacon::Result<HttpResponse> {
        self.requests.lock().unwrap().push(url.to_string());

        let scripted = self
            .script
            .lock()
            .unwrap()
            .iter()
            .find(|(path, _)| url.ends_with(path.as_str()))
            .map(|(_, scripted)| scripted.clone());

        match scripted {
            Some(Scripted::Respond { status, body }) => Ok(HttpResponse { status, body }),
            Some(Scripted::Refuse) => Err(BeaconError::ConnectionRefused(format!(
                "{}: connection refused",
                url
            ))),
            Some(Scripted::NetworkDown) => {
                Err(BeaconError::Http(format!("{}: network unreachable", url)))
            }
            None => Ok(HttpResponse {
                status: 404,
                body: "Not Found".to_string(),
            }),
        }
    }
}

#[derive(Debug, Default, World)]
pub struct BeaconWorld {
    // Configuration
    pub config_file: Config,
    pub env: EnvOverrides,
    pub resolved: Option<ResolvedConfig>,

    // Session under test
    pub http: Arc<ScriptedHttpClient>,
    pub console: Arc<MemoryConsole>,
    pub session: Option<Session>,
    pub rendered: Option<String>,
    pub command_result: Option<beacon::Result<()>>,
}

impl BeaconWorld {
    pub fn resolve(&mut self) -> ResolvedConfig {
        let resolved = ResolvedConfig::resolve(&self.config_file, self.env.clone());
        self.resolved = Some(resolved.clone());
        resolved
    }

    pub fn build_session(&mut self) -> Session {
        let config = self.resolve();
        let client = ClientInfo {
            user_agent: "beacon-bdd".to_string(),
            language: "en-US".to_string(),
            platform: "test".to_string(),
            on_line: true,
        };

        BeaconBuilder::new(config)
            .with_http_client(Arc::clone(&self.http) as Arc<dyn HttpClient>)
            .with_console(Arc::clone(&self.console) as Arc<dyn beacon::debug_panel::Console>)
            .with_client_info(client)
            .build()
            .expect("session should build with an injected client")
    }

    pub fn session(&mut self) -> &mut Session {
        self.session
            .as_mut()
            .expect("no session; run 'the page loads' first")
    }
}
