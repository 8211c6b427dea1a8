//! Fetch orchestrator: loads both payloads and drives the page state

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::api::{decode_payload, HelloPayload, StatusPayload};
use crate::config::ResolvedConfig;
use crate::io::HttpClient;

/// What the page currently shows. Exactly one variant holds at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchState {
    #[default]
    Pending,
    Success {
        hello: HelloPayload,
        status: StatusPayload,
    },
    Failure {
        message: String,
    },
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Pending)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failure { message } => Some(message),
            _ => None,
        }
    }

    pub fn hello(&self) -> Option<&HelloPayload> {
        match self {
            FetchState::Success { hello, .. } => Some(hello),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<&StatusPayload> {
        match self {
            FetchState::Success { status, .. } => Some(status),
            _ => None,
        }
    }
}

/// Identifies one fetch cycle. Increases on every retry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CycleId(u64);

impl CycleId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CycleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Outcome of fetching both endpoints
pub type FetchOutcome = crate::Result<(HelloPayload, StatusPayload)>;

/// The page state machine, free of any transport.
///
/// `Pending -> Success | Failure` once per cycle; `begin` starts the next
/// cycle. Outcomes for any cycle other than the current one are dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchMachine {
    state: FetchState,
    cycle: CycleId,
}

impl FetchMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn cycle(&self) -> CycleId {
        self.cycle
    }

    /// Reset to `Pending` and open a new cycle, abandoning the previous one.
    pub fn begin(&mut self) -> CycleId {
        self.cycle = CycleId(self.cycle.0 + 1);
        self.state = FetchState::Pending;
        tracing::debug!("Fetch cycle {} started", self.cycle);
        self.cycle
    }

    /// Apply the outcome of `cycle`. Returns false when the outcome was
    /// stale or the cycle had already settled.
    pub fn settle(&mut self, cycle: CycleId, outcome: FetchOutcome) -> bool {
        if cycle != self.cycle {
            tracing::debug!(
                "Dropping outcome of abandoned cycle {} (current {})",
                cycle,
                self.cycle
            );
            return false;
        }
        if !self.state.is_loading() {
            tracing::debug!("Cycle {} already settled", cycle);
            return false;
        }

        self.state = match outcome {
            Ok((hello, status)) => {
                tracing::info!("Backend connection successful (cycle {})", cycle);
                FetchState::Success { hello, status }
            }
            Err(e) => {
                tracing::warn!("Error fetching data (cycle {}): {}", cycle, e);
                FetchState::Failure {
                    message: e.user_message().to_string(),
                }
            }
        };
        true
    }
}

/// Fetch `/api/hello` and `/api/status` concurrently.
///
/// The join is fail-fast: the first failure wins and the other request is
/// dropped.
pub async fn fetch_payloads(http: &dyn HttpClient, config: &ResolvedConfig) -> FetchOutcome {
    let hello_url = config.hello_url();
    let status_url = config.status_url();

    let hello = async {
        let response = http.get(&hello_url).await?;
        decode_payload::<HelloPayload>(&hello_url, &response)
    };
    let status = async {
        let response = http.get(&status_url).await?;
        decode_payload::<StatusPayload>(&status_url, &response)
    };

    futures::future::try_join(hello, status).await
}

/// Owns the configuration, the transport and the page state machine
pub struct Orchestrator {
    config: ResolvedConfig,
    http: Arc<dyn HttpClient>,
    machine: FetchMachine,
}

impl fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Orchestrator")
            .field("base_url", &self.config.base_url)
            .field("machine", &self.machine)
            .finish()
    }
}

impl Orchestrator {
    pub fn new(config: ResolvedConfig, http: Arc<dyn HttpClient>) -> Self {
        Self {
            config,
            http,
            machine: FetchMachine::new(),
        }
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    pub fn state(&self) -> &FetchState {
        self.machine.state()
    }

    pub fn cycle(&self) -> CycleId {
        self.machine.cycle()
    }

    /// Run one full fetch cycle and return the settled state.
    pub async fn run_cycle(&mut self) -> &FetchState {
        let cycle = self.machine.begin();
        tracing::info!("Fetching data from {}", self.config.base_url);
        let outcome = fetch_payloads(self.http.as_ref(), &self.config).await;
        self.machine.settle(cycle, outcome);
        self.machine.state()
    }

    /// Restart the fetch cycle. Only the orchestrator state is reset.
    pub async fn retry(&mut self) -> &FetchState {
        tracing::info!("Retrying backend connection");
        self.run_cycle().await
    }
}
