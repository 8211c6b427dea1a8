//! Interactive frontend session: page state, debug panel and user commands
//!
//! Commands are explicit messages. `Retry` only restarts the fetch cycle;
//! the debug panel and the console transcript survive it.

use std::str::FromStr;
use std::sync::Arc;

use crate::debug_panel::{Console, DebugPanel, DebugSnapshot};
use crate::environment::ClientInfo;
use crate::orchestrator::{FetchState, Orchestrator};
use crate::view::{render_debug_panel, render_page};

/// A user action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Retry,
    ToggleDebug,
    LogDebug,
    ClearConsole,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown command '{0}' (expected r, d, l, c or q)")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "retry" | "refresh" => Ok(Command::Retry),
            "d" | "debug" => Ok(Command::ToggleDebug),
            "l" | "log" => Ok(Command::LogDebug),
            "c" | "clear" => Ok(Command::ClearConsole),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}

/// Whether the session keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    orchestrator: Orchestrator,
    panel: DebugPanel,
    client: ClientInfo,
    console: Arc<dyn Console>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("orchestrator", &self.orchestrator)
            .field("panel", &self.panel)
            .field("client", &self.client)
            .finish()
    }
}

impl Session {
    pub fn new(
        orchestrator: Orchestrator,
        client: ClientInfo,
        console: Arc<dyn Console>,
    ) -> Self {
        Self {
            orchestrator,
            panel: DebugPanel::new(),
            client,
            console,
        }
    }

    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    pub fn state(&self) -> &FetchState {
        self.orchestrator.state()
    }

    pub fn panel(&self) -> &DebugPanel {
        &self.panel
    }

    pub fn open_debug_panel(&mut self) {
        self.panel.open();
    }

    /// Run the initial fetch cycle.
    pub async fn start(&mut self) -> &FetchState {
        self.orchestrator.run_cycle().await
    }

    pub fn snapshot(&self) -> DebugSnapshot {
        DebugSnapshot::capture(
            self.orchestrator.state(),
            self.orchestrator.config(),
            &self.client,
            chrono::Utc::now(),
        )
    }

    pub async fn handle(&mut self, command: Command) -> crate::Result<Flow> {
        tracing::debug!("Handling command {:?}", command);
        match command {
            Command::Retry => {
                self.orchestrator.retry().await;
            }
            Command::ToggleDebug => {
                let open = self.panel.toggle();
                tracing::debug!("Debug panel {}", if open { "opened" } else { "closed" });
            }
            Command::LogDebug => {
                let snapshot = self.snapshot();
                self.panel.log_snapshot(&snapshot, self.console.as_ref())?;
            }
            Command::ClearConsole => self.panel.clear_console(self.console.as_ref()),
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Page followed by the debug panel
    pub fn render(&self) -> String {
        format!(
            "{}\n{}",
            render_page(self.orchestrator.state()),
            render_debug_panel(&self.panel, &self.snapshot())
        )
    }
}

/// Read commands line by line from `input` until EOF or `q`, re-rendering
/// the session to `output` after each one.
#[cfg(feature = "native")]
pub async fn run_interactive<R, W>(
    session: &mut Session,
    input: R,
    output: &mut W,
) -> crate::Result<()>
where
    R: tokio::io::AsyncBufRead + Unpin,
    W: std::io::Write,
{
    use tokio::io::AsyncBufReadExt;

    write!(output, "{}", session.render())?;
    output.flush()?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(command) => {
                if session.handle(command).await? == Flow::Quit {
                    break;
                }
                write!(output, "\n{}", session.render())?;
            }
            Err(e) => writeln!(output, "{}", e)?,
        }
        output.flush()?;
    }
    Ok(())
}
