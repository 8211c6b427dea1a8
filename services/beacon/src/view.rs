//! Plain-text rendering of the page and the debug panel

use std::time::Duration;

use crate::debug_panel::{DebugPanel, DebugSnapshot};
use crate::orchestrator::FetchState;

pub const TITLE: &str = "Full-Stack Beacon Demo";
pub const SUBTITLE: &str = "Demonstrating a Rust frontend connected to a JSON backend API";

/// Whole seconds, plus a humanized form once past a minute, e.g.
/// `125 seconds (2m 5s)`.
pub fn format_uptime(seconds: f64) -> String {
    let whole = seconds.max(0.0).floor() as u64;
    if whole < 60 {
        format!("{} seconds", whole)
    } else {
        format!(
            "{} seconds ({})",
            whole,
            humantime::format_duration(Duration::from_secs(whole))
        )
    }
}

/// Bytes as megabytes with two decimals
pub fn format_megabytes(bytes: f64) -> String {
    format!("{:.2} MB", bytes.max(0.0) / (1024.0 * 1024.0))
}

/// Render the page body for `state`.
pub fn render_page(state: &FetchState) -> String {
    let mut lines = vec![TITLE.to_string(), SUBTITLE.to_string(), String::new()];

    match state {
        FetchState::Pending => lines.push("Loading...".to_string()),
        FetchState::Failure { message } => {
            lines.push(format!("Error: {}", message));
            lines.push("[r] Retry Connection".to_string());
        }
        FetchState::Success { hello, status } => {
            lines.push("Backend Connection Successful!".to_string());
            lines.push(String::new());
            lines.push("API Response:".to_string());
            lines.push(format!("  Message: {}", hello.message));
            lines.push(format!("  User: {}", hello.data.user));
            lines.push(format!("  Status: {}", hello.data.status));
            lines.push("  Tech Stack:".to_string());
            lines.extend(hello.data.features.iter().map(|f| format!("    - {}", f)));
            lines.push(String::new());
            lines.push("Server Status:".to_string());
            lines.push(format!("  Status: {}", status.status));
            lines.push(format!("  Uptime: {}", format_uptime(status.uptime_seconds())));
            lines.push(format!("  Version: {}", status.version));
            if let Some(memory) = &status.memory_usage {
                lines.push(format!("  Heap Used: {}", format_megabytes(memory.heap_used_bytes())));
            }
            lines.push(String::new());
            lines.push("[r] Refresh Data".to_string());
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Render the debug panel: a toggle hint when collapsed, the snapshot and
/// console actions when open.
pub fn render_debug_panel(panel: &DebugPanel, snapshot: &DebugSnapshot) -> String {
    if !panel.is_open() {
        return "[d] Debug Info\n".to_string();
    }

    let json = snapshot
        .to_pretty_json()
        .unwrap_or_else(|e| format!("<snapshot unavailable: {}>", e));

    format!(
        "Debug Information                        [d] close\n{}\n\
         Console Actions: [l] Log Debug Info  [c] Clear Console\n",
        json
    )
}
