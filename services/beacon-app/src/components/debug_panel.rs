//! Collapsible debug panel component

use std::sync::Arc;

use beacon::config::ResolvedConfig;
use beacon::debug_panel::{Console, DebugPanel as PanelState, DebugSnapshot};
use beacon::environment::ClientInfo;
use beacon::orchestrator::FetchState;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Toggle button plus, when open, the live snapshot and console actions.
///
/// Reads the page state but never writes it; only `panel` is mutated here.
#[component]
pub fn DebugPanel(
    #[prop(into)] state: Signal<FetchState>,
    panel: RwSignal<PanelState>,
    config: ResolvedConfig,
    client: ClientInfo,
    console: Arc<dyn Console>,
) -> impl IntoView {
    let config = StoredValue::new(config);
    let client = StoredValue::new(client);
    let console = StoredValue::new(console);

    let snapshot = move || {
        state.with(|state| {
            DebugSnapshot::capture(
                state,
                &config.get_value(),
                &client.get_value(),
                chrono::Utc::now(),
            )
        })
    };

    let snapshot_json = move || {
        snapshot()
            .to_pretty_json()
            .unwrap_or_else(|e| format!("<snapshot unavailable: {}>", e))
    };

    let log_debug = move |_: MouseEvent| {
        let snapshot = snapshot();
        let result =
            console.with_value(|c| panel.get_untracked().log_snapshot(&snapshot, c.as_ref()));
        if let Err(e) = result {
            tracing::warn!("Failed to log debug info: {}", e);
        }
    };

    let clear_console = move |_: MouseEvent| {
        console.with_value(|c| panel.get_untracked().clear_console(c.as_ref()));
    };

    view! {
        <section style="margin-top: 2rem;">
            <button on:click=move |_| panel.update(|p| { p.toggle(); })>
                {move || if panel.get().is_open() { "Hide Debug Info" } else { "Debug Info" }}
            </button>
            <Show when=move || panel.get().is_open()>
                <div style="margin-top: 1rem; padding: 1rem; background-color: #f8f9fa; border-radius: 0.5rem;">
                    <h3>"Debug Information"</h3>
                    <pre style="white-space: pre-wrap; font-size: 0.85em;">{snapshot_json}</pre>
                    <h4>"Console Actions"</h4>
                    <button on:click=log_debug>"Log Debug Info"</button>
                    " "
                    <button on:click=clear_console>"Clear Console"</button>
                </div>
            </Show>
        </section>
    }
}
