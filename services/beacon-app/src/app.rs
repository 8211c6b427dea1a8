//! Main App component

use std::sync::Arc;

use beacon::config::{Config, EnvOverrides, ResolvedConfig};
use beacon::debug_panel::{Console, DebugPanel as PanelState};
use beacon::io::HttpClient;
use beacon::orchestrator::{fetch_payloads, FetchMachine, FetchState};
use beacon::view::{SUBTITLE, TITLE};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{provide_meta_context, Title};

use crate::browser::{client_info, failure_line, BrowserConsole};
use crate::client::BrowserHttpClient;
use crate::components::debug_panel::DebugPanel;
use crate::components::hello_card::HelloCard;
use crate::components::status_card::StatusCard;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ResolvedConfig::resolve(&Config::default(), EnvOverrides::from_build_env());
    let http: Arc<dyn HttpClient> = Arc::new(BrowserHttpClient);
    let console: Arc<dyn Console> = Arc::new(BrowserConsole);

    // No subscriber runs in the browser; lifecycle lines go straight to the
    // devtools console.
    console.log(&format!("Backend URL: {}", config.base_url));

    let machine = RwSignal::new(FetchMachine::new());
    let panel = RwSignal::new(PanelState::new());
    let state = Signal::derive(move || machine.with(|m| m.state().clone()));

    // Starts a fresh cycle; an outcome from an abandoned cycle is dropped by
    // the machine. The debug panel is left alone.
    let fetch = {
        let config = config.clone();
        let console = Arc::clone(&console);
        Callback::new(move |()| {
            let Some(cycle) = machine.try_update(|m| m.begin()) else {
                return;
            };
            let http = Arc::clone(&http);
            let console = Arc::clone(&console);
            let config = config.clone();
            spawn_local(async move {
                let outcome = fetch_payloads(http.as_ref(), &config).await;
                let failure = failure_line(&outcome);
                let applied = machine
                    .try_update(|m| m.settle(cycle, outcome))
                    .unwrap_or(false);
                if let (true, Some(line)) = (applied, failure) {
                    console.log(&line);
                }
            });
        })
    };

    fetch.run(());

    view! {
        <Title text=TITLE />
        <main style="font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem;">
            <header>
                <h1>{TITLE}</h1>
                <p>{SUBTITLE}</p>
            </header>
            {move || match state.get() {
                FetchState::Pending => view! { <p>"Loading..."</p> }.into_any(),
                FetchState::Failure { message } => view! {
                    <div style="padding: 1rem; color: #721c24; background-color: #f8d7da; border-radius: 0.5rem;">
                        <p><strong>"Error: "</strong>{message}</p>
                        <button on:click=move |_| fetch.run(())>"Retry Connection"</button>
                    </div>
                }.into_any(),
                FetchState::Success { hello, status } => view! {
                    <div>
                        <h2>"Backend Connection Successful!"</h2>
                        <HelloCard hello=hello />
                        <StatusCard status=status />
                        <button on:click=move |_| fetch.run(())>"Refresh Data"</button>
                    </div>
                }.into_any(),
            }}
            <DebugPanel
                state=state
                panel=panel
                config=config
                client=client_info()
                console=console
            />
        </main>
    }
}
