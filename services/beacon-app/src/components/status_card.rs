//! Server status card component

use beacon::api::StatusPayload;
use beacon::view::{format_megabytes, format_uptime};
use leptos::prelude::*;

/// Shows the `/api/status` payload
#[component]
pub fn StatusCard(status: StatusPayload) -> impl IntoView {
    let uptime = format_uptime(status.uptime_seconds());
    let heap = status.memory_usage.map(|memory| {
        view! {
            <p><strong>"Heap Used: "</strong>{format_megabytes(memory.heap_used_bytes())}</p>
        }
    });

    view! {
        <section style="padding: 1rem; border: 1px solid #dee2e6; border-radius: 0.5rem;">
            <h3>"Server Status:"</h3>
            <p><strong>"Status: "</strong>{status.status}</p>
            <p><strong>"Uptime: "</strong>{uptime}</p>
            <p><strong>"Version: "</strong>{status.version}</p>
            {heap}
        </section>
    }
}
