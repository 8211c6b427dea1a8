//! Beacon - Leptos browser frontend
//!
//! Single-page view of the demo backend's greeting and server status, with
//! a collapsible debug panel.

pub mod app;
pub mod browser;
pub mod client;
pub mod components;

pub use app::App;

/// Client-side entry point for the WASM build
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    leptos::mount::mount_to_body(App);
}
