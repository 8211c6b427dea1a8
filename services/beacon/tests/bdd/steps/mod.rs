//! BDD step definitions for the beacon frontend

pub mod config_steps;
pub mod debug_panel_steps;
pub mod fetch_steps;
