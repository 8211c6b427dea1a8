pub mod debug_panel;
pub mod hello_card;
pub mod status_card;
