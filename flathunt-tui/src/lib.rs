//! flathunt TUI library exports.

pub mod api_client;
pub mod config;
pub mod debounce;
pub mod error;
pub mod events;
pub mod fetch;
pub mod keys;
pub mod nav;
pub mod notifications;
pub mod persistence;
pub mod state;
pub mod theme;
pub mod views;
pub mod widgets;
