//! Event types for the TUI event loop.

use crate::api_client::ApiClientError;
use crossterm::event::KeyEvent;
use flathunt_core::{Apartment, ApartmentId};

/// Everything the main loop reacts to, delivered over one mpsc channel.
#[derive(Debug)]
pub enum AppEvent {
    Input(KeyEvent),
    Tick,
    Resize { width: u16, height: u16 },
    Api(ApiOutcome),
}

/// Completion of a spawned API call.
///
/// Each variant carries the tag its request was issued under so that a
/// completion arriving after the world moved on can be discarded.
#[derive(Debug)]
pub enum ApiOutcome {
    Listings {
        seq: u64,
        result: Result<Vec<Apartment>, ApiClientError>,
    },
    Detail {
        id: ApartmentId,
        result: Result<Apartment, ApiClientError>,
    },
    Created {
        result: Result<Apartment, ApiClientError>,
    },
}
