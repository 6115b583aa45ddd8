//! Shared application state injected into every Axum handler.

use std::time::Duration;

/// Application state shared across all request handlers.
///
/// Plain `Copy` data, so Axum can clone it per request for free.
#[derive(Clone, Copy, Debug)]
pub struct AppState {
    /// Delay between two events on the live-updates stream.
    pub live_updates_interval: Duration,
    /// Reconnection delay advertised to live-updates clients.
    pub live_updates_retry: Duration,
}

impl AppState {
    /// Create a new [`AppState`] with the given live-updates timings.
    pub fn new(live_updates_interval: Duration, live_updates_retry: Duration) -> Self {
        Self {
            live_updates_interval,
            live_updates_retry,
        }
    }
}

impl Default for AppState {
    /// One event per second, one-minute reconnection delay.
    fn default() -> Self {
        Self::new(Duration::from_secs(1), Duration::from_secs(60))
    }
}
