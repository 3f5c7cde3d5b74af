//! Tick callback that publishes summaries to connected clients.

use skyfleet_api::{AppState, TickBroadcast};
use skyfleet_core::{TickCallback, TickSummary};

/// Pushes each tick summary onto the API broadcast channel.
pub struct BroadcastCallback {
    state: AppState,
}

impl BroadcastCallback {
    /// Wrap the shared application state.
    pub const fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl TickCallback for BroadcastCallback {
    fn on_tick(&mut self, summary: &TickSummary) {
        self.state.broadcast(&TickBroadcast::from(summary));
    }
}
