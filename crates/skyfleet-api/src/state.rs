//! Shared application state for the fleet API server.
//!
//! [`AppState`] holds a handle to the live simulation session and the
//! broadcast channel for tick summaries. Handlers lock the session
//! directly: reads take a shared lock, assignments take the write lock,
//! so neither interleaves with a tick in progress.

use std::sync::Arc;

use skyfleet_core::{SimulationState, TickSummary};
use tokio::sync::{RwLock, broadcast};

/// Capacity of the broadcast channel for tick summaries.
///
/// A subscriber that falls behind by more than this many messages
/// receives a `Lagged` error and skips to the newest message.
const BROADCAST_CAPACITY: usize = 256;

/// JSON-serializable tick summary pushed over the `WebSocket`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TickBroadcast {
    /// The tick number that just ran.
    pub tick: u64,
    /// Simulation time after the tick.
    pub ts: f64,
    /// Number of drones in the fleet.
    pub drones: usize,
    /// Number of events fired during the tick.
    pub events_fired: usize,
}

impl From<&TickSummary> for TickBroadcast {
    fn from(summary: &TickSummary) -> Self {
        Self {
            tick: summary.tick,
            ts: summary.ts,
            drones: summary.drones,
            events_fired: summary.events.len(),
        }
    }
}

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// The live simulation session.
    pub sim: Arc<RwLock<SimulationState>>,
    /// Broadcast sender for tick summary messages.
    pub tx: broadcast::Sender<TickBroadcast>,
}

impl AppState {
    /// Create application state around a simulation session.
    pub fn new(sim: Arc<RwLock<SimulationState>>) -> Self {
        let (tx, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self { sim, tx }
    }

    /// Subscribe to the tick broadcast channel.
    pub fn subscribe(&self) -> broadcast::Receiver<TickBroadcast> {
        self.tx.subscribe()
    }

    /// Publish a tick summary to all connected clients.
    ///
    /// Returns the number of receivers; zero when no client is
    /// connected, which is not an error.
    pub fn broadcast(&self, summary: &TickBroadcast) -> usize {
        self.tx.send(summary.clone()).unwrap_or(0)
    }
}
