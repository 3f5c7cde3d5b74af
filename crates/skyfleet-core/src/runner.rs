//! Simulation loop runner.
//!
//! [`run_simulation`] drives the tick cycle against shared state. The
//! write lock is held only for the duration of a single tick, so the
//! command surface and snapshot readers interleave between ticks rather
//! than mid-tick.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;
use tracing::info;

use crate::tick::{self, SimulationState, TickSummary};

/// Why a simulation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The configured tick limit was reached.
    MaxTicksReached,
    /// A stop was requested through the control handle.
    StopRequested,
}

/// Result of a completed simulation run.
#[derive(Debug)]
pub struct SimulationResult {
    /// Why the run ended.
    pub end_reason: EndReason,
    /// The last tick summary, if any tick completed.
    pub final_summary: Option<TickSummary>,
    /// Total ticks executed.
    pub total_ticks: u64,
}

/// Shared handle for stopping a running simulation.
#[derive(Debug, Default)]
pub struct RunControl {
    stop: AtomicBool,
}

impl RunControl {
    /// Create a control handle with no stop pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a clean stop before the next tick.
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }

    /// Whether a stop has been requested.
    pub fn is_stop_requested(&self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }
}

/// Callback invoked after each tick completes.
///
/// Implementations broadcast tick summaries to observers, record
/// metrics, and so on.
pub trait TickCallback: Send {
    /// Called with the summary of the tick that just ran.
    fn on_tick(&mut self, summary: &TickSummary);
}

/// A no-op callback for tests and headless runs.
pub struct NoOpCallback;

impl TickCallback for NoOpCallback {
    fn on_tick(&mut self, _summary: &TickSummary) {}
}

/// Run the tick loop until the tick limit is reached or a stop is
/// requested.
///
/// `max_ticks` of zero means unbounded; `tick_interval_ms` of zero
/// disables pacing.
pub async fn run_simulation(
    sim: Arc<RwLock<SimulationState>>,
    control: Arc<RunControl>,
    max_ticks: u64,
    tick_interval_ms: u64,
    callback: &mut dyn TickCallback,
) -> SimulationResult {
    info!(max_ticks, tick_interval_ms, "simulation starting");

    let mut last_summary: Option<TickSummary> = None;
    let mut total_ticks: u64 = 0;

    loop {
        if control.is_stop_requested() {
            info!(total_ticks, "stop requested");
            return SimulationResult {
                end_reason: EndReason::StopRequested,
                final_summary: last_summary,
                total_ticks,
            };
        }

        let summary = {
            let mut state = sim.write().await;
            tick::run_tick(&mut state)
        };
        total_ticks = total_ticks.saturating_add(1);
        callback.on_tick(&summary);

        if max_ticks > 0 && summary.tick >= max_ticks {
            info!(tick = summary.tick, max_ticks, "tick limit reached");
            return SimulationResult {
                end_reason: EndReason::MaxTicksReached,
                final_summary: Some(summary),
                total_ticks,
            };
        }
        last_summary = Some(summary);

        if tick_interval_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(tick_interval_ms)).await;
        }
    }
}

/// Log the end of a run.
pub fn log_simulation_end(result: &SimulationResult) {
    info!(
        reason = ?result.end_reason,
        total_ticks = result.total_ticks,
        final_ts = result.final_summary.as_ref().map(|s| s.ts),
        "simulation ended"
    );
}
