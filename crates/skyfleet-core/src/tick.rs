//! Tick cycle: the fixed-step loop that drives the fleet.
//!
//! Each tick runs these phases in order:
//!
//! 1. **Motion** -- every drone executes one step of its active task
//!    and drains battery for the activity.
//! 2. **Detection** -- the zone tracker sweeps all drone positions and
//!    fires entry events, stamped at the current (pre-advance) time.
//! 3. **Record** -- fired events are appended to the session history.
//! 4. **Advance** -- the clock moves forward one step.
//!
//! Because the clock advances last, every recorded event carries a
//! timestamp at or before the timestamp of any later snapshot.

use std::collections::BTreeMap;

use skyfleet_drone::{Drone, DroneConfig};
use skyfleet_types::{Event, Vec2};
use skyfleet_world::{EventLog, Map2D, ZoneTracker};

use crate::clock::SimClock;

/// Errors from session setup.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// A drone id was registered twice.
    #[error("duplicate drone id: {drone_id}")]
    DuplicateDrone {
        /// The offending id.
        drone_id: String,
    },
}

/// The complete mutable state of one simulation session.
#[derive(Debug)]
pub struct SimulationState {
    /// The simulation clock.
    pub clock: SimClock,
    /// World bounds and zones.
    pub map: Map2D,
    /// The fleet, keyed by drone id.
    pub drones: BTreeMap<String, Drone>,
    /// Zone-entry detector state.
    pub tracker: ZoneTracker,
    /// Session event history.
    pub events: EventLog,
    /// Kinematic parameters shared by the fleet.
    pub kinematics: DroneConfig,
    /// Events included per snapshot.
    pub recent_limit: usize,
    tick: u64,
}

impl SimulationState {
    /// Create a session with an empty fleet.
    pub fn new(
        clock: SimClock,
        map: Map2D,
        kinematics: DroneConfig,
        log_capacity: usize,
        recent_limit: usize,
    ) -> Self {
        Self {
            clock,
            map,
            drones: BTreeMap::new(),
            tracker: ZoneTracker::new(),
            events: EventLog::new(log_capacity),
            kinematics,
            recent_limit,
            tick: 0,
        }
    }

    /// Register a drone with the session.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::DuplicateDrone`] when the id is taken.
    pub fn spawn_drone(&mut self, drone: Drone) -> Result<(), StateError> {
        if self.drones.contains_key(&drone.id) {
            return Err(StateError::DuplicateDrone { drone_id: drone.id });
        }
        self.drones.insert(drone.id.clone(), drone);
        Ok(())
    }

    /// Number of ticks executed so far.
    pub const fn tick(&self) -> u64 {
        self.tick
    }
}

/// Summary of a single tick's execution.
#[derive(Debug, Clone)]
pub struct TickSummary {
    /// The tick number that just ran (1-indexed).
    pub tick: u64,
    /// Simulation time after the tick.
    pub ts: f64,
    /// Number of drones in the fleet.
    pub drones: usize,
    /// Events fired during this tick.
    pub events: Vec<Event>,
}

/// Execute one tick against the given state.
pub fn run_tick(state: &mut SimulationState) -> TickSummary {
    let dt = state.clock.dt();
    let bounds = state.map.bounds();

    for drone in state.drones.values_mut() {
        drone.step(dt, &state.kinematics, bounds);
        drone.drain_battery(dt, &state.kinematics);
    }

    let positions: BTreeMap<String, Vec2> = state
        .drones
        .iter()
        .map(|(id, drone)| (id.clone(), drone.pos))
        .collect();
    let fired = state
        .tracker
        .observe(&positions, state.map.zones(), state.clock.ts());
    for event in &fired {
        state.events.push(event.clone());
    }

    state.clock.advance();
    state.tick = state.tick.saturating_add(1);

    if !fired.is_empty() {
        tracing::info!(tick = state.tick, fired = fired.len(), "tick events");
    }

    TickSummary {
        tick: state.tick,
        ts: state.clock.ts(),
        drones: state.drones.len(),
        events: fired,
    }
}
