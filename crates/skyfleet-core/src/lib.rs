//! Core engine for the Skyfleet simulation: the fixed-step clock, the
//! tick cycle, configuration loading, the command surface, and the
//! async simulation runner.

pub mod clock;
pub mod command;
pub mod config;
pub mod runner;
pub mod tick;

pub use clock::{ClockError, SimClock};
pub use command::{CommandError, assign_task, batch_assign, snapshot};
pub use config::{ConfigError, SimulationConfig};
pub use runner::{
    EndReason, NoOpCallback, RunControl, SimulationResult, TickCallback, log_simulation_end,
    run_simulation,
};
pub use tick::{SimulationState, StateError, TickSummary, run_tick};
