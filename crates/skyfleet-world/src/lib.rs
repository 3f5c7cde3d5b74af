//! World model for the skyfleet simulation: the 2D map, its zones,
//! the zone-entry detector, and the bounded event history.

pub mod detector;
pub mod error;
pub mod event_log;
pub mod map;

pub use detector::{REFIRE_COOLDOWN_S, ZoneTracker};
pub use error::WorldError;
pub use event_log::{DEFAULT_LOG_CAPACITY, EventLog};
pub use map::Map2D;
