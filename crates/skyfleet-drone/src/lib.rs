//! Drone kinematics: straight-line motion, the per-drone task state
//! machine, and the shared kinematic configuration.

pub mod config;
pub mod drone;
pub mod motion;

pub use config::{DEFAULT_DRAIN_PER_S, DEFAULT_SPEED_MPS, DroneConfig, FULL_BATTERY};
pub use drone::{Drone, PATH_ARRIVE_EPS};
pub use motion::{clamp_to_bounds, move_towards};
