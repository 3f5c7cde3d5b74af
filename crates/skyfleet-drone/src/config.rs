//! Shared kinematic parameters applied to every drone in a session.

use serde::{Deserialize, Serialize};

/// Default cruise speed in meters per second.
pub const DEFAULT_SPEED_MPS: f64 = 1.6;

/// Default battery drain in percentage points per second of activity.
pub const DEFAULT_DRAIN_PER_S: f64 = 0.02;

/// Battery level every drone starts a session with.
pub const FULL_BATTERY: f64 = 100.0;

/// Kinematic parameters shared by all drones in a session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DroneConfig {
    /// Cruise speed in meters per second.
    #[serde(default = "default_speed")]
    pub speed_mps: f64,
    /// Battery drain in percentage points per active second.
    #[serde(default = "default_drain")]
    pub battery_drain_per_s: f64,
}

const fn default_speed() -> f64 {
    DEFAULT_SPEED_MPS
}

const fn default_drain() -> f64 {
    DEFAULT_DRAIN_PER_S
}

impl Default for DroneConfig {
    fn default() -> Self {
        Self {
            speed_mps: DEFAULT_SPEED_MPS,
            battery_drain_per_s: DEFAULT_DRAIN_PER_S,
        }
    }
}
