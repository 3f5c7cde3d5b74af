//! Enumeration types for the Skyfleet simulation.
//!
//! All externally visible enum spellings are SCREAMING_SNAKE_CASE on the
//! wire (`"NAVIGATING"`, `"FIRE_RISK"`, `"FIRE_DETECTED"`), matching the
//! fleet HTTP contract.

use serde::{Deserialize, Serialize};

/// The operational status of a drone.
///
/// Status is derived from the active task each tick: navigation tasks put
/// the drone in [`Navigating`](Self::Navigating), a hold task in
/// [`Holding`](Self::Holding), and a drone with no task is
/// [`Idle`](Self::Idle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DroneStatus {
    /// No active task.
    Idle,
    /// Moving toward a GOTO target or a PATH waypoint.
    Navigating,
    /// Station-keeping under a HOLD task.
    Holding,
}

/// The semantic category of a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ZoneType {
    /// Area with elevated fire likelihood; entry produces a fire detection.
    FireRisk,
    /// Restricted airspace; entry produces a violation event.
    NoFly,
    /// Informational region; entry produces a plain zone-entry event.
    Info,
}

/// The type of a world event recorded in the event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    /// A drone observed a suspected fire inside a fire-risk zone.
    FireDetected,
    /// A drone entered restricted airspace.
    NoFlyViolation,
    /// A drone entered an informational zone.
    ZoneEntry,
}
