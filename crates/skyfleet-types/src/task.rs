//! Navigation tasks: the runtime sum type and its wire-side spec.
//!
//! A [`TaskSpec`] is what callers submit over the command surface; it may
//! omit the id and per-type defaults. The command surface validates and
//! normalizes a spec into a [`Task`], the form the state machine executes
//! and the snapshot echoes back. Both serialize with an uppercase `type`
//! tag (`"GOTO"` / `"PATH"` / `"HOLD"`).

use serde::{Deserialize, Serialize};

use crate::geo::Vec2;

/// Default arrival epsilon for GOTO tasks, in metres.
pub const DEFAULT_ARRIVE_EPS: f64 = 2.0;

/// An active navigation task, owned by exactly one drone.
///
/// Assignment replaces a drone's task wholesale; in-flight progress (the
/// PATH cursor, partial arrival) never survives reassignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Task {
    /// Fly to a single target point.
    #[serde(rename = "GOTO")]
    Goto {
        /// Task identifier.
        id: String,
        /// Destination point.
        target: Vec2,
        /// Arrival threshold in metres; always positive.
        arrive_eps: f64,
    },
    /// Follow an ordered waypoint sequence, optionally looping forever.
    #[serde(rename = "PATH")]
    Path {
        /// Task identifier.
        id: String,
        /// Ordered waypoints; always non-empty.
        waypoints: Vec<Vec2>,
        /// Wrap back to the first waypoint after the last one.
        #[serde(rename = "loop")]
        looping: bool,
        /// Index of the waypoint currently being approached.
        #[serde(default)]
        cursor: usize,
    },
    /// Station-keep at the current position.
    #[serde(rename = "HOLD")]
    Hold {
        /// Task identifier.
        id: String,
    },
}

impl Task {
    /// The task's identifier.
    pub fn id(&self) -> &str {
        match self {
            Self::Goto { id, .. } | Self::Path { id, .. } | Self::Hold { id } => id,
        }
    }
}

/// A task definition as submitted by a caller, before normalization.
///
/// Optional fields take their documented defaults; a missing `id` is
/// auto-generated from the world time at assignment via [`auto_task_id`].
/// The HOLD variant names its target drone explicitly; the command surface
/// rejects the assignment when it does not match the addressed drone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TaskSpec {
    /// Fly to a single target point.
    #[serde(rename = "GOTO")]
    Goto {
        /// Destination point.
        target: Vec2,
        /// Arrival threshold in metres; must be positive.
        #[serde(default = "default_arrive_eps")]
        arrive_eps: f64,
        /// Explicit task id, or `None` to auto-generate one.
        #[serde(default)]
        id: Option<String>,
    },
    /// Follow an ordered waypoint sequence.
    #[serde(rename = "PATH")]
    Path {
        /// Ordered waypoints; must be non-empty.
        waypoints: Vec<Vec2>,
        /// Wrap back to the first waypoint after the last (default true).
        #[serde(rename = "loop", default = "default_true")]
        looping: bool,
        /// Explicit task id, or `None` to auto-generate one.
        #[serde(default)]
        id: Option<String>,
    },
    /// Station-keep at the current position.
    #[serde(rename = "HOLD")]
    Hold {
        /// The drone this hold is addressed to; must match the drone the
        /// command targets.
        drone_id: String,
        /// Explicit task id, or `None` to auto-generate one.
        #[serde(default)]
        id: Option<String>,
    },
}

/// Generate a task id from the world time at assignment.
///
/// The scheme is `{prefix}_{int(ts * 10)}` with truncation toward zero,
/// e.g. `auto_task_id("goto", 12.34)` is `"goto_123"`. Kept as a pure
/// function so it is testable without running the clock.
pub fn auto_task_id(prefix: &str, ts: f64) -> String {
    format!("{prefix}_{}", (ts * 10.0) as i64)
}

const fn default_arrive_eps() -> f64 {
    DEFAULT_ARRIVE_EPS
}

const fn default_true() -> bool {
    true
}
