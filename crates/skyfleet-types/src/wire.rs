//! Request and response types for the fleet command surface.
//!
//! These are the JSON shapes the HTTP layer exchanges with callers. The
//! command surface in `skyfleet-core` produces and consumes them, so the
//! HTTP layer stays thin transport glue.

use serde::{Deserialize, Serialize};

use crate::enums::DroneStatus;
use crate::geo::Vec2;
use crate::structs::{Event, Zone};
use crate::task::{Task, TaskSpec};

/// One task-assignment command: a target drone and the task definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignCommand {
    /// The drone to assign the task to.
    pub drone_id: String,
    /// The task definition.
    pub task: TaskSpec,
}

/// Request body for batch assignment: an ordered list of commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRequest {
    /// Commands applied independently, in order.
    pub commands: Vec<AssignCommand>,
}

/// Per-command outcome of an assignment.
///
/// Exactly one of `assigned` / `error` is present, per the `ok` flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignOutcome {
    /// Whether this command was applied.
    pub ok: bool,
    /// The drone the command addressed.
    pub drone_id: String,
    /// The normalized task that was assigned, when `ok` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned: Option<Task>,
    /// Why the command failed, when `ok` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AssignOutcome {
    /// Build a success outcome carrying the normalized task.
    pub fn success(drone_id: impl Into<String>, assigned: Task) -> Self {
        Self {
            ok: true,
            drone_id: drone_id.into(),
            assigned: Some(assigned),
            error: None,
        }
    }

    /// Build a failure outcome carrying the error message.
    pub fn failure(drone_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            ok: false,
            drone_id: drone_id.into(),
            assigned: None,
            error: Some(error.into()),
        }
    }
}

/// Response envelope for batch assignment.
///
/// The envelope is `ok: true` even when individual items failed; callers
/// inspect `results` for per-item status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResponse {
    /// Always true: the batch itself was processed.
    pub ok: bool,
    /// Per-command outcomes, in request order.
    pub results: Vec<AssignOutcome>,
}

/// A drone as reported in a state snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroneView {
    /// Drone identifier.
    pub id: String,
    /// Current position.
    pub pos: Vec2,
    /// Current status.
    pub status: DroneStatus,
    /// Battery level in `[0, 100]`.
    pub battery: f64,
    /// The active task, or `null` when idle.
    pub task: Option<Task>,
}

/// A consistent snapshot of the world, served by the state query.
///
/// Built under a single shared borrow of the world, so it never mixes
/// state from two ticks and no event is timestamped after `ts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateView {
    /// World time at the snapshot.
    pub ts: f64,
    /// All drones in the fleet.
    pub drones: Vec<DroneView>,
    /// The static zone set.
    pub zones: Vec<Zone>,
    /// The most recent events, oldest first.
    pub recent_events: Vec<Event>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn success_outcome_omits_error_key() {
        let outcome = AssignOutcome::success(
            "D1",
            Task::Hold {
                id: String::from("hold_0"),
            },
        );
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json.get("ok").unwrap(), true);
        assert!(json.get("error").is_none());
        assert_eq!(
            json.get("assigned").unwrap().get("type").unwrap(),
            "HOLD"
        );
    }

    #[test]
    fn failure_outcome_omits_assigned_key() {
        let outcome = AssignOutcome::failure("D9", "Unknown drone_id=D9");
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json.get("ok").unwrap(), false);
        assert!(json.get("assigned").is_none());
        assert_eq!(json.get("error").unwrap(), "Unknown drone_id=D9");
    }

    #[test]
    fn batch_request_parses_ordered_commands() {
        let body = r#"{
            "commands": [
                {"drone_id": "D1", "task": {"type": "HOLD", "drone_id": "D1"}},
                {"drone_id": "D2", "task": {"type": "GOTO", "target": {"x": 1.0, "y": 2.0}}}
            ]
        }"#;
        let request: BatchRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.commands.len(), 2);
        assert_eq!(
            request.commands.first().map(|c| c.drone_id.as_str()),
            Some("D1")
        );
    }
}
