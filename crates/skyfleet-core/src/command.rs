//! The fleet command surface: task assignment and state snapshots.
//!
//! All mutation enters the session through [`assign_task`] and
//! [`batch_assign`]; all observation leaves through [`snapshot`]. The
//! caller holds the appropriate lock around each call, so every
//! snapshot is internally consistent and no assignment interleaves
//! with a tick.

use skyfleet_types::{
    AssignCommand, AssignOutcome, DroneView, StateView, Task, TaskSpec, Vec2, auto_task_id,
};

use crate::tick::SimulationState;

/// Errors from the command surface.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The addressed drone does not exist.
    #[error("Unknown drone_id={0}")]
    NotFound(String),

    /// The submitted task definition is not executable.
    #[error("invalid task: {reason}")]
    InvalidTask {
        /// What is wrong with the definition.
        reason: String,
    },

    /// The drone cannot accept the command in its current state.
    #[error("state conflict: {reason}")]
    StateConflict {
        /// Why the command does not apply.
        reason: String,
    },
}

/// Validate a spec and assign the resulting task to a drone.
///
/// On success the drone's previous task is replaced and the normalized
/// task is returned so the caller can echo it back.
///
/// # Errors
///
/// Returns [`CommandError::NotFound`] for an unknown drone id, or
/// [`CommandError::InvalidTask`] when the spec fails validation.
pub fn assign_task(
    state: &mut SimulationState,
    drone_id: &str,
    spec: TaskSpec,
) -> Result<Task, CommandError> {
    if !state.drones.contains_key(drone_id) {
        return Err(CommandError::NotFound(drone_id.to_owned()));
    }
    let task = normalize(drone_id, spec, state.clock.ts())?;

    // contains_key above guarantees the entry exists.
    if let Some(drone) = state.drones.get_mut(drone_id) {
        tracing::info!(drone_id, task_id = task.id(), "task assigned");
        drone.assign(task.clone());
    }
    Ok(task)
}

/// Apply a batch of commands independently, in order.
///
/// A failing command never aborts the batch; its outcome records the
/// error and later commands still run.
pub fn batch_assign(
    state: &mut SimulationState,
    commands: Vec<AssignCommand>,
) -> Vec<AssignOutcome> {
    commands
        .into_iter()
        .map(|command| match assign_task(state, &command.drone_id, command.task) {
            Ok(task) => AssignOutcome::success(command.drone_id, task),
            Err(err) => AssignOutcome::failure(command.drone_id, err.to_string()),
        })
        .collect()
}

/// Build a consistent snapshot of the session.
pub fn snapshot(state: &SimulationState) -> StateView {
    let drones = state
        .drones
        .values()
        .map(|drone| DroneView {
            id: drone.id.clone(),
            pos: drone.pos,
            status: drone.status,
            battery: drone.battery,
            task: drone.task.clone(),
        })
        .collect();

    StateView {
        ts: state.clock.ts(),
        drones,
        zones: state.map.zones().to_vec(),
        recent_events: state.events.recent(state.recent_limit),
    }
}

/// Check a spec and fill in its defaults, producing an executable task.
fn normalize(drone_id: &str, spec: TaskSpec, ts: f64) -> Result<Task, CommandError> {
    match spec {
        TaskSpec::Goto {
            target,
            arrive_eps,
            id,
        } => {
            require_finite(&[target])?;
            if !arrive_eps.is_finite() || arrive_eps <= 0.0 {
                return Err(CommandError::InvalidTask {
                    reason: format!("arrive_eps must be positive, got {arrive_eps}"),
                });
            }
            Ok(Task::Goto {
                id: id.unwrap_or_else(|| auto_task_id("goto", ts)),
                target,
                arrive_eps,
            })
        }
        TaskSpec::Path {
            waypoints,
            looping,
            id,
        } => {
            if waypoints.is_empty() {
                return Err(CommandError::InvalidTask {
                    reason: "path requires at least one waypoint".to_owned(),
                });
            }
            require_finite(&waypoints)?;
            Ok(Task::Path {
                id: id.unwrap_or_else(|| auto_task_id("path", ts)),
                waypoints,
                looping,
                cursor: 0,
            })
        }
        TaskSpec::Hold {
            drone_id: addressed,
            id,
        } => {
            if addressed != drone_id {
                return Err(CommandError::InvalidTask {
                    reason: format!(
                        "hold addressed to {addressed} but command targets {drone_id}"
                    ),
                });
            }
            Ok(Task::Hold {
                id: id.unwrap_or_else(|| auto_task_id("hold", ts)),
            })
        }
    }
}

fn require_finite(points: &[Vec2]) -> Result<(), CommandError> {
    for point in points {
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(CommandError::InvalidTask {
                reason: format!("coordinates must be finite, got ({}, {})", point.x, point.y),
            });
        }
    }
    Ok(())
}
