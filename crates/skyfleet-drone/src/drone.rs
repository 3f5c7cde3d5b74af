//! A single drone: position, battery, and the active-task state machine.

use skyfleet_types::{DroneStatus, Task, Vec2};

use crate::config::{DroneConfig, FULL_BATTERY};
use crate::motion::{clamp_to_bounds, move_towards};

/// Waypoint arrival radius for path following. Tighter than the goto
/// default so patrol corners are actually traced.
pub const PATH_ARRIVE_EPS: f64 = 0.5;

/// One drone's mutable simulation state.
#[derive(Debug, Clone)]
pub struct Drone {
    /// Stable identifier, unique within a session.
    pub id: String,
    /// Current position in world coordinates.
    pub pos: Vec2,
    /// Activity status derived from the active task.
    pub status: DroneStatus,
    /// Battery level in percent, floored at zero.
    pub battery: f64,
    /// The task currently being executed, if any.
    pub task: Option<Task>,
}

impl Drone {
    /// Create an idle drone at `pos` with a full battery.
    pub fn new(id: impl Into<String>, pos: Vec2) -> Self {
        Self {
            id: id.into(),
            pos,
            status: DroneStatus::Idle,
            battery: FULL_BATTERY,
            task: None,
        }
    }

    /// Replace the active task. The previous task is discarded; status
    /// switches immediately so the next tick acts on the new task.
    pub fn assign(&mut self, task: Task) {
        self.status = match task {
            Task::Hold { .. } => DroneStatus::Holding,
            Task::Goto { .. } | Task::Path { .. } => DroneStatus::Navigating,
        };
        self.task = Some(task);
    }

    /// Advance the drone by one step of `dt` seconds.
    ///
    /// Executes the active task, updates status, and clamps the final
    /// position into `bounds`.
    pub fn step(&mut self, dt: f64, config: &DroneConfig, bounds: (f64, f64, f64, f64)) {
        match self.task.take() {
            None => {
                self.status = DroneStatus::Idle;
            }
            Some(Task::Hold { id }) => {
                self.status = DroneStatus::Holding;
                self.task = Some(Task::Hold { id });
            }
            Some(Task::Goto {
                id,
                target,
                arrive_eps,
            }) => {
                // Arrival is checked before moving; within the radius the
                // drone snaps onto the target and the task completes.
                if self.pos.dist(target) <= arrive_eps {
                    self.pos = target;
                    self.status = DroneStatus::Idle;
                } else {
                    let (pos, _) = move_towards(self.pos, target, config.speed_mps, dt);
                    self.pos = pos;
                    self.status = DroneStatus::Navigating;
                    self.task = Some(Task::Goto {
                        id,
                        target,
                        arrive_eps,
                    });
                }
            }
            Some(Task::Path {
                id,
                waypoints,
                looping,
                cursor,
            }) => {
                self.step_path(id, waypoints, looping, cursor, dt, config);
            }
        }
        self.pos = clamp_to_bounds(self.pos, bounds);
    }

    fn step_path(
        &mut self,
        id: String,
        waypoints: Vec<Vec2>,
        looping: bool,
        cursor: usize,
        dt: f64,
        config: &DroneConfig,
    ) {
        if waypoints.is_empty() {
            tracing::warn!(drone_id = %self.id, task_id = %id, "path task has no waypoints");
            self.status = DroneStatus::Idle;
            return;
        }
        if cursor >= waypoints.len() {
            // A corrupted cursor degrades to holding for this tick; the
            // clamped cursor resumes normal following next tick.
            tracing::warn!(
                drone_id = %self.id,
                task_id = %id,
                cursor,
                len = waypoints.len(),
                "path cursor out of range, clamping"
            );
            self.status = DroneStatus::Holding;
            let cursor = waypoints.len() - 1;
            self.task = Some(Task::Path {
                id,
                waypoints,
                looping,
                cursor,
            });
            return;
        }

        let Some(target) = waypoints.get(cursor).copied() else {
            // Unreachable after the range check above; keep the task.
            self.status = DroneStatus::Holding;
            self.task = Some(Task::Path {
                id,
                waypoints,
                looping,
                cursor,
            });
            return;
        };

        let arrived = if self.pos.dist(target) <= PATH_ARRIVE_EPS {
            self.pos = target;
            true
        } else {
            let (pos, arrived) = move_towards(self.pos, target, config.speed_mps, dt);
            self.pos = pos;
            arrived
        };

        let mut cursor = cursor;
        if arrived {
            cursor += 1;
            if cursor >= waypoints.len() {
                if looping {
                    cursor = 0;
                } else {
                    self.status = DroneStatus::Idle;
                    return;
                }
            }
        }

        self.status = DroneStatus::Navigating;
        self.task = Some(Task::Path {
            id,
            waypoints,
            looping,
            cursor,
        });
    }

    /// Drain battery for `dt` seconds of activity. Idle drones do not
    /// drain; the level never goes below zero.
    pub fn drain_battery(&mut self, dt: f64, config: &DroneConfig) {
        if matches!(self.status, DroneStatus::Navigating | DroneStatus::Holding) {
            self.battery = (self.battery - config.battery_drain_per_s * dt).max(0.0);
        }
    }
}
