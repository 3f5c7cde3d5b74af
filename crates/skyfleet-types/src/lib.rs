//! Shared type definitions for the Skyfleet drone simulation.
//!
//! This crate is the single source of truth for all types used across the
//! Skyfleet workspace: geometry, task definitions, zones, events, and the
//! wire shapes exchanged over the fleet command surface.
//!
//! # Modules
//!
//! - [`geo`] -- 2D vectors and axis-aligned rectangles
//! - [`enums`] -- drone status, zone categories, event types
//! - [`task`] -- the task sum type, its wire spec, and task id generation
//! - [`structs`] -- zones and world events
//! - [`wire`] -- command-surface request/response shapes

pub mod enums;
pub mod geo;
pub mod structs;
pub mod task;
pub mod wire;

// Re-export all public types at crate root for convenience.
pub use enums::{DroneStatus, EventType, ZoneType};
pub use geo::{Rect, Vec2};
pub use structs::{Event, Zone};
pub use task::{DEFAULT_ARRIVE_EPS, Task, TaskSpec, auto_task_id};
pub use wire::{
    AssignCommand, AssignOutcome, BatchRequest, BatchResponse, DroneView, StateView,
};
