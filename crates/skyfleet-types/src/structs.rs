//! Core entity structs: zones and world events.

use serde::{Deserialize, Serialize};

use crate::enums::{EventType, ZoneType};
use crate::geo::{Rect, Vec2};

/// A static named rectangular region of the world.
///
/// Zones are fixed for the lifetime of a simulation session; only drone
/// state mutates at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Unique zone identifier (e.g. `z_fire_1`).
    pub id: String,
    /// Human-readable name (e.g. `FireZone-1`).
    pub name: String,
    /// Semantic zone category.
    #[serde(rename = "type")]
    pub zone_type: ZoneType,
    /// The zone's rectangle, inclusive on all edges.
    pub rect: Rect,
}

impl Zone {
    /// Inclusive containment test against the zone's rectangle.
    pub fn contains(&self, p: Vec2) -> bool {
        self.rect.contains(p)
    }
}

/// A discrete timestamped occurrence recorded for external observation.
///
/// Events are created by the spatial event detector during ticks and never
/// mutated afterwards; the event log evicts the oldest entries first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// World time at emission, in simulated seconds.
    pub ts: f64,
    /// What kind of occurrence this is.
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// The drone that triggered the event.
    pub drone_id: String,
    /// The drone's position at emission.
    pub pos: Vec2,
    /// Human-readable description.
    pub message: String,
    /// Free-form structured details (zone id/name/type, entering flag).
    pub payload: serde_json::Value,
    /// Estimated severity in `[0, 1]`.
    pub severity: f64,
    /// Detection confidence in `[0, 1]`.
    pub confidence: f64,
}
