//! Zone-entry detection with per-pair debouncing.
//!
//! The tracker remembers which drones are inside which zones. An event
//! fires when a drone is inside a zone and either just crossed in, or
//! has been inside long enough for the refire cooldown to elapse. A
//! drone that leaves and re-enters fires again immediately: leaving
//! clears the pair's membership, not its cooldown timestamp, so the
//! entering edge always wins.

use std::collections::{BTreeMap, BTreeSet};

use skyfleet_types::{Event, EventType, Vec2, Zone, ZoneType};

/// Seconds a drone must dwell inside a zone before the same pair can
/// fire again without leaving first.
pub const REFIRE_COOLDOWN_S: f64 = 30.0;

/// Stateful zone-entry detector; one per simulation session.
#[derive(Debug, Default)]
pub struct ZoneTracker {
    /// Zone ids each drone was inside at the last sweep.
    inside: BTreeMap<String, BTreeSet<String>>,
    /// Last fire time per (drone id, zone id) pair.
    last_fired: BTreeMap<(String, String), f64>,
}

impl ZoneTracker {
    /// Create a tracker with no remembered membership.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sweep all drones against all zones at simulation time `ts` and
    /// return the events that fire, in drone-id order.
    pub fn observe(
        &mut self,
        positions: &BTreeMap<String, Vec2>,
        zones: &[Zone],
        ts: f64,
    ) -> Vec<Event> {
        let mut fired = Vec::new();

        for (drone_id, &pos) in positions {
            let was_inside = self.inside.remove(drone_id).unwrap_or_default();
            let mut now_inside = BTreeSet::new();

            for zone in zones {
                if !zone.contains(pos) {
                    continue;
                }
                now_inside.insert(zone.id.clone());

                let entering = !was_inside.contains(&zone.id);
                let key = (drone_id.clone(), zone.id.clone());
                let cooled = self
                    .last_fired
                    .get(&key)
                    .is_none_or(|&last| ts - last >= REFIRE_COOLDOWN_S);

                if entering || cooled {
                    self.last_fired.insert(key, ts);
                    tracing::debug!(drone_id, zone_id = %zone.id, entering, ts, "zone event fired");
                    fired.push(make_event(drone_id, pos, zone, entering, ts));
                }
            }

            self.inside.insert(drone_id.clone(), now_inside);
        }

        fired
    }
}

/// Deterministic severity and confidence from the drone's proximity to
/// the zone center, measured against the zone's half diagonal.
fn grade(pos: Vec2, zone: &Zone) -> (f64, f64) {
    let half_diag = zone.rect.half_diagonal();
    let proximity = if half_diag > 0.0 {
        (1.0 - pos.dist(zone.rect.center()) / half_diag).clamp(0.0, 1.0)
    } else {
        1.0
    };
    let severity = 0.5 + 0.5 * proximity;
    let confidence = 0.6 + 0.3 * proximity;
    (severity, confidence)
}

fn make_event(drone_id: &str, pos: Vec2, zone: &Zone, entering: bool, ts: f64) -> Event {
    let (event_type, verb) = match zone.zone_type {
        ZoneType::FireRisk => (EventType::FireDetected, "fire risk detected in"),
        ZoneType::NoFly => (EventType::NoFlyViolation, "violated no-fly"),
        ZoneType::Info => (EventType::ZoneEntry, "entered"),
    };
    let (severity, confidence) = grade(pos, zone);

    Event {
        ts,
        event_type,
        drone_id: drone_id.to_owned(),
        pos,
        message: format!("{drone_id} {verb} zone {}", zone.name),
        payload: serde_json::json!({
            "zone_id": zone.id,
            "zone_name": zone.name,
            "zone_type": zone.zone_type,
            "entering": entering,
        }),
        severity,
        confidence,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use skyfleet_types::Rect;

    use super::*;

    fn zone(id: &str, zone_type: ZoneType, rect: Rect) -> Zone {
        Zone {
            id: id.to_owned(),
            name: format!("Zone-{id}"),
            zone_type,
            rect,
        }
    }

    fn at(drone_id: &str, pos: Vec2) -> BTreeMap<String, Vec2> {
        BTreeMap::from([(drone_id.to_owned(), pos)])
    }

    #[test]
    fn fires_once_per_dwell() {
        let zones = vec![zone("z_fire", ZoneType::FireRisk, Rect::new(42.0, 58.0, 42.0, 58.0))];
        let mut tracker = ZoneTracker::new();

        let fired = tracker.observe(&at("D1", Vec2::new(50.0, 50.0)), &zones, 1.0);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].event_type, EventType::FireDetected);

        // Still inside, cooldown not elapsed: silence.
        for tick in 2..20 {
            let fired = tracker.observe(&at("D1", Vec2::new(50.0, 50.0)), &zones, f64::from(tick));
            assert!(fired.is_empty(), "unexpected event at t={tick}");
        }
    }

    #[test]
    fn refires_after_cooldown_while_dwelling() {
        let zones = vec![zone("z1", ZoneType::Info, Rect::new(0.0, 10.0, 0.0, 10.0))];
        let mut tracker = ZoneTracker::new();

        assert_eq!(tracker.observe(&at("D1", Vec2::new(5.0, 5.0)), &zones, 0.0).len(), 1);
        assert!(tracker.observe(&at("D1", Vec2::new(5.0, 5.0)), &zones, 29.9).is_empty());
        let fired = tracker.observe(&at("D1", Vec2::new(5.0, 5.0)), &zones, 30.0);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].payload["entering"], serde_json::json!(false));
    }

    #[test]
    fn leave_and_reenter_fires_immediately() {
        let zones = vec![zone("z1", ZoneType::NoFly, Rect::new(0.0, 10.0, 0.0, 10.0))];
        let mut tracker = ZoneTracker::new();

        assert_eq!(tracker.observe(&at("D1", Vec2::new(5.0, 5.0)), &zones, 0.0).len(), 1);
        assert!(tracker.observe(&at("D1", Vec2::new(50.0, 50.0)), &zones, 1.0).is_empty());
        let fired = tracker.observe(&at("D1", Vec2::new(5.0, 5.0)), &zones, 2.0);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].event_type, EventType::NoFlyViolation);
        assert_eq!(fired[0].payload["entering"], serde_json::json!(true));
    }

    #[test]
    fn overlapping_zones_fire_independently() {
        let zones = vec![
            zone("a", ZoneType::FireRisk, Rect::new(0.0, 10.0, 0.0, 10.0)),
            zone("b", ZoneType::Info, Rect::new(5.0, 15.0, 5.0, 15.0)),
        ];
        let mut tracker = ZoneTracker::new();
        let fired = tracker.observe(&at("D1", Vec2::new(7.0, 7.0)), &zones, 0.0);
        assert_eq!(fired.len(), 2);
    }

    #[test]
    fn drones_are_tracked_independently() {
        let zones = vec![zone("z1", ZoneType::Info, Rect::new(0.0, 10.0, 0.0, 10.0))];
        let mut tracker = ZoneTracker::new();

        let positions = BTreeMap::from([
            ("D1".to_owned(), Vec2::new(5.0, 5.0)),
            ("D2".to_owned(), Vec2::new(50.0, 50.0)),
        ]);
        assert_eq!(tracker.observe(&positions, &zones, 0.0).len(), 1);

        // D2 enters later; D1's membership does not suppress it.
        let positions = BTreeMap::from([
            ("D1".to_owned(), Vec2::new(5.0, 5.0)),
            ("D2".to_owned(), Vec2::new(5.0, 5.0)),
        ]);
        let fired = tracker.observe(&positions, &zones, 1.0);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].drone_id, "D2");
    }

    #[test]
    fn severity_peaks_at_zone_center() {
        let z = zone("z1", ZoneType::FireRisk, Rect::new(0.0, 10.0, 0.0, 10.0));
        let (center_sev, center_conf) = grade(Vec2::new(5.0, 5.0), &z);
        let (corner_sev, corner_conf) = grade(Vec2::new(0.0, 0.0), &z);
        assert!((center_sev - 1.0).abs() < 1e-9);
        assert!((center_conf - 0.9).abs() < 1e-9);
        assert!((corner_sev - 0.5).abs() < 1e-9);
        assert!((corner_conf - 0.6).abs() < 1e-9);
    }
}
