//! World and fleet setup from configuration.
//!
//! An explicit `zones` or `drones` section in the config wins. When
//! absent, the session gets the stock arrangement: one drone parked
//! near each world corner, and a seeded handful of fire-risk zones so
//! the detector has something to find.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use skyfleet_core::config::SimulationConfig;
use skyfleet_drone::Drone;
use skyfleet_types::{Rect, Vec2, Zone, ZoneType};
use skyfleet_world::Map2D;
use tracing::info;

use crate::error::EngineError;

/// Distance from the world edge for the default corner roster.
const CORNER_MARGIN: f64 = 5.0;

/// Keep-out margin from the world edge for generated zones.
const ZONE_BORDER: f64 = 8.0;

/// Build the world map: bounds plus configured or generated zones.
pub fn build_map(config: &SimulationConfig) -> Result<Map2D, EngineError> {
    let mut map = Map2D::new(config.world.width, config.world.height)?;

    if config.zones.is_empty() {
        for zone in generate_fire_zones(config.world.seed, config.world.width, config.world.height)
        {
            map.add_zone(zone)?;
        }
        info!(zones = map.zones().len(), seed = config.world.seed, "generated fire zones");
    } else {
        for entry in &config.zones {
            map.add_zone(entry.clone().into())?;
        }
        info!(zones = map.zones().len(), "configured zones loaded");
    }

    Ok(map)
}

/// Build the fleet roster from config, or the default corner roster.
pub fn build_roster(config: &SimulationConfig) -> Vec<Drone> {
    if config.drones.is_empty() {
        default_corner_roster(config.world.width, config.world.height)
    } else {
        config
            .drones
            .iter()
            .map(|entry| Drone::new(entry.id.clone(), Vec2::new(entry.x, entry.y)))
            .collect()
    }
}

/// Four drones, one parked near each corner of the world.
fn default_corner_roster(width: f64, height: f64) -> Vec<Drone> {
    let m = CORNER_MARGIN;
    vec![
        Drone::new("D1", Vec2::new(m, m)),
        Drone::new("D2", Vec2::new(width - m, m)),
        Drone::new("D3", Vec2::new(m, height - m)),
        Drone::new("D4", Vec2::new(width - m, height - m)),
    ]
}

/// Generate two or three square fire-risk zones at seeded random
/// positions, kept away from the world border.
fn generate_fire_zones(seed: u64, width: f64, height: f64) -> Vec<Zone> {
    let mut rng = StdRng::seed_from_u64(seed);
    let count = rng.random_range(2..=3);

    (0..count)
        .map(|i| {
            let size = rng.random_range(6.0..=12.0);
            // Degenerate worlds collapse the placement range; keep it
            // non-empty so random_range never panics.
            let x_hi = (width - ZONE_BORDER - size).max(ZONE_BORDER + 0.1);
            let y_hi = (height - ZONE_BORDER - size).max(ZONE_BORDER + 0.1);
            let xmin = rng.random_range(ZONE_BORDER..x_hi);
            let ymin = rng.random_range(ZONE_BORDER..y_hi);
            let n = i + 1;
            Zone {
                id: format!("z_fire_{n}"),
                name: format!("Fire-{n}"),
                zone_type: ZoneType::FireRisk,
                rect: Rect::new(xmin, xmin + size, ymin, ymin + size),
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use skyfleet_core::config::{DroneEntry, ZoneEntry};

    use super::*;

    #[test]
    fn default_roster_parks_at_corners() {
        let roster = default_corner_roster(100.0, 100.0);
        assert_eq!(roster.len(), 4);
        assert_eq!(roster[0].id, "D1");
        assert!((roster[3].pos.x - 95.0).abs() < 1e-12);
        assert!((roster[3].pos.y - 95.0).abs() < 1e-12);
    }

    #[test]
    fn generated_zones_are_deterministic_and_in_bounds() {
        let a = generate_fire_zones(42, 100.0, 100.0);
        let b = generate_fire_zones(42, 100.0, 100.0);
        assert_eq!(a.len(), b.len());
        assert!(a.len() >= 2 && a.len() <= 3);
        for (za, zb) in a.iter().zip(&b) {
            assert_eq!(za.id, zb.id);
            assert!((za.rect.xmin - zb.rect.xmin).abs() < 1e-12);
            assert!(za.rect.xmin >= ZONE_BORDER);
            assert!(za.rect.xmax <= 100.0 - ZONE_BORDER + 1e-9);
            assert!(za.rect.is_ordered());
        }
    }

    #[test]
    fn explicit_config_overrides_defaults() {
        let mut config = SimulationConfig::default();
        config.drones.push(DroneEntry {
            id: "scout".to_owned(),
            x: 1.0,
            y: 2.0,
        });
        config.zones.push(ZoneEntry {
            id: "z1".to_owned(),
            name: String::new(),
            zone_type: ZoneType::NoFly,
            rect: Rect::new(0.0, 10.0, 0.0, 10.0),
        });

        let roster = build_roster(&config);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].id, "scout");

        let map = build_map(&config).unwrap();
        assert_eq!(map.zones().len(), 1);
        assert_eq!(map.zones()[0].zone_type, ZoneType::NoFly);
        // Empty name falls back to the id.
        assert_eq!(map.zones()[0].name, "z1");
    }
}
