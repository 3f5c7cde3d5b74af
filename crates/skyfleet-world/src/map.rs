//! The 2D world map: bounds and the static zone set.
//!
//! The map is built once at session start and never mutated afterwards;
//! only drone state changes at runtime. Zones are kept in registration
//! order (the order is not semantically meaningful, but a stable order
//! keeps snapshots and detector sweeps deterministic).

use skyfleet_types::{Vec2, Zone};

use crate::error::WorldError;

/// The world's rectangular extent and its named zones.
#[derive(Debug, Clone)]
pub struct Map2D {
    width: f64,
    height: f64,
    zones: Vec<Zone>,
}

impl Map2D {
    /// Create an empty map with the given extent.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidSize`] unless both dimensions are
    /// positive.
    pub fn new(width: f64, height: f64) -> Result<Self, WorldError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(WorldError::InvalidSize { width, height });
        }
        Ok(Self {
            width,
            height,
            zones: Vec::new(),
        })
    }

    /// The world bounds as `(xmin, xmax, ymin, ymax)`.
    pub const fn bounds(&self) -> (f64, f64, f64, f64) {
        (0.0, self.width, 0.0, self.height)
    }

    /// The world width.
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// The world height.
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Register a zone.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidRect`] when the zone's rectangle is
    /// malformed, or [`WorldError::DuplicateZone`] when the id is taken.
    pub fn add_zone(&mut self, zone: Zone) -> Result<(), WorldError> {
        if !zone.rect.is_ordered() {
            return Err(WorldError::InvalidRect { zone_id: zone.id });
        }
        if self.zones.iter().any(|z| z.id == zone.id) {
            return Err(WorldError::DuplicateZone { zone_id: zone.id });
        }
        self.zones.push(zone);
        Ok(())
    }

    /// All registered zones, in registration order.
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// The zones containing a point.
    pub fn zones_at(&self, pos: Vec2) -> Vec<&Zone> {
        self.zones.iter().filter(|z| z.contains(pos)).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use skyfleet_types::{Rect, ZoneType};

    use super::*;

    fn fire_zone(id: &str, rect: Rect) -> Zone {
        Zone {
            id: id.to_owned(),
            name: format!("Zone-{id}"),
            zone_type: ZoneType::FireRisk,
            rect,
        }
    }

    #[test]
    fn rejects_non_positive_size() {
        assert!(Map2D::new(0.0, 100.0).is_err());
        assert!(Map2D::new(100.0, -1.0).is_err());
        assert!(Map2D::new(100.0, 100.0).is_ok());
    }

    #[test]
    fn bounds_start_at_origin() {
        let map = Map2D::new(100.0, 50.0).unwrap();
        assert_eq!(map.bounds(), (0.0, 100.0, 0.0, 50.0));
    }

    #[test]
    fn rejects_malformed_rect() {
        let mut map = Map2D::new(100.0, 100.0).unwrap();
        let result = map.add_zone(fire_zone("z1", Rect::new(10.0, 5.0, 0.0, 1.0)));
        assert!(matches!(result, Err(WorldError::InvalidRect { .. })));
    }

    #[test]
    fn rejects_duplicate_zone_id() {
        let mut map = Map2D::new(100.0, 100.0).unwrap();
        map.add_zone(fire_zone("z1", Rect::new(0.0, 1.0, 0.0, 1.0)))
            .unwrap();
        let result = map.add_zone(fire_zone("z1", Rect::new(2.0, 3.0, 2.0, 3.0)));
        assert!(matches!(result, Err(WorldError::DuplicateZone { .. })));
    }

    #[test]
    fn zones_at_filters_by_containment() {
        let mut map = Map2D::new(100.0, 100.0).unwrap();
        map.add_zone(fire_zone("z1", Rect::new(0.0, 10.0, 0.0, 10.0)))
            .unwrap();
        map.add_zone(fire_zone("z2", Rect::new(5.0, 15.0, 5.0, 15.0)))
            .unwrap();

        let hits = map.zones_at(Vec2::new(7.0, 7.0));
        assert_eq!(hits.len(), 2);
        let hits = map.zones_at(Vec2::new(1.0, 1.0));
        assert_eq!(hits.len(), 1);
        let hits = map.zones_at(Vec2::new(50.0, 50.0));
        assert!(hits.is_empty());
    }
}
