//! Straight-line motion primitives.

use skyfleet_types::Vec2;

/// Advance `pos` towards `target` by at most `speed * dt` meters.
///
/// Returns the new position and whether the target was reached this
/// step. When the remaining distance is within reach the position
/// snaps exactly onto the target, so a drone never oscillates around
/// its goal.
pub fn move_towards(pos: Vec2, target: Vec2, speed: f64, dt: f64) -> (Vec2, bool) {
    let delta = target - pos;
    let dist = delta.norm();
    let reach = speed * dt;
    if dist <= reach {
        return (target, true);
    }
    (pos + delta.normalized() * reach, false)
}

/// Clamp a position into the rectangle `(xmin, xmax, ymin, ymax)`.
pub fn clamp_to_bounds(pos: Vec2, bounds: (f64, f64, f64, f64)) -> Vec2 {
    let (xmin, xmax, ymin, ymax) = bounds;
    Vec2::new(pos.x.clamp(xmin, xmax), pos.y.clamp(ymin, ymax))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_by_speed_times_dt() {
        let (pos, arrived) = move_towards(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), 1.6, 0.2);
        assert!(!arrived);
        assert!((pos.x - 0.32).abs() < 1e-12);
        assert!(pos.y.abs() < 1e-12);
    }

    #[test]
    fn snaps_onto_target_within_reach() {
        let (pos, arrived) = move_towards(Vec2::new(9.9, 0.0), Vec2::new(10.0, 0.0), 1.6, 0.2);
        assert!(arrived);
        assert!((pos.x - 10.0).abs() < 1e-12);
    }

    #[test]
    fn zero_distance_is_an_arrival() {
        let here = Vec2::new(3.0, 4.0);
        let (pos, arrived) = move_towards(here, here, 1.6, 0.2);
        assert!(arrived);
        assert!((pos.x - 3.0).abs() < 1e-12 && (pos.y - 4.0).abs() < 1e-12);
    }

    #[test]
    fn clamps_into_world() {
        let pos = clamp_to_bounds(Vec2::new(-5.0, 120.0), (0.0, 100.0, 0.0, 100.0));
        assert!((pos.x - 0.0).abs() < 1e-12);
        assert!((pos.y - 100.0).abs() < 1e-12);
    }
}
