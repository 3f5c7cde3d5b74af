//! 2D geometry primitives: vectors and axis-aligned rectangles.
//!
//! Positions, waypoints, and zone rectangles all live in a flat 2D plane
//! measured in metres. [`Vec2`] is a plain value type with the handful of
//! operations the kinematics code needs; [`Rect`] is an axis-aligned
//! rectangle with inclusive containment used for zone geometry.

use serde::{Deserialize, Serialize};

/// Length below which a vector is treated as zero when normalizing.
const NORM_EPSILON: f64 = 1e-9;

/// A 2D point or displacement in metres.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vec2 {
    /// Create a vector from its components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length of the vector.
    pub fn norm(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector in the same direction, or the zero vector when the
    /// length is below [`NORM_EPSILON`].
    pub fn normalized(self) -> Self {
        let n = self.norm();
        if n <= NORM_EPSILON {
            Self::new(0.0, 0.0)
        } else {
            Self::new(self.x / n, self.y / n)
        }
    }

    /// Euclidean distance to another point.
    pub fn dist(self, other: Self) -> f64 {
        (other - self).norm()
    }
}

impl core::ops::Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl core::ops::Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl core::ops::Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k)
    }
}

/// An axis-aligned rectangle with inclusive bounds.
///
/// A well-formed rectangle satisfies `xmin <= xmax` and `ymin <= ymax`;
/// [`Rect::is_ordered`] checks this and the world crate rejects malformed
/// rectangles when zones are registered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub xmin: f64,
    /// Right edge.
    pub xmax: f64,
    /// Bottom edge.
    pub ymin: f64,
    /// Top edge.
    pub ymax: f64,
}

impl Rect {
    /// Create a rectangle from its edges.
    pub const fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    /// Whether the edge ordering invariant holds.
    pub fn is_ordered(&self) -> bool {
        self.xmin <= self.xmax && self.ymin <= self.ymax
    }

    /// Inclusive point-in-rectangle test.
    pub fn contains(&self, p: Vec2) -> bool {
        (self.xmin <= p.x && p.x <= self.xmax) && (self.ymin <= p.y && p.y <= self.ymax)
    }

    /// Geometric center of the rectangle.
    pub fn center(&self) -> Vec2 {
        Vec2::new((self.xmin + self.xmax) / 2.0, (self.ymin + self.ymax) / 2.0)
    }

    /// Half the diagonal length: the maximum distance from the center to
    /// any contained point. Zero for a degenerate (point) rectangle.
    pub fn half_diagonal(&self) -> f64 {
        Vec2::new(self.xmax - self.xmin, self.ymax - self.ymin).norm() / 2.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn vector_arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(b - a, Vec2::new(2.0, -3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
    }

    #[test]
    fn norm_and_dist() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.norm() - 5.0).abs() < 1e-12);
        assert!((Vec2::new(0.0, 0.0).dist(v) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn normalized_zero_vector_is_zero() {
        let z = Vec2::new(0.0, 0.0).normalized();
        assert_eq!(z, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn normalized_has_unit_length() {
        let v = Vec2::new(10.0, -7.0).normalized();
        assert!((v.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rect_contains_is_inclusive() {
        let r = Rect::new(0.0, 10.0, 0.0, 10.0);
        assert!(r.contains(Vec2::new(0.0, 0.0)));
        assert!(r.contains(Vec2::new(10.0, 10.0)));
        assert!(r.contains(Vec2::new(5.0, 5.0)));
        assert!(!r.contains(Vec2::new(10.0001, 5.0)));
        assert!(!r.contains(Vec2::new(5.0, -0.0001)));
    }

    #[test]
    fn rect_center_and_half_diagonal() {
        let r = Rect::new(42.0, 58.0, 42.0, 58.0);
        assert_eq!(r.center(), Vec2::new(50.0, 50.0));
        let expected = Vec2::new(16.0, 16.0).norm() / 2.0;
        assert!((r.half_diagonal() - expected).abs() < 1e-12);
    }

    #[test]
    fn rect_ordering_check() {
        assert!(Rect::new(0.0, 1.0, 0.0, 1.0).is_ordered());
        assert!(Rect::new(1.0, 1.0, 2.0, 2.0).is_ordered());
        assert!(!Rect::new(2.0, 1.0, 0.0, 1.0).is_ordered());
        assert!(!Rect::new(0.0, 1.0, 3.0, 1.0).is_ordered());
    }

    #[test]
    fn degenerate_rect_half_diagonal_is_zero() {
        let r = Rect::new(5.0, 5.0, 5.0, 5.0);
        assert_eq!(r.half_diagonal(), 0.0);
        assert!(r.contains(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn vec2_serializes_as_xy_object() {
        let v = Vec2::new(1.5, -2.5);
        let json = serde_json::to_value(v).unwrap();
        assert_eq!(json, serde_json::json!({"x": 1.5, "y": -2.5}));
    }
}
