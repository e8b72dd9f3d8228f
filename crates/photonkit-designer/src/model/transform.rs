use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use photonkit_core::normalize_degrees;

use super::Point;

/// Mirror line used by [`Transform::reflection`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReflectAxis {
    /// Mirror across the horizontal line through the origin point (flips y)
    Horizontal,
    /// Mirror across the vertical line through the origin point (flips x)
    Vertical,
}

/// Planar affine transform stored as a homogeneous 3x3 matrix.
///
/// Only rigid motions and mirrors are constructed by the layout API, so port
/// widths never need rescaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    m: Matrix3<f64>,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            m: Matrix3::identity(),
        }
    }

    pub fn translation(dx: f64, dy: f64) -> Self {
        Self {
            m: Matrix3::new(1.0, 0.0, dx, 0.0, 1.0, dy, 0.0, 0.0, 1.0),
        }
    }

    /// Counter-clockwise rotation by `angle_deg` about `origin`
    pub fn rotation(angle_deg: f64, origin: Point) -> Self {
        let (s, c) = angle_deg.to_radians().sin_cos();
        let rotate = Matrix3::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0);
        Self::about(rotate, origin)
    }

    pub fn reflection(axis: ReflectAxis, origin: Point) -> Self {
        let mirror = match axis {
            ReflectAxis::Horizontal => Matrix3::new(1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0),
            ReflectAxis::Vertical => Matrix3::new(-1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0),
        };
        Self::about(mirror, origin)
    }

    fn about(linear: Matrix3<f64>, origin: Point) -> Self {
        let to_origin = Transform::translation(-origin.x, -origin.y).m;
        let back = Transform::translation(origin.x, origin.y).m;
        Self {
            m: back * linear * to_origin,
        }
    }

    /// Apply `self` first, then `next`
    pub fn then(&self, next: &Transform) -> Transform {
        Transform { m: next.m * self.m }
    }

    pub fn apply(&self, p: Point) -> Point {
        let v = self.m * Vector3::new(p.x, p.y, 1.0);
        Point::new(v.x, v.y)
    }

    /// Map a direction given in degrees, result normalized into `[0, 360)`
    pub fn apply_angle(&self, angle_deg: f64) -> f64 {
        let (s, c) = angle_deg.to_radians().sin_cos();
        let dx = self.m[(0, 0)] * c + self.m[(0, 1)] * s;
        let dy = self.m[(1, 0)] * c + self.m[(1, 1)] * s;
        normalize_degrees(dy.atan2(dx).to_degrees())
    }

    /// Whether the transform flips orientation (mirror)
    pub fn is_reflection(&self) -> bool {
        let det = self.m[(0, 0)] * self.m[(1, 1)] - self.m[(0, 1)] * self.m[(1, 0)];
        det < 0.0
    }
}
