use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use photonkit_core::normalize_degrees;

use super::{Point, Transform};

/// Named ports of a layout, in authoring order
pub type PortMap = IndexMap<String, Port>;

/// Attachment point of a layout.
///
/// `a` is the direction the port faces in degrees, `0` pointing towards `+x`.
/// A waveguide input faces away from the waveguide body, so the left end of a
/// straight guide has `a = 180`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Port {
    pub x: f64,
    pub y: f64,
    pub a: f64,
    pub w: f64,
}

impl Port {
    pub fn new(x: f64, y: f64, a: f64, w: f64) -> Self {
        Self {
            x,
            y,
            a: normalize_degrees(a),
            w,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn transformed(&self, t: &Transform) -> Port {
        let p = t.apply(self.position());
        Port {
            x: p.x,
            y: p.y,
            a: t.apply_angle(self.a),
            w: self.w,
        }
    }

    /// Same location facing the other way
    pub fn opposite(&self) -> Port {
        Port::new(self.x, self.y, self.a + 180.0, self.w)
    }
}
