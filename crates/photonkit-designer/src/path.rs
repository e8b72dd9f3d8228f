//! Sweeping curves into waveguide polygons.

use serde::{Deserialize, Serialize};

use photonkit_core::{GeometryError, Result, ValidationError};

use crate::curves::{self, local_radii, Curve};
use crate::model::{Point, Port, Region};
use crate::pattern::Pattern;

/// Waveguide width along a curve.
///
/// `Taper` holds polynomial coefficients in the normalized arc length
/// `t in [0, 1]`, lowest order first: `w(t) = c0 + c1 t + c2 t^2 + ...`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Width {
    Constant(f64),
    Taper(Vec<f64>),
}

impl Width {
    /// Linear taper from `w0` to `w1`
    pub fn linear(w0: f64, w1: f64) -> Self {
        Width::Taper(vec![w0, w1 - w0])
    }

    /// Quadratic taper from `w0` to `w1` that is flat at `t = 0`
    pub fn quadratic(w0: f64, w1: f64) -> Self {
        Width::Taper(vec![w0, 0.0, w1 - w0])
    }

    pub fn at(&self, t: f64) -> f64 {
        match self {
            Width::Constant(w) => *w,
            Width::Taper(coeffs) => coeffs.iter().rev().fold(0.0, |acc, c| acc * t + c),
        }
    }
}

impl From<f64> for Width {
    fn from(w: f64) -> Self {
        Width::Constant(w)
    }
}

impl Curve {
    /// Sweep the curve by `width` into one region per segment.
    ///
    /// The returned pattern carries `a0` at the start, facing back along the
    /// curve, and `b0` at the end, facing forward, each with the local width.
    pub fn path(&self, width: impl Into<Width>) -> Result<Pattern> {
        let width = width.into();
        let total = self.length();
        if total <= 0.0 {
            return Err(GeometryError::Degenerate("cannot sweep a zero-length curve".to_string()).into());
        }

        let mut regions = Vec::with_capacity(self.segments().len());
        let mut travelled = 0.0;
        for segment in self.segments() {
            let points = segment.points();
            let angles = segment.angles();

            let mut ts = Vec::with_capacity(points.len());
            let mut s = travelled;
            ts.push(s / total);
            for w in points.windows(2) {
                s += w[0].distance_to(&w[1]);
                ts.push(s / total);
            }
            travelled = s;

            for (i, radius) in local_radii(segment).enumerate() {
                let half = width.at(ts[i]).max(width.at(ts[i + 1])) / 2.0;
                if half > radius {
                    return Err(GeometryError::WidthExceedsRadius {
                        width: 2.0 * half,
                        radius,
                    }
                    .into());
                }
            }

            let mut left = Vec::with_capacity(points.len());
            let mut right = Vec::with_capacity(points.len());
            for ((p, a), t) in points.iter().zip(angles).zip(&ts) {
                let half = width.at(*t) / 2.0;
                ValidationError::require_positive("width", 2.0 * half)?;
                let (nx, ny) = (-a.sin(), a.cos());
                left.push(Point::new(p.x + nx * half, p.y + ny * half));
                right.push(Point::new(p.x - nx * half, p.y - ny * half));
            }
            left.extend(right.into_iter().rev());
            regions.push(Region::new(left));
        }

        let start = self.start();
        let end = self.end();
        let mut pattern = Pattern::from_regions(regions);
        pattern.set_port(
            "a0",
            Port::new(start.x, start.y, self.start_angle().to_degrees() + 180.0, width.at(0.0)),
        );
        pattern.set_port(
            "b0",
            Port::new(end.x, end.y, self.end_angle().to_degrees(), width.at(1.0)),
        );
        Ok(pattern)
    }
}

/// Straight waveguide of `length` whose width tapers linearly from `w0` to `w1`
pub fn taper(length: f64, w0: f64, w1: f64) -> Result<Pattern> {
    ValidationError::require_positive("w0", w0)?;
    ValidationError::require_positive("w1", w1)?;
    curves::straight(length)?.path(Width::linear(w0, w1))
}
