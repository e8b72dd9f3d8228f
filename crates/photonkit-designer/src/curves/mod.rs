//! Parametric waveguide trajectories.
//!
//! A [`Curve`] is an ordered list of [`CurveSegment`]s, each a polyline with
//! the tangent heading (radians) at every sample. Curves are built in a local
//! frame starting at the origin heading along `+x` and are chained with
//! [`Curve::link`], which places each curve at the end of the previous one.

mod euler;
mod grating;

use lyon::geom::{point, CubicBezierSegment};
use serde::{Deserialize, Serialize};
use tracing::debug;

use photonkit_core::{GeometryError, Result, ValidationError};

use crate::model::{Point, Transform};

pub use euler::turn;
pub use grating::{grating_arc, GratingArc, GratingArcParams};

const BEZIER_SAMPLES: usize = 64;
const SBEND_BISECTION_STEPS: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSegment {
    points: Vec<Point>,
    angles: Vec<f64>,
}

impl CurveSegment {
    /// Sample points with their tangent headings in radians
    pub fn new(points: Vec<Point>, angles: Vec<f64>) -> Result<Self> {
        if points.len() < 2 || points.len() != angles.len() {
            return Err(GeometryError::Degenerate(format!(
                "curve segment needs at least two samples with one heading each, got {} points and {} headings",
                points.len(),
                angles.len()
            ))
            .into());
        }
        Ok(Self { points, angles })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    /// Polyline length
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
    }

    fn transformed(&self, t: &Transform) -> CurveSegment {
        CurveSegment {
            points: self.points.iter().map(|p| t.apply(*p)).collect(),
            angles: self
                .angles
                .iter()
                .map(|a| wrap_angle(t.apply_angle(a.to_degrees()).to_radians()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    segments: Vec<CurveSegment>,
}

impl Curve {
    pub fn from_segment(segment: CurveSegment) -> Self {
        Self {
            segments: vec![segment],
        }
    }

    /// Chain curves head to tail; each curve is rigidly moved so its start
    /// sits on the previous end with a matching heading.
    pub fn link(curves: impl IntoIterator<Item = Curve>) -> Result<Curve> {
        let mut iter = curves.into_iter();
        let first = iter
            .next()
            .ok_or_else(|| GeometryError::Degenerate("cannot link an empty list of curves".to_string()))?;
        Ok(iter.fold(first, Curve::then))
    }

    /// Append `next` at the end of this curve
    pub fn then(mut self, next: Curve) -> Curve {
        let start = next.start();
        let turn = (self.end_angle() - next.start_angle()).to_degrees();
        let end = self.end();
        let t = Transform::translation(-start.x, -start.y)
            .then(&Transform::rotation(turn, Point::origin()))
            .then(&Transform::translation(end.x, end.y));
        self.segments
            .extend(next.segments.iter().map(|s| s.transformed(&t)));
        self
    }

    /// Collapse all segments into one, dropping the shared junction samples
    pub fn merged(self) -> Curve {
        let mut points: Vec<Point> = Vec::new();
        let mut angles = Vec::new();
        for segment in self.segments {
            let skip = usize::from(!points.is_empty());
            points.extend(segment.points.into_iter().skip(skip));
            angles.extend(segment.angles.into_iter().skip(skip));
        }
        Curve::from_segment(CurveSegment { points, angles })
    }

    pub fn segments(&self) -> &[CurveSegment] {
        &self.segments
    }

    pub fn start(&self) -> Point {
        self.segments[0].points[0]
    }

    pub fn end(&self) -> Point {
        let last = &self.segments[self.segments.len() - 1];
        last.points[last.points.len() - 1]
    }

    pub fn start_angle(&self) -> f64 {
        self.segments[0].angles[0]
    }

    pub fn end_angle(&self) -> f64 {
        let last = &self.segments[self.segments.len() - 1];
        last.angles[last.angles.len() - 1]
    }

    pub fn length(&self) -> f64 {
        self.segments.iter().map(CurveSegment::length).sum()
    }

    pub fn transformed(&self, t: &Transform) -> Curve {
        Curve {
            segments: self.segments.iter().map(|s| s.transformed(t)).collect(),
        }
    }

    /// Smallest local radius of curvature estimated from consecutive samples
    pub fn min_radius(&self) -> f64 {
        self.segments
            .iter()
            .flat_map(|s| local_radii(s))
            .fold(f64::INFINITY, f64::min)
    }
}

pub(crate) fn local_radii(segment: &CurveSegment) -> impl Iterator<Item = f64> + '_ {
    segment
        .points
        .windows(2)
        .zip(segment.angles.windows(2))
        .map(|(p, a)| {
            let turn = wrap_angle(a[1] - a[0]).abs();
            if turn < 1e-12 {
                f64::INFINITY
            } else {
                p[0].distance_to(&p[1]) / turn
            }
        })
}

// Headings are kept in (-pi, pi] so straight runs read as zero.
fn wrap_angle(a: f64) -> f64 {
    a.sin().atan2(a.cos())
}

/// Straight segment along `+x`
pub fn straight(length: f64) -> Result<Curve> {
    ValidationError::require_positive("length", length)?;
    CurveSegment::new(
        vec![Point::origin(), Point::new(length, 0.0)],
        vec![0.0, 0.0],
    )
    .map(Curve::from_segment)
}

/// Lateral offset of `height` made of two opposite bends, as one segment.
///
/// The bend angle is solved for the requested offset. When the offset exceeds
/// what two 90 degree bends provide, a vertical straight is inserted between
/// them.
pub fn sbend(radius: f64, height: f64, euler: f64) -> Result<Curve> {
    ValidationError::require_positive("radius", radius)?;
    if !height.is_finite() || height == 0.0 {
        return Err(ValidationError::InvalidValue {
            param: "height".to_string(),
            reason: format!("s-bend offset must be non-zero, got {}", height),
        }
        .into());
    }
    let sign = height.signum();
    let target = height.abs();

    let quarter = turn(radius, 90.0, euler)?.end().y;
    if 2.0 * quarter <= target {
        let mut parts = vec![turn(radius, sign * 90.0, euler)?];
        if target - 2.0 * quarter > 1e-9 {
            parts.push(straight(target - 2.0 * quarter)?);
        }
        parts.push(turn(radius, -sign * 90.0, euler)?);
        return Curve::link(parts).map(Curve::merged);
    }

    let (mut lo, mut hi) = (0.0_f64, 90.0_f64);
    for _ in 0..SBEND_BISECTION_STEPS {
        let mid = (lo + hi) / 2.0;
        if 2.0 * turn(radius, mid, euler)?.end().y < target {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    let angle = (lo + hi) / 2.0;
    debug!("sbend of {} solved with {} degree bends", height, angle);
    Curve::link([
        turn(radius, sign * angle, euler)?,
        turn(radius, -sign * angle, euler)?,
    ])
    .map(Curve::merged)
}

/// Cubic bezier s-bend spanning `length` along `x` and `height` along `y`
/// with horizontal tangents at both ends.
pub fn bezier_sbend(length: f64, height: f64) -> Result<Curve> {
    ValidationError::require_positive("length", length)?;
    let bezier = CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(length / 2.0, 0.0),
        ctrl2: point(length / 2.0, height),
        to: point(length, height),
    };
    let (points, angles): (Vec<Point>, Vec<f64>) = (0..=BEZIER_SAMPLES)
        .map(|i| {
            let t = i as f64 / BEZIER_SAMPLES as f64;
            let p = bezier.sample(t);
            let d = bezier.derivative(t);
            (Point::new(p.x, p.y), d.y.atan2(d.x))
        })
        .unzip();
    CurveSegment::new(points, angles).map(Curve::from_segment)
}

/// Directional coupler arm: bend in by `dy`, run parallel for `interaction_l`
/// and bend back out.
pub fn dc(radius: f64, dy: f64, interaction_l: f64, euler: f64) -> Result<Curve> {
    ValidationError::require_positive("interaction_l", interaction_l)?;
    Curve::link([
        sbend(radius, dy, euler)?,
        straight(interaction_l)?,
        sbend(radius, -dy, euler)?,
    ])
}

/// Directional coupler arm built from bezier s-bends of length `bend_l`
pub fn bezier_dc(bend_l: f64, dy: f64, interaction_l: f64) -> Result<Curve> {
    ValidationError::require_positive("interaction_l", interaction_l)?;
    Curve::link([
        bezier_sbend(bend_l, dy)?,
        straight(interaction_l)?,
        bezier_sbend(bend_l, -dy)?,
    ])
}
