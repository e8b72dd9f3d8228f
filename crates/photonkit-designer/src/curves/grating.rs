//! Radiating arcs of focusing grating couplers.
//!
//! Tooth `m` lies on the ellipse solving the grating equation
//! `r(θ) = q λ / (n_core - n_clad sin(φ) cos(θ))` with `q = m` on the inner
//! edge and `q = m + duty_cycle` on the outer edge, where `φ` is the fiber
//! angle and `θ` the in-plane angle from the grating axis.

use serde::{Deserialize, Serialize};

use photonkit_core::{Result, ValidationError};

use crate::model::{Point, Region};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GratingArcParams {
    /// Opening angle of the grating in degrees
    pub angle: f64,
    pub duty_cycle: f64,
    pub n_core: f64,
    pub n_clad: f64,
    /// Fiber tilt from the surface normal in degrees
    pub fiber_angle: f64,
    pub wavelength: f64,
    pub num_evaluations: usize,
}

impl GratingArcParams {
    pub fn validate(&self) -> Result<()> {
        ValidationError::require_open_range("angle", self.angle, 0.0, 180.0)?;
        ValidationError::require_open_range("duty_cycle", self.duty_cycle, 0.0, 1.0)?;
        ValidationError::require_positive("n_core", self.n_core)?;
        ValidationError::require_positive("n_clad", self.n_clad)?;
        ValidationError::require_positive("wavelength", self.wavelength)?;
        ValidationError::require_closed_range("fiber_angle", self.fiber_angle, 0.0, 90.0)?;
        if self.num_evaluations < 2 {
            return Err(ValidationError::InvalidValue {
                param: "num_evaluations".to_string(),
                reason: format!("need at least two samples per arc, got {}", self.num_evaluations),
            }
            .into());
        }
        if self.n_core <= self.n_clad * self.fiber_angle.to_radians().sin() {
            return Err(ValidationError::InvalidValue {
                param: "n_core".to_string(),
                reason: format!(
                    "core index {} does not exceed the projected cladding index",
                    self.n_core
                ),
            }
            .into());
        }
        Ok(())
    }

    /// Radius of the grating ellipse of order `q` at in-plane angle `theta`
    /// (radians)
    pub fn radius(&self, q: f64, theta: f64) -> f64 {
        let projected = self.n_clad * self.fiber_angle.to_radians().sin() * theta.cos();
        q * self.wavelength / (self.n_core - projected)
    }

    fn arc(&self, q: f64) -> Vec<Point> {
        let half = self.angle.to_radians() / 2.0;
        let n = self.num_evaluations - 1;
        (0..=n)
            .map(|i| {
                let theta = -half + 2.0 * half * i as f64 / n as f64;
                let r = self.radius(q, theta);
                Point::new(r * theta.cos(), r * theta.sin())
            })
            .collect()
    }
}

/// One grating tooth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GratingArc {
    /// Inner edge from `-angle/2` to `+angle/2`
    pub inner: Vec<Point>,
    /// Outer edge from `-angle/2` to `+angle/2`
    pub outer: Vec<Point>,
}

impl GratingArc {
    pub fn region(&self) -> Region {
        let ring = self
            .inner
            .iter()
            .chain(self.outer.iter().rev())
            .copied()
            .collect();
        Region::new(ring)
    }

    /// Wedge from the apex at the origin out to the inner edge
    pub fn sector(&self) -> Region {
        let ring = std::iter::once(Point::origin())
            .chain(self.inner.iter().copied())
            .collect();
        Region::new(ring)
    }
}

/// Tooth of period index `m`
pub fn grating_arc(params: &GratingArcParams, m: usize) -> Result<GratingArc> {
    params.validate()?;
    ValidationError::require_positive("period_index", m as f64)?;
    let q = m as f64;
    Ok(GratingArc {
        inner: params.arc(q),
        outer: params.arc(q + params.duty_cycle),
    })
}
