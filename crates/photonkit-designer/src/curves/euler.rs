//! Partial Euler bends.
//!
//! Curvature grows linearly from zero over the first `euler / 2` fraction of
//! the turn, holds at the minimum radius over the circular middle section and
//! ramps back down symmetrically. `euler = 0` is a circular arc and
//! `euler = 1` is a full Euler (clothoid) bend with no circular section.

use std::f64::consts::FRAC_PI_2;

use photonkit_core::{Result, ValidationError};

use super::{Curve, CurveSegment};
use crate::model::Point;

const SAMPLES_PER_RADIAN: f64 = 40.0;
const SIMPSON_SUBSTEPS: usize = 8;

/// Bend through `angle` degrees (positive turns left) whose minimum radius
/// of curvature is `radius`.
pub fn turn(radius: f64, angle: f64, euler: f64) -> Result<Curve> {
    ValidationError::require_positive("radius", radius)?;
    ValidationError::require_closed_range("euler", euler, 0.0, 1.0)?;
    if !angle.is_finite() || angle == 0.0 || angle.abs() > 360.0 {
        return Err(ValidationError::InvalidValue {
            param: "angle".to_string(),
            reason: format!("turn angle must be non-zero and within 360 degrees, got {}", angle),
        }
        .into());
    }

    let alpha = angle.abs().to_radians();
    let (half_points, half_headings) = if euler == 0.0 {
        circular_half(alpha)
    } else {
        euler_half(alpha, euler)
    };
    let (points, headings) = mirror_half(&half_points, &half_headings, alpha);

    let sign = angle.signum();
    let points = points
        .into_iter()
        .map(|p| Point::new(p.x * radius, sign * p.y * radius))
        .collect();
    let headings = headings.into_iter().map(|h| sign * h).collect();
    CurveSegment::new(points, headings).map(Curve::from_segment)
}

fn sample_count(sweep: f64) -> usize {
    ((sweep * SAMPLES_PER_RADIAN).ceil() as usize).max(8)
}

// First half of a unit-radius circular arc.
fn circular_half(alpha: f64) -> (Vec<Point>, Vec<f64>) {
    let n = sample_count(alpha / 2.0);
    (0..=n)
        .map(|i| {
            let h = alpha / 2.0 * i as f64 / n as f64;
            (Point::new(h.sin(), 1.0 - h.cos()), h)
        })
        .unzip()
}

// First half of a partial Euler bend, scaled so the circular section has unit
// radius.
fn euler_half(alpha: f64, p: f64) -> (Vec<Point>, Vec<f64>) {
    let rp = 1.0 / (p * alpha).sqrt();
    let sp = (p * alpha).sqrt();
    let s_half = sp + rp * alpha * (1.0 - p) / 2.0;

    let n_total = sample_count(alpha / 2.0);
    let n_spiral = ((n_total as f64 * sp / s_half).ceil() as usize).max(2);
    let n_arc = n_total.saturating_sub(n_spiral).max(1);

    let mut points = vec![Point::origin()];
    let mut headings = vec![0.0];

    let ds = sp / n_spiral as f64;
    let (mut x, mut y) = (0.0, 0.0);
    for i in 1..=n_spiral {
        let s0 = ds * (i - 1) as f64;
        x += simpson(|t| (t * t / 2.0).cos(), s0, s0 + ds);
        y += simpson(|t| (t * t / 2.0).sin(), s0, s0 + ds);
        let s = s0 + ds;
        points.push(Point::new(x, y));
        headings.push(s * s / 2.0);
    }

    if s_half - sp > 1e-12 {
        let h0 = p * alpha / 2.0;
        let dx = x - rp * h0.sin();
        let dy = y - rp * (1.0 - h0.cos());
        for k in 1..=n_arc {
            let s = sp + (s_half - sp) * k as f64 / n_arc as f64;
            let h = h0 + (s - sp) / rp;
            points.push(Point::new(rp * h.sin() + dx, rp * (1.0 - h.cos()) + dy));
            headings.push(h);
        }
    }

    let scale = 1.0 / rp;
    let points = points
        .into_iter()
        .map(|p| Point::new(p.x * scale, p.y * scale))
        .collect();
    (points, headings)
}

fn simpson(f: impl Fn(f64) -> f64, a: f64, b: f64) -> f64 {
    let n = SIMPSON_SUBSTEPS;
    let h = (b - a) / n as f64;
    let mut sum = f(a) + f(b);
    for i in 1..n {
        let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
        sum += weight * f(a + h * i as f64);
    }
    sum * h / 3.0
}

// Completes a bend by reflecting its first half across the line through the
// midpoint whose normal points along the midpoint heading.
fn mirror_half(points: &[Point], headings: &[f64], alpha: f64) -> (Vec<Point>, Vec<f64>) {
    let mut out_points = points.to_vec();
    let mut out_headings = headings.to_vec();
    let Some(&mid) = points.last() else {
        return (out_points, out_headings);
    };

    let line = alpha / 2.0 + FRAC_PI_2;
    let (dy, dx) = line.sin_cos();
    for i in (0..points.len().saturating_sub(1)).rev() {
        let vx = points[i].x - mid.x;
        let vy = points[i].y - mid.y;
        let along = vx * dx + vy * dy;
        out_points.push(Point::new(
            mid.x + 2.0 * along * dx - vx,
            mid.y + 2.0 * along * dy - vy,
        ));
        out_headings.push(alpha - headings[i]);
    }
    (out_points, out_headings)
}
