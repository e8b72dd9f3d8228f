//! Polygon algebra on [`Region`] lists.
//!
//! Booleans go through `csgrs` sketches and isotropic offsets through
//! `cavalier_contours`; both return freshly built regions.

use cavalier_contours::polyline::{PlineSource, PlineSourceMut, PlineVertex, Polyline};
use csgrs::sketch::Sketch;
use csgrs::traits::CSG;
use std::f64::consts::PI;
use tracing::debug;

use crate::model::{Bounds, Point, Region};

const ARC_STEP: f64 = PI / 32.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    Union,
    Difference,
    Intersection,
}

fn ring_coords(ring: &[Point]) -> Vec<[f64; 2]> {
    ring.iter().map(|p| p.to_array()).collect()
}

fn to_sketch(regions: &[Region]) -> Sketch<()> {
    let mut sketch = Sketch::new();
    for region in regions.iter().filter(|r| r.exterior.len() >= 3) {
        let mut part = Sketch::polygon(&ring_coords(&region.exterior), None);
        for hole in region.holes.iter().filter(|h| h.len() >= 3) {
            part = part.difference(&Sketch::polygon(&ring_coords(hole), None));
        }
        sketch = sketch.union(&part);
    }
    sketch
}

fn from_sketch(sketch: &Sketch<()>) -> Vec<Region> {
    let mp = sketch.to_multipolygon();
    let mut regions = Vec::new();
    for poly in mp.0.iter() {
        let exterior: Vec<Point> = poly
            .exterior()
            .0
            .iter()
            .map(|c| Point::new(c.x, c.y))
            .collect();
        let mut holes = Vec::new();
        for interior in poly.interiors() {
            holes.push(interior.0.iter().map(|c| Point::new(c.x, c.y)).collect());
        }
        let region = Region::with_holes(exterior, holes);
        if region.exterior.len() >= 3 {
            regions.push(region);
        }
    }
    regions
}

pub fn boolean(a: &[Region], b: &[Region], op: BooleanOp) -> Vec<Region> {
    let sketch_a = to_sketch(a);
    let sketch_b = to_sketch(b);

    let result = match op {
        BooleanOp::Union => sketch_a.union(&sketch_b),
        BooleanOp::Difference => sketch_a.difference(&sketch_b),
        BooleanOp::Intersection => sketch_a.intersection(&sketch_b),
    };

    let regions = from_sketch(&result);
    debug!(
        "{:?}: {} + {} regions -> {} regions",
        op,
        a.len(),
        b.len(),
        regions.len()
    );
    regions
}

/// Merge overlapping regions into disjoint ones
pub fn union_all(regions: &[Region]) -> Vec<Region> {
    from_sketch(&to_sketch(regions))
}

pub fn union(a: &[Region], b: &[Region]) -> Vec<Region> {
    boolean(a, b, BooleanOp::Union)
}

pub fn difference(a: &[Region], b: &[Region]) -> Vec<Region> {
    boolean(a, b, BooleanOp::Difference)
}

pub fn intersection(a: &[Region], b: &[Region]) -> Vec<Region> {
    boolean(a, b, BooleanOp::Intersection)
}

// Closed polyline wound clockwise so a positive offset grows the ring.
fn to_polyline(ring: &[Point]) -> Polyline {
    let mut points = ring.to_vec();
    let mut signed_area = 0.0;
    for i in 0..points.len() {
        let p1 = points[i];
        let p2 = points[(i + 1) % points.len()];
        signed_area += p1.x * p2.y - p2.x * p1.y;
    }
    if signed_area > 0.0 {
        points.reverse();
    }

    let mut polyline = Polyline::new();
    for p in points {
        polyline.add_vertex(PlineVertex::new(p.x, p.y, 0.0));
    }
    polyline.set_is_closed(true);
    polyline
}

// Offset results carry arc segments as vertex bulges; sample them into lines.
fn flatten_polyline(polyline: &Polyline) -> Vec<Point> {
    let vertices = &polyline.vertex_data;
    let n = vertices.len();
    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let v1 = vertices[i];
        let v2 = vertices[(i + 1) % n];
        let p1 = Point::new(v1.x, v1.y);
        points.push(p1);
        if v1.bulge.abs() < 1e-12 {
            continue;
        }

        let p2 = Point::new(v2.x, v2.y);
        let chord = p1.distance_to(&p2);
        if chord < 1e-12 {
            continue;
        }
        let sweep = 4.0 * v1.bulge.atan();
        let (ux, uy) = ((p2.x - p1.x) / chord, (p2.y - p1.y) / chord);
        let offset = chord * (1.0 - v1.bulge * v1.bulge) / (4.0 * v1.bulge);
        let center = Point::new(
            (p1.x + p2.x) / 2.0 - uy * offset,
            (p1.y + p2.y) / 2.0 + ux * offset,
        );
        let radius = center.distance_to(&p1);
        let start = (p1.y - center.y).atan2(p1.x - center.x);
        let steps = ((sweep.abs() / ARC_STEP).ceil() as usize).max(2);
        for k in 1..steps {
            let a = start + sweep * k as f64 / steps as f64;
            points.push(Point::new(
                center.x + radius * a.cos(),
                center.y + radius * a.sin(),
            ));
        }
    }
    points
}

/// Grow (`distance > 0`) or shrink (`distance < 0`) the union of `regions`
/// isotropically.
///
/// Convex corners of grown regions are rounded. Parts that vanish under a
/// negative offset are dropped.
pub fn buffer(regions: &[Region], distance: f64) -> Vec<Region> {
    if distance == 0.0 {
        return union_all(regions);
    }

    let shape = union_all(regions);
    let mut grown = Vec::new();
    let mut cut = Vec::new();
    for region in shape.iter().filter(|r| r.exterior.len() >= 3) {
        for pline in to_polyline(&region.exterior).parallel_offset(distance) {
            grown.push(Region::new(flatten_polyline(&pline)));
        }
        for hole in region.holes.iter().filter(|h| h.len() >= 3) {
            for pline in to_polyline(hole).parallel_offset(-distance) {
                cut.push(Region::new(flatten_polyline(&pline)));
            }
        }
    }

    let result = if cut.is_empty() {
        union_all(&grown)
    } else {
        difference(&grown, &cut)
    };
    debug!(
        "buffer({}): {} regions -> {} regions",
        distance,
        regions.len(),
        result.len()
    );
    result
}

pub fn bounds(regions: &[Region]) -> Option<Bounds> {
    regions
        .iter()
        .filter_map(Region::bounds)
        .reduce(|a, b| a.union(&b))
}

/// Area centroid of already-disjoint regions
pub fn centroid(regions: &[Region]) -> Option<Point> {
    let mut total = 0.0;
    let (mut cx, mut cy) = (0.0, 0.0);
    for region in regions {
        let area = region.area();
        if let Some(c) = region.centroid() {
            cx += c.x * area;
            cy += c.y * area;
            total += area;
        }
    }
    if total.abs() < 1e-15 {
        None
    } else {
        Some(Point::new(cx / total, cy / total))
    }
}
