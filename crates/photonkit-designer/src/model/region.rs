use serde::{Deserialize, Serialize};

use super::{Bounds, Point, Transform};

/// Closed polygonal region with optional holes.
///
/// Rings are stored without a repeated closing vertex. The exterior is kept
/// counter-clockwise and holes clockwise.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Region {
    pub exterior: Vec<Point>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub holes: Vec<Vec<Point>>,
}

fn signed_area(ring: &[Point]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..ring.len() {
        let p1 = ring[i];
        let p2 = ring[(i + 1) % ring.len()];
        sum += p1.x * p2.y - p2.x * p1.y;
    }
    sum / 2.0
}

fn strip_closing(mut ring: Vec<Point>) -> Vec<Point> {
    while ring.len() > 1 {
        let (first, last) = (ring[0], ring[ring.len() - 1]);
        if first.distance_to(&last) < 1e-12 {
            ring.pop();
        } else {
            break;
        }
    }
    ring
}

fn oriented(ring: Vec<Point>, ccw: bool) -> Vec<Point> {
    let mut ring = strip_closing(ring);
    if (signed_area(&ring) > 0.0) != ccw {
        ring.reverse();
    }
    ring
}

impl Region {
    pub fn new(exterior: Vec<Point>) -> Self {
        Self::with_holes(exterior, Vec::new())
    }

    pub fn with_holes(exterior: Vec<Point>, holes: Vec<Vec<Point>>) -> Self {
        Self {
            exterior: oriented(exterior, true),
            holes: holes.into_iter().map(|h| oriented(h, false)).collect(),
        }
    }

    /// Axis-aligned rectangle spanning two corners
    pub fn rect(min: Point, max: Point) -> Self {
        Self::new(vec![
            Point::new(min.x, min.y),
            Point::new(max.x, min.y),
            Point::new(max.x, max.y),
            Point::new(min.x, max.y),
        ])
    }

    pub fn area(&self) -> f64 {
        let holes: f64 = self.holes.iter().map(|h| signed_area(h).abs()).sum();
        signed_area(&self.exterior).abs() - holes
    }

    /// Area-weighted centroid, `None` for a degenerate region
    pub fn centroid(&self) -> Option<Point> {
        let (mut cx, mut cy, mut a) = ring_moments(&self.exterior);
        for hole in &self.holes {
            let (hx, hy, ha) = ring_moments(hole);
            cx += hx;
            cy += hy;
            a += ha;
        }
        if a.abs() < 1e-15 {
            return None;
        }
        Some(Point::new(cx / (3.0 * a), cy / (3.0 * a)))
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.exterior.iter())
    }

    pub fn transformed(&self, t: &Transform) -> Region {
        let map = |ring: &Vec<Point>| ring.iter().map(|p| t.apply(*p)).collect::<Vec<_>>();
        let mut region = Region {
            exterior: map(&self.exterior),
            holes: self.holes.iter().map(map).collect(),
        };
        if t.is_reflection() {
            region.exterior.reverse();
            for hole in &mut region.holes {
                hole.reverse();
            }
        }
        region
    }

    /// Even-odd point containment, boundary points count as outside
    pub fn contains(&self, p: Point) -> bool {
        ring_contains(&self.exterior, p) && !self.holes.iter().any(|h| ring_contains(h, p))
    }
}

// Unnormalized first moments and doubled signed area. Holes are clockwise so
// they subtract when summed with the exterior.
fn ring_moments(ring: &[Point]) -> (f64, f64, f64) {
    let (mut cx, mut cy, mut a) = (0.0, 0.0, 0.0);
    for i in 0..ring.len() {
        let p1 = ring[i];
        let p2 = ring[(i + 1) % ring.len()];
        let cross = p1.x * p2.y - p2.x * p1.y;
        cx += (p1.x + p2.x) * cross;
        cy += (p1.y + p2.y) * cross;
        a += cross;
    }
    (cx, cy, a)
}

fn ring_contains(ring: &[Point], p: Point) -> bool {
    let mut inside = false;
    let n = ring.len();
    if n < 3 {
        return false;
    }
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (ring[i], ring[j]);
        if (pi.y > p.y) != (pj.y > p.y) {
            let x = pj.x + (p.y - pj.y) * (pi.x - pj.x) / (pi.y - pj.y);
            if p.x < x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
