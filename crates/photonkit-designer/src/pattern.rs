//! Patterns: polygon regions with named ports.

use std::f64::consts::TAU;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use photonkit_core::{GeometryError, LookupError, Result, ValidationError};

use crate::layout::Layout;
use crate::model::{Bounds, Point, Port, PortMap, Region, Transform};
use crate::ops;

/// Polygon regions plus named ports and named child patterns.
///
/// Regions keep the order in which they were added; composing patterns
/// concatenates their regions. Child references are kept for introspection
/// (for example the two arms of a coupler) and move together with the parent.
/// `Clone` is a deep copy.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Pattern {
    regions: Vec<Region>,
    #[serde(default)]
    port: PortMap,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    refs: IndexMap<String, Pattern>,
}

impl Pattern {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_regions(regions: Vec<Region>) -> Self {
        Self {
            regions,
            ..Self::default()
        }
    }

    pub fn from_region(region: Region) -> Self {
        Self::from_regions(vec![region])
    }

    /// Concatenate the regions of several patterns in order.
    ///
    /// Ports are not merged; the caller exposes the ones it needs.
    pub fn compose(parts: impl IntoIterator<Item = Pattern>) -> Self {
        let regions = parts.into_iter().flat_map(|p| p.regions).collect();
        Self::from_regions(regions)
    }

    /// Rectangle of `width` by `height` centered on the origin
    pub fn rect(width: f64, height: f64) -> Result<Self> {
        ValidationError::require_positive("width", width)?;
        ValidationError::require_positive("height", height)?;
        Ok(Self::from_region(Region::rect(
            Point::new(-width / 2.0, -height / 2.0),
            Point::new(width / 2.0, height / 2.0),
        )))
    }

    /// Circle approximated by `resolution` vertices
    pub fn circle(radius: f64, resolution: usize) -> Result<Self> {
        Self::ellipse(radius, radius, resolution)
    }

    pub fn ellipse(radius_x: f64, radius_y: f64, resolution: usize) -> Result<Self> {
        ValidationError::require_positive("radius_x", radius_x)?;
        ValidationError::require_positive("radius_y", radius_y)?;
        if resolution < 3 {
            return Err(ValidationError::InvalidValue {
                param: "resolution".to_string(),
                reason: format!("need at least 3 vertices, got {}", resolution),
            }
            .into());
        }
        let ring = (0..resolution)
            .map(|i| {
                let a = TAU * i as f64 / resolution as f64;
                Point::new(radius_x * a.cos(), radius_y * a.sin())
            })
            .collect();
        Ok(Self::from_region(Region::new(ring)))
    }

    pub fn polygon(points: Vec<Point>) -> Result<Self> {
        let region = Region::new(points);
        if region.exterior.len() < 3 || region.area() <= 0.0 {
            return Err(GeometryError::Degenerate("polygon has no area".to_string()).into());
        }
        Ok(Self::from_region(region))
    }

    /// Regions in authoring order
    pub fn polygons(&self) -> &[Region] {
        &self.regions
    }

    pub fn into_regions(self) -> Vec<Region> {
        self.regions
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Deep copy, for placing one template more than once
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Union of all regions
    pub fn shape(&self) -> Vec<Region> {
        ops::union_all(&self.regions)
    }

    /// Area centroid of the union, `None` when the pattern has no area
    pub fn centroid(&self) -> Option<Point> {
        ops::centroid(&self.shape())
    }

    pub fn set_port(&mut self, name: impl Into<String>, port: Port) -> &mut Self {
        self.port.insert(name.into(), port);
        self
    }

    pub fn clear_ports(&mut self) -> &mut Self {
        self.port.clear();
        self
    }

    pub fn add_reference(&mut self, name: impl Into<String>, pattern: Pattern) -> &mut Self {
        self.refs.insert(name.into(), pattern);
        self
    }

    pub fn reference(&self, name: &str) -> Result<&Pattern> {
        self.refs.get(name).ok_or_else(|| {
            LookupError::MissingReference {
                name: name.to_string(),
            }
            .into()
        })
    }

    pub fn references(&self) -> &IndexMap<String, Pattern> {
        &self.refs
    }

    /// Grow or shrink the union by `distance`; the result carries no ports
    pub fn buffer(&self, distance: f64) -> Pattern {
        Pattern::from_regions(ops::buffer(&self.regions, distance))
    }

    pub fn union(&self, other: &Pattern) -> Pattern {
        self.with_regions(ops::union(&self.regions, &other.regions))
    }

    pub fn difference(&self, other: &Pattern) -> Pattern {
        self.with_regions(ops::difference(&self.regions, &other.regions))
    }

    pub fn intersection(&self, other: &Pattern) -> Pattern {
        self.with_regions(ops::intersection(&self.regions, &other.regions))
    }

    fn with_regions(&self, regions: Vec<Region>) -> Pattern {
        Pattern {
            regions,
            port: self.port.clone(),
            refs: IndexMap::new(),
        }
    }

    /// Periodic stripes of width `stripe_w` clipped to this pattern.
    ///
    /// Stripes are centered on the bounding box minimum plus multiples of
    /// `pitch.0` (vertical stripes) and `pitch.1` (horizontal stripes); a zero
    /// pitch component disables that direction. With `include_boundary` a
    /// frame of width `stripe_w` along the outline is added.
    pub fn striped(&self, stripe_w: f64, pitch: (f64, f64), include_boundary: bool) -> Result<Pattern> {
        ValidationError::require_positive("stripe_w", stripe_w)?;
        let (px, py) = pitch;
        ValidationError::require_non_negative("pitch_x", px)?;
        ValidationError::require_non_negative("pitch_y", py)?;
        if px == 0.0 && py == 0.0 {
            return Err(ValidationError::InvalidValue {
                param: "pitch".to_string(),
                reason: "at least one pitch component must be positive".to_string(),
            }
            .into());
        }

        let b = self.bounds();
        let half = stripe_w / 2.0;
        let mut stripes = Vec::new();
        if px > 0.0 {
            let mut x = b.min_x;
            while x <= b.max_x + half {
                stripes.push(Region::rect(
                    Point::new(x - half, b.min_y),
                    Point::new(x + half, b.max_y),
                ));
                x += px;
            }
        }
        if py > 0.0 {
            let mut y = b.min_y;
            while y <= b.max_y + half {
                stripes.push(Region::rect(
                    Point::new(b.min_x, y - half),
                    Point::new(b.max_x, y + half),
                ));
                y += py;
            }
        }

        let shape = self.shape();
        let mut regions = ops::intersection(&stripes, &shape);
        if include_boundary {
            let inner = ops::buffer(&shape, -stripe_w);
            let frame = ops::difference(&shape, &inner);
            regions = ops::union(&regions, &frame);
        }
        debug!("striped: {} stripes -> {} regions", stripes.len(), regions.len());
        Ok(Pattern::from_regions(regions))
    }
}

impl Layout for Pattern {
    fn apply(&mut self, t: &Transform) {
        for region in &mut self.regions {
            *region = region.transformed(t);
        }
        for port in self.port.values_mut() {
            *port = port.transformed(t);
        }
        for child in self.refs.values_mut() {
            child.apply(t);
        }
    }

    fn bounds(&self) -> Bounds {
        ops::bounds(&self.regions).unwrap_or_default()
    }

    fn ports(&self) -> &PortMap {
        &self.port
    }

    fn ports_mut(&mut self) -> &mut PortMap {
        &mut self.port
    }
}

impl From<Region> for Pattern {
    fn from(region: Region) -> Self {
        Pattern::from_region(region)
    }
}
