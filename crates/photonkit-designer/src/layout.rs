//! Shared transform, alignment and docking capability.
//!
//! Anything with geometry and ports implements [`Layout`] by supplying
//! [`Layout::apply`], [`Layout::bounds`] and port access; every other
//! operation is derived from those. Operations mutate in place and return
//! `&mut Self` for chaining, so templates that are placed more than once must
//! be cloned first.

use photonkit_core::{approx_eq, Error, GeometryError, Result};

use crate::model::{Bounds, Point, Port, PortMap, ReflectAxis, Transform};

/// Port docked by [`Layout::to`]
pub const DOCKING_PORT: &str = "a0";

pub trait Layout {
    /// Apply an affine transform to all geometry and ports
    fn apply(&mut self, t: &Transform);

    /// Bounding box of all geometry, zero-sized at the origin when empty
    fn bounds(&self) -> Bounds;

    fn ports(&self) -> &PortMap;

    fn ports_mut(&mut self) -> &mut PortMap;

    fn port(&self, name: &str) -> Result<Port> {
        self.ports()
            .get(name)
            .copied()
            .ok_or_else(|| Error::missing_port(name))
    }

    fn size(&self) -> (f64, f64) {
        let b = self.bounds();
        (b.width(), b.height())
    }

    /// Bounding box center
    fn center(&self) -> Point {
        self.bounds().center()
    }

    fn transform(&mut self, t: &Transform) -> &mut Self
    where
        Self: Sized,
    {
        self.apply(t);
        self
    }

    fn translate(&mut self, dx: f64, dy: f64) -> &mut Self
    where
        Self: Sized,
    {
        self.transform(&Transform::translation(dx, dy))
    }

    /// Counter-clockwise rotation in degrees about `origin`
    fn rotate(&mut self, angle: f64, origin: Point) -> &mut Self
    where
        Self: Sized,
    {
        self.transform(&Transform::rotation(angle, origin))
    }

    fn reflect(&mut self, axis: ReflectAxis, origin: Point) -> &mut Self
    where
        Self: Sized,
    {
        self.transform(&Transform::reflection(axis, origin))
    }

    /// Move the bounding box center onto `target`
    fn align(&mut self, target: Point) -> &mut Self
    where
        Self: Sized,
    {
        let c = self.center();
        self.translate(target.x - c.x, target.y - c.y)
    }

    fn align_with<L: Layout + ?Sized>(&mut self, other: &L) -> &mut Self
    where
        Self: Sized,
    {
        self.align(other.center())
    }

    /// Move the left (`left = true`) or right bounding edge onto `x`
    fn halign(&mut self, x: f64, left: bool) -> &mut Self
    where
        Self: Sized,
    {
        let b = self.bounds();
        let edge = if left { b.min_x } else { b.max_x };
        self.translate(x - edge, 0.0)
    }

    /// Align the chosen vertical edge with the same edge of `other`, or with
    /// its opposite edge when `opposite` is set
    fn halign_with<L: Layout + ?Sized>(&mut self, other: &L, left: bool, opposite: bool) -> &mut Self
    where
        Self: Sized,
    {
        let b = other.bounds();
        let x = if left != opposite { b.min_x } else { b.max_x };
        self.halign(x, left)
    }

    /// Move the bottom (`bottom = true`) or top bounding edge onto `y`
    fn valign(&mut self, y: f64, bottom: bool) -> &mut Self
    where
        Self: Sized,
    {
        let b = self.bounds();
        let edge = if bottom { b.min_y } else { b.max_y };
        self.translate(0.0, y - edge)
    }

    fn valign_with<L: Layout + ?Sized>(&mut self, other: &L, bottom: bool, opposite: bool) -> &mut Self
    where
        Self: Sized,
    {
        let b = other.bounds();
        let y = if bottom != opposite { b.min_y } else { b.max_y };
        self.valign(y, bottom)
    }

    /// Place beside `other`, to its left when `left` is set and to its right
    /// otherwise, with vertical centers matched
    fn hstack<L: Layout + ?Sized>(&mut self, other: &L, left: bool) -> &mut Self
    where
        Self: Sized,
    {
        let dy = other.center().y - self.center().y;
        self.translate(0.0, dy);
        self.halign_with(other, !left, true)
    }

    /// Place above (`above = true`) or below `other` with horizontal centers
    /// matched
    fn vstack<L: Layout + ?Sized>(&mut self, other: &L, above: bool) -> &mut Self
    where
        Self: Sized,
    {
        let dx = other.center().x - self.center().x;
        self.translate(dx, 0.0);
        self.valign_with(other, above, true)
    }

    /// Dock the `a0` port onto `target`
    fn to(&mut self, target: Port) -> Result<&mut Self>
    where
        Self: Sized,
    {
        self.to_port(DOCKING_PORT, target)
    }

    /// Rigidly move so port `own` sits on `target` facing the opposite way
    fn to_port(&mut self, own: &str, target: Port) -> Result<&mut Self>
    where
        Self: Sized,
    {
        let port = self.port(own)?;
        if !approx_eq(port.w, target.w) {
            return Err(GeometryError::PortWidthMismatch {
                port: own.to_string(),
                expected: target.w,
                actual: port.w,
            }
            .into());
        }
        let t = Transform::rotation(target.a + 180.0 - port.a, port.position())
            .then(&Transform::translation(target.x - port.x, target.y - port.y));
        Ok(self.transform(&t))
    }
}
