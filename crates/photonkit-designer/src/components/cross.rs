use tracing::debug;

use photonkit_core::Result;

use super::delegate_layout;
use crate::layout::Layout;
use crate::model::Point;
use crate::pattern::Pattern;

/// Waveguide crossing made of a waveguide and its copy rotated by 90 degrees,
/// both centered on the origin.
///
/// `a0`/`b0` are the ends of the horizontal waveguide and `a1`/`b1` the ends
/// of the vertical one.
#[derive(Debug, Clone, PartialEq)]
pub struct Cross {
    pattern: Pattern,
}

impl Cross {
    pub fn new(waveguide: &Pattern) -> Result<Self> {
        let mut horizontal = waveguide.copy();
        horizontal.align(Point::origin());
        let mut vertical = horizontal.copy();
        vertical.rotate(90.0, Point::origin());

        let mut pattern = Pattern::compose([horizontal.clone(), vertical.clone()]);
        pattern
            .set_port("a0", horizontal.port("a0")?)
            .set_port("a1", vertical.port("a0")?)
            .set_port("b0", horizontal.port("b0")?)
            .set_port("b1", vertical.port("b0")?);

        debug!(
            "Built cross: {} regions, size {:?}",
            pattern.polygons().len(),
            pattern.size()
        );
        Ok(Self { pattern })
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

delegate_layout!(Cross, pattern);

impl From<Cross> for Pattern {
    fn from(cross: Cross) -> Self {
        cross.pattern
    }
}
