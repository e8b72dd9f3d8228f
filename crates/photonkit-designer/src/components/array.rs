use tracing::debug;

use photonkit_core::Result;

use super::delegate_layout;
use crate::arrays::{GridArrayParams, Pitch};
use crate::layout::Layout;
use crate::pattern::Pattern;

/// Unit pattern tiled on a rectangular lattice.
///
/// Copies are laid out column by column: the regions of cell `(i, j)` come
/// before those of `(i, j + 1)`. Arrays are passive fill and have no ports.
#[derive(Debug, Clone, PartialEq)]
pub struct Array {
    grid: GridArrayParams,
    pattern: Pattern,
}

impl Array {
    pub fn new(unit: &Pattern, grid_shape: (usize, usize), pitch: impl Into<Pitch>) -> Result<Self> {
        let grid = GridArrayParams::new(grid_shape.0, grid_shape.1, pitch);
        let offsets = grid.offsets()?;

        let copies = offsets.iter().map(|&(dx, dy)| {
            let mut copy = unit.copy();
            copy.translate(dx, dy);
            copy
        });
        let pattern = Pattern::compose(copies);

        debug!(
            "Built {}x{} array: {} regions",
            grid.columns,
            grid.rows,
            pattern.polygons().len()
        );
        Ok(Self { grid, pattern })
    }

    pub fn grid(&self) -> &GridArrayParams {
        &self.grid
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

delegate_layout!(Array, pattern);

impl From<Array> for Pattern {
    fn from(array: Array) -> Self {
        array.pattern
    }
}
