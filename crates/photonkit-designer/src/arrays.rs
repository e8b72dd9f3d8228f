//! # Grid Array Operations
//!
//! Offsets for tiling a unit pattern on a rectangular lattice, as used by
//! photonic-crystal hole and post arrays.

use serde::{Deserialize, Serialize};

use photonkit_core::{Result, ValidationError};

use crate::model::Bounds;

/// Lattice pitch; a scalar pitch gives a square lattice
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pitch {
    pub x: f64,
    pub y: f64,
}

impl From<f64> for Pitch {
    fn from(pitch: f64) -> Self {
        Pitch { x: pitch, y: pitch }
    }
}

impl From<(f64, f64)> for Pitch {
    fn from((x, y): (f64, f64)) -> Self {
        Pitch { x, y }
    }
}

/// Parameters for grid array operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridArrayParams {
    /// Number of copies along x
    pub columns: usize,
    /// Number of copies along y
    pub rows: usize,
    pub pitch: Pitch,
}

impl GridArrayParams {
    pub fn new(columns: usize, rows: usize, pitch: impl Into<Pitch>) -> Self {
        Self {
            columns,
            rows,
            pitch: pitch.into(),
        }
    }

    /// Validate parameters
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 || self.rows == 0 {
            return Err(ValidationError::EmptyGrid {
                columns: self.columns,
                rows: self.rows,
            }
            .into());
        }
        ValidationError::require_positive("pitch_x", self.pitch.x)?;
        ValidationError::require_positive("pitch_y", self.pitch.y)?;
        Ok(())
    }

    /// Get total number of copies
    pub fn total_copies(&self) -> usize {
        self.columns * self.rows
    }

    /// Offset of a cell, `None` outside the grid
    pub fn get_offset(&self, column: usize, row: usize) -> Option<(f64, f64)> {
        if column >= self.columns || row >= self.rows {
            return None;
        }

        Some((column as f64 * self.pitch.x, row as f64 * self.pitch.y))
    }

    /// Bounding box of the tiled array given the unit bounds
    pub fn calculate_bounds(&self, unit: Bounds) -> Bounds {
        let width = unit.width() + self.columns.saturating_sub(1) as f64 * self.pitch.x;
        let height = unit.height() + self.rows.saturating_sub(1) as f64 * self.pitch.y;

        Bounds::new(unit.min_x, unit.min_y, unit.min_x + width, unit.min_y + height)
    }

    /// All cell offsets, column by column
    pub fn offsets(&self) -> Result<Vec<(f64, f64)>> {
        self.validate()?;

        let mut offsets = Vec::with_capacity(self.total_copies());
        for column in 0..self.columns {
            for row in 0..self.rows {
                if let Some(offset) = self.get_offset(column, row) {
                    offsets.push(offset);
                }
            }
        }

        Ok(offsets)
    }
}
