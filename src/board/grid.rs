//! Tile grid storage with checked access and empty-cell enumeration
//!
//! The grid is the single mutable game state: a fixed-dimension 2D array of
//! tile values where 0 is empty and every occupied cell holds a positive
//! power of two. All access is bounds-checked; out-of-range coordinates and
//! invalid values surface as errors rather than panics.

use crate::board::cells::CellSet;
use crate::io::error::{GameError, Result};
use ndarray::Array2;
use std::fmt;

/// Rectangular grid of tile values
///
/// Dimensions are fixed at construction. State changes only through `set`,
/// `clear`, and the move pipeline writing merged lines back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<u32>,
}

impl Grid {
    /// Create an all-empty grid with the given dimensions
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidDimensions` if either dimension is zero.
    pub fn new(height: usize, width: usize) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(GameError::InvalidDimensions { height, width });
        }

        Ok(Self {
            cells: Array2::zeros((height, width)),
        })
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Read the tile value at the given position
    ///
    /// # Errors
    ///
    /// Returns `GameError::OutOfBounds` for coordinates outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Result<u32> {
        self.cells
            .get([row, col])
            .copied()
            .ok_or_else(|| self.out_of_bounds(row, col))
    }

    /// Write a tile value at the given position
    ///
    /// # Errors
    ///
    /// Returns `GameError::OutOfBounds` for coordinates outside the grid and
    /// `GameError::InvalidTileValue` for a value that is neither zero nor a
    /// power of two.
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> Result<()> {
        if value != 0 && !value.is_power_of_two() {
            return Err(GameError::InvalidTileValue { value });
        }

        let out_of_bounds = self.out_of_bounds(row, col);
        let cell = self.cells.get_mut([row, col]).ok_or(out_of_bounds)?;
        *cell = value;
        Ok(())
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Collect the flat row-major indices of all empty cells
    pub fn empty_cells(&self) -> CellSet {
        let mut empties = CellSet::new(self.cells.len());
        for (index, &value) in self.cells.iter().enumerate() {
            if value == 0 {
                empties.insert(index);
            }
        }
        empties
    }

    /// Convert a flat row-major index to a (row, col) coordinate pair
    pub fn position(&self, index: usize) -> [usize; 2] {
        [index / self.width(), index % self.width()]
    }

    /// Read the values along a sequence of cell coordinates
    ///
    /// Coordinates outside the grid read as empty; the move pipeline only
    /// passes in-bounds lines.
    pub fn values_along(&self, line: &[[usize; 2]]) -> Vec<u32> {
        line.iter()
            .map(|&[row, col]| self.cells.get([row, col]).copied().unwrap_or(0))
            .collect()
    }

    /// Write values back along a sequence of cell coordinates
    ///
    /// Coordinates and values pair up positionally; excess entries on
    /// either side are ignored.
    pub fn write_along(&mut self, line: &[[usize; 2]], values: &[u32]) {
        for (&[row, col], &value) in line.iter().zip(values) {
            if let Some(cell) = self.cells.get_mut([row, col]) {
                *cell = value;
            }
        }
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> GameError {
        GameError::OutOfBounds {
            row,
            col,
            dimensions: (self.height(), self.width()),
        }
    }
}

impl fmt::Display for Grid {
    /// Row-major nested integer sequence, e.g. `[[0, 2], [4, 0]]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (row_index, row) in self.cells.rows().into_iter().enumerate() {
            if row_index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (col_index, value) in row.iter().enumerate() {
                if col_index > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{value}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
