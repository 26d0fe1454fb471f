//! Random placement of new tiles into empty cells

use crate::board::Grid;
use crate::board::cells::CellSet;
use crate::io::configuration::{SPAWN_VALUES, SPAWN_WEIGHTS};
use crate::io::error::{GameError, Result};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// A tile written into the grid by the spawner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnedTile {
    /// Row of the filled cell
    pub row: usize,
    /// Column of the filled cell
    pub col: usize,
    /// Value written, 2 or 4
    pub value: u32,
}

/// Seeded random tile placer
///
/// Draws a uniformly random cell from the grid's enumerated empty cells and
/// writes a 2 or a 4 using the configured weights. Enumerating first makes
/// placement terminate on any grid with an empty cell and turns the full
/// grid case into an explicit error instead of an endless retry.
#[derive(Debug, Clone)]
pub struct TileSpawner {
    rng: StdRng,
}

impl TileSpawner {
    /// Create a spawner with a deterministic seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Place one new tile into a uniformly chosen empty cell
    ///
    /// # Errors
    ///
    /// Returns `GameError::GridFull` when the grid has no empty cell.
    pub fn place(&mut self, grid: &mut Grid) -> Result<SpawnedTile> {
        let empties = grid.empty_cells();
        let [row, col] = self.pick_cell(grid, &empties)?;

        let value = SPAWN_VALUES
            .get(self.weighted_choice(&SPAWN_WEIGHTS))
            .copied()
            .unwrap_or(2);

        grid.set(row, col, value)?;
        Ok(SpawnedTile { row, col, value })
    }

    /// Uniform draw over the present cells of an empty-cell set
    fn pick_cell(&mut self, grid: &Grid, empties: &CellSet) -> Result<[usize; 2]> {
        let open = empties.count();
        if open == 0 {
            return Err(GameError::GridFull {
                dimensions: (grid.height(), grid.width()),
            });
        }

        let pick = self.rng.random_range(0..open);
        let index = empties.nth(pick).unwrap_or(0);
        Ok(grid.position(index))
    }

    /// Weighted random index into a weight table
    ///
    /// Selects by cumulative scan, falling back to the last index if
    /// floating-point rounding exhausts the scan.
    fn weighted_choice(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return 0;
        }

        let mut rand_val = self.rng.random::<f64>() * total;
        for (i, &weight) in weights.iter().enumerate() {
            rand_val -= weight;
            if rand_val <= 0.0 {
                return i;
            }
        }
        weights.len().saturating_sub(1)
    }
}
