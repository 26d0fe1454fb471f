//! Move orchestration over the owned grid state

use crate::board::Grid;
use crate::engine::line::{self, Direction};
use crate::engine::merge::merge;
use crate::engine::spawn::{SpawnedTile, TileSpawner};
use crate::io::configuration::INITIAL_TILES;
use crate::io::error::Result;

/// What a single move did to the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether any cell changed value during the merge phase
    pub changed: bool,
    /// The tile spawned after a changed move
    pub spawned: Option<SpawnedTile>,
}

/// Game state owner orchestrating moves, spawning, and resets
///
/// Holds the only mutable reference to the grid. Front-ends construct an
/// instance explicitly and drive it through this interface; there is no
/// process-wide game instance.
#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    spawner: TileSpawner,
}

impl Game {
    /// Create a game with the given dimensions and two starting tiles
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidDimensions` for a zero dimension and
    /// `GameError::GridFull` when the grid holds fewer cells than the
    /// starting tile count.
    pub fn new(height: usize, width: usize, seed: u64) -> Result<Self> {
        let mut game = Self {
            grid: Grid::new(height, width)?,
            spawner: TileSpawner::new(seed),
        };
        game.reset()?;
        Ok(game)
    }

    /// Empty the grid and spawn the starting tiles
    ///
    /// # Errors
    ///
    /// Returns `GameError::GridFull` when the grid holds fewer cells than
    /// the starting tile count.
    pub fn reset(&mut self) -> Result<()> {
        self.grid.clear();
        for _ in 0..INITIAL_TILES {
            self.spawner.place(&mut self.grid)?;
        }
        Ok(())
    }

    /// Slide and merge every line toward the given direction's edge
    ///
    /// Each line is read edge-first, merged, and written back along the
    /// same coordinates. Change detection compares each position of the
    /// pre-merge sequence with the same position of the merged sequence; a
    /// changed move spawns exactly one new tile, an unchanged move leaves
    /// the grid untouched and spawns nothing.
    ///
    /// # Errors
    ///
    /// Propagates `GameError::GridFull` from the spawner. A changed move
    /// always leaves at least one empty cell behind, so this cannot occur
    /// through normal play.
    pub fn apply_move(&mut self, direction: Direction) -> Result<MoveOutcome> {
        let mut changed = false;

        for cells in line::lines(direction, self.height(), self.width()) {
            let before = self.grid.values_along(&cells);
            let merged = merge(&before);
            changed |= merged != before;
            self.grid.write_along(&cells, &merged);
        }

        let mut spawned = None;
        if changed {
            spawned = Some(self.spawner.place(&mut self.grid)?);
        }

        Ok(MoveOutcome { changed, spawned })
    }

    /// Read the tile value at the given position
    ///
    /// # Errors
    ///
    /// Returns `GameError::OutOfBounds` for coordinates outside the grid.
    pub fn get_tile(&self, row: usize, col: usize) -> Result<u32> {
        self.grid.get(row, col)
    }

    /// Write a tile value, for test harnesses and scripted scenarios
    ///
    /// # Errors
    ///
    /// Returns `GameError::OutOfBounds` for coordinates outside the grid
    /// and `GameError::InvalidTileValue` for a value that is neither zero
    /// nor a power of two.
    pub fn set_tile(&mut self, row: usize, col: usize, value: u32) -> Result<()> {
        self.grid.set(row, col, value)
    }

    /// Grid height in rows
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Grid width in columns
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Read access to the grid for rendering front-ends and diagnostics
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }
}
