//! Error types for engine and command-line operations

use std::fmt;

/// Main error type for all game operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Grid construction received an unusable dimension
    InvalidDimensions {
        /// Requested number of rows
        height: usize,
        /// Requested number of columns
        width: usize,
    },

    /// Cell access outside the grid bounds
    ///
    /// Accessor coordinates are a caller contract; violations are reported
    /// rather than recovered from.
    OutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Actual grid dimensions (rows, cols)
        dimensions: (usize, usize),
    },

    /// Tile write with a value that is neither zero nor a power of two
    InvalidTileValue {
        /// The rejected value
        value: u32,
    },

    /// No empty cell available for tile placement
    ///
    /// Spawning enumerates the currently empty cells, so a full grid is
    /// reported instead of retried.
    GridFull {
        /// Grid dimensions (rows, cols)
        dimensions: (usize, usize),
    },

    /// Move script contained an unrecognized direction character
    InvalidMoveToken {
        /// Position of the character within the script
        index: usize,
        /// The rejected character
        token: char,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { height, width } => {
                write!(f, "Invalid grid dimensions {height}x{width}")
            }
            Self::OutOfBounds {
                row,
                col,
                dimensions,
            } => {
                write!(
                    f,
                    "Cell ({row}, {col}) is out of bounds (grid size {}x{})",
                    dimensions.0, dimensions.1
                )
            }
            Self::InvalidTileValue { value } => {
                write!(f, "Tile value {value} is not zero or a power of two")
            }
            Self::GridFull { dimensions } => {
                write!(
                    f,
                    "No empty cell left for spawning (grid size {}x{})",
                    dimensions.0, dimensions.1
                )
            }
            Self::InvalidMoveToken { index, token } => {
                write!(f, "Unrecognized move character '{token}' at position {index}")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Convenience type alias for game results
pub type Result<T> = std::result::Result<T, GameError>;
