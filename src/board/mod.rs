//! Grid state and spatial data structures
//!
//! This module contains the board-side functionality:
//! - Tile grid storage with checked access
//! - Cell membership sets for empty-cell sampling

/// Bit-indexed cell membership sets
pub mod cells;
/// Tile grid storage and accessors
pub mod grid;

pub use grid::Grid;
