//! Engine constants and runtime configuration defaults

// Spawn mechanics
/// Number of tiles spawned by a reset
pub const INITIAL_TILES: usize = 2;

/// Values a spawned tile can take
pub const SPAWN_VALUES: [u32; 2] = [2, 4];

/// Selection weights for the spawn values (90% two, 10% four)
pub const SPAWN_WEIGHTS: [f64; 2] = [0.9, 0.1];

// Default values for configurable parameters
/// Fixed seed for reproducible play
pub const DEFAULT_SEED: u64 = 42;

/// Default number of grid rows
pub const DEFAULT_GRID_HEIGHT: usize = 4;

/// Default number of grid columns
pub const DEFAULT_GRID_WIDTH: usize = 4;

/// Default number of random moves applied when no move script is given
pub const DEFAULT_RANDOM_MOVES: usize = 100;

// Progress bar display settings
/// Game count below which a progress bar is not displayed
pub const MIN_GAMES_FOR_PROGRESS: usize = 2;

/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
