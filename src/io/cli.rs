//! Command-line interface for scripted and random playouts

use crate::engine::game::Game;
use crate::engine::line::Direction;
use crate::io::configuration::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_RANDOM_MOVES, DEFAULT_SEED,
};
use crate::io::error::{GameError, Result};
use crate::io::progress::ProgressManager;
use clap::Parser;
use rand::{Rng, SeedableRng, rngs::StdRng};

#[derive(Parser)]
#[command(name = "tilefold")]
#[command(
    author,
    version,
    about = "Play 2048 grid mechanics from a move script or random playout"
)]
/// Command-line arguments for the playout tool
pub struct Cli {
    /// Move script applied in order (characters U, D, L, R; case-insensitive)
    #[arg(value_name = "MOVES")]
    pub moves: Option<String>,

    /// Random seed for reproducible play
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of grid rows
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    pub height: usize,

    /// Number of grid columns
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    pub width: usize,

    /// Number of random moves applied when no move script is given
    #[arg(short, long, default_value_t = DEFAULT_RANDOM_MOVES)]
    pub random_moves: usize,

    /// Number of games to play
    #[arg(short, long, default_value_t = 1)]
    pub games: usize,

    /// Suppress progress and grid output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Parse a move script into directions
///
/// # Errors
///
/// Returns `GameError::InvalidMoveToken` for any character that is not one
/// of U, D, L, R in either case.
pub fn parse_moves(script: &str) -> Result<Vec<Direction>> {
    script
        .chars()
        .enumerate()
        .map(|(index, token)| match token.to_ascii_uppercase() {
            'U' => Ok(Direction::Up),
            'D' => Ok(Direction::Down),
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            _ => Err(GameError::InvalidMoveToken { index, token }),
        })
        .collect()
}

/// Orchestrates batch playouts with progress tracking
pub struct SessionRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl SessionRunner {
    /// Create a runner from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Play every requested game
    ///
    /// Each game gets its own engine instance seeded from the base seed
    /// plus the game index, so batches are reproducible game by game.
    ///
    /// # Errors
    ///
    /// Returns an error if the move script contains an unrecognized
    /// character or a game cannot be constructed with the requested
    /// dimensions.
    pub fn run(&mut self) -> Result<()> {
        let script = match self.cli.moves.as_deref() {
            Some(moves) => Some(parse_moves(moves)?),
            None => None,
        };

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.games);
        }

        for game_index in 0..self.cli.games {
            self.play_game(game_index, script.as_deref())?;
            if let Some(ref pm) = self.progress_manager {
                pm.complete_game();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    // Allow print for emitting the final grid contents to the user
    #[allow(clippy::print_stdout)]
    fn play_game(&self, game_index: usize, script: Option<&[Direction]>) -> Result<()> {
        let seed = self.cli.seed.wrapping_add(game_index as u64);
        let mut game = Game::new(self.cli.height, self.cli.width, seed)?;

        match script {
            Some(moves) => {
                for &direction in moves {
                    game.apply_move(direction)?;
                }
            }
            None => {
                let mut rng = StdRng::seed_from_u64(seed);
                for _ in 0..self.cli.random_moves {
                    let direction = Direction::ALL
                        .get(rng.random_range(0..Direction::ALL.len()))
                        .copied()
                        .unwrap_or(Direction::Left);
                    game.apply_move(direction)?;
                }
            }
        }

        if !self.cli.quiet {
            println!("{}", game.grid());
        }

        Ok(())
    }
}
