//! Batch progress tracking for multi-game playouts

use crate::io::configuration::{MIN_GAMES_FOR_PROGRESS, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Games: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates the progress display for batch playouts
///
/// Wraps a single batch bar; single-game runs finish too quickly for a bar
/// to be worth drawing, so initialization below the threshold is a no-op.
pub struct ProgressManager {
    batch_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no active display
    pub const fn new() -> Self {
        Self { batch_bar: None }
    }

    /// Set up the batch bar for the given number of games
    pub fn initialize(&mut self, game_count: usize) {
        if game_count >= MIN_GAMES_FOR_PROGRESS {
            let batch_bar = ProgressBar::new(game_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(batch_bar);
        }
    }

    /// Mark one game as completed
    pub fn complete_game(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_and_clear();
        }
    }
}
