//! CLI entry point for the sliding tile-merge engine

use clap::Parser;
use tilefold::io::cli::{Cli, SessionRunner};

fn main() -> tilefold::Result<()> {
    let cli = Cli::parse();
    let mut runner = SessionRunner::new(cli);
    runner.run()
}
