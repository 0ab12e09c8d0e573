use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Self-play and evaluation launcher for the Go/Ataxx engine.
#[derive(Parser)]
pub struct Args {
    /// Game selector: a game letter and board size, e.g. "A4x4" or "G9x9"
    pub game: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate training examples by playing against self
    SelfPlay {
        /// Number of episodes to play
        #[arg(short, long, default_value_t = 100)]
        episodes: usize,
        /// Simulations per move
        #[arg(short, long, default_value_t = 50)]
        simulations: u32,
        /// Worker threads
        #[arg(short, long, default_value_t = 4)]
        workers: usize,
        /// Directory the example file is written to
        #[arg(short, long, default_value = "_examples")]
        out_dir: PathBuf,
    },
    /// Pit the search against a baseline opponent
    Pit {
        /// Baseline opponent: "random" or "greedy"
        #[arg(short, long, default_value = "random")]
        baseline: String,
        /// Number of games in the match
        #[arg(short, long, default_value_t = 20)]
        games: u32,
        /// Simulations per move
        #[arg(short, long, default_value_t = 50)]
        simulations: u32,
    },
}
