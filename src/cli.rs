//! Command-line interface for solo_tictactoe.

use clap::{Args, Parser, Subcommand};
use solo_tictactoe::Player;
use std::path::PathBuf;

/// Solo Tic-Tac-Toe - play against a random computer opponent
#[derive(Parser, Debug)]
#[command(name = "solo_tictactoe")]
#[command(about = "Tic-tac-toe against a random computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Where settings and the saved game live.
#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "solo_tictactoe.toml")]
    pub config: PathBuf,

    /// Directory holding the saved game (overrides the config file)
    #[arg(long)]
    pub store_dir: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Config and store location
        #[command(flatten)]
        store: StoreArgs,

        /// Seed for the computer's moves (reproducible games)
        #[arg(long)]
        seed: Option<u64>,

        /// Mark the human plays (X moves first)
        #[arg(long)]
        human: Option<Player>,

        /// Pause before the computer replies, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Print the saved win/draw statistics
    Stats {
        /// Config and store location
        #[command(flatten)]
        store: StoreArgs,
    },

    /// Delete the saved game
    Clear {
        /// Config and store location
        #[command(flatten)]
        store: StoreArgs,
    },
}
