//! Solo Tic-Tac-Toe - terminal front-end and maintenance commands.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, StoreArgs};
use solo_tictactoe::{AppConfig, FileStore, Player, Snapshot};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            store,
            seed,
            human,
            delay_ms,
        } => {
            let mut config = load_config(&store)?;
            if let Some(seed) = seed {
                config = config.with_seed(Some(seed));
            }
            if let Some(human) = human {
                config = config.with_human_mark(human);
            }
            if let Some(delay_ms) = delay_ms {
                config = config.with_computer_delay_ms(delay_ms);
            }
            tui::run_tui(config).await
        }
        Command::Stats { store } => {
            init_stderr_logging();
            print_stats(&load_config(&store)?)
        }
        Command::Clear { store } => {
            init_stderr_logging();
            clear_saved_game(&load_config(&store)?)
        }
    }
}

/// Reads the config file and applies the store directory override.
fn load_config(args: &StoreArgs) -> Result<AppConfig> {
    let config = AppConfig::from_file_or_default(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;
    Ok(match &args.store_dir {
        Some(dir) => config.with_store_dir(dir.clone()),
        None => config,
    })
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Print the statistics carried by the saved game.
#[instrument(skip(config), fields(store_dir = %config.store_dir().display()))]
fn print_stats(config: &AppConfig) -> Result<()> {
    let store = FileStore::new(config.store_dir());
    let Some(snapshot) = Snapshot::load(&store).context("Failed to read saved game")? else {
        println!("No saved game.");
        return Ok(());
    };

    let stats = snapshot.stats();
    println!("Games:  {}", stats.total_games());
    println!("X wins: {}", stats.wins(Player::X));
    println!("O wins: {}", stats.wins(Player::O));
    println!("Draws:  {}", stats.draws());
    println!();
    println!("{}", snapshot.game_state.display());
    Ok(())
}

/// Remove the saved game.
#[instrument(skip(config), fields(store_dir = %config.store_dir().display()))]
fn clear_saved_game(config: &AppConfig) -> Result<()> {
    let mut store = FileStore::new(config.store_dir());
    Snapshot::clear(&mut store).context("Failed to delete saved game")?;
    info!("Saved game cleared");
    println!("Saved game cleared.");
    Ok(())
}
