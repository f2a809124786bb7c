//! Terminal UI for Solo Tic-Tac-Toe.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use solo_tictactoe::{AppConfig, FileStore, GameController, RandomSelector};
use std::io;
use tokio::time::{Instant, sleep_until};
use tracing::{error, info, instrument};

use app::{App, Control, TuiView};

/// Run the TUI game.
pub async fn run_tui(config: AppConfig) -> Result<()> {
    // Log to a file so output doesn't interfere with the TUI
    let log_file = std::fs::File::create("solo_tictactoe.log")
        .context("Failed to create log file")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(
        store_dir = %config.store_dir().display(),
        human = %config.human_mark(),
        seed = ?config.seed(),
        "Starting Solo Tic-Tac-Toe TUI"
    );

    let selector = match config.seed() {
        Some(seed) => RandomSelector::seeded(*seed),
        None => RandomSelector::from_entropy(),
    };
    let game = GameController::new(
        *config.human_mark(),
        TuiView::default(),
        FileStore::new(config.store_dir()),
        selector,
    );
    let mut app = App::new(game, config.computer_delay());
    app.load();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Event loop: key presses and the computer's pacing timer.
#[instrument(skip_all)]
async fn run_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut events = EventStream::new();

    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        let deadline = app.pending_computer();
        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key.code) == Control::Quit {
                        return Ok(());
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                None => return Ok(()),
            },
            _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                app.computer_turn();
            }
        }
    }
}
