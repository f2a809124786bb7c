//! Application state and key handling.

use crossterm::event::KeyCode;
use solo_tictactoe::{
    Board, FileStore, GameController, GameView, MoveOutcome, Position, RandomSelector, Stats,
};
use tokio::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

use super::input::move_cursor;

/// View model the controller draws into; the UI renders it each frame.
#[derive(Debug, Default)]
pub struct TuiView {
    board: Board,
    message: Option<String>,
    stats: Stats,
}

impl TuiView {
    /// Last rendered board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Visible result message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Last reported counters.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }
}

impl GameView for TuiView {
    fn render(&mut self, board: &Board) {
        self.board = board.clone();
    }

    fn show_message(&mut self, text: &str) {
        self.message = Some(text.to_string());
    }

    fn hide_message(&mut self) {
        self.message = None;
    }

    fn update_stats(&mut self, stats: &Stats) {
        self.stats = *stats;
    }
}

/// Controller type used by the terminal front-end.
pub type TuiController = GameController<TuiView, FileStore, RandomSelector>;

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep going.
    Continue,
    /// Leave the game.
    Quit,
}

/// Main application state.
pub struct App {
    game: TuiController,
    cursor: Position,
    status_line: String,
    computer_delay: Duration,
    pending_computer: Option<Instant>,
}

impl App {
    /// Creates the application around a controller.
    pub fn new(game: TuiController, computer_delay: Duration) -> Self {
        let mut app = Self {
            game,
            cursor: Position::Center,
            status_line: String::new(),
            computer_delay,
            pending_computer: None,
        };
        app.refresh();
        app
    }

    /// The controller.
    pub fn game(&self) -> &TuiController {
        &self.game
    }

    /// Cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Status line text.
    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    /// When the computer's reply is due, if one is scheduled.
    pub fn pending_computer(&self) -> Option<Instant> {
        self.pending_computer
    }

    /// Loads the saved game, reporting failures on the status line.
    #[instrument(skip(self))]
    pub fn load(&mut self) {
        match self.game.load() {
            Ok(true) => self.status_line = "Saved game loaded.".to_string(),
            Ok(false) => debug!("No saved game to load"),
            Err(e) => {
                warn!(error = %e, "Load failed");
                self.status_line = format!("Load failed: {}", e);
            }
        }
        self.pending_computer = None;
        self.refresh();
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return Control::Quit;
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(digit) = c.to_digit(10) {
                    self.play(digit as usize - 1);
                }
            }
            KeyCode::Char('r') => {
                self.pending_computer = None;
                match self.game.restart() {
                    Ok(()) => self.status_line = "New game.".to_string(),
                    Err(e) => {
                        warn!(error = %e, "Failed to clear saved game");
                        self.status_line =
                            format!("Restarted, but clearing the save failed: {}", e);
                    }
                }
            }
            KeyCode::Char('s') => match self.game.save() {
                Ok(()) => self.status_line = "Game saved.".to_string(),
                Err(e) => {
                    warn!(error = %e, "Save failed");
                    self.status_line = format!("Save failed: {}", e);
                }
            },
            KeyCode::Char('l') => self.load(),
            KeyCode::Char('z') => {
                self.game.reset_stats();
                self.status_line = "Statistics reset.".to_string();
            }
            _ => {}
        }
        self.refresh();
        Control::Continue
    }

    /// Plays the scheduled computer reply.
    #[instrument(skip(self))]
    pub fn computer_turn(&mut self) {
        self.pending_computer = None;
        let outcome = self.game.play_computer();
        debug!(?outcome, "Computer moved");
        self.refresh();
    }

    fn play(&mut self, index: usize) {
        if let Some(pos) = Position::from_index(index) {
            self.cursor = pos;
        }
        match self.game.play_human(index) {
            Ok(MoveOutcome::Ignored) => {}
            Ok(outcome) => debug!(?outcome, "Human moved"),
            Err(e) => {
                warn!(error = %e, "Autosave failed");
                self.status_line = format!("Autosave failed: {}", e);
            }
        }
    }

    /// Schedules or cancels the computer's reply and refreshes the prompt.
    fn refresh(&mut self) {
        if self.game.computer_to_move() {
            if self.pending_computer.is_none() {
                self.pending_computer = Some(Instant::now() + self.computer_delay);
            }
        } else {
            self.pending_computer = None;
        }
    }

    /// Prompt shown under the board.
    pub fn prompt(&self) -> String {
        if self.game.computer_to_move() {
            format!("Computer ({}) is thinking...", self.game.computer())
        } else if self.game.is_player_turn() {
            format!("Your move ({}).", self.game.human())
        } else {
            "Game over. Press 'r' for a new game.".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solo_tictactoe::Player;

    fn app(dir: &std::path::Path) -> App {
        let game = GameController::new(
            Player::X,
            TuiView::default(),
            FileStore::new(dir),
            RandomSelector::seeded(3),
        );
        App::new(game, Duration::from_millis(0))
    }

    #[test]
    fn test_human_move_schedules_computer() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = app(dir.path());
        assert!(app.pending_computer().is_none());

        app.handle_key(KeyCode::Char('5'));
        assert!(app.pending_computer().is_some());
        assert_eq!(app.cursor(), Position::Center);

        app.computer_turn();
        assert!(app.pending_computer().is_none());
        assert!(app.game().is_player_turn());
    }

    #[test]
    fn test_keys_blocked_while_computer_pending() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = app(dir.path());
        app.handle_key(KeyCode::Char('1'));
        let before = app.game().board().clone();
        app.handle_key(KeyCode::Char('2'));
        assert_eq!(app.game().board(), &before);
    }

    #[test]
    fn test_quit() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = app(dir.path());
        assert_eq!(app.handle_key(KeyCode::Char('q')), Control::Quit);
    }
}
