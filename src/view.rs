//! Display capability the controller reports to.

use crate::games::tictactoe::{Board, Stats};

/// Everything the game core needs from a front-end.
///
/// The controller calls these after each state change; implementors only
/// draw. The terminal UI implements it, and tests record the calls.
pub trait GameView {
    /// Shows the current board.
    fn render(&mut self, board: &Board);

    /// Shows a result or status message.
    fn show_message(&mut self, text: &str);

    /// Hides the message display.
    fn hide_message(&mut self);

    /// Shows the win and draw counters.
    fn update_stats(&mut self, stats: &Stats);
}

/// View that draws nothing, for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullView;

impl GameView for NullView {
    fn render(&mut self, _board: &Board) {}
    fn show_message(&mut self, _text: &str) {}
    fn hide_message(&mut self) {}
    fn update_stats(&mut self, _stats: &Stats) {}
}
