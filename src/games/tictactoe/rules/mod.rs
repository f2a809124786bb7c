//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Applying their consequences (turn
//! changes, statistics) is the controller's job, so these can be re-run
//! freely, e.g. when a saved game is loaded.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};

use super::{Board, GameStatus};
use tracing::{instrument, trace};

/// Evaluates the board: a completed line wins, otherwise a full board draws.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    let status = if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    };
    trace!(?status, "Board evaluated");
    status
}
