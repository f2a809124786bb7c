//! Shared test doubles.

#![allow(dead_code)]

use std::collections::VecDeque;

use solo_tictactoe::{Board, GameView, MoveSelector, Player, Position, Square, Stats};

/// One call made on a [`RecordingView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall {
    Render(Board),
    ShowMessage(String),
    HideMessage,
    UpdateStats(Stats),
}

/// View that remembers every call it receives.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub calls: Vec<ViewCall>,
}

impl RecordingView {
    /// Most recent message state: `Some(text)` if shown, `None` if hidden.
    pub fn message(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|call| match call {
            ViewCall::ShowMessage(text) => Some(Some(text.as_str())),
            ViewCall::HideMessage => Some(None),
            _ => None,
        })?
    }

    /// Most recently displayed counters.
    pub fn stats(&self) -> Option<Stats> {
        self.calls.iter().rev().find_map(|call| match call {
            ViewCall::UpdateStats(stats) => Some(*stats),
            _ => None,
        })
    }

    /// Most recently rendered board.
    pub fn board(&self) -> Option<&Board> {
        self.calls.iter().rev().find_map(|call| match call {
            ViewCall::Render(board) => Some(board),
            _ => None,
        })
    }
}

impl GameView for RecordingView {
    fn render(&mut self, board: &Board) {
        self.calls.push(ViewCall::Render(board.clone()));
    }

    fn show_message(&mut self, text: &str) {
        self.calls.push(ViewCall::ShowMessage(text.to_string()));
    }

    fn hide_message(&mut self) {
        self.calls.push(ViewCall::HideMessage);
    }

    fn update_stats(&mut self, stats: &Stats) {
        self.calls.push(ViewCall::UpdateStats(*stats));
    }
}

/// Selector that replays a fixed list of board indices.
#[derive(Debug, Default)]
pub struct ScriptedSelector {
    moves: VecDeque<usize>,
}

impl ScriptedSelector {
    pub fn new(moves: impl IntoIterator<Item = usize>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }
}

impl MoveSelector for ScriptedSelector {
    fn select(&mut self, _board: &Board) -> Option<Position> {
        self.moves.pop_front().and_then(Position::from_index)
    }
}

/// Builds a board from the saved-game cell notation.
pub fn board(cells: [&str; 9]) -> Board {
    Board::from_squares(cells.map(|cell| match cell {
        "X" => Square::Occupied(Player::X),
        "O" => Square::Occupied(Player::O),
        _ => Square::Empty,
    }))
}
