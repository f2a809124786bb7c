//! Computer opponent move selection.

use super::{Board, Position};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Chooses the computer's next move.
pub trait MoveSelector {
    /// Picks an empty position, or `None` if the board has no empty square.
    fn select(&mut self, board: &Board) -> Option<Position>;
}

/// Picks uniformly at random among the empty squares.
///
/// No look-ahead: it neither blocks the opponent nor takes a winning line.
#[derive(Debug, Clone)]
pub struct RandomSelector<R = ChaCha8Rng> {
    rng: R,
}

impl<R: rand::Rng> RandomSelector<R> {
    /// Wraps an existing random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSelector<ChaCha8Rng> {
    /// Deterministic selector; the same seed replays the same choices.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Selector seeded from the operating system.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: rand::Rng> MoveSelector for RandomSelector<R> {
    #[instrument(skip_all)]
    fn select(&mut self, board: &Board) -> Option<Position> {
        let moves = Position::valid_moves(board);
        let choice = moves.choose(&mut self.rng).copied();
        debug!(available = moves.len(), ?choice, "Computer chose position");
        choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Square};

    #[test]
    fn test_full_board_yields_none() {
        let board = Board::from_squares([Square::Occupied(Player::X); 9]);
        let mut selector = RandomSelector::seeded(7);
        assert_eq!(selector.select(&board), None);
    }

    #[test]
    fn test_single_empty_square_is_always_chosen() {
        let mut squares = [Square::Occupied(Player::O); 9];
        squares[5] = Square::Empty;
        let board = Board::from_squares(squares);
        let mut selector = RandomSelector::seeded(42);
        for _ in 0..20 {
            assert_eq!(selector.select(&board), Some(Position::MiddleRight));
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::new();
        let mut a = RandomSelector::seeded(1234);
        let mut b = RandomSelector::seeded(1234);
        let picks_a: Vec<_> = (0..16).map(|_| a.select(&board)).collect();
        let picks_b: Vec<_> = (0..16).map(|_| b.select(&board)).collect();
        assert_eq!(picks_a, picks_b);
    }
}
