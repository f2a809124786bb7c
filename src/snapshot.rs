//! Saved-game snapshot: board, side to move and statistics.

use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::games::tictactoe::{Board, Player, Stats};
use crate::store::{KeyValueStore, StoreError};

/// Key under which the snapshot is stored.
pub const SNAPSHOT_KEY: &str = "ticTacToeGame";

/// The persisted unit.
///
/// Encoded as
/// `{"currentPlayer":"X","gameState":["","X",...],"xWins":0,"oWins":0,"draws":0}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Player to move.
    pub current_player: Player,
    /// Board cells in row-major order.
    pub game_state: Board,
    /// X wins.
    pub x_wins: u32,
    /// O wins.
    pub o_wins: u32,
    /// Draws.
    pub draws: u32,
}

impl Snapshot {
    /// Builds a snapshot from live game state.
    pub fn new(current_player: Player, board: Board, stats: Stats) -> Self {
        Self {
            current_player,
            game_state: board,
            x_wins: *stats.x_wins(),
            o_wins: *stats.o_wins(),
            draws: *stats.draws(),
        }
    }

    /// The counters carried by this snapshot.
    pub fn stats(&self) -> Stats {
        Stats::new(self.x_wins, self.o_wins, self.draws)
    }

    /// Encodes the snapshot as JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Decode`] if serialization fails.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a snapshot from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Decode`] for malformed text, unknown marks,
    /// or a board that does not have exactly nine cells.
    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Writes the snapshot under [`SNAPSHOT_KEY`], overwriting any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Store`] if the store write fails.
    #[instrument(skip_all, fields(current_player = %self.current_player))]
    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<(), SnapshotError> {
        store.set(SNAPSHOT_KEY, self.to_json()?)?;
        info!("Snapshot saved");
        Ok(())
    }

    /// Reads the snapshot, returning `None` if none has been saved.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Store`] if the store read fails and
    /// [`SnapshotError::Decode`] if the stored text is malformed.
    #[instrument(skip_all)]
    pub fn load(store: &impl KeyValueStore) -> Result<Option<Self>, SnapshotError> {
        let Some(text) = store.get(SNAPSHOT_KEY)? else {
            debug!("No snapshot stored");
            return Ok(None);
        };
        let snapshot = Self::from_json(&text)?;
        info!(current_player = %snapshot.current_player, "Snapshot loaded");
        Ok(Some(snapshot))
    }

    /// Deletes any stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Store`] if the store cannot remove the record.
    #[instrument(skip_all)]
    pub fn clear(store: &mut impl KeyValueStore) -> Result<(), SnapshotError> {
        store.remove(SNAPSHOT_KEY)?;
        info!("Snapshot cleared");
        Ok(())
    }
}

/// Errors from saving or loading a snapshot.
#[derive(Debug, Display, Error, From)]
pub enum SnapshotError {
    /// The underlying store failed.
    #[display("Snapshot store failed: {}", _0)]
    Store(StoreError),

    /// The stored text is not a valid snapshot.
    #[display("Malformed snapshot: {}", _0)]
    Decode(serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    #[test]
    fn test_wire_format() {
        let mut squares = [Square::Empty; 9];
        squares[0] = Square::Occupied(Player::X);
        squares[4] = Square::Occupied(Player::O);
        let snapshot = Snapshot::new(Player::X, Board::from_squares(squares), Stats::new(1, 2, 3));

        let json = snapshot.to_json().expect("encode");
        assert_eq!(
            json,
            r#"{"currentPlayer":"X","gameState":["X","","","","O","","","",""],"xWins":1,"oWins":2,"draws":3}"#
        );
    }

    #[test]
    fn test_rejects_short_board() {
        let text = r#"{"currentPlayer":"O","gameState":["X",""],"xWins":0,"oWins":0,"draws":0}"#;
        assert!(matches!(Snapshot::from_json(text), Err(SnapshotError::Decode(_))));
    }

    #[test]
    fn test_rejects_unknown_mark() {
        let text = r#"{"currentPlayer":"O","gameState":["Z","","","","","","","",""],"xWins":0,"oWins":0,"draws":0}"#;
        assert!(Snapshot::from_json(text).is_err());
    }

    #[test]
    fn test_rejects_negative_counter() {
        let text = r#"{"currentPlayer":"X","gameState":["","","","","","","","",""],"xWins":-1,"oWins":0,"draws":0}"#;
        assert!(Snapshot::from_json(text).is_err());
    }
}
