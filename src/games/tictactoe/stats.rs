//! Cumulative win/draw counters.

use super::{GameStatus, Player};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Win and draw counts across games, kept until explicitly reset.
/// Counters saturate at `u32::MAX` rather than wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize, new)]
pub struct Stats {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Stats {
    /// Wins recorded for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Total games counted.
    pub fn total_games(&self) -> u64 {
        u64::from(self.x_wins) + u64::from(self.o_wins) + u64::from(self.draws)
    }

    /// Counts a finished game. In-progress status is ignored.
    #[instrument(skip(self))]
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Player::X) => self.x_wins = self.x_wins.saturating_add(1),
            GameStatus::Won(Player::O) => self.o_wins = self.o_wins.saturating_add(1),
            GameStatus::Draw => self.draws = self.draws.saturating_add(1),
            GameStatus::InProgress => return,
        }
        debug!(
            x_wins = self.x_wins,
            o_wins = self.o_wins,
            draws = self.draws,
            "Stats updated"
        );
    }

    /// Zeroes every counter.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
