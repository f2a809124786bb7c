//! Solo tic-tac-toe library - human versus a random computer opponent.
//!
//! # Architecture
//!
//! - **Games**: board, rules evaluation, random move selection, statistics
//! - **Controller**: owns the game state, gates turns, applies results
//! - **View**: capability trait the controller reports display changes to
//! - **Snapshot / Store**: saved game in a flat key-value store
//! - **Config**: TOML settings for a play session
//!
//! # Example
//!
//! ```
//! use solo_tictactoe::{
//!     GameController, MemoryStore, MoveOutcome, NullView, Player, RandomSelector,
//! };
//!
//! # fn example() -> Result<(), solo_tictactoe::SnapshotError> {
//! let mut game = GameController::new(
//!     Player::X,
//!     NullView,
//!     MemoryStore::new(),
//!     RandomSelector::seeded(7),
//! );
//! assert_eq!(game.play_human(4)?, MoveOutcome::Continued);
//! assert!(game.computer_to_move());
//! game.play_computer();
//! assert!(game.is_player_turn());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod controller;
mod games;
mod snapshot;
mod store;
mod view;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Controller
pub use controller::{GameController, MoveOutcome};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, GameStatus, MoveError, MoveSelector, ParsePlayerError, Player, Position,
    RandomSelector, Square, Stats, rules,
};

// Crate-level exports - Persistence
pub use snapshot::{SNAPSHOT_KEY, Snapshot, SnapshotError};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};

// Crate-level exports - View capability
pub use view::{GameView, NullView};
