mod position;
pub mod rules;
mod selector;
mod stats;
mod types;

pub use position::Position;
pub use selector::{MoveSelector, RandomSelector};
pub use stats::Stats;
pub use types::{Board, GameStatus, MoveError, ParsePlayerError, Player, Square};
