//! Game controller: the single owner of mutable game state.
//!
//! The controller gates moves, applies the rules' verdicts (turn flips,
//! statistics, messages) and persists snapshots. Front-ends feed it cell
//! clicks and button presses and observe it through a [`GameView`].

use tracing::{debug, info, instrument, warn};

use crate::games::tictactoe::{Board, GameStatus, MoveSelector, Player, Position, Stats, rules};
use crate::snapshot::{Snapshot, SnapshotError};
use crate::store::KeyValueStore;
use crate::view::GameView;

/// What happened in response to a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The request was not a legal move right now and changed nothing.
    Ignored,
    /// The move was played and the other side is now to move.
    Continued,
    /// The move completed a line.
    Won(Player),
    /// The move filled the board without a line.
    Draw,
}

/// Human-versus-computer tic-tac-toe session.
#[derive(Debug)]
pub struct GameController<V, S, M> {
    board: Board,
    current_player: Player,
    status: GameStatus,
    stats: Stats,
    human: Player,
    view: V,
    store: S,
    selector: M,
}

impl<V, S, M> GameController<V, S, M>
where
    V: GameView,
    S: KeyValueStore,
    M: MoveSelector,
{
    /// Creates a fresh game with X to move and zeroed statistics.
    #[instrument(skip(view, store, selector))]
    pub fn new(human: Player, view: V, store: S, selector: M) -> Self {
        let mut controller = Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            stats: Stats::default(),
            human,
            view,
            store,
            selector,
        };
        controller.view.render(&controller.board);
        controller.view.hide_message();
        controller.view.update_stats(&controller.stats);
        info!(human = %human, "Game controller created");
        controller
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move (while the game is active), or the last mover.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Win and draw counters.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// The human's mark.
    pub fn human(&self) -> Player {
        self.human
    }

    /// The computer's mark.
    pub fn computer(&self) -> Player {
        self.human.opponent()
    }

    /// True until the game is won or drawn.
    pub fn is_active(&self) -> bool {
        !self.status.is_over()
    }

    /// True when a cell click would be accepted.
    pub fn is_player_turn(&self) -> bool {
        self.is_active() && self.current_player == self.human
    }

    /// True when the front-end should schedule the computer's reply.
    pub fn computer_to_move(&self) -> bool {
        self.is_active() && self.current_player == self.computer()
    }

    /// The attached view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the backing store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Plays the human's mark at board index `index` (0-8).
    ///
    /// Out-of-range indices, occupied cells, finished games and clicks made
    /// during the computer's turn are ignored. An accepted move is followed
    /// by a snapshot save.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if the snapshot could not be saved. The
    /// move itself has been applied in that case.
    #[instrument(skip(self), fields(player = %self.human))]
    pub fn play_human(&mut self, index: usize) -> Result<MoveOutcome, SnapshotError> {
        if !self.is_player_turn() {
            debug!(
                status = ?self.status,
                to_move = %self.current_player,
                "Click ignored: not the human's turn"
            );
            return Ok(MoveOutcome::Ignored);
        }

        let pos = match self.board.place(index, self.human) {
            Ok(pos) => pos,
            Err(e) => {
                debug!(error = %e, "Click ignored");
                return Ok(MoveOutcome::Ignored);
            }
        };

        let outcome = self.conclude_move(pos, self.human);
        self.save()?;
        Ok(outcome)
    }

    /// Plays the computer's reply, chosen by the move selector.
    ///
    /// A no-op unless the game is active and it is the computer's turn.
    #[instrument(skip(self), fields(player = %self.computer()))]
    pub fn play_computer(&mut self) -> MoveOutcome {
        if !self.computer_to_move() {
            debug!(
                status = ?self.status,
                to_move = %self.current_player,
                "Computer move skipped"
            );
            return MoveOutcome::Ignored;
        }

        let Some(pos) = self.selector.select(&self.board) else {
            warn!("Computer found no empty square");
            return MoveOutcome::Ignored;
        };

        let mover = self.computer();
        if let Err(e) = self.board.place(pos.to_index(), mover) {
            warn!(error = %e, "Selector returned an unplayable square");
            return MoveOutcome::Ignored;
        }
        self.conclude_move(pos, mover)
    }

    /// Evaluates the board after `mover` played `pos` and applies the verdict.
    fn conclude_move(&mut self, pos: Position, mover: Player) -> MoveOutcome {
        self.view.render(&self.board);
        self.status = rules::evaluate(&self.board);

        match self.status {
            GameStatus::InProgress => {
                self.current_player = mover.opponent();
                debug!(position = %pos, next = %self.current_player, "Move played");
                MoveOutcome::Continued
            }
            finished => {
                self.stats.record(finished);
                self.view.update_stats(&self.stats);
                self.view.show_message(&finished.to_string());
                info!(position = %pos, status = ?finished, "Game over");
                match finished {
                    GameStatus::Won(winner) => MoveOutcome::Won(winner),
                    _ => MoveOutcome::Draw,
                }
            }
        }
    }

    /// Starts a new game and deletes the saved snapshot.
    ///
    /// Statistics are kept.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if the stored snapshot could not be removed.
    /// The in-memory game has been reset in that case.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Result<(), SnapshotError> {
        self.board = Board::new();
        self.current_player = Player::X;
        self.status = GameStatus::InProgress;
        self.view.hide_message();
        self.view.render(&self.board);
        info!("Game restarted");
        Snapshot::clear(&mut self.store)
    }

    /// Persists board, side to move and statistics.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if encoding or the store write fails.
    #[instrument(skip(self))]
    pub fn save(&mut self) -> Result<(), SnapshotError> {
        Snapshot::new(self.current_player, self.board.clone(), self.stats).save(&mut self.store)
    }

    /// Restores the saved game, if any. Returns whether a snapshot was found.
    ///
    /// The loaded board is re-evaluated only to decide what to display:
    /// counters come from the snapshot and are never incremented here, and
    /// the side to move is taken as saved.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if the store fails or the saved text is
    /// malformed. The current game is left untouched in that case.
    #[instrument(skip(self))]
    pub fn load(&mut self) -> Result<bool, SnapshotError> {
        let Some(snapshot) = Snapshot::load(&self.store)? else {
            return Ok(false);
        };

        self.board = snapshot.game_state.clone();
        self.current_player = snapshot.current_player;
        self.stats = snapshot.stats();
        self.status = rules::evaluate(&self.board);

        self.view.update_stats(&self.stats);
        self.view.render(&self.board);
        if self.status.is_over() {
            self.view.show_message(&self.status.to_string());
        } else {
            self.view.hide_message();
        }

        info!(status = ?self.status, to_move = %self.current_player, "Game loaded");
        Ok(true)
    }

    /// Zeroes the counters. The board, side to move and any saved snapshot
    /// are left as they are.
    #[instrument(skip(self))]
    pub fn reset_stats(&mut self) {
        self.stats.reset();
        self.view.update_stats(&self.stats);
        info!("Statistics reset");
    }
}
