//! Tests for saving and loading games through the key-value stores.

mod common;

use common::{RecordingView, ScriptedSelector, board};
use proptest::prelude::*;
use solo_tictactoe::{
    Board, FileStore, GameController, KeyValueStore, MemoryStore, Player, SNAPSHOT_KEY, Snapshot,
    Square, Stats,
};

#[test]
fn test_file_store_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = FileStore::new(dir.path());
    let snapshot = Snapshot::new(
        Player::O,
        board(["X", "", "", "", "X", "", "", "", "O"]),
        Stats::new(3, 1, 2),
    );

    snapshot.save(&mut store).expect("save");
    assert!(dir.path().join(format!("{SNAPSHOT_KEY}.json")).exists());

    let reopened = FileStore::new(dir.path());
    let loaded = Snapshot::load(&reopened).expect("load").expect("present");
    assert_eq!(loaded, snapshot);
}

#[test]
fn test_save_overwrites() {
    let mut store = MemoryStore::new();
    Snapshot::new(Player::X, Board::new(), Stats::new(1, 1, 1))
        .save(&mut store)
        .expect("save");
    Snapshot::new(Player::O, Board::new(), Stats::new(2, 2, 2))
        .save(&mut store)
        .expect("save");

    assert_eq!(
        store.get("other").expect("get"),
        None,
        "only the snapshot key is written"
    );
    let loaded = Snapshot::load(&store).expect("load").expect("present");
    assert_eq!(loaded.current_player, Player::O);
    assert_eq!(loaded.stats(), Stats::new(2, 2, 2));
}

#[test]
fn test_clear_removes_record() {
    let mut store = MemoryStore::new();
    Snapshot::new(Player::X, Board::new(), Stats::default())
        .save(&mut store)
        .expect("save");
    Snapshot::clear(&mut store).expect("clear");
    assert_eq!(store.get(SNAPSHOT_KEY).expect("get"), None);
    assert_eq!(Snapshot::load(&store).expect("load"), None);
}

#[test]
fn test_reads_record_written_by_hand() {
    let mut store = MemoryStore::new();
    store
        .set(
            SNAPSHOT_KEY,
            r#"{"currentPlayer":"O","gameState":["X","","","","","","","",""],"xWins":4,"oWins":0,"draws":7}"#
                .to_string(),
        )
        .expect("set");

    let loaded = Snapshot::load(&store).expect("load").expect("present");
    assert_eq!(loaded.current_player, Player::O);
    assert_eq!(loaded.game_state, board(["X", "", "", "", "", "", "", "", ""]));
    assert_eq!(loaded.stats(), Stats::new(4, 0, 7));
}

#[test]
fn test_controller_save_then_load_across_sessions() {
    let dir = tempfile::tempdir().expect("tempdir");

    let mut first = GameController::new(
        Player::X,
        RecordingView::default(),
        FileStore::new(dir.path()),
        ScriptedSelector::new([0]),
    );
    first.play_human(4).expect("play");
    first.play_computer();
    first.save().expect("save");

    let mut second = GameController::new(
        Player::X,
        RecordingView::default(),
        FileStore::new(dir.path()),
        ScriptedSelector::default(),
    );
    assert!(second.load().expect("load"));
    assert_eq!(second.board(), first.board());
    assert_eq!(second.current_player(), first.current_player());
    assert_eq!(second.stats(), first.stats());
}

fn square(code: u8) -> Square {
    match code {
        1 => Square::Occupied(Player::X),
        2 => Square::Occupied(Player::O),
        _ => Square::Empty,
    }
}

proptest! {
    #[test]
    fn prop_save_then_load_reproduces_state(
        cells in prop::array::uniform9(0u8..3),
        x_to_move in any::<bool>(),
        x_wins in any::<u32>(),
        o_wins in any::<u32>(),
        draws in any::<u32>(),
    ) {
        let player = if x_to_move { Player::X } else { Player::O };
        let snapshot = Snapshot::new(
            player,
            Board::from_squares(cells.map(square)),
            Stats::new(x_wins, o_wins, draws),
        );
        let mut store = MemoryStore::new();
        snapshot.save(&mut store).expect("save");

        let loaded = Snapshot::load(&store).expect("load").expect("present");
        prop_assert_eq!(loaded, snapshot);
    }
}
