use serde_json::{json, Value};
use tetromnom::core::{Board, BoardConfig, BoardSnapshot, ShapeSequence};
use tetromnom::types::{Direction, Input, ShapeKind};

fn to_json(snap: &BoardSnapshot) -> Value {
    serde_json::to_value(snap).unwrap()
}

#[test]
fn snapshot_json_has_stable_field_names() {
    let board = Board::with_source(BoardConfig::default(), ShapeSequence::repeat(ShapeKind::L));
    let json = to_json(&board.snapshot());

    let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(
        keys,
        vec!["gravity_countdown", "height", "running", "state", "tiles", "width"]
    );
    assert_eq!(json["state"], "spawning");
    assert_eq!(json["width"], 10);
    assert_eq!(json["height"], 20);
    assert_eq!(json["tiles"], json!([]));
}

#[test]
fn snapshot_json_describes_settled_tiles() {
    let mut board = Board::with_source(BoardConfig::default(), ShapeSequence::repeat(ShapeKind::O));
    board.update(Input::none());
    board.adjust(Direction::Left);
    board.hard_drop();

    let json = to_json(&board.snapshot());
    assert_eq!(json["state"], "empty");
    assert_eq!(json["gravity_countdown"], 0);

    let tiles = json["tiles"].as_array().unwrap();
    assert_eq!(tiles.len(), 4);
    assert!(tiles.contains(&json!({
        "x": 3,
        "y": 0,
        "kind": "o",
        "piece_id": 1,
        "active": false,
        "moving": false
    })));
}

#[test]
fn snapshot_json_reports_game_over() {
    let mut board = Board::with_source(BoardConfig::default(), ShapeSequence::repeat(ShapeKind::I));
    while board.is_running() {
        board.update(Input::hard_drop());
    }

    let json = to_json(&board.snapshot());
    assert_eq!(json["state"], "game_over");
    assert_eq!(json["running"], false);
}

#[test]
fn snapshot_into_reuses_buffer() {
    let mut board = Board::with_source(BoardConfig::default(), ShapeSequence::repeat(ShapeKind::T));
    let mut snap = BoardSnapshot::default();

    board.update(Input::none());
    board.snapshot_into(&mut snap);
    assert_eq!(snap.tiles.len(), 4);
    assert!(snap.tiles.iter().all(|t| t.active && t.moving));

    board.hard_drop();
    board.snapshot_into(&mut snap);
    assert_eq!(snap.tiles.len(), 4);
    assert!(snap.tiles.iter().all(|t| !t.active && !t.moving));
    assert_eq!(snap, board.snapshot());
}
