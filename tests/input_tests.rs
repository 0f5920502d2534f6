//! Input adapter tests - keys through the latch into the board

use crossterm::event::{KeyCode, KeyEvent};
use tetromnom::core::{Board, BoardConfig, BoardState, ShapeSequence};
use tetromnom::input::{map_key, InputLatch, KeyCommand};
use tetromnom::types::{Direction, Pos, ShapeKind};

/// Feed key presses into a latch the way the terminal loop does
fn press(latch: &mut InputLatch, codes: &[KeyCode]) {
    for &code in codes {
        match map_key(KeyEvent::from(code)) {
            Some(KeyCommand::Adjust(dir)) => latch.push_dir(dir),
            Some(KeyCommand::Drop) => latch.push_drop(),
            _ => {}
        }
    }
}

#[test]
fn test_one_direction_per_tick_reaches_board() {
    let mut board = Board::with_source(BoardConfig::default(), ShapeSequence::repeat(ShapeKind::O));
    let mut latch = InputLatch::new();
    board.update(latch.take());
    assert_eq!(board.active_piece().unwrap().anchor(), Pos::new(4, 20));

    // Three lefts between ticks still move the piece a single column.
    press(&mut latch, &[KeyCode::Left, KeyCode::Left, KeyCode::Char('a')]);
    board.update(latch.take());
    assert_eq!(board.active_piece().unwrap().anchor(), Pos::new(3, 20));

    board.update(latch.take());
    assert_eq!(board.active_piece().unwrap().anchor(), Pos::new(3, 20));
}

#[test]
fn test_drop_key_settles_in_same_tick() {
    let mut board = Board::with_source(BoardConfig::default(), ShapeSequence::repeat(ShapeKind::I));
    let mut latch = InputLatch::new();
    board.update(latch.take());

    press(&mut latch, &[KeyCode::Right, KeyCode::Char(' ')]);
    let input = latch.take();
    assert_eq!(input.dir, Some(Direction::Right));
    assert!(input.drop);

    board.update(input);
    assert_eq!(board.state(), BoardState::Empty);
    assert!(board.placed_map().is_occupied(6, 0));
    assert!(board.placed_map().is_occupied(6, 3));
}

#[test]
fn test_non_game_keys_leave_latch_empty() {
    let mut latch = InputLatch::new();
    press(&mut latch, &[KeyCode::Char('r'), KeyCode::Char('q'), KeyCode::Tab]);
    assert!(latch.take().is_empty());
}
