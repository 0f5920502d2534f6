use tetromnom::core::{Board, BoardConfig, BoardSnapshot, ShapeSequence};
use tetromnom::term::{GameView, Viewport};
use tetromnom::types::{Direction, Input, ShapeKind};

fn o_board() -> Board<ShapeSequence> {
    Board::with_source(BoardConfig::default(), ShapeSequence::repeat(ShapeKind::O))
}

/// With cell_w=2 and cell_h=1 a 10×20 board plus border is exactly 22×22,
/// so the frame sits at the viewport origin.
fn render(snap: &BoardSnapshot) -> tetromnom::term::FrameBuffer {
    GameView::default().render(snap, Viewport::new(22, 22))
}

#[test]
fn term_view_renders_border_corners() {
    let fb = render(&o_board().snapshot());

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
    assert_eq!(fb.get(5, 0).unwrap().ch, '─');
    assert_eq!(fb.get(0, 5).unwrap().ch, '│');
}

#[test]
fn term_view_puts_board_row_zero_at_the_bottom() {
    let mut board = o_board();
    board.update(Input::none());
    for _ in 0..4 {
        board.adjust(Direction::Left);
    }
    board.hard_drop();

    let fb = render(&board.snapshot());

    // Board (0, 0) and (1, 1) → two columns each, bottom rows of the frame.
    for (x, y) in [(1, 20), (2, 20), (3, 20), (4, 20), (1, 19), (4, 19)] {
        let cell = fb.get(x, y).unwrap();
        assert_eq!(cell.ch, '█', "({}, {})", x, y);
        assert_eq!(cell.style.fg, ShapeKind::O.color());
    }
    assert_eq!(fb.get(5, 20).unwrap().ch, '·');
    assert_eq!(fb.get(1, 18).unwrap().ch, '·');
}

#[test]
fn term_view_skips_cells_above_the_board() {
    let mut board = o_board();
    board.update(Input::none());
    let snap = board.snapshot();
    assert_eq!(snap.tiles.len(), 4);

    let fb = render(&snap);
    let inside: String = fb.row_text(1).chars().skip(1).take(20).collect();
    assert_eq!(inside, "·".repeat(20));
}

#[test]
fn term_view_draws_moving_tiles_lighter() {
    let mut board = Board::with_source(
        BoardConfig::default().with_gravity_interval(0),
        ShapeSequence::repeat(ShapeKind::O),
    );
    board.update(Input::none());
    for _ in 0..4 {
        board.update(Input::none());
    }
    let snap = board.snapshot();
    let tile = snap.tile_at(4, 16).unwrap();
    assert!(tile.moving && tile.active);

    // Board y=17 lands on screen row 1 + (19 - 17) = 3.
    let fb = render(&snap);
    let cell = fb.get(1 + 4 * 2, 3).unwrap();
    assert_eq!(cell.ch, '▓');
    assert_ne!(cell.style.fg, ShapeKind::O.color());
    assert!(cell.style.bold);
}

#[test]
fn term_view_shows_game_over_overlay() {
    let mut board = o_board();
    while board.is_running() {
        board.update(Input::hard_drop());
    }
    let fb = render(&board.snapshot());

    assert!((0..fb.height()).any(|y| fb.row_text(y).contains("GAME OVER")));
}

#[test]
fn term_view_centres_frame_in_a_larger_viewport() {
    let fb = GameView::default().render(&o_board().snapshot(), Viewport::new(30, 30));
    assert_eq!(fb.width(), 30);
    assert_eq!(fb.get(4, 4).unwrap().ch, '┌');
    assert_eq!(fb.get(25, 25).unwrap().ch, '┘');
}
