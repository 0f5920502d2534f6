//! Piece tests - translation, rotation about the anchor, bounds

use tetromnom::core::matrix::Grid;
use tetromnom::core::{occupied_local_cells, Piece};
use tetromnom::types::{Pos, ShapeKind, MAX_POPPING_COUNT};

fn sorted(mut cells: Vec<Pos>) -> Vec<Pos> {
    cells.sort();
    cells
}

#[test]
fn test_new_piece_sits_at_origin() {
    for kind in ShapeKind::ALL {
        let piece = Piece::new(kind);
        assert_eq!(piece.anchor(), Pos::new(0, 0));
        assert_eq!(piece.kind(), kind);
        assert_eq!(piece.cells().count(), 4);
        assert_eq!(
            piece.cells().collect::<Vec<_>>(),
            occupied_local_cells(piece.grid())
        );
    }
}

#[test]
fn test_translate_shifts_every_cell() {
    let offsets = [(0, 0), (1, 0), (-3, 2), (7, 19), (0, -1), (-10, -10)];
    for kind in ShapeKind::ALL {
        for &(dx, dy) in &offsets {
            let mut piece = Piece::new(kind);
            piece.translate(2, 5);
            let before: Vec<Pos> = piece.cells().collect();

            piece.translate(dx, dy);

            let expected: Vec<Pos> = before.iter().map(|p| p.offset(dx, dy)).collect();
            assert_eq!(piece.cells().collect::<Vec<_>>(), expected, "{:?} by ({}, {})", kind, dx, dy);
            assert_eq!(piece.anchor(), Pos::new(2 + dx, 5 + dy));
        }
    }
}

#[test]
fn test_rotation_keeps_anchor() {
    let mut piece = Piece::new(ShapeKind::T);
    piece.translate(4, 10);
    piece.rotate_cw();

    assert_eq!(piece.anchor(), Pos::new(4, 10));
    assert_eq!(piece.dims(), (3, 2));
    let expected: Vec<Pos> = occupied_local_cells(piece.grid())
        .into_iter()
        .map(|p| p.offset(4, 10))
        .collect();
    assert_eq!(piece.cells().collect::<Vec<_>>(), expected);
}

#[test]
fn test_i_piece_rotates_to_horizontal_run() {
    let mut piece = Piece::new(ShapeKind::I);
    piece.translate(3, 7);
    assert_eq!(piece.dims(), (4, 1));

    piece.rotate_cw();
    assert_eq!(piece.dims(), (1, 4));
    assert_eq!(
        sorted(piece.cells().collect()),
        vec![Pos::new(3, 7), Pos::new(4, 7), Pos::new(5, 7), Pos::new(6, 7)]
    );
}

#[test]
fn test_rotate_back_restores_cells() {
    for kind in ShapeKind::ALL {
        let mut piece = Piece::new(kind);
        piece.translate(5, 5);
        let before = sorted(piece.cells().collect());
        piece.rotate_ccw();
        piece.rotate_cw();
        assert_eq!(sorted(piece.cells().collect()), before, "{:?}", kind);
    }
}

#[test]
fn test_out_of_bounds_edges() {
    let mut piece = Piece::new(ShapeKind::O);
    assert!(!piece.out_of_bounds(10, 20));

    piece.translate(-1, 0);
    assert!(piece.out_of_bounds(10, 20));

    piece.translate(10, 0); // x 9..10
    assert!(piece.out_of_bounds(10, 20));

    piece.translate(-1, 18); // x 8..9, y 18..19
    assert!(!piece.out_of_bounds(10, 20));

    piece.translate(0, 1); // y 19..20
    assert!(piece.out_of_bounds(10, 20));

    piece.translate(0, -20); // y -1..0
    assert!(piece.out_of_bounds(10, 20));
}

#[test]
fn test_popping_lifecycle() {
    let mut piece = Piece::new(ShapeKind::Z);
    assert!(piece.tiles().iter().all(|t| t.popping() == MAX_POPPING_COUNT));

    for _ in 0..MAX_POPPING_COUNT {
        assert!(piece.is_moving());
        piece.update();
    }
    assert!(!piece.is_moving());

    // Rotation rebuilds tiles, which pop again.
    piece.rotate_cw();
    assert!(piece.is_moving());
    piece.stop_animation();
    assert!(!piece.is_moving());
    piece.update();
    assert!(piece.tiles().iter().all(|t| t.popping() == 0));
}

#[test]
fn test_with_grid_accepts_any_shape() {
    let column = Grid::new(5, 1, vec![1; 5]).unwrap();
    let mut piece = Piece::with_grid(ShapeKind::L, column);
    piece.translate(2, 0);

    assert_eq!(piece.cells().count(), 5);
    assert!(piece.cells().all(|p| p.x == 2));
    assert_eq!(piece.cells().map(|p| p.y).max(), Some(4));
}
