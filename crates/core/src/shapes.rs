//! Shapes module - canonical orientation grid for every tetromino
//!
//! Grids are written top row first, as they appear on screen.

use tetromnom_types::ShapeKind;

use crate::matrix::Grid;

const I_GRID: [&[u8]; 4] = [&[1], &[1], &[1], &[1]];

const J_GRID: [&[u8]; 3] = [&[0, 1], &[0, 1], &[1, 1]];

const L_GRID: [&[u8]; 3] = [&[1, 0], &[1, 0], &[1, 1]];

const S_GRID: [&[u8]; 2] = [&[0, 1, 1], &[1, 1, 0]];

const Z_GRID: [&[u8]; 2] = [&[1, 1, 0], &[0, 1, 1]];

const T_GRID: [&[u8]; 2] = [&[1, 1, 1], &[0, 1, 0]];

const O_GRID: [&[u8]; 2] = [&[1, 1], &[1, 1]];

fn rows_for(kind: ShapeKind) -> &'static [&'static [u8]] {
    match kind {
        ShapeKind::I => &I_GRID,
        ShapeKind::J => &J_GRID,
        ShapeKind::L => &L_GRID,
        ShapeKind::S => &S_GRID,
        ShapeKind::Z => &Z_GRID,
        ShapeKind::T => &T_GRID,
        ShapeKind::O => &O_GRID,
    }
}

/// Spawn orientation grid for a shape
pub fn shape_grid(kind: ShapeKind) -> Grid {
    Grid::from_rows(rows_for(kind)).expect("shape tables are rectangular 0/1")
}
