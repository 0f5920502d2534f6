//! Piece module - a shape instance placed on the board
//!
//! A [`Piece`] owns its orientation grid, an anchor and the board cells it
//! occupies. The cells always equal `anchor + local cell` for every occupied
//! local cell of the grid. Pieces never validate their own moves; the board
//! checks a move first and then translates or rotates the piece.

use tetromnom_types::{Pos, ShapeKind, MAX_POPPING_COUNT};

use crate::matrix::Grid;
use crate::shapes::shape_grid;

/// Identity of a piece within one board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct PieceId(pub u32);

/// One occupied board cell of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub pos: Pos,
    /// Remaining "pop" frames; purely cosmetic
    popping: u8,
}

impl Tile {
    fn new(pos: Pos) -> Self {
        Self {
            pos,
            popping: MAX_POPPING_COUNT,
        }
    }

    pub fn popping(&self) -> u8 {
        self.popping
    }

    /// True while the tile is mid-transition
    pub fn is_moving(&self) -> bool {
        self.popping > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    kind: ShapeKind,
    anchor: Pos,
    grid: Grid,
    tiles: Vec<Tile>,
}

impl Piece {
    /// New piece at the origin in its spawn orientation
    pub fn new(kind: ShapeKind) -> Self {
        Self::with_grid(kind, shape_grid(kind))
    }

    /// New piece at the origin with an arbitrary orientation grid
    ///
    /// The grid need not be a tetromino, which makes it handy for seeding
    /// terrain (a single column, a floor, ...).
    pub fn with_grid(kind: ShapeKind, grid: Grid) -> Self {
        let mut piece = Self {
            id: PieceId::default(),
            kind,
            anchor: Pos::default(),
            grid,
            tiles: Vec::new(),
        };
        piece.rebuild_tiles();
        piece
    }

    /// Builder-style id assignment
    pub fn with_id(mut self, id: PieceId) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: PieceId) {
        self.id = id;
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn anchor(&self) -> Pos {
        self.anchor
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Occupied board cells
    pub fn cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.tiles.iter().map(|t| t.pos)
    }

    /// `(rows, cols)` of the current orientation grid
    pub fn dims(&self) -> (usize, usize) {
        self.grid.dims()
    }

    /// Shift anchor and every cell by `(dx, dy)`
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.anchor = self.anchor.offset(dx, dy);
        for tile in &mut self.tiles {
            tile.pos = tile.pos.offset(dx, dy);
        }
    }

    /// Rotate clockwise in local space, then re-apply the anchor
    pub fn rotate_cw(&mut self) {
        self.grid = self.grid.rotate_cw();
        self.rebuild_tiles();
    }

    /// Rotate counter-clockwise in local space, then re-apply the anchor
    pub fn rotate_ccw(&mut self) {
        self.grid = self.grid.rotate_ccw();
        self.rebuild_tiles();
    }

    /// Recompute tiles from the grid. Fresh tiles start popping.
    fn rebuild_tiles(&mut self) {
        let anchor = self.anchor;
        self.tiles = self
            .grid
            .occupied_local_cells()
            .into_iter()
            .map(|local| Tile::new(local.offset(anchor.x, anchor.y)))
            .collect();
    }

    /// True if any cell lies outside `[0, width) × [0, height)`
    pub fn out_of_bounds(&self, width: i32, height: i32) -> bool {
        self.cells()
            .any(|p| p.x < 0 || p.y < 0 || p.x >= width || p.y >= height)
    }

    /// Advance cosmetic timers by one frame
    pub fn update(&mut self) {
        for tile in &mut self.tiles {
            tile.popping = tile.popping.saturating_sub(1);
        }
    }

    pub fn stop_animation(&mut self) {
        for tile in &mut self.tiles {
            tile.popping = 0;
        }
    }

    pub fn is_moving(&self) -> bool {
        self.tiles.iter().any(Tile::is_moving)
    }
}
