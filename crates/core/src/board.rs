//! Board module - the simulation state machine
//!
//! The board tracks every piece that has entered play. At most one of them is
//! active (still falling); the rest are settled terrain. A tick moves through
//! four states:
//!
//! - **Empty**: nothing is falling. Either the game is over (a settled cell
//!   lies outside the board) or a new random piece is created.
//! - **Spawning**: the new piece exists but is not yet on the board. Next tick
//!   it is centred horizontally and placed just above the top row.
//! - **Descending**: gravity pulls the piece down one row every
//!   `gravity_interval + 1` ticks. When it cannot move down it settles.
//! - **GameOver**: terminal; updates and commands are ignored.
//!
//! Coordinates: (x, y) with the origin in the bottom-left corner. Cells with
//! `y >= height` are above the board and are free as long as x is in range.

use std::fmt;

use log::{debug, info};
use tetromnom_types::{Direction, Input, Pos, Rgb, ShapeKind};

use crate::config::BoardConfig;
use crate::piece::{Piece, PieceId};
use crate::rng::{ShapeSource, SimpleRng};
use crate::snapshot::{BoardSnapshot, TileSnapshot};

/// Observable phase of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardState {
    Empty,
    Spawning,
    Descending,
    GameOver,
}

#[derive(Debug, Clone)]
enum Phase {
    Empty,
    Spawning(Piece),
    /// Index of the active piece in `Board::pieces`
    Descending(usize),
    GameOver,
}

/// Occupancy grid of settled cells, row-major with row 0 at the bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedMap {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl PlacedMap {
    fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            cells: vec![false; (width * height) as usize],
        }
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }

    /// Cells outside the board are dropped.
    fn mark(&mut self, pos: Pos) {
        if let Some(i) = self.index(pos.x, pos.y) {
            self.cells[i] = true;
        }
    }

    /// True if a settled cell covers `(x, y)`; false outside the board
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| self.cells[i])
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Rows as 0/1 values, bottom row first
    pub fn rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.width as usize)
            .map(|row| row.iter().map(|&c| c as u8).collect())
            .collect()
    }
}

impl fmt::Display for PlacedMap {
    /// Top row first, each cell as ` 0` or ` 1`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width as usize).rev() {
            for &cell in row {
                write!(f, " {}", cell as u8)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// One paintable tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileView {
    pub pos: Pos,
    pub kind: ShapeKind,
    pub piece_id: PieceId,
    /// Belongs to the falling piece
    pub active: bool,
    /// Mid-transition (cosmetic)
    pub moving: bool,
}

impl TileView {
    pub fn color(&self) -> Rgb {
        self.kind.color()
    }
}

/// The playing field and its active piece
#[derive(Debug, Clone)]
pub struct Board<S = SimpleRng> {
    width: i32,
    height: i32,
    drop_count: u32,
    max_drop_count: u32,
    /// Every piece in play, in entry order. The active one is named by `phase`.
    pieces: Vec<Piece>,
    phase: Phase,
    next_id: u32,
    source: S,
}

impl Board<SimpleRng> {
    /// Board drawing shapes from a [`SimpleRng`] seeded by `config.seed`
    pub fn new(config: BoardConfig) -> Self {
        Self::with_source(config, SimpleRng::new(config.seed))
    }
}

impl Default for Board<SimpleRng> {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl<S: ShapeSource> Board<S> {
    /// Board drawing shapes from `source`
    ///
    /// The first piece is created immediately, so a new board starts out
    /// `Spawning`.
    pub fn with_source(config: BoardConfig, source: S) -> Self {
        let config = config.normalized();
        let mut board = Self {
            width: config.width,
            height: config.height,
            drop_count: 0,
            max_drop_count: config.gravity_interval,
            pieces: Vec::new(),
            phase: Phase::Empty,
            next_id: 0,
            source,
        };
        let first = board.next_piece();
        board.phase = Phase::Spawning(first);
        board
    }

    fn next_piece(&mut self) -> Piece {
        let kind = self.source.next_shape();
        let id = self.alloc_id();
        Piece::new(kind).with_id(id)
    }

    fn alloc_id(&mut self) -> PieceId {
        self.next_id = self.next_id.wrapping_add(1);
        PieceId(self.next_id)
    }

    // ---------------------------------------------------------------------
    // Tick
    // ---------------------------------------------------------------------

    /// Advance the simulation by one tick, then apply the tick's commands
    pub fn update(&mut self, input: Input) {
        if matches!(self.phase, Phase::GameOver) {
            return;
        }

        for piece in &mut self.pieces {
            piece.update();
        }

        match std::mem::replace(&mut self.phase, Phase::Empty) {
            Phase::Descending(index) => self.apply_gravity(index),
            Phase::Spawning(piece) => self.enter(piece),
            Phase::Empty => {
                if let Some(piece) = self
                    .pieces
                    .iter()
                    .find(|p| p.out_of_bounds(self.width, self.height))
                {
                    info!(
                        "game over: piece {} ({}) settled outside the board",
                        piece.id().0,
                        piece.kind().as_str()
                    );
                    self.phase = Phase::GameOver;
                    return;
                }
                let piece = self.next_piece();
                debug!("spawn piece {} ({})", piece.id().0, piece.kind().as_str());
                self.phase = Phase::Spawning(piece);
            }
            Phase::GameOver => {
                self.phase = Phase::GameOver;
                return;
            }
        }

        if let Some(dir) = input.dir {
            self.adjust(dir);
        }
        if input.drop {
            self.hard_drop();
        }
    }

    fn apply_gravity(&mut self, index: usize) {
        self.phase = Phase::Descending(index);
        if self.drop_count > 0 {
            self.drop_count -= 1;
            return;
        }

        if self.can_move(&self.pieces[index], 0, -1) {
            self.pieces[index].translate(0, -1);
            self.drop_count = self.max_drop_count;
        } else {
            self.settle(index);
        }
    }

    /// Put a spawned piece at top-centre, fully above the board
    fn enter(&mut self, mut piece: Piece) {
        let (_, cols) = piece.dims();
        let x = self.width / 2 - cols as i32 / 2;
        piece.translate(x, self.height);
        debug!(
            "piece {} ({}) enters at ({}, {})",
            piece.id().0,
            piece.kind().as_str(),
            x,
            self.height
        );
        self.pieces.push(piece);
        self.phase = Phase::Descending(self.pieces.len() - 1);
        self.drop_count = self.max_drop_count;
    }

    fn settle(&mut self, index: usize) {
        let piece = &self.pieces[index];
        debug!(
            "piece {} ({}) settled at ({}, {})",
            piece.id().0,
            piece.kind().as_str(),
            piece.anchor().x,
            piece.anchor().y
        );
        self.phase = Phase::Empty;
    }

    // ---------------------------------------------------------------------
    // Collision
    // ---------------------------------------------------------------------

    /// Whether `piece` could move by `(dx, dy)` without leaving the board's
    /// columns, dropping below the floor or hitting a settled cell
    pub fn can_move(&self, piece: &Piece, dx: i32, dy: i32) -> bool {
        let map = self.placed_map();
        self.fits(&map, piece, dx, dy)
    }

    fn fits(&self, map: &PlacedMap, piece: &Piece, dx: i32, dy: i32) -> bool {
        piece.cells().all(|cell| {
            let p = cell.offset(dx, dy);
            let in_columns = p.x >= 0 && p.x < self.width;
            if p.y >= self.height {
                // Still entering from above.
                return in_columns;
            }
            in_columns && p.y >= 0 && !map.is_occupied(p.x, p.y)
        })
    }

    /// Occupancy of every settled cell; the active piece is excluded
    pub fn placed_map(&self) -> PlacedMap {
        let mut map = PlacedMap::new(self.width, self.height);
        for piece in self.settled_pieces() {
            for cell in piece.cells() {
                map.mark(cell);
            }
        }
        map
    }

    // ---------------------------------------------------------------------
    // Commands
    // ---------------------------------------------------------------------

    fn stop_animation(&mut self) {
        for piece in &mut self.pieces {
            piece.stop_animation();
        }
    }

    /// Shift or rotate the active piece
    ///
    /// Rejected moves leave the piece untouched. A rotation that collides is
    /// recovered by nudging the piece left by 1, 2, ... up to `cols - 1`
    /// cells (at least one attempt); if none fits the rotation is undone.
    /// Recovery never tries rightward offsets.
    ///
    /// Returns true if the piece changed. Outside `Descending` this is a no-op.
    pub fn adjust(&mut self, dir: Direction) -> bool {
        let Phase::Descending(index) = self.phase else {
            return false;
        };
        self.stop_animation();

        let map = self.placed_map();
        let (vx, vy) = dir.vector();
        let mut changed = false;

        if vx != 0 {
            if self.fits(&map, &self.pieces[index], vx, 0) {
                self.pieces[index].translate(vx, 0);
                debug!("adjust {}", dir.as_str());
                changed = true;
            } else {
                debug!("adjust {} rejected", dir.as_str());
            }
        }

        if vy != 0 {
            changed |= self.rotate_with_recovery(&map, index, vy > 0);
        }

        changed
    }

    fn rotate_with_recovery(&mut self, map: &PlacedMap, index: usize, ccw: bool) -> bool {
        let rotate = |piece: &mut Piece, ccw: bool| {
            if ccw {
                piece.rotate_ccw();
            } else {
                piece.rotate_cw();
            }
        };

        rotate(&mut self.pieces[index], ccw);
        debug!("rotate {}", if ccw { "ccw" } else { "cw" });
        if self.fits(map, &self.pieces[index], 0, 0) {
            return true;
        }

        let (_, cols) = self.pieces[index].dims();
        let max_offset = (cols as i32 - 1).max(1);
        let kick = (1..=max_offset).find(|&off| self.fits(map, &self.pieces[index], -off, 0));

        match kick {
            Some(off) => {
                self.pieces[index].translate(-off, 0);
                debug!("rotation recovered by shifting left {}", off);
                true
            }
            None => {
                rotate(&mut self.pieces[index], !ccw);
                debug!("rotation blocked, undone");
                false
            }
        }
    }

    /// Hard drop: slide the active piece straight down and settle it
    ///
    /// Moves at most `height` rows. The gravity countdown is reset to 0.
    /// Returns the number of rows descended; a no-op outside `Descending`.
    pub fn hard_drop(&mut self) -> u32 {
        let Phase::Descending(index) = self.phase else {
            return 0;
        };
        self.stop_animation();

        let map = self.placed_map();
        let mut rows = 0;
        for _ in 0..self.height {
            if !self.fits(&map, &self.pieces[index], 0, -1) {
                break;
            }
            self.pieces[index].translate(0, -1);
            rows += 1;
        }
        debug!("hard drop {} rows", rows);

        self.drop_count = 0;
        self.settle(index);
        rows
    }

    /// Seed the terrain with an already-settled piece
    ///
    /// The piece keeps its current position and receives a fresh id.
    pub fn insert_settled(&mut self, mut piece: Piece) -> PieceId {
        let id = self.alloc_id();
        piece.set_id(id);
        piece.stop_animation();
        self.pieces.push(piece);
        id
    }

    /// Discard every piece and start over with the same shape source
    pub fn reset(&mut self) {
        self.pieces.clear();
        self.drop_count = 0;
        let first = self.next_piece();
        self.phase = Phase::Spawning(first);
        info!("board reset");
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn state(&self) -> BoardState {
        match self.phase {
            Phase::Empty => BoardState::Empty,
            Phase::Spawning(_) => BoardState::Spawning,
            Phase::Descending(_) => BoardState::Descending,
            Phase::GameOver => BoardState::GameOver,
        }
    }

    pub fn is_running(&self) -> bool {
        !self.is_game_over()
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver)
    }

    /// Ticks left before gravity next acts on the active piece
    pub fn gravity_countdown(&self) -> u32 {
        self.drop_count
    }

    pub fn gravity_interval(&self) -> u32 {
        self.max_drop_count
    }

    fn active_index(&self) -> Option<usize> {
        match self.phase {
            Phase::Descending(index) => Some(index),
            _ => None,
        }
    }

    /// The falling piece, once it is on the board
    pub fn active_piece(&self) -> Option<&Piece> {
        self.active_index().map(|i| &self.pieces[i])
    }

    /// The piece waiting to enter the board
    pub fn spawning_piece(&self) -> Option<&Piece> {
        match &self.phase {
            Phase::Spawning(piece) => Some(piece),
            _ => None,
        }
    }

    /// Every piece in play except the active one
    pub fn settled_pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        let active = self.active_index();
        self.pieces
            .iter()
            .enumerate()
            .filter(move |(i, _)| Some(*i) != active)
            .map(|(_, piece)| piece)
    }

    /// Every tile of every piece on the board, settled first
    pub fn tiles(&self) -> impl Iterator<Item = TileView> + '_ {
        let active = self.active_index();
        self.pieces.iter().enumerate().flat_map(move |(i, piece)| {
            piece.tiles().iter().map(move |tile| TileView {
                pos: tile.pos,
                kind: piece.kind(),
                piece_id: piece.id(),
                active: Some(i) == active,
                moving: tile.is_moving(),
            })
        })
    }

    /// Pixel size of the board for tiles of `tile_size` separated by `margin`
    pub fn pixel_size(&self, tile_size: i32, margin: i32) -> (i32, i32) {
        (
            self.width * tile_size + (self.width + 1) * margin,
            self.height * tile_size + (self.height + 1) * margin,
        )
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Owned copy of everything a renderer needs
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut snap = BoardSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill `out`, reusing its tile allocation
    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        out.width = self.width;
        out.height = self.height;
        out.state = self.state();
        out.running = self.is_running();
        out.gravity_countdown = self.drop_count;
        out.tiles.clear();
        out.tiles.extend(self.tiles().map(TileSnapshot::from));
    }
}
