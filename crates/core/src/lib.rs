//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the whole falling-block simulation. It has **zero
//! dependencies** on rendering, terminals, or timing sources, making it:
//!
//! - **Deterministic**: the shape source is injected and seedable
//! - **Headless**: a [`Board`] can be built and stepped without any renderer
//! - **Testable**: every rule is observable through plain queries
//!
//! # Module Structure
//!
//! - [`matrix`]: orientation grids, quarter-turn rotation, local cell mapping
//! - [`shapes`]: canonical grid of each of the seven tetrominoes
//! - [`piece`]: a shape instance with anchor, grid and occupied tiles
//! - [`board`]: the tick-driven state machine (spawn, gravity, adjust, drop)
//! - [`rng`]: seedable shape sources
//! - [`snapshot`]: owned, serializable view for renderers and replays
//!
//! # Rules
//!
//! - Pieces spawn centred horizontally, just above the top row, and fall in.
//! - Gravity lowers the active piece one row every `gravity_interval + 1`
//!   ticks; a piece that cannot descend settles into the terrain.
//! - Moves and rotations that collide are silently rejected. A colliding
//!   rotation is first recovered by shifting left (never right).
//! - Hard drop slides the piece down as far as it goes and settles it.
//! - The game ends when a settled piece has a cell outside the board.
//!
//! # Example
//!
//! ```
//! use tetromnom_core::{Board, BoardConfig, BoardState, ShapeSequence};
//! use tetromnom_core::types::{Direction, Input, ShapeKind};
//!
//! let mut board = Board::with_source(BoardConfig::default(), ShapeSequence::repeat(ShapeKind::O));
//!
//! // First tick places the spawned piece above the board.
//! board.update(Input::none());
//! assert_eq!(board.state(), BoardState::Descending);
//!
//! // Shift left, then hard drop.
//! board.update(Input::dir(Direction::Left));
//! board.update(Input::hard_drop());
//! assert_eq!(board.state(), BoardState::Empty);
//! assert_eq!(board.placed_map().occupied_count(), 4);
//! ```

pub mod board;
pub mod config;
pub mod matrix;
pub mod piece;
pub mod rng;
pub mod shapes;
pub mod snapshot;

pub use tetromnom_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardState, PlacedMap, TileView};
pub use config::BoardConfig;
pub use matrix::{occupied_local_cells, rotate_ccw, rotate_cw, Grid};
pub use piece::{Piece, PieceId, Tile};
pub use rng::{ShapeSequence, ShapeSource, SimpleRng};
pub use shapes::shape_grid;
pub use snapshot::{BoardSnapshot, TileSnapshot};
