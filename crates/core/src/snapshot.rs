use serde::Serialize;
use tetromnom_types::ShapeKind;

use crate::board::{BoardState, TileView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TileSnapshot {
    pub x: i32,
    pub y: i32,
    pub kind: ShapeKind,
    pub piece_id: u32,
    pub active: bool,
    pub moving: bool,
}

impl From<TileView> for TileSnapshot {
    fn from(value: TileView) -> Self {
        Self {
            x: value.pos.x,
            y: value.pos.y,
            kind: value.kind,
            piece_id: value.piece_id.0,
            active: value.active,
            moving: value.moving,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    pub width: i32,
    pub height: i32,
    pub state: BoardState,
    pub running: bool,
    pub gravity_countdown: u32,
    pub tiles: Vec<TileSnapshot>,
}

impl BoardSnapshot {
    /// Tile covering `(x, y)`, if any
    pub fn tile_at(&self, x: i32, y: i32) -> Option<&TileSnapshot> {
        self.tiles.iter().find(|t| t.x == x && t.y == y)
    }

    /// Tiles inside the visible board
    pub fn visible_tiles(&self) -> impl Iterator<Item = &TileSnapshot> + '_ {
        self.tiles
            .iter()
            .filter(move |t| t.x >= 0 && t.x < self.width && t.y >= 0 && t.y < self.height)
    }

    pub fn game_over(&self) -> bool {
        !self.running
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            state: BoardState::Empty,
            running: true,
            gravity_countdown: 0,
            tiles: Vec::new(),
        }
    }
}
