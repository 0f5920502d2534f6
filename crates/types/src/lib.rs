//! Shared types module - plain data used by the core and by both adapters
//!
//! Nothing in here knows about terminals, rendering, or timing sources. The
//! simulation crate, the input adapter and the render adapter all speak in
//! these types, which keeps the core constructible and steppable headless.
//!
//! # Coordinates
//!
//! Board cells use a bottom-left origin:
//!
//! - **x** grows to the right, `0..BOARD_WIDTH`
//! - **y** grows upward, `0..BOARD_HEIGHT`
//! - Cells with `y >= BOARD_HEIGHT` are above the visible board. Pieces spawn
//!   there and fall into view.
//!
//! # Timing Constants
//!
//! The simulation is tick driven. One call to `Board::update` is one tick.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval used by the interactive runner (~60 Hz) |
//! | `MAX_DROP_COUNT` | 20 | Default gravity countdown in ticks |
//! | `MAX_POPPING_COUNT` | 6 | Frames a freshly built tile stays "popping" |
//!
//! # Examples
//!
//! ```
//! use tetromnom_types::{Direction, Input, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = ShapeKind::from_str("t").unwrap();
//! assert_eq!(kind, ShapeKind::T);
//! assert_eq!(kind.as_str(), "t");
//!
//! // Rotation requests travel in the vertical component.
//! assert_eq!(Direction::RotateCw.vector(), (0, -1));
//! assert_eq!(Direction::RotateCcw.vector(), (0, 1));
//!
//! let input = Input::dir(Direction::Left);
//! assert!(!input.drop);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::Serialize;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: i32 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: i32 = 20;

/// Default gravity interval: ticks the active piece waits between forced descents
pub const MAX_DROP_COUNT: u32 = 20;

/// Fixed tick interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Number of frames a tile pops after being (re)built
pub const MAX_POPPING_COUNT: u8 = 6;

/// Edge length of one tile in pixels
pub const TILE_SIZE: i32 = 40;

/// Gap between tiles (and around the board edge) in pixels
pub const TILE_MARGIN: i32 = 3;

/// Largest accepted board width or height in cells
///
/// Keeps `width * height`, spawn positions above the top and terminal
/// coordinates well inside their integer types.
pub const MAX_BOARD_DIM: i32 = 1024;

/// The seven tetromino shapes
///
/// Each shape owns a fixed colour that renderers use as its identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    I,
    J,
    L,
    S,
    Z,
    T,
    O,
}

impl ShapeKind {
    /// All shapes in catalog order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::T,
        ShapeKind::O,
    ];

    /// Pick a shape by index, wrapping modulo 7
    ///
    /// ```
    /// use tetromnom_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_index(0), ShapeKind::I);
    /// assert_eq!(ShapeKind::from_index(6), ShapeKind::O);
    /// assert_eq!(ShapeKind::from_index(7), ShapeKind::I);
    /// ```
    pub fn from_index(index: u32) -> Self {
        Self::ALL[(index % Self::ALL.len() as u32) as usize]
    }

    /// Parse shape from a single letter (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            "t" => Some(ShapeKind::T),
            "o" => Some(ShapeKind::O),
            _ => None,
        }
    }

    /// Lowercase letter for this shape
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
            ShapeKind::T => "t",
            ShapeKind::O => "o",
        }
    }

    /// Colour identity of the shape
    pub fn color(&self) -> Rgb {
        match self {
            ShapeKind::I => Rgb::new(0x00, 0xA6, 0x91), // teal
            ShapeKind::J => Rgb::new(0xAD, 0x42, 0xEB), // purple
            ShapeKind::L => Rgb::new(0x68, 0xFA, 0x3F), // green
            ShapeKind::S => Rgb::new(0xFF, 0x2F, 0xA8), // pink
            ShapeKind::Z => Rgb::new(0x00, 0xFF, 0xFA), // cyan
            ShapeKind::T => Rgb::new(0xFF, 0x85, 0x00), // orange
            ShapeKind::O => Rgb::new(0xFF, 0x1E, 0x1E), // red
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Blend toward white by `num / den`.
    pub fn lighten(self, num: u8, den: u8) -> Self {
        let den = den.max(1) as u16;
        let num = (num as u16).min(den);
        let mix = |c: u8| -> u8 {
            let c = c as u16;
            (c + (255 - c) * num / den) as u8
        };
        Self::new(mix(self.r), mix(self.g), mix(self.b))
    }
}

/// A cell coordinate on the board (bottom-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return this position shifted by `(dx, dy)`
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Discrete player adjustment for the active piece
///
/// Horizontal moves travel in the x component of [`Direction::vector`].
/// Rotations travel in the y component: a negative value asks for a clockwise
/// turn, a positive one for a counter-clockwise turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Shift one cell left
    Left,
    /// Shift one cell right
    Right,
    /// Rotate 90° clockwise
    RotateCw,
    /// Rotate 90° counter-clockwise
    RotateCcw,
}

impl Direction {
    /// Movement vector `(vx, vy)` for this direction
    pub fn vector(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::RotateCw => (0, -1),
            Direction::RotateCcw => (0, 1),
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "rotatecw" | "cw" => Some(Direction::RotateCw),
            "rotateccw" | "ccw" => Some(Direction::RotateCcw),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::RotateCw => "rotateCw",
            Direction::RotateCcw => "rotateCcw",
        }
    }
}

/// Commands consumed by one simulation tick
///
/// At most one directional command and, independently, one hard-drop flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Input {
    pub dir: Option<Direction>,
    pub drop: bool,
}

impl Input {
    /// No command this tick
    pub const fn none() -> Self {
        Self {
            dir: None,
            drop: false,
        }
    }

    pub const fn dir(dir: Direction) -> Self {
        Self {
            dir: Some(dir),
            drop: false,
        }
    }

    pub const fn hard_drop() -> Self {
        Self {
            dir: None,
            drop: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dir.is_none() && !self.drop
    }
}
