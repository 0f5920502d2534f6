//! Terminal render adapter.
//!
//! Paints a [`BoardSnapshot`](crate::core::BoardSnapshot) into a character
//! framebuffer and flushes it to a real terminal. Nothing in here mutates the
//! board: the view only reads snapshots.
//!
//! - [`fb`]: styled character framebuffer
//! - [`game_view`]: snapshot → framebuffer (pure, unit-testable)
//! - [`renderer`]: framebuffer → terminal via crossterm, changed cells only

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetromnom_core as core;
pub use tetromnom_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
