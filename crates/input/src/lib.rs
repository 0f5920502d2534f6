//! Terminal input module (simulation-facing).
//!
//! Turns raw `crossterm` key events into the discrete per-tick [`Input`] the
//! board consumes. Key mapping lives in [`map`]; [`latch`] folds every key
//! seen between two ticks into at most one directional command plus one
//! hard-drop flag.
//!
//! [`Input`]: crate::types::Input

pub mod latch;
pub mod map;

pub use tetromnom_types as types;

pub use latch::InputLatch;
pub use map::{map_key, KeyCommand};
