//! Tetromnom (workspace facade crate).
//!
//! Re-exports the workspace crates as `tetromnom::{core, input, term, types}`
//! and hosts the pieces shared by both binaries: environment configuration
//! and log setup.

pub use tetromnom_core as core;
pub use tetromnom_input as input;
pub use tetromnom_term as term;
pub use tetromnom_types as types;

pub mod config;
pub mod logging;

pub use config::GameConfig;
