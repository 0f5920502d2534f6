//! Runtime configuration for the interactive binary.

use std::env;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::BoardConfig;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, MAX_BOARD_DIM, MAX_DROP_COUNT};

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u32,
    pub width: i32,
    pub height: i32,
    /// Ticks between forced descents
    pub gravity: u32,
    /// Log file; `None` keeps logging off
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            gravity: MAX_DROP_COUNT,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    ///
    /// Missing or unparsable values fall back to the defaults. The seed falls
    /// back to the wall clock so every run deals a different sequence.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = parsed(&lookup, "TETROMNOM_SEED").unwrap_or_else(clock_seed);
        let width = parsed(&lookup, "TETROMNOM_WIDTH")
            .filter(|w: &i32| (1..=MAX_BOARD_DIM).contains(w))
            .unwrap_or(BOARD_WIDTH);
        let height = parsed(&lookup, "TETROMNOM_HEIGHT")
            .filter(|h: &i32| (1..=MAX_BOARD_DIM).contains(h))
            .unwrap_or(BOARD_HEIGHT);
        let gravity = parsed(&lookup, "TETROMNOM_GRAVITY").unwrap_or(MAX_DROP_COUNT);

        let log_path = lookup("TETROMNOM_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            seed,
            width,
            height,
            gravity,
            log_path,
        }
    }

    pub fn board_config(&self) -> BoardConfig {
        BoardConfig::default()
            .with_size(self.width, self.height)
            .with_gravity_interval(self.gravity)
            .with_seed(self.seed)
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
