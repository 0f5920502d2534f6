//! Per-tick input latch.
//!
//! Terminals deliver key events at their own pace, often several between two
//! simulation ticks. The board takes at most one directional command and one
//! drop flag per tick, so the latch keeps the first direction it sees and ORs
//! the drop flag. Later directions in the same tick are discarded.

use log::trace;

use crate::types::{Direction, Input};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputLatch {
    dir: Option<Direction>,
    drop: bool,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a directional command; ignored if one is already latched
    pub fn push_dir(&mut self, dir: Direction) {
        if self.dir.is_none() {
            self.dir = Some(dir);
        } else {
            trace!("input latch: dropping extra {:?}", dir);
        }
    }

    pub fn push_drop(&mut self) {
        self.drop = true;
    }

    /// Peek without clearing
    pub fn pending(&self) -> Input {
        Input {
            dir: self.dir,
            drop: self.drop,
        }
    }

    /// Hand out this tick's input and clear the latch
    pub fn take(&mut self) -> Input {
        let input = self.pending();
        *self = Self::default();
        input
    }
}
