//! Board configuration

use tetromnom_types::{BOARD_HEIGHT, BOARD_WIDTH, MAX_BOARD_DIM, MAX_DROP_COUNT};

/// Dimensions, gravity and seed for a new [`Board`](crate::Board)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub width: i32,
    pub height: i32,
    /// Ticks between forced descents of the active piece
    pub gravity_interval: u32,
    /// Seed for the default shape source
    pub seed: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            gravity_interval: MAX_DROP_COUNT,
            seed: 1,
        }
    }
}

impl BoardConfig {
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_gravity_interval(mut self, ticks: u32) -> Self {
        self.gravity_interval = ticks;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Clamp dimensions to `1..=MAX_BOARD_DIM`
    pub(crate) fn normalized(self) -> Self {
        Self {
            width: self.width.clamp(1, MAX_BOARD_DIM),
            height: self.height.clamp(1, MAX_BOARD_DIM),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic_board() {
        let config = BoardConfig::default();
        assert_eq!((config.width, config.height), (10, 20));
        assert_eq!(config.gravity_interval, 20);
    }

    #[test]
    fn normalized_clamps_dimensions() {
        let config = BoardConfig::default().with_size(0, -4).normalized();
        assert_eq!((config.width, config.height), (1, 1));
    }

    #[test]
    fn normalized_caps_dimensions() {
        let config = BoardConfig::default()
            .with_size(100_000, i32::MAX)
            .normalized();
        assert_eq!((config.width, config.height), (MAX_BOARD_DIM, MAX_BOARD_DIM));

        let config = BoardConfig::default().with_size(MAX_BOARD_DIM, 7).normalized();
        assert_eq!((config.width, config.height), (MAX_BOARD_DIM, 7));
    }
}
