//! RNG module - seedable shape selection
//!
//! The board never reaches for process-global randomness. It draws shapes from
//! an injected [`ShapeSource`]:
//!
//! - [`SimpleRng`]: a small LCG, uniform over the seven shapes (no bag)
//! - [`ShapeSequence`]: a fixed, repeating list for tests and replays

use tetromnom_types::ShapeKind;

/// Supplies the shape of every newly spawned piece
pub trait ShapeSource {
    fn next_shape(&mut self) -> ShapeKind;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    seed: u32,
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let seed = if seed == 0 { 1 } else { seed };
        Self { seed, state: seed }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high half of the state; the low bits of an LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ShapeSource for SimpleRng {
    fn next_shape(&mut self) -> ShapeKind {
        ShapeKind::from_index(self.next_range(ShapeKind::ALL.len() as u32))
    }
}

/// Repeating, predetermined shape order
#[derive(Debug, Clone, Default)]
pub struct ShapeSequence {
    shapes: Vec<ShapeKind>,
    index: usize,
}

impl ShapeSequence {
    pub fn new(shapes: impl Into<Vec<ShapeKind>>) -> Self {
        Self {
            shapes: shapes.into(),
            index: 0,
        }
    }

    /// Always the same shape
    pub fn repeat(kind: ShapeKind) -> Self {
        Self::new(vec![kind])
    }
}

impl ShapeSource for ShapeSequence {
    fn next_shape(&mut self) -> ShapeKind {
        let Some(&kind) = self.shapes.get(self.index) else {
            return ShapeKind::O;
        };
        self.index = (self.index + 1) % self.shapes.len();
        kind
    }
}

impl<S: ShapeSource + ?Sized> ShapeSource for Box<S> {
    fn next_shape(&mut self) -> ShapeKind {
        (**self).next_shape()
    }
}
