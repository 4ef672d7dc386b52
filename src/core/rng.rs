//! RNG module - uniform random piece generation.
//!
//! Selection is uniform over the 7-piece catalog with no bag or
//! anti-repetition guarantee: consecutive identical pieces are possible.
//! A seedable LCG keeps games reproducible for tests.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG.
/// Uses constants from Numerical Recipes.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // Avoid the all-zeros fixed point.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u32.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a random value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low LCG bits have short periods; mix from the top.
        (self.next_u32() >> 16) % max
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform tetromino picker.
#[derive(Debug, Clone)]
pub struct PieceGen {
    rng: SimpleRng,
}

impl PieceGen {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next piece kind, uniformly at random.
    pub fn draw(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }

    /// Current RNG state (for restarting with the same sequence).
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for PieceGen {
    fn default() -> Self {
        Self::new(1)
    }
}
