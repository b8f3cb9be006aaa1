//! RNG module - seeded piece generation
//!
//! Every draw picks a kind uniformly from the seven kinds and a color uniformly from the
//! five-color palette of the current level. There is no bag and no lookahead beyond the
//! single "next" slot kept by the game state.

use crate::pieces::PieceSpec;
use crate::types::{PieceKind, COLORS_PER_LEVEL, KIND_COUNT, MAX_LEVEL, PALETTES};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits, which have a much longer period than the low bits of an LCG.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Produces the sequence of upcoming pieces
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: SimpleRng,
    seed: u32,
}

impl PieceGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Draw a kind and a color from the palette of `level` (clamped to the last level)
    pub fn next_piece(&mut self, level: u8) -> PieceSpec {
        let kind_idx = self.rng.next_range(KIND_COUNT as u32) as usize;
        let color_idx = self.rng.next_range(COLORS_PER_LEVEL as u32) as usize;
        let kind = PieceKind::ALL[kind_idx];
        let palette = &PALETTES[level.min(MAX_LEVEL) as usize];
        PieceSpec::new(kind, palette[color_idx])
    }
}
