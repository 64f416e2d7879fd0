//! RNG module - deterministic piece and gap selection
//!
//! Pieces are drawn uniformly from the seven kinds (no bag), and each board's
//! garbage gap column is drawn once from the same generator. A small LCG keeps
//! every game reproducible from its seed.

use std::collections::VecDeque;

use crate::types::PieceKind;

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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Derive an independent generator (used to give each player its own stream)
    pub fn fork(&mut self) -> Self {
        Self::new(self.next_u32() ^ 0x9E37_79B9)
    }
}

/// Uniform piece generator
///
/// An optional script of kinds is served first (replays, fixtures); after it
/// runs out the generator takes over.
#[derive(Debug, Clone)]
pub struct PieceSource {
    rng: SimpleRng,
    script: VecDeque<PieceKind>,
}

impl PieceSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            script: VecDeque::new(),
        }
    }

    pub fn from_rng(rng: SimpleRng) -> Self {
        Self {
            rng,
            script: VecDeque::new(),
        }
    }

    /// Serve `kinds` in order before falling back to random draws
    pub fn scripted(seed: u32, kinds: impl IntoIterator<Item = PieceKind>) -> Self {
        Self {
            script: kinds.into_iter().collect(),
            ..Self::new(seed)
        }
    }

    /// Draw the next piece kind
    pub fn draw(&mut self) -> PieceKind {
        if let Some(kind) = self.script.pop_front() {
            return kind;
        }
        PieceKind::ALL[self.rng.next_range(PieceKind::ALL.len() as u32) as usize]
    }

    /// Pick a column in `0..width`
    pub fn column(&mut self, width: u8) -> u8 {
        self.rng.next_range(width as u32) as u8
    }
}
