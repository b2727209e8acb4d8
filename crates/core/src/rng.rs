//! RNG module - piece type generation
//!
//! Two randomizers are supported:
//!
//! - **Uniform**: every draw picks one of the 7 kinds independently.
//! - **Bag**: the 7 kinds are shuffled into a bag and dealt out one by one;
//!   a new bag is shuffled once the current one is exhausted. No kind can be
//!   missing for more than one full cycle, so the longest gap between two
//!   pieces of the same kind is 12.
//!
//! Randomness comes from a [`RandomSource`]; [`SimpleRng`] is the seeded LCG
//! used by the game, tests plug in scripted sources.

use crate::types::PieceKind;

/// Capability the randomizer draws its entropy from.
pub trait RandomSource {
    /// Next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Value in `[0, max)`. `max` must be non-zero.
    ///
    /// Maps the high bits of `next_u32` so LCG low-bit patterns do not leak
    /// into small ranges.
    fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Fisher-Yates shuffle
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

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

    /// Current state; feeding it back to `new` continues the same sequence.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Which randomizer the pool uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomizerMode {
    Uniform,
    Bag,
}

/// Piece type generator (uniform or 7-bag)
#[derive(Debug, Clone)]
pub struct Randomizer<R: RandomSource = SimpleRng> {
    mode: RandomizerMode,
    /// Current bag of pieces
    bag: [PieceKind; 7],
    /// Index into current bag; 7 means exhausted
    bag_index: usize,
    rng: R,
}

impl<R: RandomSource> Randomizer<R> {
    pub fn new(rng: R, mode: RandomizerMode) -> Self {
        Self {
            mode,
            bag: PieceKind::ALL,
            bag_index: PieceKind::ALL.len(),
            rng,
        }
    }

    pub fn mode(&self) -> RandomizerMode {
        self.mode
    }

    /// Switch randomizer. The bag keeps its position, so switching back
    /// resumes the partially dealt bag.
    pub fn set_mode(&mut self, mode: RandomizerMode) {
        self.mode = mode;
    }

    /// Discard the current bag; the next bag draw shuffles a fresh one.
    pub fn reset(&mut self) {
        self.bag_index = self.bag.len();
    }

    /// Draw the next piece kind
    pub fn next(&mut self) -> PieceKind {
        match self.mode {
            RandomizerMode::Uniform => {
                let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
                PieceKind::ALL[idx]
            }
            RandomizerMode::Bag => {
                if self.bag_index >= self.bag.len() {
                    self.refill_bag();
                }
                let piece = self.bag[self.bag_index];
                self.bag_index += 1;
                piece
            }
        }
    }

    /// Pieces left in the current bag (bag mode bookkeeping).
    pub fn remaining_in_bag(&self) -> &[PieceKind] {
        &self.bag[self.bag_index..]
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    fn refill_bag(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }
}
