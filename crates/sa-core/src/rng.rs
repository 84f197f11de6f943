//! Injectable randomness.
//!
//! Every random draw in the simulation (spawn cells, initial headings, food
//! placement) goes through the [`RandomSource`] trait.  Production code uses
//! [`SimRng`], a seeded `SmallRng`; tests substitute scripted sources that
//! replay fixed values so that placements are known in advance.
//!
//! The arena owns exactly one source and draws from it sequentially, so a
//! given seed always reproduces the same session.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Direction;

// ── RandomSource ──────────────────────────────────────────────────────────────

/// A stateful source of uniform integers.
///
/// Only [`below`](Self::below) is required; the other draws are built on it
/// so a scripted implementation controls every outcome.
pub trait RandomSource {
    /// A uniformly distributed integer in `0..n`.  `n` is always at least 1.
    fn below(&mut self, n: u32) -> u32;

    /// A uniformly random heading, indexed into [`Direction::ALL`].
    fn direction(&mut self) -> Direction {
        Direction::ALL[self.below(4) as usize]
    }

    /// A uniformly random index into a collection of `len` items.
    /// Returns `None` when `len == 0`.
    fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let bound = u32::try_from(len).unwrap_or(u32::MAX);
        Some(self.below(bound) as usize)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn below(&mut self, n: u32) -> u32 {
        (**self).below(n)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Session-level deterministic RNG.
///
/// Used only from the single simulation thread.  The same seed always
/// produces identical sessions.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn below(&mut self, n: u32) -> u32 {
        self.0.gen_range(0..n.max(1))
    }
}
