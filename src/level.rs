//! Randomized leveling policy.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Size hint used by `SkipList::new`.
pub(crate) const DEFAULT_SIZE_HINT: usize = 0x1000;

/// Decides how many rows each inserted entry occupies.
///
/// Owns its generator so callers can seed it and reproduce exact column
/// heights in tests.
pub(crate) struct LevelSampler {
    max_height: usize,
    rng: SmallRng,
}

impl LevelSampler {
    /// Height cap derived from the size hint: `max(5, floor(ln(hint)))`.
    ///
    /// Note the cap uses a natural log while [`sample`](Self::sample) is
    /// base-2 geometric, so the cap sits below the `log2(hint)` a reader
    /// might expect. That is the structure's observed behavior and is kept
    /// as is.
    pub(crate) fn max_height(size_hint: usize) -> usize {
        ((size_hint as f64).ln() as i64).max(5) as usize
    }

    pub(crate) fn from_entropy(size_hint: usize) -> Self {
        LevelSampler {
            max_height: Self::max_height(size_hint),
            rng: SmallRng::from_entropy(),
        }
    }

    pub(crate) fn from_seed(size_hint: usize, seed: u64) -> Self {
        LevelSampler {
            max_height: Self::max_height(size_hint),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Total column height for the next insert: 1 with probability 1/2,
    /// 2 with probability 1/4, 3 with probability 1/8, and so on, capped
    /// at `max_height`.
    ///
    /// Draws a uniform integer in `[0, 2^(max_height - 1))` and counts its
    /// trailing one-bits; the draw runs out of bits exactly at the cap.
    pub(crate) fn sample(&mut self) -> usize {
        let bound: u64 = 1 << (self.max_height - 1);
        let draw = self.rng.gen_range(0..bound);
        draw.trailing_ones() as usize + 1
    }
}
