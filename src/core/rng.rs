//! Deterministic random number generation for card sampling and sessions.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical cards and call orders
//! - **Forkable**: Independent streams for each card in a print batch
//! - **Pure permutations**: `permuted` returns a new sequence, never touching
//!   the caller's pool
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use bingo_studio::core::ShuffleRng;
//!
//! let mut rng = ShuffleRng::new(42);
//! let pool = vec![1, 2, 3, 4, 5];
//!
//! let order = rng.permuted(&pool);
//! assert_eq!(order.len(), pool.len());
//! assert_eq!(pool, vec![1, 2, 3, 4, 5]);
//!
//! // Same seed, same permutation
//! let mut again = ShuffleRng::new(42);
//! assert_eq!(again.permuted(&pool), order);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Deterministic RNG used for every randomized step in the crate.
///
/// Uses ChaCha8 for speed. Shuffles are Fisher–Yates (via
/// `SliceRandom::shuffle`), so every permutation is equally likely.
#[derive(Clone, Debug)]
pub struct ShuffleRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl ShuffleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// For interactive use where reproducibility doesn't matter.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    /// Used to give every card in a batch its own permutation.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// Keeps card composition and session calling from consuming each
    /// other's randomness when they share one seed. The context seed comes
    /// from `FxHasher` over raw bytes, so it does not change between
    /// toolchains.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let context_seed = context_seed(self.seed, context);

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
            fork_counter: 0,
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Return a uniformly random permutation of `items` as a new vector.
    #[must_use]
    pub fn permuted<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        self.shuffle(&mut out);
        out
    }

    /// Same as [`permuted`](Self::permuted) for any cloneable sequence.
    #[must_use]
    pub fn permuted_iter<'a, T, I>(&mut self, items: I) -> Vec<T>
    where
        T: Clone + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut out: Vec<T> = items.into_iter().cloned().collect();
        self.shuffle(&mut out);
        out
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> ShuffleRngState {
        ShuffleRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &ShuffleRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuffleRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

fn context_seed(seed: u64, context: &str) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write_u64(seed);
    hasher.write(context.as_bytes());
    hasher.finish()
}
