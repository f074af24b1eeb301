//! Deterministic random number generation for draws and AI choices.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical draws and AI picks
//! - **Context streams**: Independent sequences for catalog draws vs AI selection
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use goetic_gambit::core::GameRng;
//!
//! let root = GameRng::new(42);
//! let mut draws = root.for_context("draw");
//! let mut again = GameRng::new(42).for_context("draw");
//!
//! assert_eq!(draws.gen_index(10), again.gen_index(10));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Seedable RNG threaded explicitly through the catalog and the engine.
///
/// Uses ChaCha8 so that a stream is reproducible across platforms.
/// Context seeds are derived with `FxHasher`, which is fixed across Rust
/// releases for a given pointer width.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Uniform index into a collection of length `len`.
    ///
    /// Returns `None` for an empty collection.
    pub fn gen_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.gen_range_usize(0..len))
        }
    }

    /// Capture the stream position, for `BattleEngine::snapshot`.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position so capture is O(1) regardless of
/// how many draws have happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Seed of the stream
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
