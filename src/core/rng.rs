//! Seedable random number generation for secret draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Per-process by default**: `from_entropy` mixes OS entropy with the clock
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use guessing_game::core::{GameRng, GuessRange};
//!
//! let range = GuessRange::new(1, 10).unwrap();
//! let mut rng = GameRng::new(42);
//! let secret = rng.gen_inclusive(&range);
//! assert!(range.contains(secret));
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::GuessRange;

/// Seedable RNG used to pick secret numbers.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
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

    /// Create an RNG seeded for this process.
    ///
    /// The seed is drawn from OS entropy and mixed with the wall clock, so two
    /// runs never replay the same secrets. The seed stays readable through
    /// [`GameRng::seed`] for reproducing a session.
    #[must_use]
    pub fn from_entropy() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        let seed = rand::thread_rng().gen::<u64>() ^ nanos.rotate_left(32);
        Self::new(seed)
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a uniformly distributed integer from `[range.min(), range.max()]`.
    pub fn gen_inclusive(&mut self, range: &GuessRange) -> i64 {
        self.inner.gen_range(range.min()..=range.max())
    }

    /// Get the current state for serialization.
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

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many secrets have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
