//! Signal sources: where the next element of the sequence comes from.
//!
//! ## Key Features
//!
//! - **Injected**: the engine takes its source as a constructor argument,
//!   never an ambient global
//! - **Deterministic**: `GameRng` with the same seed produces an identical
//!   sequence of picks
//! - **Serializable**: O(1) state capture and restore for `GameRng`
//! - **Scriptable**: `ScriptedSource` replays a fixed script for tests
//!
//! ## Usage
//!
//! ```
//! use simon_core::core::{GameRng, SignalSource};
//!
//! let mut rng = GameRng::new(42);
//! let signal = rng.next_signal(4);
//! assert!(signal.in_range(4));
//!
//! // Same seed, same picks
//! let mut rng2 = GameRng::new(42);
//! assert_eq!(rng2.next_signal(4), signal);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::signal::SignalId;

/// Source of the next signal appended to the sequence.
///
/// Implementations must produce a uniform pick in `[0, signal_count)`.
/// The engine validates the returned signal and rejects out-of-range
/// values, so a misbehaving source surfaces as a typed error rather than
/// corrupting the sequence.
pub trait SignalSource {
    /// Pick the next signal for a board with `signal_count` pads.
    fn next_signal(&mut self, signal_count: usize) -> SignalId;
}

/// Deterministic signal source backed by ChaCha8.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness. Same seed produces the same sequence of picks, which makes
/// recorded sessions replayable.
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

    /// Get the seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
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

impl SignalSource for GameRng {
    fn next_signal(&mut self, signal_count: usize) -> SignalId {
        SignalId::new(self.inner.gen_range(0..signal_count) as u8)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many picks have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Signal source that replays a fixed script.
///
/// Used for deterministic tests and demos: the engine extends the sequence
/// with exactly the signals you scripted, cycling back to the start when
/// the script is exhausted.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    script: Vec<SignalId>,
    position: usize,
}

impl ScriptedSource {
    /// Create a source that cycles through `script`.
    ///
    /// The script must be non-empty.
    #[must_use]
    pub fn new(script: Vec<SignalId>) -> Self {
        assert!(!script.is_empty(), "Script must be non-empty");
        Self {
            script,
            position: 0,
        }
    }

    /// Create a source from raw indices.
    #[must_use]
    pub fn from_indices(indices: &[u8]) -> Self {
        Self::new(indices.iter().copied().map(SignalId::new).collect())
    }
}

impl SignalSource for ScriptedSource {
    fn next_signal(&mut self, _signal_count: usize) -> SignalId {
        let signal = self.script[self.position];
        self.position = (self.position + 1) % self.script.len();
        signal
    }
}
