//! Game configuration.
//!
//! The engine never hardcodes the board size - games configure it at
//! startup. The conventional board has four signal pads, which is what
//! `GameConfig::default()` gives you.

use serde::{Deserialize, Serialize};

/// Complete game configuration.
///
/// Games provide this at startup to configure the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of selectable signal pads (2-255).
    pub signal_count: usize,
}

impl GameConfig {
    /// Create a new game configuration.
    #[must_use]
    pub fn new(signal_count: usize) -> Self {
        assert!(signal_count >= 2, "Must have at least 2 signals");
        assert!(signal_count <= 255, "At most 255 signals supported");

        Self { signal_count }
    }
}

impl Default for GameConfig {
    /// The conventional four-pad board.
    fn default() -> Self {
        Self::new(4)
    }
}
