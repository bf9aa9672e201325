//! Signal identification.
//!
//! A signal is one of the selectable pads on the board (four by
//! convention). The engine never hardcodes the pad count - boards define it
//! via `GameConfig`, and a `SignalId` is only meaningful relative to a
//! board's `signal_count`.
//!
//! ## Usage
//!
//! ```
//! use simon_core::core::SignalId;
//!
//! let signal_count = 4;
//!
//! let red = SignalId::new(0);
//! let blue = SignalId::new(3);
//!
//! assert!(red.in_range(signal_count));
//! assert!(blue.in_range(signal_count));
//! assert!(!SignalId::new(4).in_range(signal_count));
//! ```

use serde::{Deserialize, Serialize};

/// Index of a selectable signal pad.
///
/// Signal indices are 0-based: the first pad is `SignalId(0)`.
/// Use `in_range(signal_count)` to check validity for a given board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignalId(pub u8);

impl SignalId {
    /// Create a new signal ID.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check whether this signal exists on a board with `signal_count` pads.
    ///
    /// ```
    /// use simon_core::core::SignalId;
    ///
    /// assert!(SignalId::new(2).in_range(4));
    /// assert!(!SignalId::new(2).in_range(2));
    /// ```
    #[must_use]
    pub const fn in_range(self, signal_count: usize) -> bool {
        (self.0 as usize) < signal_count
    }

    /// Iterate over all signal IDs for a board with `signal_count` pads.
    ///
    /// ```
    /// use simon_core::core::SignalId;
    ///
    /// let signals: Vec<_> = SignalId::all(4).collect();
    /// assert_eq!(signals.len(), 4);
    /// assert_eq!(signals[0], SignalId::new(0));
    /// assert_eq!(signals[3], SignalId::new(3));
    /// ```
    pub fn all(signal_count: usize) -> impl Iterator<Item = SignalId> {
        (0..signal_count as u8).map(SignalId)
    }
}

impl From<u8> for SignalId {
    fn from(index: u8) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for SignalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Signal({})", self.0)
    }
}
