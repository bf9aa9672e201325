//! Game state: the round/sequence state bag.
//!
//! ## GameState
//!
//! A single mutable entity, exclusively owned by the engine:
//! - Power flag (is a round active)
//! - The grown sequence of signals, insertion order significant
//! - Playback cursor while the presenter replays the sequence
//! - Player progress while input is open
//! - The last completed score
//!
//! ## Invariants
//!
//! - `player_progress`, when present, is `<= sequence.len()`
//! - `sequence_cursor`, when present, is `< sequence.len()`
//! - The sequence only grows while power is on; it is cleared exactly on
//!   power-off or `reset()`
//! - `score` is set only at the moment of a full correct reproduction
//!
//! Uses an `im` persistent vector for the sequence so snapshots clone in
//! O(1), which keeps recordings and test assertions cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::signal::SignalId;

/// The three observable modes of the machine.
///
/// Derived from `GameState` rather than stored: power off is `Idle`, a
/// pending playback cursor is `Playback`, and open player input is
/// `AwaitingInput`. During a post-error replay both a cursor and a progress
/// value are present; playback wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Power is off; nothing is running.
    Idle,
    /// The system is replaying the sequence through the presenter.
    Playback,
    /// The player is reproducing the sequence.
    AwaitingInput,
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Whether a round is active.
    pub power: bool,

    /// Signal indices generated so far, in replay order.
    pub sequence: Vector<SignalId>,

    /// Index into `sequence` during presenter-driven playback.
    pub sequence_cursor: Option<usize>,

    /// Number of correctly reproduced signals this round.
    pub player_progress: Option<usize>,

    /// Last fully reproduced sequence length.
    pub score: Option<usize>,
}

impl GameState {
    /// Create the baseline state: power off, all optionals absent.
    #[must_use]
    pub fn new() -> Self {
        Self {
            power: false,
            sequence: Vector::new(),
            sequence_cursor: None,
            player_progress: None,
            score: None,
        }
    }

    /// Return to the baseline, leaving `power` untouched.
    ///
    /// Idempotent. The power flag is owned by the start/stop toggle.
    pub fn reset(&mut self) {
        self.score = None;
        self.sequence.clear();
        self.player_progress = None;
        self.sequence_cursor = None;
    }

    /// Number of signals generated so far.
    #[must_use]
    pub fn sequence_len(&self) -> usize {
        self.sequence.len()
    }

    /// The signal the player is expected to reproduce next.
    ///
    /// `None` unless input is open and progress is within the sequence.
    #[must_use]
    pub fn expected_signal(&self) -> Option<SignalId> {
        let progress = self.player_progress?;
        self.sequence.get(progress).copied()
    }

    /// The signal under the playback cursor.
    #[must_use]
    pub fn cursor_signal(&self) -> Option<SignalId> {
        let cursor = self.sequence_cursor?;
        self.sequence.get(cursor).copied()
    }

    /// Derive the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if !self.power {
            Phase::Idle
        } else if self.sequence_cursor.is_some() {
            Phase::Playback
        } else if self.player_progress.is_some() {
            Phase::AwaitingInput
        } else {
            // Power on but no cursor or progress yet: a round is being set
            // up (or a failed extension left it pending).
            Phase::Playback
        }
    }

    /// Check whether player input should currently register.
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        self.phase() == Phase::AwaitingInput
            && self
                .player_progress
                .is_some_and(|progress| progress < self.sequence.len())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
