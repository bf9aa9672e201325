//! Presenter commands.
//!
//! Commands are the engine's only output: every transition returns a batch
//! of them, and the UI wrapper applies them at the boundary. The engine
//! never touches a view.
//!
//! ## Display Commands
//!
//! Update what the player sees:
//! - `ShowMessage`: set the system message line
//! - `DisplayScore`: set the score text
//! - `SetScoreVisible`: reveal or hide the score displays
//! - `SetControlLabel`: relabel the start/stop control
//!
//! ## Interaction Commands
//!
//! Drive the watch-then-copy cycle:
//! - `HighlightSignal`: play the timed highlight/un-highlight animation for
//!   one signal pad; the wrapper must report completion back via
//!   `SequenceGame::highlight_finished`
//! - `SetSignalsEnabled`: gate the signal inputs
//!
//! At most one highlight is ever in flight: the engine does not emit the
//! next `HighlightSignal` until the previous one's completion has been
//! reported.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::signal::SignalId;

/// A system message shown to the player.
///
/// `Display` renders the exact user-facing text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    /// Shown while idle, inviting a new game.
    PressStart,
    /// Shown while the system replays the sequence.
    WatchMe,
    /// Shown while the player reproduces the sequence.
    CopyMe,
    /// Shown after a wrong signal, before the replay.
    WatchAgain,
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Message::PressStart => "Press start!",
            Message::WatchMe => "Watch me...",
            Message::CopyMe => "Copy me...",
            Message::WatchAgain => "No, watch again...",
        };
        f.write_str(text)
    }
}

/// Label for the single start/stop control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlLabel {
    /// The control will start a game.
    Start,
    /// The control will stop the running game.
    Stop,
}

impl std::fmt::Display for ControlLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            ControlLabel::Start => "START",
            ControlLabel::Stop => "STOP",
        };
        f.write_str(text)
    }
}

/// An atomic presenter intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Set the system message line.
    ShowMessage(Message),

    /// Set the score text.
    DisplayScore(usize),

    /// Reveal or hide the score displays.
    SetScoreVisible(bool),

    /// Play the highlight/un-highlight animation for one signal pad.
    /// The wrapper reports completion via `highlight_finished`.
    HighlightSignal(SignalId),

    /// Enable or disable all signal inputs.
    SetSignalsEnabled(bool),

    /// Relabel the start/stop control.
    SetControlLabel(ControlLabel),
}

/// A batch of commands produced by one transition.
///
/// SmallVec optimizes for the common case (a handful of commands per
/// transition) without heap allocation.
pub type Commands = SmallVec<[Command; 8]>;
