//! # simon-core
//!
//! A UI-independent round/sequence engine for watch-and-copy memory games.
//!
//! ## Design Principles
//!
//! 1. **UI-Agnostic**: The engine owns game state and transitions; every
//!    transition returns presenter commands as data. Rendering happens at
//!    the boundary, never in the core.
//!
//! 2. **Injected Collaborators**: The signal source and the presenter are
//!    constructor-injected behind traits. A scripted source makes every
//!    transition deterministic under test.
//!
//! 3. **Configuration Over Convention**: The board (four pads by
//!    convention) is configured via `GameConfig`, not hardcoded.
//!
//! ## Architecture
//!
//! - **Sequential Playback Chain**: replay is a chain of explicit
//!   suspension points - one highlight in flight at a time, advanced only
//!   by `highlight_finished`. A stop press halts the chain at the next
//!   completion.
//!
//! - **Persistent Data Structures**: the grown sequence lives in an `im`
//!   vector, so state snapshots clone in O(1) for recordings and tests.
//!
//! - **Deterministic Replay**: a seed plus the event stream reproduces a
//!   session exactly; recordings serialize via serde/bincode.
//!
//! ## Modules
//!
//! - `core`: Signal IDs, state, commands, RNG, configuration
//! - `engine`: The `SequenceGame` state machine
//! - `presenter`: The trait wrappers implement to render commands
//! - `replay`: Session recording and deterministic replay

pub mod core;
pub mod engine;
pub mod presenter;
pub mod replay;

// Re-export commonly used types
pub use crate::core::{
    Command, Commands, ControlLabel, GameConfig, GameRng, GameRngState, GameState, Message, Phase,
    ScriptedSource, SignalId, SignalSource,
};

pub use crate::engine::{EngineError, GameEvent, SequenceGame};

pub use crate::presenter::Presenter;

pub use crate::replay::{Recorder, Recording, ReplayError, ReplayOutcome};
