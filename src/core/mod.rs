//! Core engine types: signals, state, commands, RNG, configuration.
//!
//! This module contains the fundamental building blocks that are
//! UI-agnostic. Wrappers configure the board via `GameConfig` rather than
//! modifying the core.

pub mod command;
pub mod config;
pub mod rng;
pub mod signal;
pub mod state;

pub use command::{Command, Commands, ControlLabel, Message};
pub use config::GameConfig;
pub use rng::{GameRng, GameRngState, ScriptedSource, SignalSource};
pub use signal::SignalId;
pub use state::{GameState, Phase};
