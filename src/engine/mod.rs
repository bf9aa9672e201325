//! The round/sequence state machine.
//!
//! `SequenceGame` owns the game state, decides transitions, and emits
//! presenter commands. It drives the watch-then-copy cycle:
//!
//! ```text
//! Idle --start--> Playback --(all highlights done)--> AwaitingInput
//!                    ^                                     |
//!                    |-- extend, full reproduction --------|
//!                    |-- replay unchanged, wrong signal ---|
//! Idle <--stop-- (any active phase)
//! ```
//!
//! Every operation returns the commands the wrapper must apply. Playback
//! is a sequential chain with explicit suspension points: the engine emits
//! one `HighlightSignal`, then waits for `highlight_finished` before
//! emitting the next. A stop press is observed by the next completion,
//! which halts the chain instead of continuing it.
//!
//! ## Collaborators
//!
//! - `SignalSource` (constructor-injected): picks the signal appended to
//!   the sequence each round
//! - The presenter: applies the returned commands and reports highlight
//!   completions back in request order
//!
//! Domain-level player mistakes are a designed transition (replay the
//! unchanged sequence), not an error. `EngineError` covers programmer
//! errors only: a misbehaving source or harness.

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use smallvec::smallvec;
use thiserror::Error;

use crate::core::{
    Command, Commands, ControlLabel, GameConfig, GameRng, GameState, Message, Phase, SignalId,
    SignalSource,
};

/// Programmer-error conditions surfaced by the engine.
///
/// Player mistakes are not errors; they transition the game. These
/// variants fire when a collaborator breaks its contract, so state is
/// never silently corrupted.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A signal index outside the configured board.
    #[error("signal {signal} outside 0..{signal_count}")]
    SignalOutOfRange { signal: usize, signal_count: usize },

    /// An operation arrived in a state that must be unreachable.
    #[error("invariant violated: {0}")]
    InvariantViolation(&'static str),
}

/// An input to the machine, as data.
///
/// `SequenceGame::handle` dispatches these; recordings store them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The start/stop control was pressed.
    StartPressed,
    /// A signal pad was pressed.
    SignalPressed(SignalId),
    /// The presenter finished the highlight animation it was asked for.
    HighlightFinished,
}

/// The game engine: state plus injected signal source.
///
/// ## Example
///
/// ```
/// use simon_core::core::{Command, GameConfig, ScriptedSource, SignalId};
/// use simon_core::engine::SequenceGame;
///
/// let source = ScriptedSource::from_indices(&[2]);
/// let mut game = SequenceGame::new(GameConfig::default(), source);
///
/// let commands = game.press_start().unwrap();
/// assert!(commands.contains(&Command::HighlightSignal(SignalId::new(2))));
/// ```
pub struct SequenceGame<S: SignalSource> {
    config: GameConfig,
    state: GameState,
    source: S,
}

impl SequenceGame<GameRng> {
    /// Create an engine with the deterministic ChaCha8 source.
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::new(config, GameRng::new(seed))
    }
}

impl<S: SignalSource> SequenceGame<S> {
    /// Create an engine with an injected signal source.
    #[must_use]
    pub fn new(config: GameConfig, source: S) -> Self {
        Self {
            config,
            state: GameState::new(),
            source,
        }
    }

    /// Get the game configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get the current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Get the last completed score.
    #[must_use]
    pub fn score(&self) -> Option<usize> {
        self.state.score
    }

    /// Get the current sequence length.
    #[must_use]
    pub fn sequence_len(&self) -> usize {
        self.state.sequence_len()
    }

    /// Dispatch an input event.
    pub fn handle(&mut self, event: GameEvent) -> Result<Commands, EngineError> {
        match event {
            GameEvent::StartPressed => self.press_start(),
            GameEvent::SignalPressed(signal) => self.press_signal(signal),
            GameEvent::HighlightFinished => self.highlight_finished(),
        }
    }

    /// The start/stop control was pressed.
    ///
    /// Idle: reset, power on, relabel the control, begin a round.
    /// Active: power off, relabel, reset - regardless of round progress.
    pub fn press_start(&mut self) -> Result<Commands, EngineError> {
        if !self.state.power {
            debug!("power on");
            let mut commands = self.reset();
            self.state.power = true;
            commands.push(Command::SetControlLabel(ControlLabel::Stop));
            commands.extend(self.begin_round()?);
            return Ok(commands);
        }

        debug!("power off");
        self.state.power = false;
        let mut commands: Commands = smallvec![Command::SetControlLabel(ControlLabel::Start)];
        commands.extend(self.reset());
        Ok(commands)
    }

    /// A signal pad was pressed.
    ///
    /// No-op unless input is open for this round: taps while idle, during
    /// playback, with an empty sequence, or after the round's final signal
    /// are all ignored. A correct signal advances progress; the final
    /// correct signal scores and begins the next round; a wrong signal
    /// replays the unchanged sequence.
    pub fn press_signal(&mut self, signal: SignalId) -> Result<Commands, EngineError> {
        if !signal.in_range(self.config.signal_count) {
            return Err(EngineError::SignalOutOfRange {
                signal: signal.index(),
                signal_count: self.config.signal_count,
            });
        }
        if !self.state.accepts_input() {
            trace!("ignoring {} while input is closed", signal);
            return Ok(Commands::new());
        }

        let expected = self
            .state
            .expected_signal()
            .ok_or(EngineError::InvariantViolation(
                "player progress beyond sequence",
            ))?;
        if signal != expected {
            debug!("wrong signal {}, expected {}", signal, expected);
            return self.player_error();
        }

        let progress = self
            .state
            .player_progress
            .ok_or(EngineError::InvariantViolation(
                "input accepted without player progress",
            ))?
            + 1;
        self.state.player_progress = Some(progress);
        trace!("correct signal {}, progress {}", signal, progress);
        if progress < self.state.sequence_len() {
            return Ok(Commands::new());
        }

        // Full reproduction: score equals the completed sequence length,
        // then the challenge grows by one.
        let score = self.state.sequence_len();
        self.state.score = Some(score);
        debug!("round complete, score {}", score);
        let mut commands: Commands = smallvec![Command::DisplayScore(score)];
        commands.extend(self.begin_round()?);
        Ok(commands)
    }

    /// The presenter finished the highlight it was asked for.
    ///
    /// Advances the playback chain: emits the next highlight, or - once
    /// the sequence is exhausted - opens player input. A completion that
    /// arrives after a stop press halts the chain. A completion outside
    /// playback is a harness defect.
    pub fn highlight_finished(&mut self) -> Result<Commands, EngineError> {
        if !self.state.power {
            debug!("completion after stop, halting playback");
            return Ok(Commands::new());
        }

        let cursor = self
            .state
            .sequence_cursor
            .ok_or(EngineError::InvariantViolation(
                "highlight completion outside playback",
            ))?
            + 1;
        if cursor < self.state.sequence_len() {
            self.state.sequence_cursor = Some(cursor);
            return self.cursor_highlight();
        }

        // Playback exhausted: open player input.
        self.state.sequence_cursor = None;
        self.state.player_progress = Some(0);
        debug!(
            "playback finished, awaiting {} signals",
            self.state.sequence_len()
        );
        Ok(smallvec![
            Command::SetSignalsEnabled(true),
            Command::ShowMessage(Message::CopyMe),
            Command::SetScoreVisible(true),
        ])
    }

    /// Clear the round state and emit the idle-screen commands.
    fn reset(&mut self) -> Commands {
        self.state.reset();
        smallvec![
            Command::SetScoreVisible(false),
            Command::DisplayScore(0),
            Command::SetSignalsEnabled(false),
            Command::ShowMessage(Message::PressStart),
        ]
    }

    /// Announce the round, extend the sequence by one pick, start playback.
    fn begin_round(&mut self) -> Result<Commands, EngineError> {
        let mut commands: Commands = smallvec![Command::ShowMessage(Message::WatchMe)];

        let signal = self.source.next_signal(self.config.signal_count);
        if !signal.in_range(self.config.signal_count) {
            return Err(EngineError::SignalOutOfRange {
                signal: signal.index(),
                signal_count: self.config.signal_count,
            });
        }
        self.state.sequence.push_back(signal);
        debug!(
            "sequence extended with {} to length {}",
            signal,
            self.state.sequence_len()
        );

        commands.extend(self.begin_playback()?);
        Ok(commands)
    }

    /// Start replaying the sequence from element 0.
    ///
    /// Guarded on power: a stop press mid-animation leaves a completion in
    /// flight, and the replay it would have started must not happen.
    fn begin_playback(&mut self) -> Result<Commands, EngineError> {
        if !self.state.power {
            debug!("playback suppressed, power is off");
            return Ok(Commands::new());
        }
        if self.state.sequence.is_empty() {
            return Err(EngineError::InvariantViolation(
                "playback requires a non-empty sequence",
            ));
        }

        self.state.sequence_cursor = Some(0);
        self.cursor_highlight()
    }

    /// Emit the highlight for the signal under the cursor.
    fn cursor_highlight(&self) -> Result<Commands, EngineError> {
        let signal = self
            .state
            .cursor_signal()
            .ok_or(EngineError::InvariantViolation("playback cursor out of range"))?;
        trace!("highlight {}", signal);
        Ok(smallvec![Command::HighlightSignal(signal)])
    }

    /// Wrong signal: progress resets, the unchanged sequence replays.
    ///
    /// The sequence is never cleared or shortened here, and the score
    /// keeps whatever it last was.
    fn player_error(&mut self) -> Result<Commands, EngineError> {
        self.state.player_progress = Some(0);
        let mut commands: Commands = smallvec![
            Command::SetSignalsEnabled(false),
            Command::ShowMessage(Message::WatchAgain),
        ];
        commands.extend(self.begin_playback()?);
        Ok(commands)
    }
}
