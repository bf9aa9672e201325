//! Session recordings for replay and debugging.
//!
//! A recording captures everything needed to reproduce a session: the RNG
//! seed, the board configuration, and the input events in order. Replaying
//! a recording against a fresh engine yields byte-for-byte the same
//! command stream and final state, because the signal source is
//! deterministic and the engine is single-threaded.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Command, GameConfig, GameRng, GameState};
use crate::engine::{EngineError, GameEvent, SequenceGame};

/// Errors from recording serialization and replay.
#[derive(Debug, Error)]
pub enum ReplayError {
    /// The recorded events drove the engine into an error.
    #[error("replay failed: {0}")]
    Engine(#[from] EngineError),

    /// The recording bytes could not be decoded.
    #[error("recording decode failed: {0}")]
    Decode(#[from] bincode::Error),
}

/// A recorded session: seed, board, and the input events in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recording {
    /// Seed the engine's RNG was created with.
    pub seed: u64,

    /// Board configuration the session ran on.
    pub config: GameConfig,

    /// Input events in the order they were handled.
    pub events: Vec<GameEvent>,
}

impl Recording {
    /// Create an empty recording.
    #[must_use]
    pub fn new(seed: u64, config: GameConfig) -> Self {
        Self {
            seed,
            config,
            events: Vec::new(),
        }
    }

    /// Append an event.
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Get the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the recording is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Serialize to compact bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ReplayError> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserialize from bytes produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ReplayError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Drive a fresh engine through the recorded events.
    ///
    /// Returns the final state and the full command stream, in the order
    /// a live presenter would have applied it.
    pub fn replay(&self) -> Result<ReplayOutcome, ReplayError> {
        let mut game = SequenceGame::new(self.config.clone(), GameRng::new(self.seed));
        let mut commands = Vec::new();

        for &event in &self.events {
            commands.extend(game.handle(event)?);
        }

        Ok(ReplayOutcome {
            state: game.state().clone(),
            commands,
        })
    }
}

/// What a replayed session produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplayOutcome {
    /// Engine state after the last event.
    pub state: GameState,

    /// Every command the engine emitted, in order.
    pub commands: Vec<Command>,
}

/// An engine that records the events it handles.
///
/// Wrap a seeded session in a `Recorder` and feed it events; the
/// resulting `Recording` reproduces the session exactly.
pub struct Recorder {
    game: SequenceGame<GameRng>,
    recording: Recording,
}

impl Recorder {
    /// Create a recorder around a freshly seeded engine.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            game: SequenceGame::new(config.clone(), GameRng::new(seed)),
            recording: Recording::new(seed, config),
        }
    }

    /// Handle an event, recording it.
    ///
    /// The event is recorded even when the engine rejects it, so a replay
    /// reproduces the failure too.
    pub fn handle(&mut self, event: GameEvent) -> Result<crate::core::Commands, EngineError> {
        self.recording.push(event);
        self.game.handle(event)
    }

    /// Get the engine being recorded.
    #[must_use]
    pub fn game(&self) -> &SequenceGame<GameRng> {
        &self.game
    }

    /// Get the recording so far.
    #[must_use]
    pub fn recording(&self) -> &Recording {
        &self.recording
    }

    /// Stop recording and take the recording.
    #[must_use]
    pub fn into_recording(self) -> Recording {
        self.recording
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Phase, SignalId};

    /// Play one full round through a recorder: start, watch the single
    /// highlight, reproduce it.
    fn record_one_round(seed: u64) -> Recorder {
        let mut recorder = Recorder::new(GameConfig::default(), seed);

        recorder.handle(GameEvent::StartPressed).unwrap();
        recorder.handle(GameEvent::HighlightFinished).unwrap();
        let expected = recorder.game().state().sequence[0];
        recorder.handle(GameEvent::SignalPressed(expected)).unwrap();

        recorder
    }

    #[test]
    fn test_recorder_captures_events() {
        let recorder = record_one_round(42);

        let recording = recorder.into_recording();
        assert_eq!(recording.len(), 3);
        assert_eq!(recording.events[0], GameEvent::StartPressed);
        assert_eq!(recording.events[1], GameEvent::HighlightFinished);
    }

    #[test]
    fn test_replay_reproduces_state() {
        let recorder = record_one_round(42);
        let live_state = recorder.game().state().clone();

        let outcome = recorder.into_recording().replay().unwrap();

        assert_eq!(outcome.state, live_state);
        assert_eq!(outcome.state.score, Some(1));
        assert_eq!(outcome.state.sequence_len(), 2);
    }

    #[test]
    fn test_replay_is_deterministic() {
        let recording = record_one_round(7).into_recording();

        let outcome1 = recording.replay().unwrap();
        let outcome2 = recording.replay().unwrap();

        assert_eq!(outcome1, outcome2);
    }

    #[test]
    fn test_different_seeds_diverge() {
        // With enough rounds, two seeds must grow different sequences;
        // one round of a single pick can collide
        let mut recorder1 = Recorder::new(GameConfig::default(), 1);
        let mut recorder2 = Recorder::new(GameConfig::default(), 2);
        recorder1.handle(GameEvent::StartPressed).unwrap();
        recorder2.handle(GameEvent::StartPressed).unwrap();

        for _ in 0..6 {
            for recorder in [&mut recorder1, &mut recorder2] {
                recorder.handle(GameEvent::HighlightFinished).unwrap();
                while recorder.game().phase() == Phase::Playback {
                    recorder.handle(GameEvent::HighlightFinished).unwrap();
                }
                let sequence: Vec<SignalId> =
                    recorder.game().state().sequence.iter().copied().collect();
                for signal in sequence {
                    recorder.handle(GameEvent::SignalPressed(signal)).unwrap();
                }
            }
        }

        assert_ne!(
            recorder1.game().state().sequence,
            recorder2.game().state().sequence,
        );
    }

    #[test]
    fn test_bytes_round_trip() {
        let recording = record_one_round(42).into_recording();

        let bytes = recording.to_bytes().unwrap();
        let decoded = Recording::from_bytes(&bytes).unwrap();

        assert_eq!(recording, decoded);
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let result = Recording::from_bytes(&[0xff, 0x01]);
        assert!(matches!(result, Err(ReplayError::Decode(_))));
    }

    #[test]
    fn test_replay_surfaces_recorded_failure() {
        let mut recording = Recording::new(42, GameConfig::default());
        // A completion with no playback in flight is a harness defect
        recording.push(GameEvent::StartPressed);
        recording.push(GameEvent::HighlightFinished);
        recording.push(GameEvent::HighlightFinished);

        let result = recording.replay();

        assert!(matches!(result, Err(ReplayError::Engine(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let recording = record_one_round(42).into_recording();

        let json = serde_json::to_string(&recording).unwrap();
        let deserialized: Recording = serde_json::from_str(&json).unwrap();

        assert_eq!(recording, deserialized);
    }
}
