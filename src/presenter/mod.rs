//! The presenter boundary.
//!
//! Wrappers implement `Presenter` to render the engine's commands: a GUI
//! maps them onto buttons and labels, a CLI onto terminal output. The
//! engine itself never calls a presenter - transitions return commands as
//! data, and the wrapper applies them here, in order.
//!
//! The one contract beyond rendering: after `highlight_signal`, the
//! wrapper must report the animation's completion back to the engine via
//! `SequenceGame::highlight_finished` before applying anything that could
//! produce another highlight. Completions are reported in request order;
//! the engine keeps at most one highlight in flight.

use crate::core::{Command, ControlLabel, Message, SignalId};

/// Renders engine commands onto a concrete UI.
///
/// Implement the granular methods; `apply` and `apply_all` dispatch
/// commands onto them.
pub trait Presenter {
    /// Set the system message line.
    fn show_message(&mut self, message: Message);

    /// Set the score text.
    fn display_score(&mut self, score: usize);

    /// Reveal or hide the score displays.
    fn set_score_visible(&mut self, visible: bool);

    /// Play the highlight/un-highlight animation for one signal pad.
    ///
    /// The wrapper reports completion via
    /// `SequenceGame::highlight_finished` once the animation ends.
    fn highlight_signal(&mut self, signal: SignalId);

    /// Enable or disable all signal inputs.
    fn set_signals_enabled(&mut self, enabled: bool);

    /// Relabel the start/stop control.
    fn set_control_label(&mut self, label: ControlLabel);

    /// Apply a single command.
    fn apply(&mut self, command: &Command) {
        match *command {
            Command::ShowMessage(message) => self.show_message(message),
            Command::DisplayScore(score) => self.display_score(score),
            Command::SetScoreVisible(visible) => self.set_score_visible(visible),
            Command::HighlightSignal(signal) => self.highlight_signal(signal),
            Command::SetSignalsEnabled(enabled) => self.set_signals_enabled(enabled),
            Command::SetControlLabel(label) => self.set_control_label(label),
        }
    }

    /// Apply a batch of commands in order.
    fn apply_all(&mut self, commands: &[Command]) {
        for command in commands {
            self.apply(command);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Presenter fake that records what it was asked to render.
    #[derive(Default)]
    struct RecordingPresenter {
        messages: Vec<Message>,
        scores: Vec<usize>,
        score_visible: Option<bool>,
        highlights: Vec<SignalId>,
        signals_enabled: Option<bool>,
        control_label: Option<ControlLabel>,
    }

    impl Presenter for RecordingPresenter {
        fn show_message(&mut self, message: Message) {
            self.messages.push(message);
        }

        fn display_score(&mut self, score: usize) {
            self.scores.push(score);
        }

        fn set_score_visible(&mut self, visible: bool) {
            self.score_visible = Some(visible);
        }

        fn highlight_signal(&mut self, signal: SignalId) {
            self.highlights.push(signal);
        }

        fn set_signals_enabled(&mut self, enabled: bool) {
            self.signals_enabled = Some(enabled);
        }

        fn set_control_label(&mut self, label: ControlLabel) {
            self.control_label = Some(label);
        }
    }

    #[test]
    fn test_apply_dispatches_every_variant() {
        let mut presenter = RecordingPresenter::default();

        presenter.apply(&Command::ShowMessage(Message::WatchMe));
        presenter.apply(&Command::DisplayScore(3));
        presenter.apply(&Command::SetScoreVisible(true));
        presenter.apply(&Command::HighlightSignal(SignalId::new(2)));
        presenter.apply(&Command::SetSignalsEnabled(false));
        presenter.apply(&Command::SetControlLabel(ControlLabel::Stop));

        assert_eq!(presenter.messages, vec![Message::WatchMe]);
        assert_eq!(presenter.scores, vec![3]);
        assert_eq!(presenter.score_visible, Some(true));
        assert_eq!(presenter.highlights, vec![SignalId::new(2)]);
        assert_eq!(presenter.signals_enabled, Some(false));
        assert_eq!(presenter.control_label, Some(ControlLabel::Stop));
    }

    #[test]
    fn test_apply_all_preserves_order() {
        let mut presenter = RecordingPresenter::default();

        presenter.apply_all(&[
            Command::ShowMessage(Message::PressStart),
            Command::ShowMessage(Message::WatchMe),
        ]);

        assert_eq!(presenter.messages, vec![Message::PressStart, Message::WatchMe]);
    }
}
