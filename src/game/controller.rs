//! Turn controller
//!
//! Sequences one round: letters in, submit, validate, score, advance, and
//! decide the outcome. The controller is the only thing that mutates a
//! `RoundState`.
//!
//! # Validation fallback
//! A validator that errors or times out never blocks the round: the guess is
//! accepted and the failure is returned as a `Warning`.

use super::observer::{RoundEvent, RoundObserver};
use super::state::{GuessRecord, RoundState, RoundStatus};
use crate::config::GameConfig;
use crate::core::{KeyboardHints, Word, score};
use crate::warning::Warning;
use crate::words::{ValidatorError, WordValidator};
use log::{debug, error, info, warn};
use std::time::Duration;
use thiserror::Error;

/// The validator rejected a guess; the round continues unchanged
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0} is not an accepted word")]
pub struct InvalidWord(pub Word);

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub record: GuessRecord,
    pub status: RoundStatus,
    /// Set when the guess was accepted because validation failed
    pub warning: Option<Warning>,
}

/// Owns and drives one round at a time
pub struct TurnController {
    round: RoundState,
    hints: KeyboardHints,
    pending: Option<Word>,
    validate_timeout: Duration,
    observer: Option<Box<dyn RoundObserver + Send>>,
}

impl TurnController {
    /// Start a round for `target`
    #[must_use]
    pub fn new(target: Word, config: &GameConfig) -> Self {
        info!("new round: {} letters, {} attempts", target.len(), config.max_attempts);
        Self {
            round: RoundState::new(target, config.max_attempts),
            hints: KeyboardHints::new(),
            pending: None,
            validate_timeout: config.validate_timeout,
            observer: None,
        }
    }

    /// Attach the UI-side observer
    #[must_use]
    pub fn with_observer(mut self, observer: impl RoundObserver + Send + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    #[must_use]
    pub const fn state(&self) -> &RoundState {
        &self.round
    }

    #[must_use]
    pub const fn hints(&self) -> &KeyboardHints {
        &self.hints
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.round.status()
    }

    fn emit(&mut self, event: RoundEvent) {
        if let Some(observer) = self.observer.as_mut() {
            observer.notify(&event);
        }
    }

    /// Type a letter into the current guess
    ///
    /// Ignored unless playing, the guess has room, and `ch` is an ASCII letter.
    /// Returns whether the guess changed.
    pub fn add_letter(&mut self, ch: char) -> bool {
        if self.round.status() != RoundStatus::Playing || !ch.is_ascii_alphabetic() {
            return false;
        }
        if self.round.current_guess().len() >= self.round.word_length() {
            return false;
        }

        let ch = ch.to_ascii_uppercase();
        self.round.current_guess_mut().push(ch);
        self.emit(RoundEvent::LetterAdded(ch));
        true
    }

    /// Delete the last typed letter
    ///
    /// Ignored unless playing. Returns whether the guess changed.
    pub fn remove_letter(&mut self) -> bool {
        if self.round.status() != RoundStatus::Playing {
            return false;
        }
        if self.round.current_guess_mut().pop().is_none() {
            return false;
        }
        self.emit(RoundEvent::LetterRemoved);
        true
    }

    /// Start submitting the current guess
    ///
    /// Returns the word to validate and moves to `Submitting`, or `None` when
    /// not playing or the guess is incomplete.
    pub fn begin_submit(&mut self) -> Option<Word> {
        if self.round.status() != RoundStatus::Playing {
            return None;
        }
        if self.round.current_guess().len() != self.round.word_length() {
            return None;
        }

        let word = Word::new(self.round.current_guess()).ok()?;
        self.round.set_status(RoundStatus::Submitting);
        self.pending = Some(word.clone());
        debug!("submitting {word}");
        self.emit(RoundEvent::SubmitStarted(word.clone()));
        Some(word)
    }

    /// Give up on an in-flight submission, keeping the typed guess
    pub fn abort_submit(&mut self) {
        if self.round.status() == RoundStatus::Submitting {
            self.pending = None;
            self.round.set_status(RoundStatus::Playing);
        }
    }

    /// Finish a submission with the validator's answer
    ///
    /// - `Ok(true)` scores the guess
    /// - `Ok(false)` returns to playing with the guess intact
    /// - `Err(_)` scores the guess and carries a warning
    ///
    /// Returns `Ok(None)` if no submission is in flight.
    ///
    /// # Errors
    /// Returns `InvalidWord` if the validator rejected the guess. No attempt
    /// is consumed.
    pub fn complete_submit(
        &mut self,
        validation: Result<bool, ValidatorError>,
    ) -> Result<Option<Submission>, InvalidWord> {
        if self.round.status() != RoundStatus::Submitting {
            return Ok(None);
        }
        let Some(word) = self.pending.take() else {
            self.round.set_status(RoundStatus::Playing);
            return Ok(None);
        };

        let warning = match validation {
            Ok(true) => None,
            Ok(false) => {
                debug!("{word} rejected");
                self.round.set_status(RoundStatus::Playing);
                self.emit(RoundEvent::GuessRejected(word.clone()));
                return Err(InvalidWord(word));
            }
            Err(e) => {
                warn!("validation of {word} failed: {e}; accepting");
                Some(Warning::ValidatorUnavailable {
                    word: word.text().to_string(),
                    reason: e.to_string(),
                })
            }
        };

        let feedback = match score(&word, self.round.target()) {
            Ok(feedback) => feedback,
            Err(e) => {
                // Unreachable while add_letter caps the guess at the target length
                error!("cannot score {word}: {e}");
                self.round.set_status(RoundStatus::Playing);
                return Ok(None);
            }
        };

        self.hints.record(&word, &feedback);
        let record = GuessRecord { word, feedback };
        let status = self.round.push_guess(record.clone());

        if let Some(w) = &warning {
            self.emit(RoundEvent::Warning(w.clone()));
        }
        self.emit(RoundEvent::GuessScored {
            record: record.clone(),
            status,
        });
        match status {
            RoundStatus::Won => {
                let attempts = self.round.current_row();
                info!("round won in {attempts}");
                self.emit(RoundEvent::Won { attempts });
            }
            RoundStatus::Lost => {
                let target = self.round.target().clone();
                info!("round lost; target was {target}");
                self.emit(RoundEvent::Lost { target });
            }
            RoundStatus::Playing | RoundStatus::Submitting => {}
        }

        Ok(Some(Submission {
            record,
            status,
            warning,
        }))
    }

    /// Validate, score and apply the current guess
    ///
    /// The validator is given `validate_timeout`; expiry counts as a
    /// validator failure. Returns `Ok(None)` when there is nothing to submit,
    /// including while another submission is in flight.
    ///
    /// # Errors
    /// Returns `InvalidWord` if the validator rejected the guess.
    pub async fn submit_guess<V: WordValidator>(
        &mut self,
        validator: &V,
    ) -> Result<Option<Submission>, InvalidWord> {
        let Some(word) = self.begin_submit() else {
            return Ok(None);
        };

        let validation =
            match tokio::time::timeout(self.validate_timeout, validator.validate(&word)).await {
                Ok(result) => result,
                Err(_) => Err(ValidatorError::Timeout(self.validate_timeout)),
            };
        self.complete_submit(validation)
    }

    /// Replace the round with a fresh one for `target`, clearing hints
    pub fn reset_round(&mut self, target: Word) {
        let word_length = target.len();
        info!("round reset: {word_length} letters");
        self.round = RoundState::new(target, self.round.max_attempts());
        self.hints.clear();
        self.pending = None;
        self.emit(RoundEvent::Reset { word_length });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;
    use crate::words::{AcceptAll, TableValidator, WordTable};
    use std::sync::mpsc;

    struct Rejecting;

    impl WordValidator for Rejecting {
        async fn validate(&self, _word: &Word) -> Result<bool, ValidatorError> {
            Ok(false)
        }
    }

    struct Broken;

    impl WordValidator for Broken {
        async fn validate(&self, _word: &Word) -> Result<bool, ValidatorError> {
            Err(ValidatorError::Unavailable("503".to_string()))
        }
    }

    struct Slow;

    impl WordValidator for Slow {
        async fn validate(&self, _word: &Word) -> Result<bool, ValidatorError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(false)
        }
    }

    fn controller(target: &str) -> TurnController {
        TurnController::new(Word::new(target).unwrap(), &GameConfig::default())
    }

    fn type_word(c: &mut TurnController, word: &str) {
        for ch in word.chars() {
            c.add_letter(ch);
        }
    }

    async fn play(c: &mut TurnController, word: &str) -> Option<Submission> {
        type_word(c, word);
        c.submit_guess(&AcceptAll).await.unwrap()
    }

    #[test]
    fn add_letter_uppercases_and_caps_length() {
        let mut c = controller("cuda");
        assert!(c.add_letter('c'));
        type_word(&mut c, "odex");
        assert_eq!(c.state().current_guess(), "CODE");
        assert!(!c.add_letter('s'));
    }

    #[test]
    fn add_letter_ignores_non_letters() {
        let mut c = controller("cuda");
        assert!(!c.add_letter('4'));
        assert!(!c.add_letter(' '));
        assert!(!c.add_letter('é'));
        assert!(c.state().current_guess().is_empty());
    }

    #[test]
    fn remove_letter() {
        let mut c = controller("cuda");
        assert!(!c.remove_letter());
        type_word(&mut c, "co");
        assert!(c.remove_letter());
        assert_eq!(c.state().current_guess(), "C");
    }

    #[tokio::test]
    async fn incomplete_guess_is_not_submitted() {
        let mut c = controller("model");
        type_word(&mut c, "mod");
        assert_eq!(c.submit_guess(&AcceptAll).await, Ok(None));
        assert_eq!(c.status(), RoundStatus::Playing);
        assert_eq!(c.state().current_guess(), "MOD");
    }

    #[tokio::test]
    async fn accepted_guess_is_scored_and_advances() {
        let mut c = controller("model");
        let submission = play(&mut c, "modes").await.unwrap();

        assert_eq!(
            submission.record.feedback.verdicts(),
            &[
                Verdict::Correct,
                Verdict::Correct,
                Verdict::Correct,
                Verdict::Correct,
                Verdict::Absent
            ]
        );
        assert_eq!(submission.status, RoundStatus::Playing);
        assert!(submission.warning.is_none());
        assert_eq!(c.state().current_row(), 1);
        assert!(c.state().current_guess().is_empty());
        assert_eq!(c.hints().get('S'), Some(Verdict::Absent));
    }

    #[tokio::test]
    async fn rejected_guess_keeps_input_and_attempt() {
        let mut c = controller("model");
        type_word(&mut c, "xyzzy");

        let result = c.submit_guess(&Rejecting).await;
        assert_eq!(result, Err(InvalidWord(Word::new("xyzzy").unwrap())));
        assert_eq!(c.status(), RoundStatus::Playing);
        assert_eq!(c.state().current_guess(), "XYZZY");
        assert_eq!(c.state().current_row(), 0);
        assert_eq!(c.state().attempts_left(), 6);
        assert!(c.hints().is_empty());
    }

    #[tokio::test]
    async fn table_validator_rejects_unknown_words() {
        let mut c = controller("token");
        let validator = TableValidator::new(WordTable::builtin());

        type_word(&mut c, "qwert");
        assert!(c.submit_guess(&validator).await.is_err());

        for _ in 0..5 {
            c.remove_letter();
        }
        type_word(&mut c, "agent");
        let submission = c.submit_guess(&validator).await.unwrap().unwrap();
        assert_eq!(submission.record.word.text(), "AGENT");
    }

    #[tokio::test]
    async fn validator_failure_accepts_with_warning() {
        let mut c = controller("model");
        type_word(&mut c, "token");

        let submission = c.submit_guess(&Broken).await.unwrap().unwrap();
        assert_eq!(c.state().current_row(), 1);
        match submission.warning {
            Some(Warning::ValidatorUnavailable { word, reason }) => {
                assert_eq!(word, "TOKEN");
                assert!(reason.contains("503"));
            }
            other => panic!("expected validator warning, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn validator_timeout_accepts_with_warning() {
        let mut c = controller("model");
        type_word(&mut c, "token");

        let submission = c.submit_guess(&Slow).await.unwrap().unwrap();
        assert!(matches!(
            submission.warning,
            Some(Warning::ValidatorUnavailable { .. })
        ));
        assert_eq!(c.status(), RoundStatus::Playing);
    }

    #[tokio::test]
    async fn first_correct_guess_wins() {
        let mut c = controller("agent");
        play(&mut c, "token").await;
        let submission = play(&mut c, "agent").await.unwrap();

        assert_eq!(submission.status, RoundStatus::Won);
        assert_eq!(c.state().current_row(), 2);
        assert_eq!(c.state().attempts_left(), 4);
    }

    #[tokio::test]
    async fn max_attempts_without_win_loses() {
        let mut c = controller("cuda");
        for (i, guess) in ["code", "data", "java", "rust", "ruby", "perl"]
            .iter()
            .enumerate()
        {
            let submission = play(&mut c, guess).await.unwrap();
            let expected = if i == 5 {
                RoundStatus::Lost
            } else {
                RoundStatus::Playing
            };
            assert_eq!(submission.status, expected);
        }
        assert_eq!(c.state().current_row(), 6);
    }

    #[tokio::test]
    async fn finished_round_ignores_input() {
        let mut c = controller("ai");
        play(&mut c, "ai").await;
        assert_eq!(c.status(), RoundStatus::Won);

        assert!(!c.add_letter('m'));
        assert!(!c.remove_letter());
        assert_eq!(c.submit_guess(&AcceptAll).await, Ok(None));
        assert_eq!(c.state().current_row(), 1);
    }

    #[test]
    fn submitting_blocks_input_and_overlapping_submits() {
        let mut c = controller("cuda");
        type_word(&mut c, "code");

        let word = c.begin_submit().unwrap();
        assert_eq!(word.text(), "CODE");
        assert_eq!(c.status(), RoundStatus::Submitting);

        assert!(c.begin_submit().is_none());
        assert!(!c.add_letter('x'));
        assert!(!c.remove_letter());
        assert_eq!(c.state().current_guess(), "CODE");

        let submission = c.complete_submit(Ok(true)).unwrap().unwrap();
        assert_eq!(submission.record.word, word);
        assert_eq!(c.status(), RoundStatus::Playing);
    }

    #[test]
    fn complete_without_begin_is_ignored() {
        let mut c = controller("cuda");
        assert_eq!(c.complete_submit(Ok(true)), Ok(None));
        assert_eq!(c.state().current_row(), 0);
    }

    #[test]
    fn abort_submit_restores_playing() {
        let mut c = controller("cuda");
        type_word(&mut c, "code");
        c.begin_submit().unwrap();

        c.abort_submit();
        assert_eq!(c.status(), RoundStatus::Playing);
        assert_eq!(c.state().current_guess(), "CODE");
        assert_eq!(c.complete_submit(Ok(true)), Ok(None));
    }

    #[tokio::test]
    async fn hints_are_monotonic_across_guesses() {
        let mut c = controller("train");
        play(&mut c, "token").await;
        assert_eq!(c.hints().get('T'), Some(Verdict::Correct));

        play(&mut c, "night").await;
        assert_eq!(c.hints().get('T'), Some(Verdict::Correct));
        assert_eq!(c.hints().get('N'), Some(Verdict::Correct));
    }

    #[tokio::test]
    async fn reset_clears_board_and_hints() {
        let mut c = controller("model");
        play(&mut c, "token").await;
        type_word(&mut c, "ag");

        c.reset_round(Word::new("python").unwrap());
        assert_eq!(c.state().word_length(), 6);
        assert!(c.state().guesses().is_empty());
        assert!(c.state().current_guess().is_empty());
        assert!(c.hints().is_empty());
        assert_eq!(c.status(), RoundStatus::Playing);
        assert_eq!(c.state().max_attempts(), 6);
    }

    #[test]
    fn reset_during_submission_discards_it() {
        let mut c = controller("cuda");
        type_word(&mut c, "code");
        c.begin_submit().unwrap();

        c.reset_round(Word::new("rust").unwrap());
        assert_eq!(c.status(), RoundStatus::Playing);
        assert_eq!(c.complete_submit(Ok(true)), Ok(None));
    }

    #[tokio::test]
    async fn observer_sees_round_events() {
        let (tx, rx) = mpsc::channel();
        let mut c = controller("ai").with_observer(tx);

        type_word(&mut c, "ml");
        c.remove_letter();
        c.add_letter('l');
        c.submit_guess(&Rejecting).await.unwrap_err();
        c.remove_letter();
        c.remove_letter();
        type_word(&mut c, "ai");
        c.submit_guess(&AcceptAll).await.unwrap();

        let events: Vec<RoundEvent> = rx.try_iter().collect();
        let ai = Word::new("ai").unwrap();
        assert_eq!(events[0], RoundEvent::LetterAdded('M'));
        assert!(events.contains(&RoundEvent::GuessRejected(Word::new("ml").unwrap())));
        assert!(events.contains(&RoundEvent::SubmitStarted(ai)));
        assert_eq!(events.last(), Some(&RoundEvent::Won { attempts: 1 }));
    }

    #[tokio::test]
    async fn observer_sees_loss_and_warning() {
        let (tx, rx) = mpsc::channel();
        let config = GameConfig {
            max_attempts: 1,
            ..GameConfig::default()
        };
        let mut c = TurnController::new(Word::new("cuda").unwrap(), &config).with_observer(tx);

        type_word(&mut c, "code");
        c.submit_guess(&Broken).await.unwrap();

        let events: Vec<RoundEvent> = rx.try_iter().collect();
        assert!(
            events
                .iter()
                .any(|e| matches!(e, RoundEvent::Warning(Warning::ValidatorUnavailable { .. })))
        );
        assert_eq!(
            events.last(),
            Some(&RoundEvent::Lost {
                target: Word::new("cuda").unwrap()
            })
        );
    }
}
