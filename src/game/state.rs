//! Round state
//!
//! Everything about one round that the controller owns and the UI reads.

use crate::core::{Feedback, Word};
use std::fmt;

/// Where a round is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundStatus {
    /// Accepting letters
    Playing,
    /// A guess is being validated; input is ignored
    Submitting,
    Won,
    Lost,
}

impl RoundStatus {
    /// Won or lost
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Playing => "playing",
            Self::Submitting => "submitting",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// A submitted guess and its verdicts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub feedback: Feedback,
}

/// State of a single round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    target: Word,
    guesses: Vec<GuessRecord>,
    current_guess: String,
    max_attempts: usize,
    status: RoundStatus,
}

impl RoundState {
    pub(crate) fn new(target: Word, max_attempts: usize) -> Self {
        Self {
            target,
            guesses: Vec::with_capacity(max_attempts),
            current_guess: String::new(),
            max_attempts: max_attempts.max(1),
            status: RoundStatus::Playing,
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Length every guess in this round must have
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.len()
    }

    /// Scored guesses so far, oldest first
    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    /// Letters typed for the next guess
    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current_guess
    }

    /// Index of the row being filled; always equals the number of scored guesses
    #[must_use]
    pub fn current_row(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        self.max_attempts.saturating_sub(self.guesses.len())
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: RoundStatus) {
        self.status = status;
    }

    pub(crate) fn current_guess_mut(&mut self) -> &mut String {
        &mut self.current_guess
    }

    /// Append a scored guess and recompute the status
    pub(crate) fn push_guess(&mut self, record: GuessRecord) -> RoundStatus {
        let solved = record.feedback.is_solved();
        self.guesses.push(record);
        self.current_guess.clear();

        self.status = if solved {
            RoundStatus::Won
        } else if self.guesses.len() >= self.max_attempts {
            RoundStatus::Lost
        } else {
            RoundStatus::Playing
        };
        self.status
    }
}
