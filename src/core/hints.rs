//! Keyboard hint aggregation
//!
//! Tracks the best verdict seen for each letter across a round's guesses.

use super::{Feedback, Verdict, Word};
use rustc_hash::FxHashMap;

/// Letter → best verdict seen so far this round
///
/// Hints only ever move up in priority (`Absent < Present < Correct`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardHints {
    hints: FxHashMap<u8, Verdict>,
}

impl KeyboardHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a scored guess into the hint map, never downgrading a letter
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &verdict) in guess.letters().iter().zip(feedback.verdicts()) {
            self.hints
                .entry(letter)
                .and_modify(|best| *best = (*best).max(verdict))
                .or_insert(verdict);
        }
    }

    /// Best verdict seen for a letter, if it has been guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Verdict> {
        let letter = u8::try_from(letter.to_ascii_uppercase()).ok()?;
        self.hints.get(&letter).copied()
    }

    /// Number of letters with a hint
    #[must_use]
    pub fn len(&self) -> usize {
        self.hints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }

    /// Forget every hint
    pub fn clear(&mut self) {
        self.hints.clear();
    }
}
