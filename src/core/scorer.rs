//! Guess scoring
//!
//! Implements the two-pass, multiset-aware comparison of a guess against the
//! target word.

use super::{Feedback, Verdict, Word};
use thiserror::Error;

/// Error raised when a guess cannot be compared with the target
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("guess has {guess} letters but target has {target}")]
    LengthMismatch { guess: usize, target: usize },
}

/// Score `guess` against `target`
///
/// # Algorithm
/// 1. Count each letter of the target
/// 2. First pass: mark exact matches correct and consume their counts
/// 3. Second pass, left to right: mark remaining letters present while counts
///    last, absent otherwise
///
/// Exact matches consume counts before any present claim, so a letter can
/// never receive more non-absent verdicts than the target holds copies of it.
///
/// # Errors
/// Returns `ScoreError::LengthMismatch` if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_ai::core::{score, Verdict, Word};
///
/// let guess = Word::new("modes").unwrap();
/// let target = Word::new("model").unwrap();
/// let feedback = score(&guess, &target).unwrap();
///
/// assert_eq!(feedback.verdicts()[4], Verdict::Absent);
/// assert_eq!(feedback.count_correct(), 4);
/// ```
pub fn score(guess: &Word, target: &Word) -> Result<Feedback, ScoreError> {
    if guess.len() != target.len() {
        return Err(ScoreError::LengthMismatch {
            guess: guess.len(),
            target: target.len(),
        });
    }

    let mut result = vec![Verdict::Absent; guess.len()];
    let mut remaining = target.letter_counts();

    // First pass: exact position matches
    for (i, (&g, &t)) in guess.letters().iter().zip(target.letters()).enumerate() {
        if g == t {
            result[i] = Verdict::Correct;
            if let Some(count) = remaining.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: present-but-misplaced, leftmost claims first
    for (i, &g) in guess.letters().iter().enumerate() {
        if result[i] == Verdict::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(&g)
            && *count > 0
        {
            result[i] = Verdict::Present;
            *count -= 1;
        }
    }

    Ok(Feedback::new(result))
}
