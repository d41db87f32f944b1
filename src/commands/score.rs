//! Score command
//!
//! Scores one guess against a given target without playing a round.

use crate::core::{Feedback, Word, score};

/// Result of scoring a guess
#[derive(Debug)]
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn score_words(guess: &str, target: &str) -> Result<ScoreResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let target = Word::new(target).map_err(|e| format!("Invalid target: {e}"))?;
    let feedback = score(&guess, &target).map_err(|e| e.to_string())?;

    Ok(ScoreResult {
        guess,
        target,
        feedback,
    })
}
