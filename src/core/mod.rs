//! Core domain types for the game
//!
//! Words, verdicts, the scorer and keyboard hints. Everything here is pure and
//! synchronous.

mod feedback;
mod hints;
mod scorer;
mod word;

pub use feedback::{Feedback, Verdict};
pub use hints::KeyboardHints;
pub use scorer::{ScoreError, score};
pub use word::{MAX_WORD_LEN, MIN_WORD_LEN, Word, WordError};
