//! Game word representation
//!
//! A Word is an uppercase ASCII string of 2 to 8 letters, fixed for a round.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Shortest word a round can be played with
pub const MIN_WORD_LEN: usize = 2;

/// Longest word a round can be played with
pub const MAX_WORD_LEN: usize = 8;

/// An uppercase word of 2-8 ASCII letters
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be 2-8 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters, got '{0}'")]
    InvalidCharacters(String),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is trimmed and uppercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is outside 2-8
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wordle_ai::core::Word;
    ///
    /// let word = Word::new("model").unwrap();
    /// assert_eq!(word.text(), "MODEL");
    ///
    /// assert!(Word::new("x").is_err());
    /// assert!(Word::new("gpt-4").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_ascii_uppercase();

        if !text.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters(text));
        }

        if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&text.len()) {
            return Err(WordError::InvalidLength(text.len()));
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters as bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: a Word has at least two letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Count of each letter in the word
    ///
    /// Used by the scorer to account for repeated letters.
    #[must_use]
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in self.letters() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
