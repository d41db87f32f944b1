//! Recoverable warnings surfaced to the player
//!
//! External failures never end a round. They are recovered locally and
//! reported as one of these.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The word validator failed; the guess was accepted anyway
    ValidatorUnavailable { word: String, reason: String },
    /// The word source failed; the built-in table is in use
    WordSourceUnavailable { reason: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidatorUnavailable { word, reason } => {
                write!(f, "Could not validate {word} ({reason}); accepted it")
            }
            Self::WordSourceUnavailable { reason } => {
                write!(f, "Word service unavailable ({reason}); using built-in words")
            }
        }
    }
}
