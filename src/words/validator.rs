//! Word validators
//!
//! Decide whether a submitted guess counts as a word. The remote validator
//! can fail; what to do then is the controller's fallback policy.

use super::WordTable;
use crate::core::Word;
use crate::remote::ChatClient;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Why a validator could not give an answer
#[derive(Debug, Error)]
pub enum ValidatorError {
    #[error("validator unavailable: {0}")]
    Unavailable(String),
    #[error("validator timed out after {0:?}")]
    Timeout(Duration),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected response: {0}")]
    Protocol(String),
}

/// Anything that can judge whether a guess is an acceptable word
pub trait WordValidator {
    /// Check a candidate word
    fn validate(&self, word: &Word) -> impl Future<Output = Result<bool, ValidatorError>> + Send;
}

/// Accepts every well-formed word
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl WordValidator for AcceptAll {
    async fn validate(&self, _word: &Word) -> Result<bool, ValidatorError> {
        Ok(true)
    }
}

/// Accepts only words present in a table
#[derive(Debug, Clone)]
pub struct TableValidator {
    table: WordTable,
}

impl TableValidator {
    #[must_use]
    pub const fn new(table: WordTable) -> Self {
        Self { table }
    }
}

impl WordValidator for TableValidator {
    async fn validate(&self, word: &Word) -> Result<bool, ValidatorError> {
        Ok(self.table.contains(word))
    }
}

/// Enum wrapper for all validator types
///
/// Allows runtime selection of the validator while keeping static dispatch.
pub enum Validator {
    AcceptAll(AcceptAll),
    Table(TableValidator),
    Remote(ChatClient),
}

impl WordValidator for Validator {
    async fn validate(&self, word: &Word) -> Result<bool, ValidatorError> {
        match self {
            Self::AcceptAll(v) => v.validate(word).await,
            Self::Table(v) => v.validate(word).await,
            Self::Remote(v) => v.validate(word).await,
        }
    }
}

impl Validator {
    /// Short name used in status lines
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AcceptAll(_) => "accept-all",
            Self::Table(_) => "word list",
            Self::Remote(_) => "remote",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn accept_all_accepts() {
        let word = Word::new("zzzzz").unwrap();
        assert!(AcceptAll.validate(&word).await.unwrap());
    }

    #[tokio::test]
    async fn table_validator_checks_membership() {
        let validator = TableValidator::new(WordTable::builtin());
        assert!(validator.validate(&Word::new("tensor").unwrap()).await.unwrap());
        assert!(!validator.validate(&Word::new("qwerty").unwrap()).await.unwrap());
    }

    #[tokio::test]
    async fn validator_enum_dispatches() {
        let table = Validator::Table(TableValidator::new(WordTable::from_strs(&["RUST"])));
        assert!(table.validate(&Word::new("rust").unwrap()).await.unwrap());
        assert!(!table.validate(&Word::new("ruby").unwrap()).await.unwrap());
        assert_eq!(table.name(), "word list");

        let accept = Validator::AcceptAll(AcceptAll);
        assert!(accept.validate(&Word::new("ruby").unwrap()).await.unwrap());
    }
}
