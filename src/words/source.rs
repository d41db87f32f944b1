//! Word sources
//!
//! A word source produces the table targets are drawn from. Remote sources
//! can fail; `load_word_table` always returns something playable.

use super::{FileSource, WordTable};
use crate::remote::ChatClient;
use crate::warning::Warning;
use log::{info, warn};
use std::future::Future;
use thiserror::Error;

/// Why a word source could not produce a table
#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("word source unavailable: {0}")]
    Unavailable(String),
    #[error("word source returned no usable words")]
    Empty,
    #[error("word source returned no {0}-letter words")]
    MissingLength(usize),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed word list: {0}")]
    Parse(String),
    #[error("could not read word list: {0}")]
    Io(#[from] std::io::Error),
}

/// Anything that can produce a table of candidate words
pub trait WordSource {
    /// Fetch the word table
    fn fetch_words(&self) -> impl Future<Output = Result<WordTable, WordSourceError>> + Send;

    /// Short name used in logs and status lines
    fn name(&self) -> &'static str;
}

/// The compiled-in word list
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl WordSource for BuiltinSource {
    async fn fetch_words(&self) -> Result<WordTable, WordSourceError> {
        Ok(WordTable::builtin())
    }

    fn name(&self) -> &'static str {
        "builtin"
    }
}

/// Enum wrapper for all word source types
///
/// Allows runtime selection of the source while keeping static dispatch.
pub enum Source {
    Builtin(BuiltinSource),
    File(FileSource),
    Remote(ChatClient),
}

impl WordSource for Source {
    async fn fetch_words(&self) -> Result<WordTable, WordSourceError> {
        match self {
            Self::Builtin(s) => s.fetch_words().await,
            Self::File(s) => s.fetch_words().await,
            Self::Remote(s) => s.fetch_words().await,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Builtin(s) => s.name(),
            Self::File(s) => s.name(),
            Self::Remote(s) => WordSource::name(s),
        }
    }
}

/// Fetch words from `source`, falling back to the built-in table
///
/// An error, an empty result, or a table with no words of the required
/// `length` yields the built-in table together with a
/// `Warning::WordSourceUnavailable`.
pub async fn load_word_table<S: WordSource>(
    source: &S,
    length: Option<usize>,
) -> (WordTable, Option<Warning>) {
    let reason = match source.fetch_words().await {
        Ok(table) if table.is_empty() => WordSourceError::Empty.to_string(),
        Ok(table) => match length {
            Some(len) if table.words_of_length(len).is_empty() => {
                WordSourceError::MissingLength(len).to_string()
            }
            _ => {
                info!("loaded {} words from {} source", table.len(), source.name());
                return (table, None);
            }
        },
        Err(e) => e.to_string(),
    };

    warn!("{} word source failed: {reason}; using built-in words", source.name());
    (
        WordTable::builtin(),
        Some(Warning::WordSourceUnavailable { reason }),
    )
}
