//! Word list loading from files
//!
//! One word per line; blank and invalid lines are skipped and words are
//! grouped by their own length.

use super::{WordSource, WordSourceError, WordTable};
use crate::core::Word;
use std::path::PathBuf;

/// Parse newline-separated words into a table
#[must_use]
pub fn parse_word_list(content: &str) -> WordTable {
    WordTable::from_words(content.lines().filter_map(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            None
        } else {
            Word::new(trimmed).ok()
        }
    }))
}

/// Word source backed by a plain-text file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileSource {
    async fn fetch_words(&self) -> Result<WordTable, WordSourceError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(parse_word_list(&content))
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::load_word_table;

    #[test]
    fn parse_word_list_groups_valid_words() {
        let table = parse_word_list("model\nTOKEN\n\n  agent  \nai\n");

        assert_eq!(table.len(), 4);
        assert_eq!(table.words_of_length(5).len(), 3);
        assert_eq!(table.words_of_length(2)[0].text(), "AI");
    }

    #[test]
    fn parse_word_list_skips_invalid() {
        let table = parse_word_list("model\nx\ngpt-4o\n# comment\nsuperlongword\nrust\n");

        // Only "model" and "rust" are valid 2-8 letter words
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn parse_word_list_empty() {
        assert!(parse_word_list("").is_empty());
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let source = FileSource::new("/nonexistent/words.txt");
        assert!(matches!(
            source.fetch_words().await,
            Err(WordSourceError::Io(_))
        ));
    }

    #[tokio::test]
    async fn file_source_reads_words() {
        let path = std::env::temp_dir().join(format!("wordle_ai_loader_{}.txt", std::process::id()));
        std::fs::write(&path, "cache\nindex\nquery\n").unwrap();

        let table = FileSource::new(&path).fetch_words().await.unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(table.words_of_length(5).len(), 3);
    }

    #[tokio::test]
    async fn missing_file_source_falls_back() {
        let source = FileSource::new("/nonexistent/words.txt");
        let (table, warning) = load_word_table(&source, None).await;

        assert_eq!(table, WordTable::builtin());
        assert!(warning.is_some());
    }
}
