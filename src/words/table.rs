//! Word table grouped by length

use super::builtin::BUILTIN_WORDS;
use crate::core::{MAX_WORD_LEN, MIN_WORD_LEN, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;

/// Candidate words keyed by length
///
/// Each bucket is sorted and de-duplicated, and every word in it has exactly
/// the bucket's length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordTable {
    by_length: BTreeMap<usize, Vec<Word>>,
}

impl WordTable {
    /// Build a table from any words, grouping them by their own length
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator<Item = Word>,
    {
        let mut by_length: BTreeMap<usize, Vec<Word>> = BTreeMap::new();
        for word in words {
            by_length.entry(word.len()).or_default().push(word);
        }
        for bucket in by_length.values_mut() {
            bucket.sort_unstable();
            bucket.dedup();
        }
        Self { by_length }
    }

    /// Build a table from raw strings, skipping anything that is not a valid word
    #[must_use]
    pub fn from_strs<S: AsRef<str>>(words: &[S]) -> Self {
        Self::from_words(words.iter().filter_map(|s| Word::new(s).ok()))
    }

    /// Build a table from a length-keyed mapping
    ///
    /// Entries whose length disagrees with their key are dropped.
    pub fn from_grouped<I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = (usize, Vec<S>)>,
        S: AsRef<str>,
    {
        Self::from_words(groups.into_iter().flat_map(|(len, words)| {
            words
                .into_iter()
                .filter_map(|s| Word::new(s).ok())
                .filter(move |w| w.len() == len)
                .collect::<Vec<_>>()
        }))
    }

    /// The compiled-in fallback table
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_strs(BUILTIN_WORDS)
    }

    /// Total number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_length.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_length.values().all(Vec::is_empty)
    }

    /// Words of a given length, sorted
    #[must_use]
    pub fn words_of_length(&self, len: usize) -> &[Word] {
        self.by_length.get(&len).map_or(&[], Vec::as_slice)
    }

    /// Lengths that have at least one word
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.by_length
            .iter()
            .filter(|(_, words)| !words.is_empty())
            .map(|(&len, _)| len)
    }

    /// Whether the table holds this word
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words_of_length(word.len()).binary_search(word).is_ok()
    }

    /// Pick a random target
    ///
    /// With `length` set, picks from that bucket only. Otherwise picks a random
    /// non-empty length first, then a word of that length, so short and long
    /// words are equally likely regardless of bucket sizes.
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R, length: Option<usize>) -> Option<&Word> {
        let len = match length {
            Some(len) if (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&len) => len,
            Some(_) => return None,
            None => {
                let lengths: Vec<usize> = self.lengths().collect();
                *lengths.choose(rng)?
            }
        };
        self.words_of_length(len).choose(rng)
    }
}
