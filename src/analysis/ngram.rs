// Copyright (c) 2025 Kilo Search Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! N-gram frequency extraction.
//!
//! Sanitized text is split on whitespace and every contiguous window of one
//! to `max_n` words is counted. Unigrams, bigrams and trigrams share one
//! map keyed by their space-joined text; keys of different shapes can never
//! collide because they contain a different number of spaces.

use hashbrown::HashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::trace;

use super::sanitize;

/// Window size used by [`ngram_tokenizer`].
pub const DEFAULT_MAX_NGRAM: usize = 3;

/// Largest window size an [`NgramTokenizer`] accepts.
pub const MAX_SUPPORTED_NGRAM: usize = 5;

/// Insertion-ordered map from n-gram text to occurrence count.
///
/// Iteration follows the order in which each distinct n-gram was first
/// counted. Equality is order-sensitive.
#[derive(Debug, Clone, Default)]
pub struct NgramFrequencies {
    /// Entries in first-occurrence order
    entries: Vec<(String, usize)>,

    /// Position of each key in `entries`
    positions: HashMap<String, usize>,
}

impl NgramFrequencies {
    /// Creates an empty frequency map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `gram`.
    pub(crate) fn record(&mut self, gram: String) {
        if let Some(&position) = self.positions.get(&gram) {
            self.entries[position].1 += 1;
            return;
        }
        self.positions.insert(gram.clone(), self.entries.len());
        self.entries.push((gram, 1));
    }

    /// Returns the count for `gram`, if it occurred.
    pub fn get(&self, gram: &str) -> Option<usize> {
        self.positions
            .get(gram)
            .map(|&position| self.entries[position].1)
    }

    /// Whether `gram` occurred at least once.
    pub fn contains_key(&self, gram: &str) -> bool {
        self.positions.contains_key(gram)
    }

    /// Number of distinct n-grams.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no n-gram was counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Iterates over `(n-gram, count)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(gram, count)| (gram.as_str(), *count))
    }

    /// Iterates over the distinct n-grams in first-occurrence order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(gram, _)| gram.as_str())
    }
}

impl PartialEq for NgramFrequencies {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for NgramFrequencies {}

impl IntoIterator for NgramFrequencies {
    type Item = (String, usize);
    type IntoIter = std::vec::IntoIter<(String, usize)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for NgramFrequencies {
    /// Builds a map from pairs, adding up counts of repeated keys.
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(pairs: I) -> Self {
        let mut frequencies = Self::new();
        for (gram, count) in pairs {
            let gram = gram.into();
            match frequencies.positions.get(&gram) {
                Some(&position) => frequencies.entries[position].1 += count,
                None => {
                    frequencies
                        .positions
                        .insert(gram.clone(), frequencies.entries.len());
                    frequencies.entries.push((gram, count));
                }
            }
        }
        frequencies
    }
}

impl Serialize for NgramFrequencies {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (gram, count) in &self.entries {
            map.serialize_entry(gram, count)?;
        }
        map.end()
    }
}

/// Counts word n-grams of every size from 1 up to `max_n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NgramTokenizer {
    max_n: usize,
}

impl NgramTokenizer {
    /// Creates a tokenizer counting windows of 1 to `max_n` words.
    ///
    /// `max_n` is clamped to `1..=MAX_SUPPORTED_NGRAM`.
    pub fn new(max_n: usize) -> Self {
        Self {
            max_n: max_n.clamp(1, MAX_SUPPORTED_NGRAM),
        }
    }

    /// The largest window size counted.
    pub fn max_n(&self) -> usize {
        self.max_n
    }

    /// Sanitizes `text` and counts its n-grams.
    ///
    /// All unigrams are recorded first in reading order, then all bigrams,
    /// and so on. A text of `L` words yields `L - n + 1` windows of size `n`
    /// (none when `L < n`).
    pub fn tokenize(&self, text: &str) -> NgramFrequencies {
        let sanitized = sanitize(text);
        let words: Vec<&str> = sanitized.split_whitespace().collect();

        let mut frequencies = NgramFrequencies::new();
        for n in 1..=self.max_n {
            for window in words.windows(n) {
                frequencies.record(window.join(" "));
            }
        }

        trace!(
            words = words.len(),
            distinct = frequencies.len(),
            max_n = self.max_n,
            "Counted n-grams"
        );
        frequencies
    }
}

impl Default for NgramTokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_NGRAM)
    }
}

/// Counts unigrams, bigrams and trigrams of `text`.
///
/// # Example
///
/// ```
/// use kilo_search_lib::analysis::ngram_tokenizer;
///
/// let grams = ngram_tokenizer("how about them how");
/// assert_eq!(grams.get("how"), Some(2));
/// assert_eq!(grams.get("about them how"), Some(1));
/// assert_eq!(grams.len(), 8);
/// ```
pub fn ngram_tokenizer(text: &str) -> NgramFrequencies {
    NgramTokenizer::default().tokenize(text)
}
