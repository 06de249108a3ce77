// Copyright (c) 2025 Kilo Search Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Text analysis for relevance ranking.
//!
//! This module is the tokenization stage in front of a TF-IDF style ranker:
//! raw user text is sanitized and broken into unigram, bigram and trigram
//! counts. The ranking formula itself lives with the consumer.
//!
//! Every function here is pure and can be called from any number of threads
//! without coordination.
//!
//! # Example
//!
//! ```
//! use kilo_search_lib::analysis::{ngram_tokenizer, sanitize};
//!
//! assert_eq!(sanitize("No, not NO!"), "no not no");
//!
//! let grams = ngram_tokenizer("No not no Not");
//! assert_eq!(grams.get("no not"), Some(2));
//! assert_eq!(grams.get("not no not"), Some(1));
//! ```

mod ngram;
mod sanitize;

pub use ngram::{
    ngram_tokenizer, NgramFrequencies, NgramTokenizer, DEFAULT_MAX_NGRAM, MAX_SUPPORTED_NGRAM,
};
pub use sanitize::{sanitize, sanitize_opt, APOSTROPHE};

use crate::config::analyzer::AnalyzerConfig;

impl From<&AnalyzerConfig> for NgramTokenizer {
    fn from(config: &AnalyzerConfig) -> Self {
        Self::new(config.max_ngram)
    }
}

#[cfg(test)]
mod tests;
