//! Text analyzer configuration module.

use super::{ConfigResult, Validate};
use crate::analysis::{DEFAULT_MAX_NGRAM, MAX_SUPPORTED_NGRAM};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Text analyzer configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Largest n-gram window counted (1 = unigrams only)
    pub max_ngram: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_ngram: DEFAULT_MAX_NGRAM,
        }
    }
}

impl Validate for AnalyzerConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_ngram == 0 || self.max_ngram > MAX_SUPPORTED_NGRAM {
            return Err(ConfigError::ValueOutOfRange {
                key: "analyzer.max_ngram".to_string(),
                message: format!("must be between 1 and {MAX_SUPPORTED_NGRAM}"),
            });
        }

        Ok(())
    }
}
