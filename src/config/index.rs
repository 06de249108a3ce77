//! Name index configuration module.
//!
//! This module defines settings for the autocomplete index built over user
//! names.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Name index configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexConfig {
    /// Maximum number of suggestions returned for one prefix
    pub max_suggestions: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            max_suggestions: 10,
        }
    }
}

impl Validate for IndexConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_suggestions == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "index.max_suggestions".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
