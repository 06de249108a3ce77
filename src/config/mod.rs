//! Configuration module for Kilo Search.
//!
//! This module provides a configuration system that can load settings
//! from files (TOML, YAML, JSON) and override them with environment variables.
//! All configuration values are validated for correctness before use.

use std::path::{Path, PathBuf};

use crate::error::config::ConfigError;
use config::{Config, ConfigError as ExternalConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

pub mod analyzer;
pub mod index;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "KILO";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for Kilo Search.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct KiloConfig {
    /// Name index configuration
    pub index: index::IndexConfig,

    /// Text analyzer configuration
    pub analyzer: analyzer::AnalyzerConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl Validate for KiloConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.index.validate()?;
        self.analyzer.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            source_location: true,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader for Kilo Search.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from defaults, a file and environment variables.
    ///
    /// Later sources win: built-in defaults, then the file, then variables
    /// named `<PREFIX>__<SECTION>__<KEY>`.
    ///
    /// # Returns
    ///
    /// * `Ok(KiloConfig)` if the configuration was loaded successfully
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<KiloConfig> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&KiloConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                Some("yaml" | "yml") => FileFormat::Yaml,
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };
            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            ExternalConfigError::PathParse(path) => {
                ConfigError::ParseError(format!("Invalid path: {path:?}"))
            }
            ExternalConfigError::FileParse { uri, cause } => ConfigError::ParseError(format!(
                "Error parsing config file {}: {cause}",
                uri.unwrap_or_default()
            )),
            ExternalConfigError::Foreign(err) => ConfigError::ParseError(err.to_string()),
            ExternalConfigError::Frozen => {
                ConfigError::ParseError("Configuration is frozen".to_string())
            }
            ExternalConfigError::Message(msg) => ConfigError::ParseError(msg),
            ExternalConfigError::Type { .. } => {
                ConfigError::ParseError("Type conversion error".to_string())
            }
        })?;

        let kilo_config: KiloConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        kilo_config.validate()?;
        tracing::debug!(config = ?kilo_config, "Configuration loaded");

        Ok(kilo_config)
    }

    /// Loads the configuration, skipping the file when it does not exist.
    ///
    /// Environment overrides still apply on top of the defaults.
    pub fn load_or_default(&self) -> ConfigResult<KiloConfig> {
        match self.load() {
            Err(ConfigError::FileNotFound(path)) => {
                tracing::warn!("Configuration file not found at: {}", path.display());
                ConfigLoader::new(None::<&Path>, &self.env_prefix).load()
            }
            other => other,
        }
    }
}
