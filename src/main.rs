//! Kilo Search - Main entrypoint.
//!
//! Command line front end for the name index and the text analyzer. It loads
//! configuration, initializes logging and dispatches to a subcommand.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use kilo_search_lib::analysis::{sanitize, NgramTokenizer};
use kilo_search_lib::config::{ConfigLoader, KiloConfig, LogConfig, ENV_PREFIX};
use kilo_search_lib::data_structures::{NameIndex, UserName};
use kilo_search_lib::error::{
    report_error, set_error_reporter, ErrorContext, KiloError, KiloResult, TracingErrorReporter,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Kilo Search.
#[derive(Parser, Debug)]
#[clap(name = "Kilo Search", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Suggest full names whose first or last name starts with a prefix
    Suggest {
        /// Roster file with one "First Last" name per line
        #[clap(short, long, value_parser)]
        names: PathBuf,

        /// Prefix typed by the user
        prefix: String,
    },

    /// Print the sanitized form of a text
    Sanitize {
        /// Text to sanitize
        text: String,
    },

    /// Print the n-gram frequencies of a text as JSON
    Ngrams {
        /// Text to tokenize
        text: String,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so command output stays clean.
fn init_logging(log: &LogConfig) -> KiloResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(log.source_location)
        .with_line_number(log.source_location)
        .with_writer(std::io::stderr);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    result.map_err(|e| KiloError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Reads a roster file into user names, skipping blank lines.
fn read_roster(path: &Path) -> KiloResult<Vec<UserName>> {
    let reader = BufReader::new(File::open(path)?);
    let mut users = Vec::new();
    for line in reader.lines() {
        if let Some(user) = UserName::parse_line(&line?) {
            users.push(user);
        }
    }
    Ok(users)
}

/// Runs one subcommand against a loaded configuration.
fn run(command: Command, config: &KiloConfig, loader: &ConfigLoader) -> KiloResult<()> {
    match command {
        Command::Suggest { names, prefix } => {
            let users = read_roster(&names)?;
            let index = NameIndex::new(config.index.clone());
            let indexed = index.rebuild(&users);
            info!(users = indexed, roster = %names.display(), "Name index built");

            for name in index.suggest(&prefix) {
                println!("{name}");
            }
            Ok(())
        }
        Command::Sanitize { text } => {
            println!("{}", sanitize(&text));
            Ok(())
        }
        Command::Ngrams { text } => {
            let tokenizer = NgramTokenizer::from(&config.analyzer);
            let grams = tokenizer.tokenize(&text);
            println!("{}", serde_json::to_string_pretty(&grams)?);
            Ok(())
        }
        Command::Validate => {
            info!("Validating configuration");
            loader.load()?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = KiloConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| KiloError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let config = match loader.load_or_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.log) {
        eprintln!("{e}");
        process::exit(1);
    }
    set_error_reporter(Arc::new(TracingErrorReporter));

    if let Err(e) = run(args.command, &config, &loader) {
        report_error(ErrorContext::new(e, "cli"));
        process::exit(1);
    }
}
