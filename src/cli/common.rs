//! Common helper functions shared across CLI commands
//!
//! This module provides shared functionality for resolving the rule chain,
//! reading candidate names, and choosing output settings.

use crate::cli::args::{ColorChoice, OutputFormat, RuleSource};
use crate::config::{ColorOption, Config, OutputConfig};
use crate::error::{ConfigError, FilterError};
use crate::filter::{Filter, FilterBuilder};
use std::io::{self, BufRead, IsTerminal};

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_REJECTED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;
pub const EXIT_PARSE_ERROR: i32 = 3;

/// Error type shared by all commands
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid rules: {0}")]
    Rules(#[from] FilterError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CommandError {
    /// Exit code for this error
    ///
    /// Malformed rules and malformed configuration contents map to
    /// `EXIT_PARSE_ERROR`. Unreadable files and unknown filter names are
    /// `EXIT_ERROR`.
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandError::Rules(_) => EXIT_PARSE_ERROR,
            CommandError::Config(
                ConfigError::Parse(_) | ConfigError::Validation(_) | ConfigError::Filter { .. },
            ) => EXIT_PARSE_ERROR,
            CommandError::Config(ConfigError::Io(_) | ConfigError::UnknownFilter(_)) => EXIT_ERROR,
            CommandError::Io(_) => EXIT_ERROR,
        }
    }
}

/// A resolved chain plus the output settings that came with it
#[derive(Debug)]
pub struct Resolved {
    pub filter: Filter,
    pub output: OutputConfig,
}

/// Build the filter described by `source`
///
/// `--rules` is parsed directly; `--filter` loads the configuration file
/// and builds the named filter from it.
pub fn resolve_filter(source: &RuleSource) -> Result<Resolved, CommandError> {
    if let Some(rules) = &source.rules {
        let filter = FilterBuilder::parse_with(rules, source.syntax)?.build();
        tracing::info!(rules = filter.len(), syntax = %source.syntax, "parsed rules");
        return Ok(Resolved {
            filter,
            output: OutputConfig::default(),
        });
    }

    let name = source.filter.as_deref().unwrap_or_default();
    let config = load_config(source)?;
    let filter = config.filter(name)?;
    tracing::info!(filter = name, rules = filter.len(), "loaded filter from configuration");

    Ok(Resolved {
        filter,
        output: config.output,
    })
}

fn load_config(source: &RuleSource) -> Result<Config, ConfigError> {
    if !source.config.exists() {
        return Err(ConfigError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} not found", source.config.display()),
        )));
    }

    Config::load(&source.config)
}

/// Names given on the command line, or one per line from `reader`
///
/// Lines are trimmed and blank lines skipped.
pub fn collect_names<R: BufRead>(names: &[String], reader: R) -> io::Result<Vec<String>> {
    if !names.is_empty() {
        return Ok(names.to_vec());
    }

    let mut collected = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            collected.push(trimmed.to_string());
        }
    }

    tracing::debug!(count = collected.len(), "read names from stdin");
    Ok(collected)
}

/// Names from the command line or stdin
pub fn read_names(names: &[String]) -> io::Result<Vec<String>> {
    let stdin = io::stdin();
    collect_names(names, stdin.lock())
}

/// Output format: command-line flag first, then the config file
pub fn output_format(flag: Option<OutputFormat>, output: &OutputConfig) -> OutputFormat {
    flag.unwrap_or(match output.format {
        crate::config::OutputFormat::Human => OutputFormat::Human,
        crate::config::OutputFormat::Jsonl => OutputFormat::Jsonl,
    })
}

/// Color choice: command-line flag first, then the config file
///
/// `auto` only enables color when stdout is a terminal.
pub fn color_choice(flag: Option<ColorChoice>, output: &OutputConfig) -> termcolor::ColorChoice {
    let choice = flag.unwrap_or(match output.color {
        ColorOption::Auto => ColorChoice::Auto,
        ColorOption::Always => ColorChoice::Always,
        ColorOption::Never => ColorChoice::Never,
    });

    match choice {
        ColorChoice::Always => termcolor::ColorChoice::Always,
        ColorChoice::Never => termcolor::ColorChoice::Never,
        ColorChoice::Auto if io::stdout().is_terminal() => termcolor::ColorChoice::Auto,
        ColorChoice::Auto => termcolor::ColorChoice::Never,
    }
}
