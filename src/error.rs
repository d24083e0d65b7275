//! Error types for namefilter
//!
//! Errors are grouped by the phase that produces them: compiling a single
//! pattern, parsing a rule string, and loading a configuration file.

/// A pattern text that is not a valid regular expression
#[derive(Debug, thiserror::Error)]
#[error("Invalid pattern '{pattern}': {source}")]
pub struct PatternError {
    /// The raw pattern text as supplied by the caller
    pub pattern: String,

    #[source]
    pub source: regex::Error,
}

/// A rule string that does not follow the `+pattern,-pattern` grammar
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    /// Token does not start with `+` or `-`
    #[error("Rule {position} ('{token}') should start with either + or -")]
    MissingPolarity { position: usize, token: String },

    /// Empty token between two commas
    #[error("Rule {position} is empty")]
    EmptyToken { position: usize },
}

/// Errors produced while turning rule text into a chain
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// A rule's pattern failed to compile
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// The rule string is malformed
    #[error(transparent)]
    Grammar(#[from] GrammarError),
}

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid TOML syntax or shape
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration parsed but is semantically invalid
    #[error("{0}")]
    Validation(String),

    /// Requested filter is not defined
    #[error("No filter named '{0}' in configuration")]
    UnknownFilter(String),

    /// A named filter's rules do not compile
    #[error("Filter '{name}': {source}")]
    Filter {
        name: String,
        #[source]
        source: FilterError,
    },
}
