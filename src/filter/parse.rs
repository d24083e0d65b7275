#![forbid(unsafe_code)]

//! Rule string grammar
//!
//! A rule string is a comma-separated list of tokens. Each token is trimmed
//! and must start with `+` (include) or `-` (exclude); the rest of the token
//! is the pattern text:
//!
//! ```text
//! +com\.example\..*, -com\.example\.internal\..*
//! ```
//!
//! With [`Syntax::Packages`] the pattern text is a dotted package name and
//! matches everything inside that package.

use crate::error::{FilterError, GrammarError, PatternError};
use crate::filter::{Filter, FilterBuilder};
use crate::rules::{Pattern, Rule, with_trailing_separator};
use crate::types::{Polarity, Syntax};
use std::str::FromStr;

impl FilterBuilder {
    /// Parse a rule string whose pattern texts are regular expressions
    ///
    /// Empty or all-whitespace input yields an empty builder.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::Grammar` for a token without a `+`/`-` marker
    /// and `FilterError::Pattern` for a pattern that does not compile. No
    /// partial chain is returned.
    pub fn parse(text: &str) -> Result<Self, FilterError> {
        Self::parse_with(text, Syntax::Regex)
    }

    /// Parse a rule string whose pattern texts are package names
    ///
    /// `+com.example` includes `com.example.Foo` but not `com.exampleX.Foo`.
    pub fn parse_packages(text: &str) -> Result<Self, FilterError> {
        Self::parse_with(text, Syntax::Packages)
    }

    /// Parse an optional rule string; `None` yields an empty builder
    pub fn parse_optional(text: Option<&str>) -> Result<Self, FilterError> {
        match text {
            Some(text) => Self::parse(text),
            None => Ok(Self::new()),
        }
    }

    pub fn parse_with(text: &str, syntax: Syntax) -> Result<Self, FilterError> {
        parse_rules(text, syntax).map(FilterBuilder::from)
    }
}

impl FromStr for Filter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterBuilder::parse(s).map(FilterBuilder::build)
    }
}

/// Compile pattern text according to `syntax`
pub fn compile_pattern(text: &str, syntax: Syntax) -> Result<Pattern, PatternError> {
    match syntax {
        Syntax::Regex => Pattern::new(text),
        Syntax::Packages => Pattern::literal_prefix(&with_trailing_separator(text)),
    }
}

/// Parse a full rule string into rules
pub fn parse_rules(text: &str, syntax: Syntax) -> Result<Vec<Rule>, FilterError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut tokens: Vec<&str> = text.split(',').map(str::trim).collect();

    // Trailing empty tokens ("+a,") carry no rule
    while tokens.last().is_some_and(|t| t.is_empty()) {
        tokens.pop();
    }

    tokens
        .into_iter()
        .enumerate()
        .map(|(idx, token)| parse_token(token, idx + 1, syntax))
        .collect()
}

fn parse_token(token: &str, position: usize, syntax: Syntax) -> Result<Rule, FilterError> {
    let mut chars = token.chars();
    let marker = chars.next().ok_or(GrammarError::EmptyToken { position })?;

    let polarity =
        Polarity::from_marker(marker).ok_or_else(|| GrammarError::MissingPolarity {
            position,
            token: token.to_string(),
        })?;

    let pattern = compile_pattern(chars.as_str(), syntax)?;
    Ok(Rule::from_pattern(polarity, pattern))
}
