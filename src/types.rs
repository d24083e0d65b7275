#![forbid(unsafe_code)]

//! Core value types shared by rules, configuration and the CLI

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a rule admits or rejects the names its pattern matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Include,
    Exclude,
}

impl Polarity {
    /// The single-character marker used in rule strings
    pub fn marker(self) -> char {
        match self {
            Polarity::Include => '+',
            Polarity::Exclude => '-',
        }
    }

    /// Inverse of [`Polarity::marker`]
    pub fn from_marker(c: char) -> Option<Self> {
        match c {
            '+' => Some(Polarity::Include),
            '-' => Some(Polarity::Exclude),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Polarity::Include => "include",
            Polarity::Exclude => "exclude",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the pattern text of a rule string is interpreted
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Syntax {
    /// Pattern text is a regular expression matched against the whole name
    #[default]
    Regex,
    /// Pattern text is a dotted package name; everything below it matches
    Packages,
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Syntax::Regex => f.write_str("regex"),
            Syntax::Packages => f.write_str("packages"),
        }
    }
}
