#![forbid(unsafe_code)]

//! Rule definitions: compiled patterns and polarity-tagged rules

mod pattern;
mod rule;

// Re-export core types
pub use pattern::{
    Pattern, SEPARATOR, namespace_of, prefix_regex, with_trailing_separator,
};
pub use rule::{CustomRule, NamePredicate, Rule};
