#![forbid(unsafe_code)]

//! Filter chains: build with [`FilterBuilder`], query with [`Filter`]

mod builder;
mod matcher;
mod parse;

pub use builder::FilterBuilder;
pub use matcher::{Decision, Filter};
pub use parse::{compile_pattern, parse_rules};

use crate::rules::Rule;
use std::fmt;

/// Render rules as `+src, -src, ...`
fn write_rules(f: &mut fmt::Formatter<'_>, rules: &[Rule]) -> fmt::Result {
    for (idx, rule) in rules.iter().enumerate() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", rule)?;
    }
    Ok(())
}
