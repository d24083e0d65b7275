#![forbid(unsafe_code)]

//! namefilter: ordered include/exclude rule chains for qualified names
//!
//! A chain is an ordered list of regular-expression rules, each tagged as
//! include or exclude. The first rule sets the default stance (a leading
//! exclude admits everything not excluded, a leading include rejects
//! everything not included) and a matching exclude always wins.
//!
//! ```
//! use namefilter::Filter;
//!
//! let filter: Filter = "+com\\.example\\..*, -com\\.example\\.internal\\..*".parse()?;
//! assert!(filter.accepts("com.example.Api"));
//! assert!(!filter.accepts("com.example.internal.Impl"));
//! assert!(!filter.accepts("org.other.Thing"));
//! # Ok::<(), namefilter::FilterError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod output;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, FilterError, GrammarError, PatternError};

// Re-export core domain types for convenient access
pub use filter::{Decision, Filter, FilterBuilder};
pub use rules::{Pattern, Rule};
pub use types::{Polarity, Syntax};
