//! Configuration file parsing and validation

pub mod filter_toml;

pub use filter_toml::{
    ColorOption, Config, FilterDefinition, NamefilterMeta, OutputConfig, OutputFormat, RuleEntry,
};

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "namefilter.toml";
