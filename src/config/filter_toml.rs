//! Parsing and validation for namefilter.toml configuration files

use crate::error::{ConfigError, FilterError};
use crate::filter::{Filter, FilterBuilder, compile_pattern};
use crate::rules::Rule;
use crate::types::{Polarity, Syntax};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Main configuration struct for namefilter.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// File metadata
    pub namefilter: NamefilterMeta,

    /// Named filter definitions
    #[serde(default)]
    pub filters: BTreeMap<String, FilterDefinition>,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading configuration");
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        tracing::debug!(filters = config.filters.len(), "configuration validated");
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        if self.namefilter.version != "1" {
            return Err(ConfigError::Validation(format!(
                "Unsupported configuration version '{}'. Expected '1'",
                self.namefilter.version
            )));
        }

        for (name, definition) in &self.filters {
            if !is_valid_filter_name(name) {
                return Err(ConfigError::Validation(format!(
                    "Invalid filter name '{}'. Use letters, digits, '-' and '_'",
                    name
                )));
            }

            // Compile once so broken patterns surface at load time
            definition.compile().map_err(|source| ConfigError::Filter {
                name: name.clone(),
                source,
            })?;
        }

        Ok(())
    }

    /// Build the named filter
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownFilter` if no filter has that name.
    pub fn filter(&self, name: &str) -> Result<Filter, ConfigError> {
        let definition = self
            .filters
            .get(name)
            .ok_or_else(|| ConfigError::UnknownFilter(name.to_string()))?;

        definition.compile().map_err(|source| ConfigError::Filter {
            name: name.to_string(),
            source,
        })
    }

    /// Build every configured filter, keyed by name
    pub fn build_all(&self) -> Result<BTreeMap<String, Filter>, ConfigError> {
        self.filters
            .keys()
            .map(|name| Ok((name.clone(), self.filter(name)?)))
            .collect()
    }
}

fn is_valid_filter_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Metadata section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamefilterMeta {
    /// Configuration version (must be "1")
    pub version: String,
}

/// One named filter
///
/// The rule string is applied first, then the structured `rule` entries in
/// file order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterDefinition {
    /// How pattern texts are interpreted
    #[serde(default)]
    pub syntax: Syntax,

    /// Rule string in `+pattern,-pattern` form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<String>,

    /// Structured rules
    #[serde(default, rename = "rule", skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<RuleEntry>,
}

impl FilterDefinition {
    /// Compile this definition into a frozen filter
    pub fn compile(&self) -> Result<Filter, FilterError> {
        let rules = self.rules.as_deref().unwrap_or("");
        let mut builder = FilterBuilder::parse_with(rules, self.syntax)?;

        for entry in &self.entries {
            let pattern = compile_pattern(&entry.pattern, self.syntax)?;
            builder.add(Rule::from_pattern(entry.polarity, pattern));
        }

        Ok(builder.build())
    }
}

/// A structured rule entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleEntry {
    pub polarity: Polarity,
    pub pattern: String,
}

/// Output configuration section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Color output setting
    #[serde(default)]
    pub color: ColorOption,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            color: ColorOption::Auto,
        }
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON Lines format
    Jsonl,
}

/// Color output options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    /// Auto-detect based on terminal capabilities
    #[default]
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}
