//! CLI argument parsing using clap

use crate::config::DEFAULT_CONFIG_FILE;
use crate::types::Syntax;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for namefilter commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

/// namefilter CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "namefilter")]
#[command(about = "Filter qualified names through ordered include/exclude rules")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Output coloring (defaults to the config file setting, then auto)
    #[arg(long, global = true)]
    pub color: Option<ColorChoice>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Where the rule chain comes from
#[derive(Args, Debug, Clone, PartialEq)]
pub struct RuleSource {
    /// Rule string, e.g. "+com\.example\..*,-.*Test"
    #[arg(
        long,
        allow_hyphen_values = true,
        required_unless_present = "filter",
        conflicts_with = "filter"
    )]
    pub rules: Option<String>,

    /// How pattern texts in --rules are interpreted
    #[arg(long, default_value = "regex")]
    pub syntax: Syntax,

    /// Name of a filter defined in the configuration file
    #[arg(long)]
    pub filter: Option<String>,

    /// Configuration file used with --filter
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

/// Available namefilter subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the names accepted by the chain
    Filter {
        #[command(flatten)]
        source: RuleSource,

        /// Names to test (read from stdin when omitted)
        names: Vec<String>,
    },

    /// Show the verdict and deciding rule for each name
    Explain {
        #[command(flatten)]
        source: RuleSource,

        /// Names to test (read from stdin when omitted)
        names: Vec<String>,

        /// Output format (defaults to the config file setting, then human)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Render the rule chain
    Show {
        #[command(flatten)]
        source: RuleSource,

        /// Output format (defaults to the config file setting, then human)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },
}
