//! Explain command implementation
//!
//! This module implements the `namefilter explain` command, which:
//! - Evaluates every name against the chain
//! - Reports the verdict and the rule that settled it
//! - Supports both human-readable and JSONL output formats

use crate::cli::args::{ColorChoice, OutputFormat, RuleSource};
use crate::cli::common::{
    CommandError, EXIT_REJECTED, EXIT_SUCCESS, color_choice, output_format, read_names,
    resolve_filter,
};
use crate::output::{HumanFormatter, JsonlFormatter, Verdict, tally};

/// Run the explain command
///
/// # Returns
///
/// Exit code:
/// - 0: Every name was accepted
/// - 1: At least one name was rejected
/// - 2: Error
/// - 3: Invalid rules or configuration
pub fn run_explain(
    source: &RuleSource,
    names: &[String],
    format: Option<OutputFormat>,
    color: Option<ColorChoice>,
) -> i32 {
    match run_explain_inner(source, names, format, color) {
        Ok(true) => EXIT_SUCCESS,
        Ok(false) => EXIT_REJECTED,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

/// Returns whether every name was accepted
fn run_explain_inner(
    source: &RuleSource,
    names: &[String],
    format: Option<OutputFormat>,
    color: Option<ColorChoice>,
) -> Result<bool, CommandError> {
    let resolved = resolve_filter(source)?;
    let names = read_names(names)?;

    let verdicts = Verdict::collect(&resolved.filter, &names);
    let (accepted, rejected) = tally(&verdicts);
    tracing::debug!(accepted, rejected, "explained names");

    match output_format(format, &resolved.output) {
        OutputFormat::Human => {
            let formatter = HumanFormatter::new(color_choice(color, &resolved.output));
            formatter.print_verdicts(&resolved.filter, &verdicts)?;
        }
        OutputFormat::Jsonl => {
            JsonlFormatter::new().print_verdicts(&resolved.filter, &verdicts);
        }
    }

    Ok(rejected == 0)
}
