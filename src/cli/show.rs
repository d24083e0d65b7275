//! Show command implementation
//!
//! This module implements the `namefilter show` command, which renders the
//! resolved chain in evaluation order.

use crate::cli::args::{ColorChoice, OutputFormat, RuleSource};
use crate::cli::common::{
    CommandError, EXIT_SUCCESS, color_choice, output_format, resolve_filter,
};
use crate::output::{HumanFormatter, JsonlFormatter};

/// Run the show command
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 2: Error
/// - 3: Invalid rules or configuration
pub fn run_show(
    source: &RuleSource,
    format: Option<OutputFormat>,
    color: Option<ColorChoice>,
) -> i32 {
    match run_show_inner(source, format, color) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run_show_inner(
    source: &RuleSource,
    format: Option<OutputFormat>,
    color: Option<ColorChoice>,
) -> Result<(), CommandError> {
    let resolved = resolve_filter(source)?;

    match output_format(format, &resolved.output) {
        OutputFormat::Human => {
            let formatter = HumanFormatter::new(color_choice(color, &resolved.output));
            formatter.print_chain(&resolved.filter)?;
        }
        OutputFormat::Jsonl => JsonlFormatter::new().print_chain(&resolved.filter),
    }

    Ok(())
}
