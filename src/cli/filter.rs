//! Filter command implementation
//!
//! This module implements the `namefilter filter` command, which prints every
//! accepted name, one per line, in input order.

use crate::cli::args::RuleSource;
use crate::cli::common::{CommandError, EXIT_SUCCESS, read_names, resolve_filter};
use crate::filter::Filter;
use std::io::{self, Write};

/// Run the filter command
///
/// # Returns
///
/// Exit code:
/// - 0: Success (including when nothing was accepted)
/// - 2: Error
/// - 3: Invalid rules or configuration
pub fn run_filter(source: &RuleSource, names: &[String]) -> i32 {
    match run_filter_inner(source, names) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run_filter_inner(source: &RuleSource, names: &[String]) -> Result<(), CommandError> {
    let resolved = resolve_filter(source)?;
    let names = read_names(names)?;

    let stdout = io::stdout();
    write_accepted(&mut stdout.lock(), &resolved.filter, &names)?;
    Ok(())
}

/// Write the names `filter` accepts, one per line
pub fn write_accepted<W: Write>(out: &mut W, filter: &Filter, names: &[String]) -> io::Result<()> {
    let accepted = filter.filter_names(names);
    tracing::debug!(
        total = names.len(),
        accepted = accepted.len(),
        "filtered names"
    );

    for name in accepted {
        writeln!(out, "{}", name)?;
    }
    out.flush()
}
