//! namefilter CLI entry point

use clap::Parser;
use namefilter::cli::{Command, args::Cli};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match cli.command {
        Command::Filter { source, names } => namefilter::cli::filter::run_filter(&source, &names),
        Command::Explain {
            source,
            names,
            format,
        } => namefilter::cli::explain::run_explain(&source, &names, format, cli.color),
        Command::Show { source, format } => {
            namefilter::cli::show::run_show(&source, format, cli.color)
        }
    };

    process::exit(exit_code);
}

/// Log to stderr; `RUST_LOG` overrides the level picked by `-v`
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
