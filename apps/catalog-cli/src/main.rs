//! # Catalog Entry Point
//!
//! Parses arguments and hands off to [`catalog_cli::run`]. Errors are printed
//! to stderr and mapped to a non-zero exit status.

use std::process::ExitCode;

use clap::Parser;

use catalog_cli::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    catalog_cli::init_tracing();

    match catalog_cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
