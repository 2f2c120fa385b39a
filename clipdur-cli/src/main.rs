//! Main entry point for the clipdur CLI application.
//!
//! This handles command-line argument parsing, logging setup, and the
//! report run. Any error is fatal: it is printed to stderr and the process
//! exits with status 1.

use clipdur_cli::logging::init_logging;
use clipdur_cli::{parse_cli, run_report};

use std::process;

fn main() {
    let cli_args = parse_cli();
    init_logging(cli_args.verbose);

    if let Err(e) = run_report(&cli_args) {
        log::debug!("Run failed: {:?}", e);
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
