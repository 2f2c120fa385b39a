// clipdur-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone, Default)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "clipdur: Clipboard media duration report",
    long_about = "Reads media file paths from the clipboard (one per line), probes each \
                  file's duration with ffprobe, and prints per-file durations with totals."
)]
pub struct Cli {
    /// Enable debug logging on stderr (RUST_LOG takes precedence).
    #[arg(short, long)]
    pub verbose: bool,

    /// Exit right after the report instead of waiting for a keypress.
    /// Can also be set via the CLIPDUR_NO_PAUSE environment variable
    /// ("0", "false", "no", "off" or empty leave the pause on).
    #[arg(
        long,
        env = "CLIPDUR_NO_PAUSE",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub no_pause: bool,
}

/// Parses the process arguments, exiting with clap's usage error on failure.
pub fn parse_cli() -> Cli {
    Cli::parse()
}
