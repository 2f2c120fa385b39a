// ============================================================================
// clipdur-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger setup for the CLI
//
// The report itself goes to stdout; log records go to stderr so they never
// interleave with the tab-separated columns.
//
// USAGE:
// - default: warnings and errors only
// - --verbose: debug records from clipdur-core and the CLI
// - RUST_LOG=...: overrides both

use log::LevelFilter;
use std::io::Write;

/// Maps the `--verbose` flag to a default log level.
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Initializes env_logger on stderr.
pub fn init_logging(verbose: bool) {
    let level = level_for(verbose);
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            let level_str = match record.level() {
                log::Level::Error => "ERROR",
                log::Level::Warn => "WARN ",
                log::Level::Info => "INFO ",
                log::Level::Debug => "DEBUG",
                log::Level::Trace => "TRACE",
            };
            writeln!(
                buf,
                "{} {} {}: {}",
                buf.timestamp(),
                level_str,
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .init();

    log::debug!("Logger initialized with level: {}", level);
}
