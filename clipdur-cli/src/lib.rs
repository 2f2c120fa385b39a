// clipdur-cli/src/lib.rs
//
// Library portion of the clipdur CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod error;
pub mod logging;
pub mod terminal;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, parse_cli};
pub use commands::report::{print_report, run_report};
