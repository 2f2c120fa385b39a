//! Command implementations for the CLI.

/// Module containing the report run: clipboard, probing, printing, pause.
pub mod report;
