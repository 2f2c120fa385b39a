// ============================================================================
// clipdur-cli/src/terminal.rs
// ============================================================================
//
// TERMINAL: Exit pause
//
// Keeps the console window open after the report until a key is pressed.
// Raw mode is held by a guard so the previous terminal mode is restored on
// every exit path.

use crate::error::{CliErrorContext, CliResult};
use clipdur_core::CoreError;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io::{self, IsTerminal, Read};

/// Holds the terminal in raw mode until dropped.
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub fn enable() -> CliResult<Self> {
        enable_raw_mode().cli_context("Failed to enable raw mode")?;
        log::debug!("Terminal switched to raw mode");
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        match disable_raw_mode() {
            Ok(()) => log::debug!("Terminal mode restored"),
            Err(e) => log::warn!("Failed to restore terminal mode: {}", e),
        }
    }
}

/// Blocks until a single byte is read from stdin.
///
/// Returns `CoreError::NotATerminal` without blocking when stdin is not a
/// terminal.
pub fn wait_for_any_key() -> CliResult<()> {
    let mut stdin = io::stdin();
    if !stdin.is_terminal() {
        return Err(CoreError::NotATerminal);
    }

    let read = {
        let _guard = RawModeGuard::enable()?;
        let mut buf = [0u8; 1];
        stdin.read(&mut buf)
    };

    read.map(|_| ()).cli_context("Failed to read keypress from stdin")
}
