// ============================================================================
// clipdur-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Core Error Types
//
// This module defines the error type shared by the core library and the CLI.
// Every failure in clipdur is fatal for the run, so the variants only need to
// carry enough context for a useful message on stderr.
//
// KEY COMPONENTS:
// - CoreError: Enum of all failure categories
// - CoreResult: Result alias used throughout the workspace
// - Helper constructors for external command failures

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors produced while reading input, probing files, or talking to the terminal.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, io::Error),

    #[error("Command '{0}' failed with status {1}: {2}")]
    CommandFailed(String, ExitStatus, String),

    #[error("Failed to parse JSON output: {0}")]
    JsonParseError(String),

    #[error("Failed to parse ffprobe output: {0}")]
    FfprobeParse(String),

    #[error("Standard input is not a terminal")]
    NotATerminal,

    #[error("{0}")]
    OperationFailed(String),
}

/// Result type for clipdur operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Builds a `CoreError::CommandStart` for a command that could not be spawned.
pub fn command_start_error(cmd: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandStart(cmd.into(), err)
}

/// Builds a `CoreError::CommandFailed` for a command that exited unsuccessfully.
pub fn command_failed_error(
    cmd: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed(cmd.into(), status, stderr.into().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_start_error_message() {
        let err = command_start_error(
            "ffprobe",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(
            err.to_string(),
            "Failed to start command 'ffprobe': no such file"
        );
    }

    #[test]
    fn test_command_failed_error_trims_stderr() {
        let err = command_failed_error("ffprobe", ExitStatus::default(), "  bad input\n");
        match err {
            CoreError::CommandFailed(cmd, _, stderr) => {
                assert_eq!(cmd, "ffprobe");
                assert_eq!(stderr, "bad input");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
