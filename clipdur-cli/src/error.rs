// ============================================================================
// clipdur-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Result alias and terminal error context
//
// The CLI shares CoreError with clipdur-core. The only extra need is to say
// which terminal step failed when crossterm or stdin returns an io::Error.

use clipdur_core::{CoreError, CoreResult};
use std::fmt;

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Prefixes an error with the step that failed, as `CoreError::OperationFailed`.
pub trait CliErrorContext<T> {
    fn cli_context<C: fmt::Display>(self, step: C) -> CliResult<T>;
}

impl<T, E> CliErrorContext<T> for Result<T, E>
where
    E: Into<CoreError>,
{
    fn cli_context<C: fmt::Display>(self, step: C) -> CliResult<T> {
        self.map_err(|e| CoreError::OperationFailed(format!("{step}: {}", e.into())))
    }
}
