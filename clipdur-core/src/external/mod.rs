// ============================================================================
// clipdur-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with ffprobe
//
// This module encapsulates the interaction with the external ffprobe tool
// behind the `DurationProber` trait, so the report printer can be driven by
// a fake prober in tests.
//
// KEY COMPONENTS:
// - DurationProber: Trait mapping a path to a duration in seconds
// - FfprobeDurationProber: Implementation using the ffprobe crate
// - Dependency checking for the ffprobe binary

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult, command_start_error};

// ---- Standard library imports ----
use std::io;
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Contains the prober trait and its ffprobe-backed implementation
pub mod ffprobe_executor;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffprobe_executor::{DurationProber, FfprobeDurationProber, parse_duration_field};

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks that an external command can be started by running it with `-version`.
///
/// Only the ability to spawn the process is checked; the exit status is ignored.
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {}", cmd_name);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{}' not found.", cmd_name);
            Err(CoreError::OperationFailed(format!(
                "Required tool '{cmd_name}' was not found on PATH"
            )))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{}': {}", cmd_name, e);
            Err(command_start_error(cmd_name, e))
        }
    }
}
