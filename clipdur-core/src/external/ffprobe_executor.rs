//! FFprobe integration for reading media durations
//!
//! This module provides the `DurationProber` trait consumed by the report
//! printer, and its production implementation backed by the `ffprobe` crate.
use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use crate::formatting::MAX_TIMECODE_SECONDS;
use ffprobe::{FfProbeError, ffprobe};
use std::path::Path;

/// Anything that can map a media file path to its duration in seconds.
pub trait DurationProber {
    /// Returns the container duration of `path` in seconds.
    fn probe_duration(&self, path: &Path) -> CoreResult<f64>;
}

impl<P: DurationProber + ?Sized> DurationProber for &P {
    fn probe_duration(&self, path: &Path) -> CoreResult<f64> {
        (**self).probe_duration(path)
    }
}

/// `DurationProber` that runs the `ffprobe` binary found on `PATH`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FfprobeDurationProber;

impl FfprobeDurationProber {
    pub fn new() -> Self {
        Self
    }
}

impl DurationProber for FfprobeDurationProber {
    fn probe_duration(&self, path: &Path) -> CoreResult<f64> {
        log::debug!(
            "Running ffprobe (via crate) for duration on: {}",
            path.display()
        );
        match ffprobe(path) {
            Ok(metadata) => {
                let raw = metadata.format.duration.as_deref().ok_or_else(|| {
                    CoreError::FfprobeParse(format!(
                        "No format duration reported for {}",
                        path.display()
                    ))
                })?;
                parse_duration_field(raw).map_err(|e| {
                    log::error!("Unusable duration for {}: {e}", path.display());
                    e
                })
            }
            Err(err) => {
                log::error!("ffprobe failed for duration on {}: {:?}", path.display(), err);
                Err(map_ffprobe_error(err, "duration"))
            }
        }
    }
}

/// Parses ffprobe's stringified `format.duration` field (e.g. "1234.567000").
pub fn parse_duration_field(raw: &str) -> CoreResult<f64> {
    let seconds = raw.trim().parse::<f64>().map_err(|e| {
        CoreError::FfprobeParse(format!("Invalid duration value '{raw}': {e}"))
    })?;
    if seconds < 0.0 || !seconds.is_finite() || seconds >= MAX_TIMECODE_SECONDS {
        return Err(CoreError::FfprobeParse(format!(
            "Duration out of range: '{raw}'"
        )));
    }
    Ok(seconds)
}

fn map_ffprobe_error(err: FfProbeError, context: &str) -> CoreError {
    match err {
        FfProbeError::Io(io_err) => command_start_error(format!("ffprobe ({context})"), io_err),
        FfProbeError::Status(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            command_failed_error(format!("ffprobe ({context})"), output.status, stderr)
        }
        FfProbeError::Deserialize(err) => CoreError::JsonParseError(format!(
            "ffprobe {context} output deserialization: {err}"
        )),
        _ => CoreError::FfprobeParse(format!(
            "Unknown ffprobe error during {context}: {err:?}"
        )),
    }
}
