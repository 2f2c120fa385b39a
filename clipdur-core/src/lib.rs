//! Core library for the clipdur media duration report.
//!
//! This crate splits clipboard text into media paths, probes each path's
//! duration with ffprobe, and writes an aligned report with totals.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use clipdur_core::{FfprobeDurationProber, write_report};
//!
//! let text = "/videos/intro.mkv\n/videos/main.mkv";
//! let mut stdout = std::io::stdout();
//! let totals = write_report(&FfprobeDurationProber::new(), text, &mut stdout).unwrap();
//! println!("{} files, {} minutes", totals.files, totals.whole_minutes());
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod formatting;
pub mod input;
pub mod report;

// Re-exports for public API
pub use error::{CoreError, CoreResult};
pub use external::{DurationProber, FfprobeDurationProber, check_dependency};
pub use formatting::{Alignment, format_hhmmss_ms, trunc_pad};
pub use input::{display_name, split_lines};
pub use report::{ReportRow, ReportTotals, write_report};
