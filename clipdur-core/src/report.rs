// ============================================================================
// clipdur-core/src/report.rs
// ============================================================================
//
// REPORT: Aligned Duration Report
//
// This module turns the clipboard text into the printed report: an echo of
// the input, a header row, one row per line, and two summary rows. Rows are
// written as soon as each file has been probed.
//
// KEY COMPONENTS:
// - ReportRow: Label and duration of one probed line
// - ReportTotals: Running sum and its derived summary values
// - write_report: Drives the prober and writes the report

use crate::config::{
    COLUMN_SEPARATOR, DURATION_HEADER, FILENAME_HEADER, INPUT_ECHO_PREFIX, TOTAL_MINUTES_LABEL,
    TOTAL_TIMECODE_LABEL,
};
use crate::error::CoreResult;
use crate::external::DurationProber;
use crate::formatting::{
    Alignment, format_hhmmss_ms, format_whole_minutes, trunc_pad, whole_minutes,
};
use crate::input::{display_name, split_lines};

use std::io::Write;
use std::path::Path;

/// One probed input line.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    /// Base name of the path, used as the row label
    pub name: String,
    /// Probed duration in seconds
    pub duration_secs: f64,
}

impl ReportRow {
    pub fn timecode(&self) -> String {
        format_hhmmss_ms(self.duration_secs)
    }
}

/// Sum of all probed durations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReportTotals {
    pub seconds: f64,
    pub files: usize,
}

impl ReportTotals {
    fn add(&mut self, row: &ReportRow) {
        self.seconds += row.duration_secs;
        self.files += 1;
    }

    /// Total duration in minutes, rounded down.
    pub fn whole_minutes(&self) -> f64 {
        whole_minutes(self.seconds)
    }

    /// Total minutes as printed in the summary row.
    pub fn formatted_minutes(&self) -> String {
        format_whole_minutes(self.seconds)
    }

    /// Total duration as `HH:MM:SS.mmm`.
    pub fn formatted(&self) -> String {
        format_hhmmss_ms(self.seconds)
    }
}

/// Width of the name column: the longest base name among `lines`.
#[must_use]
pub fn name_column_width(lines: &[String]) -> usize {
    lines
        .iter()
        .map(|line| display_name(line).chars().count())
        .max()
        .unwrap_or(0)
}

fn write_columns<W: Write>(out: &mut W, left: &str, right: &str) -> CoreResult<()> {
    writeln!(out, "{left}{COLUMN_SEPARATOR}{right}")?;
    Ok(())
}

/// Probes every line of `clipboard_text` in order and writes the report to `out`.
///
/// The first probe error is returned immediately. Rows already written stay
/// in `out`; the failing row and the summary rows are not written.
pub fn write_report<P, W>(
    prober: &P,
    clipboard_text: &str,
    out: &mut W,
) -> CoreResult<ReportTotals>
where
    P: DurationProber + ?Sized,
    W: Write,
{
    writeln!(out, "{INPUT_ECHO_PREFIX} {clipboard_text:?}")?;
    writeln!(out)?;

    let lines = split_lines(clipboard_text);
    let width = name_column_width(&lines);
    log::debug!("Probing {} line(s), name column width {}", lines.len(), width);

    write_columns(out, &trunc_pad(FILENAME_HEADER, width, Alignment::Left), DURATION_HEADER)?;

    let mut totals = ReportTotals::default();
    for line in &lines {
        let duration_secs = prober.probe_duration(Path::new(line))?;
        let row = ReportRow {
            name: display_name(line),
            duration_secs,
        };
        log::debug!("{}: {} s", line, duration_secs);

        write_columns(out, &trunc_pad(&row.name, width, Alignment::Left), &row.timecode())?;
        totals.add(&row);
    }

    write_columns(
        out,
        &trunc_pad(TOTAL_MINUTES_LABEL, width, Alignment::Right),
        &totals.formatted_minutes(),
    )?;
    write_columns(
        out,
        &trunc_pad(TOTAL_TIMECODE_LABEL, width, Alignment::Right),
        &totals.formatted(),
    )?;
    out.flush()?;

    Ok(totals)
}
