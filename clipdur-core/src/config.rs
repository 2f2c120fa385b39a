//! Fixed labels and placeholders used by the report.
//!
//! clipdur has no configuration file; the report layout is fixed and these
//! constants are the only knobs.

/// Header label for the file name column.
pub const FILENAME_HEADER: &str = "FILENAME:";

/// Header label for the duration column.
pub const DURATION_HEADER: &str = "DURATION:";

/// Label of the summary row holding the floored total in minutes.
pub const TOTAL_MINUTES_LABEL: &str = "TOTAL MINUTES:";

/// Label of the summary row holding the formatted total.
pub const TOTAL_TIMECODE_LABEL: &str = "TOTAL HH:MM:SS.MS:";

/// Prefix of the diagnostic line echoing the clipboard text.
pub const INPUT_ECHO_PREFIX: &str = "INPUT:";

/// Column separator between the name and value columns.
pub const COLUMN_SEPARATOR: char = '\t';

/// Marker appended to truncated column values.
pub const ELLIPSIS: &str = "...";

/// Timecode printed for durations that cannot be represented.
pub const INVALID_TIMECODE: &str = "??:??:??.???";
