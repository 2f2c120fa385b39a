//! Formatting helpers for the report columns.
//!
//! Widths are counted in Unicode code points, not bytes and not display
//! cells, so wide glyphs may still misalign in some terminals.

use crate::config::{ELLIPSIS, INVALID_TIMECODE};

/// Largest duration, in seconds, that `format_hhmmss_ms` can represent.
pub const MAX_TIMECODE_SECONDS: f64 = u64::MAX as f64;

/// Side a padded column value is aligned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Right,
}

/// Formats seconds as `HH:MM:SS.mmm` (e.g., 3661.5 -> "01:01:01.500").
///
/// Milliseconds are rounded to the nearest value; a round-up to a full second
/// carries into seconds, minutes and hours. Hours are not capped at two
/// digits. Returns `"??:??:??.???"` for negative, non-finite or
/// out-of-range input.
#[must_use]
pub fn format_hhmmss_ms(seconds: f64) -> String {
    if seconds < 0.0 || !seconds.is_finite() || seconds >= MAX_TIMECODE_SECONDS {
        return INVALID_TIMECODE.to_string();
    }

    let whole = seconds.floor();
    let mut millis = ((seconds - whole) * 1000.0).round() as u64;
    let mut total_secs = whole as u64;
    if millis >= 1000 {
        total_secs += 1;
        millis = 0;
    }

    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}.{millis:03}")
}

/// Truncates or pads `s` to exactly `width` code points.
///
/// Values longer than `width` keep their first `width - 3` code points followed
/// by `"..."`. When `width` is too small to hold the ellipsis, the value is cut
/// to `width` code points instead. Shorter values are padded with spaces on the
/// side opposite to `align`.
#[must_use]
pub fn trunc_pad(s: &str, width: usize, align: Alignment) -> String {
    let len = s.chars().count();

    if len > width {
        let ellipsis_len = ELLIPSIS.chars().count();
        if width < ellipsis_len {
            return s.chars().take(width).collect();
        }
        let mut out: String = s.chars().take(width - ellipsis_len).collect();
        out.push_str(ELLIPSIS);
        return out;
    }

    let padding = " ".repeat(width - len);
    match align {
        Alignment::Right => padding + s,
        Alignment::Left => format!("{s}{padding}"),
    }
}

/// Whole minutes in `seconds`, rounded down.
#[must_use]
pub fn whole_minutes(seconds: f64) -> f64 {
    (seconds / 60.0).floor()
}

/// Formats whole minutes for the summary row (e.g., 125.0 seconds -> "2").
#[must_use]
pub fn format_whole_minutes(seconds: f64) -> String {
    format!("{}", whole_minutes(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hhmmss_ms() {
        assert_eq!(format_hhmmss_ms(0.0), "00:00:00.000");
        assert_eq!(format_hhmmss_ms(3661.5), "01:01:01.500");
        assert_eq!(format_hhmmss_ms(59.0), "00:00:59.000");
        assert_eq!(format_hhmmss_ms(60.25), "00:01:00.250");
        assert_eq!(format_hhmmss_ms(0.0004), "00:00:00.000");
        assert_eq!(format_hhmmss_ms(12.0625), "00:00:12.063");
    }

    #[test]
    fn test_format_hhmmss_ms_carry() {
        assert_eq!(format_hhmmss_ms(59.9996), "00:01:00.000");
        assert_eq!(format_hhmmss_ms(3599.9999), "01:00:00.000");
        assert_eq!(format_hhmmss_ms(10.9996), "00:00:11.000");
    }

    #[test]
    fn test_format_hhmmss_ms_long_durations() {
        assert_eq!(format_hhmmss_ms(360_000.0), "100:00:00.000");
    }

    #[test]
    fn test_format_hhmmss_ms_invalid() {
        assert_eq!(format_hhmmss_ms(-1.0), "??:??:??.???");
        assert_eq!(format_hhmmss_ms(f64::NAN), "??:??:??.???");
        assert_eq!(format_hhmmss_ms(f64::INFINITY), "??:??:??.???");
    }

    #[test]
    fn test_format_hhmmss_ms_out_of_range() {
        assert_eq!(format_hhmmss_ms(1e20), "??:??:??.???");
        assert_eq!(format_hhmmss_ms(MAX_TIMECODE_SECONDS), "??:??:??.???");
        assert_eq!(format_hhmmss_ms(1e15), "277777777777:46:40.000");
    }

    #[test]
    fn test_trunc_pad_left_and_right() {
        assert_eq!(trunc_pad("ab", 5, Alignment::Left), "ab   ");
        assert_eq!(trunc_pad("ab", 5, Alignment::Right), "   ab");
        assert_eq!(trunc_pad("abcde", 5, Alignment::Right), "abcde");
    }

    #[test]
    fn test_trunc_pad_truncates_with_ellipsis() {
        let out = trunc_pad("FILENAME:", 6, Alignment::Left);
        assert_eq!(out, "FIL...");
        assert_eq!(out.chars().count(), 6);
    }

    #[test]
    fn test_trunc_pad_counts_code_points() {
        assert_eq!(trunc_pad("ééé", 4, Alignment::Left), "ééé ");
        assert_eq!(trunc_pad("日本語のファイル", 5, Alignment::Left), "日本...");
    }

    #[test]
    fn test_trunc_pad_narrow_width() {
        assert_eq!(trunc_pad("FILENAME:", 2, Alignment::Left), "FI");
        assert_eq!(trunc_pad("FILENAME:", 0, Alignment::Right), "");
        assert_eq!(trunc_pad("abcd", 3, Alignment::Left), "...");
    }

    #[test]
    fn test_trunc_pad_round_trips_short_values() {
        for s in ["", "a", "clip.mkv", "ø ü"] {
            for align in [Alignment::Left, Alignment::Right] {
                let out = trunc_pad(s, 10, align);
                assert_eq!(out.chars().count(), 10);
                let stripped = match align {
                    Alignment::Left => out.trim_end_matches(' '),
                    Alignment::Right => out.trim_start_matches(' '),
                };
                assert_eq!(stripped, s);
            }
        }
    }

    #[test]
    fn test_format_whole_minutes() {
        assert_eq!(format_whole_minutes(0.0), "0");
        assert_eq!(format_whole_minutes(60.0), "1");
        assert_eq!(format_whole_minutes(119.99), "1");
        assert_eq!(format_whole_minutes(7200.0), "120");
    }
}
