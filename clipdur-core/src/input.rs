//! Clipboard text to ordered list of input paths.
//!
//! Lines are taken as-is: empty lines and duplicates are kept so that the
//! report mirrors exactly what was copied.

/// Normalizes CRLF to LF and splits the text into lines.
///
/// A trailing newline produces a trailing empty entry, and an empty text
/// produces a single empty entry.
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .split('\n')
        .map(str::to_string)
        .collect()
}

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Returns the last path component of `line`, used as the row label.
///
/// Trailing separators are ignored. An empty line yields `"."` and a line
/// made only of separators yields `"/"`.
#[must_use]
pub fn display_name(line: &str) -> String {
    if line.is_empty() {
        return ".".to_string();
    }

    let trimmed = line.trim_end_matches(is_separator);
    if trimmed.is_empty() {
        return "/".to_string();
    }

    match trimmed.rfind(is_separator) {
        // Separators are single-byte, so idx + 1 is a char boundary.
        Some(idx) => trimmed[idx + 1..].to_string(),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_mixed_endings() {
        assert_eq!(split_lines("a\r\nb\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_lines_trailing_newline() {
        assert_eq!(split_lines("a\r\n"), vec!["a", ""]);
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn test_split_lines_keeps_duplicates_and_blanks() {
        assert_eq!(split_lines("x\n\nx"), vec!["x", "", "x"]);
    }

    #[test]
    fn test_split_lines_lone_carriage_return_is_kept() {
        assert_eq!(split_lines("a\rb"), vec!["a\rb"]);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("/media/show/ep01.mkv"), "ep01.mkv");
        assert_eq!(display_name("ep01.mkv"), "ep01.mkv");
        assert_eq!(display_name(r"C:\Videos\clip.mp4"), "clip.mp4");
        assert_eq!(display_name("/media/show/"), "show");
        assert_eq!(display_name(""), ".");
        assert_eq!(display_name("///"), "/");
    }

    #[test]
    fn test_display_name_unicode() {
        assert_eq!(display_name("/tmp/évènement ✓.mov"), "évènement ✓.mov");
    }
}
