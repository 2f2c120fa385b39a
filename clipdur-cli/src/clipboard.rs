//! System clipboard access.

use crate::error::CliResult;
use arboard::Clipboard;
use clipdur_core::CoreError;

/// Returns the current text content of the system clipboard.
///
/// Fails with `CoreError::Clipboard` when no clipboard service is reachable
/// or the clipboard holds no text.
pub fn read_clipboard_text() -> CliResult<String> {
    let mut clipboard = Clipboard::new().map_err(|e| {
        CoreError::Clipboard(format!("Failed to access system clipboard: {e}"))
    })?;
    let text = clipboard
        .get_text()
        .map_err(|e| CoreError::Clipboard(format!("Failed to read clipboard text: {e}")))?;
    log::debug!("Read {} byte(s) from the clipboard", text.len());
    Ok(text)
}
