//! Clipboard functionality

use arboard::Clipboard;

/// Set clipboard content
pub fn set_clipboard_content(text: &str) -> Result<(), String> {
    let mut clipboard =
        Clipboard::new().map_err(|e| format!("Failed to access clipboard: {}", e))?;

    clipboard
        .set_text(text)
        .map_err(|e| format!("Failed to write clipboard: {}", e))
}
