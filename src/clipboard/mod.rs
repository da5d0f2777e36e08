use anyhow::{Context, Result};
use arboard::Clipboard;

/// Maximum clipboard size (10MB) accepted as a transcript source
const MAX_CLIPBOARD_SIZE: usize = 10 * 1024 * 1024;

/// Trait for clipboard operations (allows mocking in tests)
trait ClipboardProvider {
    fn get_text(&mut self) -> Result<String>;
}

/// Real clipboard implementation using arboard
struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn get_text(&mut self) -> Result<String> {
        self.clipboard.get_text().context("Failed to read clipboard contents")
    }
}

/// Validates captured clipboard text before it is handed to the parser
fn validate_clipboard_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        anyhow::bail!("Clipboard is empty - copy the transcript first");
    }

    if text.len() > MAX_CLIPBOARD_SIZE {
        anyhow::bail!(
            "Clipboard contents too large ({} bytes, max {})",
            text.len(),
            MAX_CLIPBOARD_SIZE
        );
    }

    Ok(())
}

/// Internal function for clipboard operations with dependency injection (test use)
#[cfg(test)]
fn read_with_provider(provider: &mut dyn ClipboardProvider) -> Result<String> {
    let text = provider.get_text()?;
    validate_clipboard_text(&text)?;
    Ok(text)
}

/// Read the transcript text from the system clipboard.
///
/// # Returns
/// * `Ok(text)` with the clipboard contents
/// * `Err` if clipboard is unavailable, empty, or oversized
///
/// # Errors
/// Returns error if:
/// - Clipboard holds no text (or only whitespace)
/// - Clipboard contents exceed 10MB
/// - System clipboard is unavailable (headless environment)
pub fn read_from_clipboard() -> Result<String> {
    let mut clipboard = SystemClipboard::new()?;
    let text = clipboard.get_text()?;
    validate_clipboard_text(&text)?;
    Ok(text)
}
