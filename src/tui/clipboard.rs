//! Clipboard helper for copying contact details
//!
//! Uses `arboard` for cross-platform support. The clipboard handle is
//! created fresh per copy so no resources are held between copies.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard
///
/// Fails when no display server is available (headless Linux) or on
/// permission errors; callers surface that in a notification.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}
