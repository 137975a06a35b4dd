//! Clipboard transports.
//!
//! 1. OSC 52 - terminal clipboard escape sequence (works over SSH)
//! 2. System clipboard via the `arboard` crate
//!
//! Which ones are tried is decided by the configured `ClipboardBackend`; the runtime
//! drives the order so the system write can run off the render thread.

use std::io::Write;

use base64::Engine;

/// Clipboard operation errors.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// OSC 52 write failed.
    #[error("OSC 52 clipboard failed: {0}")]
    Osc52(String),
    /// System clipboard operation failed.
    #[error("system clipboard failed: {0}")]
    System(String),
}

/// Stateless clipboard access.
pub struct Clipboard;

impl Clipboard {
    /// Writes `text` to the clipboard with the OSC 52 escape sequence.
    ///
    /// The terminal intercepts the sequence written to stdout and sets its
    /// clipboard.
    ///
    /// # Errors
    /// Returns an error if stdout cannot be written or flushed.
    pub fn copy_osc52(text: &str) -> Result<(), ClipboardError> {
        let mut stdout = std::io::stdout();
        stdout
            .write_all(osc52_sequence(text).as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| ClipboardError::Osc52(e.to_string()))
    }

    /// Writes `text` to the system clipboard.
    ///
    /// # Errors
    /// Returns an error if the clipboard cannot be opened or written.
    pub fn copy_system(text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::System(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::System(e.to_string()))
    }
}

/// Builds the OSC 52 sequence: `ESC ] 52 ; c ; <base64> ESC \`.
///
/// `c` selects the system clipboard.
pub fn osc52_sequence(text: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text);
    format!("\x1b]52;c;{encoded}\x1b\\")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn osc52_encodes_styled_text_as_utf8_base64() {
        // "𝐡𝐢" is F0 9D 90 A1 F0 9D 90 A2 in UTF-8.
        assert_eq!(osc52_sequence("\u{1D421}\u{1D422}"), "\x1b]52;c;8J2QofCdkKI=\x1b\\");
    }

    #[test]
    fn error_messages_name_the_transport() {
        let err = ClipboardError::System("no display".to_string());
        assert_eq!(err.to_string(), "system clipboard failed: no display");
        let err = ClipboardError::Osc52("broken pipe".to_string());
        assert_eq!(err.to_string(), "OSC 52 clipboard failed: broken pipe");
    }
}
