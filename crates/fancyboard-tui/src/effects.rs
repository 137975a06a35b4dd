//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer never touches the terminal or the clipboard itself.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Write `text` to the clipboard; the result comes back as
    /// `ClipboardCopied` or `ClipboardFailed`.
    CopyToClipboard { text: String },
}
