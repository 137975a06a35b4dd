//! UI event types.
//!
//! All external inputs (terminal, timer ticks, clipboard results) are
//! converted to `UiEvent` before being processed by the reducer. Async
//! results arrive through the runtime's inbox.

use crossterm::event::Event as CrosstermEvent;

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Timer tick; expires the copy confirmation and notices.
    Tick,

    /// Raw terminal input (keys, mouse, paste, resize).
    Terminal(CrosstermEvent),

    /// A clipboard write finished.
    ClipboardCopied,

    /// Every configured clipboard transport failed.
    ClipboardFailed { error: String },
}
