use std::time::{Duration, Instant};

/// An action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Clear,
    Copy,
    Emoji,
}

impl Action {
    /// Buttons in display order.
    pub const ALL: [Action; 3] = [Action::Clear, Action::Copy, Action::Emoji];

    /// Button caption. The copy button reads "Copied!" while its
    /// confirmation is showing.
    pub fn label(self, copied: bool) -> &'static str {
        match self {
            Action::Clear => "🧹 Clear",
            Action::Copy if copied => "✅ Copied!",
            Action::Copy => "📋 Copy",
            Action::Emoji => "😀 Emoji",
        }
    }
}

/// Copy confirmation timer.
///
/// Starting it again while it runs restarts it from the new instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFeedback {
    duration: Duration,
    copied_at: Option<Instant>,
}

impl CopyFeedback {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            copied_at: None,
        }
    }

    pub fn start(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    pub fn is_showing(&self) -> bool {
        self.copied_at.is_some()
    }

    /// Reverts the button once the duration has elapsed.
    pub fn expire(&mut self, now: Instant) {
        if let Some(copied_at) = self.copied_at
            && now.saturating_duration_since(copied_at) >= self.duration
        {
            self.copied_at = None;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarState {
    pub copy_feedback: CopyFeedback,
}

impl ToolbarState {
    pub fn new(copy_feedback: Duration) -> Self {
        Self {
            copy_feedback: CopyFeedback::new(copy_feedback),
        }
    }
}
