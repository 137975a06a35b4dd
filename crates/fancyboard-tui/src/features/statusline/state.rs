use std::time::{Duration, Instant};

/// How long a notice stays on the status line.
pub const NOTICE_DURATION: Duration = Duration::from_secs(4);

/// One-shot error shown in place of the key hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    shown_at: Instant,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLineState {
    notice: Option<Notice>,
}

impl StatusLineState {
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn show_error(&mut self, text: impl Into<String>, now: Instant) {
        self.notice = Some(Notice {
            text: text.into(),
            shown_at: now,
        });
    }

    pub fn expire(&mut self, now: Instant) {
        if self
            .notice
            .as_ref()
            .is_some_and(|n| now.saturating_duration_since(n.shown_at) >= NOTICE_DURATION)
        {
            self.notice = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_expires() {
        let t0 = Instant::now();
        let mut status = StatusLineState::default();
        status.show_error("Copy failed", t0);
        status.expire(t0 + Duration::from_secs(1));
        assert_eq!(status.notice().map(|n| n.text.as_str()), Some("Copy failed"));
        status.expire(t0 + NOTICE_DURATION);
        assert!(status.notice().is_none());
    }
}
