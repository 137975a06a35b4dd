//! Effect handlers for the runtime.
//!
//! Handlers perform I/O and return the resulting `UiEvent`; they never
//! touch state. The runtime spawns them and forwards results to the inbox.

use fancyboard_core::config::ClipboardBackend;

use crate::common::{Clipboard, ClipboardError};
use crate::events::UiEvent;

/// Completes a copy after the runtime has written OSC 52 (if enabled).
///
/// `osc52` is the result of that write. The system clipboard can block
/// (X11 round trips), so it runs on a blocking thread. The copy counts as
/// done if any transport succeeded.
pub async fn finish_copy(
    backend: ClipboardBackend,
    text: String,
    osc52: Option<Result<(), ClipboardError>>,
) -> UiEvent {
    let mut errors: Vec<ClipboardError> = Vec::new();
    let mut copied = false;

    match osc52 {
        Some(Ok(())) => copied = true,
        Some(Err(err)) => errors.push(err),
        None => {}
    }

    if backend.uses_system() {
        match tokio::task::spawn_blocking(move || Clipboard::copy_system(&text)).await {
            Ok(Ok(())) => copied = true,
            Ok(Err(err)) => errors.push(err),
            Err(join) => errors.push(ClipboardError::System(join.to_string())),
        }
    }

    for err in &errors {
        tracing::debug!(error = %err, "clipboard transport failed");
    }

    if copied {
        UiEvent::ClipboardCopied
    } else {
        failure_event(&errors)
    }
}

fn failure_event(errors: &[ClipboardError]) -> UiEvent {
    let error = if errors.is_empty() {
        "no clipboard transport enabled".to_string()
    } else {
        errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    };
    UiEvent::ClipboardFailed { error }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn osc52_success_is_enough() {
        let event = finish_copy(ClipboardBackend::Osc52, "x".to_string(), Some(Ok(()))).await;
        assert!(matches!(event, UiEvent::ClipboardCopied));
    }

    #[tokio::test]
    async fn osc52_failure_is_reported() {
        let event = finish_copy(
            ClipboardBackend::Osc52,
            "x".to_string(),
            Some(Err(ClipboardError::Osc52("broken pipe".to_string()))),
        )
        .await;
        let UiEvent::ClipboardFailed { error } = event else {
            panic!("expected failure");
        };
        assert_eq!(error, "OSC 52 clipboard failed: broken pipe");
    }

    #[test]
    fn failure_joins_every_transport_error() {
        let event = failure_event(&[
            ClipboardError::Osc52("broken pipe".to_string()),
            ClipboardError::System("no display".to_string()),
        ]);
        let UiEvent::ClipboardFailed { error } = event else {
            panic!("expected failure");
        };
        assert_eq!(
            error,
            "OSC 52 clipboard failed: broken pipe; system clipboard failed: no display"
        );
    }
}
