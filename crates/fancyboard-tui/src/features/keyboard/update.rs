use fancyboard_core::{resolve_key, resolve_typed};

use super::VirtualKey;
use crate::output::OutputBuffer;
use crate::state::SessionState;

/// Applies a click on an on-screen key.
pub fn press_key(session: &mut SessionState, output: &mut OutputBuffer, key: VirtualKey) {
    match key {
        VirtualKey::Letter(letter) => {
            output.push_str(&resolve_key(
                session.current_style,
                letter,
                session.caps_active,
            ));
        }
        VirtualKey::CapsLock => {
            session.toggle_caps();
            tracing::debug!(caps = session.caps_active, "caps toggled");
        }
        VirtualKey::Backspace => {
            output.backspace();
        }
        VirtualKey::Space => output.push(' '),
    }
}

/// Applies a physically typed ASCII letter. Shift counts as caps.
pub fn type_letter(session: &SessionState, output: &mut OutputBuffer, letter: char) {
    output.push_str(&resolve_typed(
        session.current_style,
        letter,
        session.caps_active,
    ));
}
