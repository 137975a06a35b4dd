//! Feature slices for the TUI (state/update/render per slice).

pub mod emoji;
pub mod keyboard;
pub mod output;
pub mod statusline;
pub mod toolbar;
