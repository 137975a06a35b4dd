//! Toolbar feature slice: style tabs and action buttons.

mod render;
mod state;

pub use render::{render_actions, render_style_tabs};
pub use state::{Action, CopyFeedback, ToolbarState};
