//! Emoji panel feature slice.
//!
//! A grid of palette entries toggled from the toolbar. Clicking an entry,
//! or selecting it with the arrow keys and pressing Enter, appends it to
//! the output.

mod render;
mod state;

pub use render::{panel_height, render_emoji_panel};
pub use state::{EmojiPanelState, Move};
