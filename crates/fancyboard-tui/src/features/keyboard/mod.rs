//! Keyboard feature slice: the on-screen QWERTY keyboard.
//!
//! - `layout.rs`: key rows and geometry
//! - `update.rs`: what a key press does to the session and the output
//! - `render.rs`: key drawing, labels follow the current style and caps

mod layout;
mod render;
mod update;

pub use layout::VirtualKey;
pub use render::{KEYBOARD_HEIGHT, render_keyboard};
pub use update::{press_key, type_letter};
