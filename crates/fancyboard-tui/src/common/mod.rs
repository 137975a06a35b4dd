pub mod clipboard;
pub mod hit;
pub mod text;

pub use clipboard::{Clipboard, ClipboardError};
pub use hit::{Hit, HitMap, HitRegion, HitTarget};
pub use text::{center, display_width, wrap_rows};
