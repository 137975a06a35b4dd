//! Status line feature slice.
//!
//! Shows the active style and caps state with key hints, or a short-lived
//! notice (copy failures) that expires on `Tick`.

mod render;
mod state;

pub use render::render_status_line;
pub use state::{NOTICE_DURATION, Notice, StatusLineState};
