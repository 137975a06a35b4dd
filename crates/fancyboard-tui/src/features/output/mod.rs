//! Output feature slice: the composed text and its view.

mod buffer;
mod render;

pub use buffer::OutputBuffer;
pub use render::render_output;
