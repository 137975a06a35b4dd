//! Full-screen virtual keyboard for fancyboard.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
use fancyboard_core::StyleName;
use fancyboard_core::config::Config;
pub use features::{emoji, keyboard, output, statusline, toolbar};
pub use runtime::KeyboardRuntime;

/// Runs the interactive keyboard until the user quits.
///
/// `style` overrides the configured starting style. The event loop blocks
/// the calling thread; call it inside a multi-threaded tokio runtime context
/// (`Runtime::enter`), whose workers run the spawned clipboard writes.
///
/// # Errors
/// Returns an error if stdout is not a terminal or terminal I/O fails.
pub fn run_keyboard(config: &Config, style: Option<StyleName>) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The keyboard requires a terminal.\n\
             Use `fancyboard convert <TEXT>` for non-interactive use."
        );
    }

    let mut runtime = KeyboardRuntime::new(config, style)?;
    tracing::info!(style = %runtime.state.session.current_style, "keyboard started");
    let result = runtime.run();
    let chars = runtime.state.output.as_str().chars().count();
    drop(runtime);

    tracing::info!(chars, "keyboard closed");
    result
}
