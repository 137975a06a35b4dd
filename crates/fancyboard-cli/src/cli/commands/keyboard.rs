//! Interactive keyboard command handler.

use anyhow::{Context, Result};
use fancyboard_core::StyleName;
use fancyboard_core::config::{Config, paths};
use fancyboard_core::logging::{self, LogTarget};

pub fn run(style: Option<StyleName>) -> Result<()> {
    let config = Config::load().context("load config")?;
    // The UI owns the terminal, so logs go to a file. Keep the guard alive
    // until the keyboard closes so buffered records are flushed.
    let _log_guard = logging::init(&config.logging, LogTarget::File, &paths::logs_dir())?;

    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    let _rt_guard = rt.enter();
    fancyboard_tui::run_keyboard(&config, style)
}
