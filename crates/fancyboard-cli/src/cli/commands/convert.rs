//! Convert command handler.

use std::io::{IsTerminal, Read, Write};

use anyhow::{Context, Result};
use fancyboard_core::config::{Config, paths};
use fancyboard_core::logging::{self, LogTarget};
use fancyboard_core::{StyleName, stylize};

pub fn run(style: Option<StyleName>, caps: bool, text: Option<String>) -> Result<()> {
    let config = Config::load().context("load config")?;
    logging::init(&config.logging, LogTarget::Stderr, &paths::logs_dir())?;
    let style = style.unwrap_or(config.default_style);

    let mut stdout = std::io::stdout().lock();
    if let Some(text) = text {
        writeln!(stdout, "{}", stylize(style, &text, caps))?;
        return Ok(());
    }

    if std::io::stdin().is_terminal() {
        anyhow::bail!("No input: pass TEXT or pipe text on stdin");
    }
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_to_string(&mut input)
        .context("read stdin")?;
    tracing::debug!(%style, bytes = input.len(), "converting stdin");

    // Piped input keeps its own line endings.
    write!(stdout, "{}", stylize(style, &input, caps))?;
    stdout.flush()?;
    Ok(())
}
