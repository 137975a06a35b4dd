//! Tracing subscriber setup.
//!
//! The interactive keyboard owns the terminal, so it logs to a daily rolling
//! file under `${FANCYBOARD_HOME}/logs`. One-shot commands log to stderr.
//! Both use the configured `[logging] filter`; a valid `RUST_LOG` wins.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingConfig;

/// Log file name prefix inside the logs directory.
const LOG_FILE_PREFIX: &str = "fancyboard.log";

/// Where log records go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Daily rolling file in the logs directory.
    File,
    /// Standard error.
    Stderr,
}

fn env_filter(configured: &str) -> Result<EnvFilter> {
    resolve_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(), configured)
}

fn resolve_filter(rust_log: Option<&str>, configured: &str) -> Result<EnvFilter> {
    if let Some(filter) = rust_log.and_then(|directive| EnvFilter::try_new(directive).ok()) {
        return Ok(filter);
    }
    EnvFilter::try_new(configured).with_context(|| format!("Invalid log filter '{configured}'"))
}

/// Installs the global subscriber.
///
/// Returns the appender guard for file logging; keep it alive until exit
/// so buffered records are flushed. File logging disabled in the config
/// installs nothing.
///
/// # Errors
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init(
    config: &LoggingConfig,
    target: LogTarget,
    logs_dir: &Path,
) -> Result<Option<WorkerGuard>> {
    match target {
        LogTarget::File => {
            if !config.file {
                return Ok(None);
            }
            std::fs::create_dir_all(logs_dir).with_context(|| {
                format!("Failed to create log directory {}", logs_dir.display())
            })?;
            let appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(env_filter(&config.filter)?)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false),
                )
                .try_init()
                .context("Failed to install log subscriber")?;
            Ok(Some(guard))
        }
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(env_filter(&config.filter)?)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to install log subscriber")?;
            Ok(None)
        }
    }
}
