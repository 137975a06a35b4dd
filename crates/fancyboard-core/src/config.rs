//! Configuration management for fancyboard.
//!
//! Loads configuration from ${FANCYBOARD_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::emoji::{DEFAULT_PALETTE, EmojiPalette};
use crate::styles::StyleName;

/// Where copied text is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    /// OSC 52 escape sequence and the system clipboard; either succeeding counts.
    #[default]
    Auto,
    /// OSC 52 escape sequence only.
    Osc52,
    /// System clipboard only.
    System,
}

impl ClipboardBackend {
    pub fn uses_osc52(self) -> bool {
        matches!(self, ClipboardBackend::Auto | ClipboardBackend::Osc52)
    }

    pub fn uses_system(self) -> bool {
        matches!(self, ClipboardBackend::Auto | ClipboardBackend::System)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub filter: String,
    /// Whether the interactive keyboard writes a log file.
    pub file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            file: true,
        }
    }
}

/// Returns the default config template with comments.
///
/// Embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for fancyboard configuration and data directories.
    //!
    //! FANCYBOARD_HOME resolution order:
    //! 1. FANCYBOARD_HOME environment variable (if set)
    //! 2. ~/.config/fancyboard
    //! 3. ./.fancyboard when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the fancyboard home directory.
    pub fn fancyboard_home() -> PathBuf {
        if let Ok(home) = std::env::var("FANCYBOARD_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".fancyboard"),
            |h| h.join(".config").join("fancyboard"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        fancyboard_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        fancyboard_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Style selected at startup.
    pub default_style: StyleName,

    /// Duration of the copy confirmation, in milliseconds.
    pub copy_feedback_ms: u64,

    /// Clipboard transport.
    pub clipboard: ClipboardBackend,

    /// Emoji panel entries.
    pub emoji: Vec<String>,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_style: StyleName::default(),
            copy_feedback_ms: Self::DEFAULT_COPY_FEEDBACK_MS,
            clipboard: ClipboardBackend::default(),
            emoji: DEFAULT_PALETTE.iter().map(|e| (*e).to_string()).collect(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    const DEFAULT_COPY_FEEDBACK_MS: u64 = 2000;

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a default config file at the given path.
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// How long the copy confirmation stays visible.
    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    /// Builds the emoji palette from the configured entries.
    pub fn emoji_palette(&self) -> EmojiPalette {
        EmojiPalette::new(self.emoji.iter().cloned())
    }

    fn write_config(path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}
