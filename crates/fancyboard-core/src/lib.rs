//! Core library for fancyboard.
//!
//! Holds everything that does not touch the terminal: the style table and
//! substitution rules, the emoji palette, configuration and logging setup.

pub mod config;
pub mod emoji;
pub mod logging;
pub mod styles;

pub use styles::{GlyphMap, StyleName, StyleTable, resolve_key, resolve_typed, stylize, substitute};
