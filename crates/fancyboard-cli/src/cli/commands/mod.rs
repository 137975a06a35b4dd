//! CLI command handlers.

pub mod config;
pub mod convert;
pub mod keyboard;
pub mod styles;
