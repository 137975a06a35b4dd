//! Text styles and the character substitution rules.
//!
//! - `table.rs`: the immutable `StyleTable` (style -> glyph map), built once
//! - `resolve.rs`: key resolution and whole-string stylizing on top of it

mod resolve;
mod table;

use std::fmt;
use std::str::FromStr;

use enum_map::Enum;
pub use resolve::{resolve_key, resolve_typed, stylize, substitute};
use serde::{Deserialize, Serialize};
pub use table::{GlyphMap, StyleTable};

/// A visual text style.
///
/// Serialized as the lowercase name (`"bolditalic"`, not `"bold_italic"`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Enum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum StyleName {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
    Strikethrough,
    Crazy,
    Tiny,
}

impl StyleName {
    /// All styles, in tab order.
    pub const ALL: [StyleName; 7] = [
        StyleName::Normal,
        StyleName::Bold,
        StyleName::Italic,
        StyleName::BoldItalic,
        StyleName::Strikethrough,
        StyleName::Crazy,
        StyleName::Tiny,
    ];

    /// Returns the canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            StyleName::Normal => "normal",
            StyleName::Bold => "bold",
            StyleName::Italic => "italic",
            StyleName::BoldItalic => "bolditalic",
            StyleName::Strikethrough => "strikethrough",
            StyleName::Crazy => "crazy",
            StyleName::Tiny => "tiny",
        }
    }

    /// Returns the human-readable label shown on the style tab.
    pub fn label(self) -> &'static str {
        match self {
            StyleName::Normal => "Normal",
            StyleName::Bold => "Bold",
            StyleName::Italic => "Italic",
            StyleName::BoldItalic => "Bold Italic",
            StyleName::Strikethrough => "Strike",
            StyleName::Crazy => "Crazy",
            StyleName::Tiny => "Tiny",
        }
    }

    /// Whether the style has distinct glyphs for upper and lower case.
    ///
    /// `tiny` only has one set of glyphs, so caps never applies to it.
    pub fn is_case_sensitive(self) -> bool {
        !matches!(self, StyleName::Tiny)
    }

    /// Returns the style after this one in tab order, wrapping around.
    pub fn next(self) -> StyleName {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Returns the style before this one in tab order, wrapping around.
    pub fn previous(self) -> StyleName {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }
}

impl fmt::Display for StyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a style name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "unknown style '{0}' (expected one of: normal, bold, italic, bolditalic, strikethrough, crazy, tiny)"
)]
pub struct ParseStyleError(pub String);

impl FromStr for StyleName {
    type Err = ParseStyleError;

    /// Parses a style name. Case and `-`/`_` separators are ignored, so
    /// `Bold-Italic` and `bold_italic` both mean `bolditalic`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        StyleName::ALL
            .into_iter()
            .find(|style| style.as_str() == normalized)
            .ok_or_else(|| ParseStyleError(s.to_string()))
    }
}
