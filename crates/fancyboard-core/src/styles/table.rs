//! The style table: one glyph map per style, built once per process.

use std::collections::HashMap;
use std::sync::LazyLock;

use enum_map::EnumMap;

use super::StyleName;

/// Number of letters in each ASCII case range.
const ALPHABET_LEN: u32 = 26;

/// Combining long stroke overlay, appended after each struck-through letter.
const COMBINING_LONG_STROKE: char = '\u{0336}';

/// Small-caps / superscript look-alikes for `a`..=`z`, in order.
const TINY_LETTERS: [char; 26] = [
    'ᵃ', 'ᵇ', 'ᶜ', 'ᵈ', 'ᵉ', 'ᶠ', 'ᵍ', 'ʰ', 'ᶦ', 'ʲ', 'ᵏ', 'ˡ', 'ᵐ', 'ⁿ', 'ᵒ', 'ᵖ', '۹', 'ʳ', 'ˢ',
    'ᵗ', 'ᵘ', 'ᵛ', 'ʷ', 'ˣ', 'ʸ', 'ᶻ',
];

/// Unassigned code points inside the mathematical alphanumeric ranges and
/// the letterlike symbol that stands in for each.
const RANGE_HOLES: &[(u32, char)] = &[
    // MATHEMATICAL ITALIC SMALL H lives in Letterlike Symbols (PLANCK CONSTANT).
    (0x1D455, '\u{210E}'),
];

/// Base code points for a ranged style.
#[derive(Debug, Clone, Copy)]
struct LetterRange {
    lower: u32,
    upper: u32,
}

impl LetterRange {
    /// Returns the ranged base pair for a style, if it is built from one.
    fn for_style(style: StyleName) -> Option<Self> {
        let (lower, upper) = match style {
            StyleName::Bold => (0x1D41A, 0x1D400),
            StyleName::Italic => (0x1D44E, 0x1D434),
            StyleName::BoldItalic => (0x1D482, 0x1D468),
            // Squared latin letters only exist in one case.
            StyleName::Crazy => (0x1F130, 0x1F130),
            StyleName::Normal | StyleName::Strikethrough | StyleName::Tiny => return None,
        };
        Some(Self { lower, upper })
    }
}

/// Replacement glyphs for a single style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphMap {
    glyphs: HashMap<char, String>,
}

impl GlyphMap {
    /// Returns the replacement for `ch`, if the style maps it.
    pub fn get(&self, ch: char) -> Option<&str> {
        self.glyphs.get(&ch).map(String::as_str)
    }

    /// Whether the style has an entry for `ch`.
    pub fn contains(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    fn insert(&mut self, ch: char, glyph: impl Into<String>) {
        self.glyphs.insert(ch, glyph.into());
    }
}

/// Mapping from every style to its glyph map.
///
/// Pure data derived from fixed code point offsets; building cannot fail.
/// Use [`StyleTable::global`] instead of rebuilding it per keystroke.
#[derive(Debug, Clone)]
pub struct StyleTable {
    maps: EnumMap<StyleName, GlyphMap>,
}

static STYLE_TABLE: LazyLock<StyleTable> = LazyLock::new(StyleTable::build);

impl StyleTable {
    /// Builds the table from scratch.
    pub fn build() -> Self {
        Self {
            maps: EnumMap::from_fn(build_glyph_map),
        }
    }

    /// Returns the process-wide table, built on first use.
    pub fn global() -> &'static StyleTable {
        &STYLE_TABLE
    }

    /// Returns the glyph map for a style.
    pub fn glyphs(&self, style: StyleName) -> &GlyphMap {
        &self.maps[style]
    }
}

fn lowercase_letters() -> impl Iterator<Item = (u32, char)> {
    ('a'..='z').zip(0..ALPHABET_LEN).map(|(ch, i)| (i, ch))
}

fn uppercase_letters() -> impl Iterator<Item = (u32, char)> {
    ('A'..='Z').zip(0..ALPHABET_LEN).map(|(ch, i)| (i, ch))
}

fn build_glyph_map(style: StyleName) -> GlyphMap {
    let mut map = GlyphMap::default();

    if let Some(range) = LetterRange::for_style(style) {
        for (i, ch) in lowercase_letters() {
            map.insert(ch, code_point_glyph(range.lower + i));
        }
        for (i, ch) in uppercase_letters() {
            map.insert(ch, code_point_glyph(range.upper + i));
        }
        return map;
    }

    match style {
        StyleName::Normal => {
            for ch in ('a'..='z').chain('A'..='Z') {
                map.insert(ch, ch);
            }
        }
        StyleName::Strikethrough => {
            for ch in ('a'..='z').chain('A'..='Z') {
                map.insert(ch, format!("{ch}{COMBINING_LONG_STROKE}"));
            }
        }
        StyleName::Tiny => {
            for ((_, ch), glyph) in lowercase_letters().zip(TINY_LETTERS) {
                map.insert(ch, glyph);
            }
            map.insert(' ', ' ');
        }
        StyleName::Bold | StyleName::Italic | StyleName::BoldItalic | StyleName::Crazy => {}
    }

    map
}

fn code_point_glyph(code_point: u32) -> String {
    let ch = RANGE_HOLES
        .iter()
        .find(|(hole, _)| *hole == code_point)
        .map(|(_, replacement)| *replacement)
        .or_else(|| char::from_u32(code_point))
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    ch.to_string()
}
