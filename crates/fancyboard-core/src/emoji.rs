//! Emoji palette shown in the emoji panel.
//!
//! Entries are opaque strings. The panel only ever reads an entry's trimmed
//! text, and inserts it when it is one or two characters long (so emoji with
//! a variation selector or skin tone modifier still qualify).

/// Built-in palette used when the config does not provide one.
pub const DEFAULT_PALETTE: &[&str] = &[
    "😀", "😂", "🥹", "😍", "😎", "🤔", "😴", "😭", "😡", "🥳", "👍", "👎", "👏", "🙏", "💪", "👀",
    "❤️", "💔", "✨", "🔥", "⭐", "🌈", "☀️", "🌙", "🐶", "🐱", "🦊", "🐸", "🍕", "🍩", "☕", "🍺",
    "🎉", "🎁", "🎵", "⚽", "🚀", "💡", "✅", "❌",
];

/// Maximum number of chars an entry may have to be insertable.
const MAX_ENTRY_CHARS: usize = 2;

/// Returns the text to insert for a panel entry, or `None` when the trimmed
/// entry is empty or longer than two chars.
pub fn insertable(entry: &str) -> Option<&str> {
    let trimmed = entry.trim();
    let count = trimmed.chars().count();
    (1..=MAX_ENTRY_CHARS).contains(&count).then_some(trimmed)
}

/// The list of entries in the emoji panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiPalette {
    entries: Vec<String>,
}

impl Default for EmojiPalette {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE.iter().map(|e| (*e).to_string()))
    }
}

impl EmojiPalette {
    /// Creates a palette from arbitrary entries.
    ///
    /// Entries that can never be inserted are kept (the panel shows them)
    /// but logged once here.
    pub fn new(entries: impl IntoIterator<Item = String>) -> Self {
        let entries: Vec<String> = entries.into_iter().collect();
        for entry in entries.iter().filter(|e| insertable(e).is_none()) {
            tracing::warn!(entry = %entry, "emoji entry is not 1-2 characters and cannot be inserted");
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_single_and_double_char_entries() {
        assert_eq!(insertable("😀"), Some("😀"));
        // U+2764 U+FE0F
        assert_eq!(insertable("❤️"), Some("❤️"));
        assert_eq!(insertable("  🔥 \n"), Some("🔥"));
    }

    #[test]
    fn rejects_empty_and_long_entries() {
        assert_eq!(insertable(""), None);
        assert_eq!(insertable("   "), None);
        // man + ZWJ + woman + ZWJ + girl
        assert_eq!(insertable("👨\u{200D}👩\u{200D}👧"), None);
        assert_eq!(insertable("abc"), None);
    }

    #[test]
    fn default_palette_is_fully_insertable() {
        let palette = EmojiPalette::default();
        assert_eq!(palette.len(), DEFAULT_PALETTE.len());
        assert!(palette.entries().iter().all(|e| insertable(e).is_some()));
    }
}
