//! Key resolution: which glyph a key press produces for a style and caps state.

use std::borrow::Cow;

use super::{StyleName, StyleTable};

impl StyleTable {
    /// Looks up `ch` in the style's glyph map, falling back to `ch` itself.
    pub fn substitute(&self, style: StyleName, ch: char) -> Cow<'_, str> {
        match self.glyphs(style).get(ch) {
            Some(glyph) => Cow::Borrowed(glyph),
            None => Cow::Owned(ch.to_string()),
        }
    }

    /// Resolves a letter key to the glyph it inserts.
    ///
    /// The key is looked up in uppercase when `caps` is set and the style is
    /// case sensitive, otherwise in lowercase. A miss yields `key` unchanged.
    pub fn resolve_key(&self, style: StyleName, key: char, caps: bool) -> Cow<'_, str> {
        let resolved = if caps && style.is_case_sensitive() {
            key.to_ascii_uppercase()
        } else {
            key.to_ascii_lowercase()
        };
        match self.glyphs(style).get(resolved) {
            Some(glyph) => Cow::Borrowed(glyph),
            None => Cow::Owned(key.to_string()),
        }
    }

    /// Resolves a physically typed letter: an uppercase letter (Shift) asks
    /// for uppercase the same way an active caps lock does.
    pub fn resolve_typed(&self, style: StyleName, typed: char, caps: bool) -> Cow<'_, str> {
        self.resolve_key(style, typed, caps || typed.is_ascii_uppercase())
    }

    /// Styles a whole string the way typing it would.
    ///
    /// ASCII letters go through [`StyleTable::resolve_typed`], spaces stay
    /// literal spaces and everything else is copied verbatim.
    pub fn stylize(&self, style: StyleName, text: &str, caps: bool) -> String {
        let mut out = String::with_capacity(text.len() * 4);
        for ch in text.chars() {
            if ch.is_ascii_alphabetic() {
                out.push_str(&self.resolve_typed(style, ch, caps));
            } else {
                out.push(ch);
            }
        }
        out
    }
}

/// [`StyleTable::substitute`] on the global table.
pub fn substitute(style: StyleName, ch: char) -> Cow<'static, str> {
    StyleTable::global().substitute(style, ch)
}

/// [`StyleTable::resolve_key`] on the global table.
pub fn resolve_key(style: StyleName, key: char, caps: bool) -> Cow<'static, str> {
    StyleTable::global().resolve_key(style, key, caps)
}

/// [`StyleTable::resolve_typed`] on the global table.
pub fn resolve_typed(style: StyleName, typed: char, caps: bool) -> Cow<'static, str> {
    StyleTable::global().resolve_typed(style, typed, caps)
}

/// [`StyleTable::stylize`] on the global table.
pub fn stylize(style: StyleName, text: &str, caps: bool) -> String {
    StyleTable::global().stylize(style, text, caps)
}
