//! Text utilities for TUI rendering.
//!
//! Width math is done in terminal columns (unicode-width), so styled glyphs,
//! combining marks and emoji line up.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in terminal columns.
pub fn display_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Pads `text` with spaces on both sides to center it in `width` columns.
///
/// Text wider than `width` is returned unchanged.
pub fn center(text: &str, width: u16) -> String {
    let text_width = display_width(text);
    if text_width >= width {
        return text.to_string();
    }
    let total = width - text_width;
    let left = total / 2;
    let right = total - left;
    format!(
        "{}{text}{}",
        " ".repeat(left as usize),
        " ".repeat(right as usize)
    )
}

/// Hard-wraps text into rows of at most `width` columns.
///
/// Newlines start a new row; an empty line yields an empty row. Zero-width
/// chars (combining marks) stay attached to the preceding char.
pub fn wrap_rows(text: &str, width: u16) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let width = width as usize;
    let mut rows = Vec::new();

    for line in text.split('\n') {
        let mut row = String::new();
        let mut row_width = 0;
        for ch in line.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if row_width + ch_width > width && !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            row.push(ch);
            row_width += ch_width;
        }
        rows.push(row);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_pads_evenly() {
        assert_eq!(center("a", 5), "  a  ");
        assert_eq!(center("ab", 5), " ab  ");
        assert_eq!(center("abcdef", 3), "abcdef");
    }

    #[test]
    fn center_counts_wide_glyphs() {
        // Emoji take two columns.
        assert_eq!(center("😀", 4), " 😀 ");
    }

    #[test]
    fn wrap_breaks_on_width_and_newlines() {
        assert_eq!(wrap_rows("abcdef", 4), vec!["abcd", "ef"]);
        assert_eq!(wrap_rows("ab\n\ncd", 4), vec!["ab", "", "cd"]);
        assert_eq!(wrap_rows("", 4), vec![""]);
    }

    #[test]
    fn wrap_keeps_combining_marks_with_their_base() {
        let struck = "a\u{0336}b\u{0336}c\u{0336}";
        assert_eq!(wrap_rows(struck, 2), vec!["a\u{0336}b\u{0336}", "c\u{0336}"]);
    }

    #[test]
    fn wrap_with_zero_width_is_empty() {
        assert!(wrap_rows("abc", 0).is_empty());
    }
}
