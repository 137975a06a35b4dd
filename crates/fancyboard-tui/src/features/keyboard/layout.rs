//! On-screen keyboard layout and key geometry.

use std::borrow::Cow;

use fancyboard_core::{StyleName, resolve_key};
use ratatui::layout::Rect;

/// Letter rows, top to bottom.
const LETTER_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

const LETTER_KEY_WIDTH: u16 = 5;
const WIDE_KEY_WIDTH: u16 = 7;
const SPACE_KEY_WIDTH: u16 = 31;

/// Columns between two keys of a row.
pub const KEY_GAP: u16 = 1;

/// Number of key rows.
pub const ROW_COUNT: u16 = 4;

/// A key of the on-screen keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VirtualKey {
    /// A lowercase ASCII letter; the session decides which glyph it types.
    Letter(char),
    CapsLock,
    Backspace,
    Space,
}

impl VirtualKey {
    /// Width of the key in terminal columns.
    pub fn width(self) -> u16 {
        match self {
            VirtualKey::Letter(_) => LETTER_KEY_WIDTH,
            VirtualKey::CapsLock | VirtualKey::Backspace => WIDE_KEY_WIDTH,
            VirtualKey::Space => SPACE_KEY_WIDTH,
        }
    }

    /// Text shown on the key for the current style and caps state.
    pub fn label(self, style: StyleName, caps: bool) -> Cow<'static, str> {
        match self {
            VirtualKey::Letter(letter) => resolve_key(style, letter, caps),
            VirtualKey::CapsLock => Cow::Borrowed("⇪"),
            VirtualKey::Backspace => Cow::Borrowed("⌫"),
            VirtualKey::Space => Cow::Borrowed("space"),
        }
    }
}

/// The four key rows: two letter rows, caps + letters + backspace, space.
pub fn rows() -> [Vec<VirtualKey>; 4] {
    let letters = |row: &str| row.chars().map(VirtualKey::Letter).collect::<Vec<_>>();

    let mut third = vec![VirtualKey::CapsLock];
    third.extend(letters(LETTER_ROWS[2]));
    third.push(VirtualKey::Backspace);

    [
        letters(LETTER_ROWS[0]),
        letters(LETTER_ROWS[1]),
        third,
        vec![VirtualKey::Space],
    ]
}

/// Total width of a row including gaps.
pub fn row_width(row: &[VirtualKey]) -> u16 {
    let keys: u16 = row.iter().map(|key| key.width()).sum();
    let gaps = u16::try_from(row.len().saturating_sub(1)).unwrap_or(0) * KEY_GAP;
    keys + gaps
}

/// Places a row's keys on line `y`, centered horizontally in `area`.
///
/// Keys that would overflow `area` are clipped to its right edge, and keys
/// starting past it are dropped.
pub fn place_row(area: Rect, y: u16, row: &[VirtualKey]) -> Vec<(Rect, VirtualKey)> {
    let left_pad = area.width.saturating_sub(row_width(row)) / 2;
    let right_edge = area.x + area.width;
    let mut x = area.x + left_pad;
    let mut placed = Vec::with_capacity(row.len());

    for key in row {
        if x >= right_edge {
            break;
        }
        let width = key.width().min(right_edge - x);
        placed.push((Rect::new(x, y, width, 1), *key));
        x = x.saturating_add(key.width() + KEY_GAP);
    }

    placed
}
