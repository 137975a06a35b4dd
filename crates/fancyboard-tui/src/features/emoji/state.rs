use std::cell::Cell;

use fancyboard_core::emoji::{EmojiPalette, insertable};

/// Direction of a selection move in the emoji grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Left,
    Right,
    Up,
    Down,
}

/// Emoji panel contents and keyboard selection.
#[derive(Debug)]
pub struct EmojiPanelState {
    pub palette: EmojiPalette,
    pub selected: usize,
    /// Grid columns at the last render; drives up/down movement.
    columns: Cell<usize>,
}

impl EmojiPanelState {
    pub fn new(palette: EmojiPalette) -> Self {
        Self {
            palette,
            selected: 0,
            columns: Cell::new(1),
        }
    }

    pub fn columns(&self) -> usize {
        self.columns.get()
    }

    /// Records the grid width. Called from the render pass.
    pub fn set_columns(&self, columns: usize) {
        self.columns.set(columns.max(1));
    }

    /// Moves the selection, clamping at the grid edges.
    pub fn move_selection(&mut self, direction: Move) {
        let len = self.palette.len();
        if len == 0 {
            return;
        }
        let columns = self.columns();
        self.selected = match direction {
            Move::Left => self.selected.saturating_sub(1),
            Move::Right => (self.selected + 1).min(len - 1),
            Move::Up => self.selected.checked_sub(columns).unwrap_or(self.selected),
            Move::Down if self.selected + columns < len => self.selected + columns,
            Move::Down => self.selected,
        };
    }

    /// Text to insert for the entry at `index`, if it qualifies.
    pub fn insertable_at(&self, index: usize) -> Option<&str> {
        self.palette.get(index).and_then(insertable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel(entries: &[&str], columns: usize) -> EmojiPanelState {
        let state = EmojiPanelState::new(EmojiPalette::new(
            entries.iter().map(|e| (*e).to_string()),
        ));
        state.set_columns(columns);
        state
    }

    #[test]
    fn selection_moves_through_grid() {
        let mut state = panel(&["a", "b", "c", "d", "e"], 2);
        state.move_selection(Move::Down);
        assert_eq!(state.selected, 2);
        state.move_selection(Move::Right);
        assert_eq!(state.selected, 3);
        state.move_selection(Move::Down);
        assert_eq!(state.selected, 3);
        state.move_selection(Move::Up);
        assert_eq!(state.selected, 1);
        state.move_selection(Move::Up);
        assert_eq!(state.selected, 1);
        state.move_selection(Move::Left);
        state.move_selection(Move::Left);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn empty_palette_ignores_moves() {
        let mut state = panel(&[], 4);
        state.move_selection(Move::Right);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn only_short_entries_are_insertable() {
        let state = panel(&["😀", " ❤️ ", "abc", ""], 4);
        assert_eq!(state.insertable_at(0), Some("😀"));
        assert_eq!(state.insertable_at(1), Some("❤️"));
        assert_eq!(state.insertable_at(2), None);
        assert_eq!(state.insertable_at(3), None);
        assert_eq!(state.insertable_at(9), None);
    }
}
