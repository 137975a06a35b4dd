use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::EmojiPanelState;
use crate::common::{HitRegion, HitTarget, center};
use crate::state::{AppState, Focus};

/// Columns per grid cell (two for the emoji, one pad each side).
const CELL_WIDTH: u16 = 4;

/// Visible grid rows; the grid scrolls to keep the selection visible.
const MAX_ROWS: u16 = 4;

fn grid_columns(inner_width: u16) -> usize {
    usize::from((inner_width / CELL_WIDTH).max(1))
}

fn grid_rows(state: &EmojiPanelState, columns: usize) -> u16 {
    let rows = state.palette.len().div_ceil(columns).max(1);
    u16::try_from(rows).unwrap_or(u16::MAX).min(MAX_ROWS)
}

/// Height of the panel, borders included, for a given outer width.
pub fn panel_height(state: &EmojiPanelState, width: u16) -> u16 {
    let columns = grid_columns(width.saturating_sub(2));
    grid_rows(state, columns) + 2
}

/// Renders the emoji grid and records a hit target per entry.
pub fn render_emoji_panel(app: &AppState, frame: &mut Frame, area: Rect) {
    let state = &app.emoji;
    let focused = app.focus == Focus::EmojiPanel;
    let border = if focused { Color::Yellow } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(" Emoji ");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    app.hits.push_region(area, HitRegion::EmojiPanel);

    let columns = grid_columns(inner.width);
    state.set_columns(columns);
    let visible_rows = usize::from(inner.height.min(MAX_ROWS));
    if visible_rows == 0 {
        return;
    }
    let selected_row = state.selected / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    let mut lines = Vec::with_capacity(visible_rows);
    for (row_offset, row) in (first_row..first_row + visible_rows).enumerate() {
        let y = inner.y + u16::try_from(row_offset).unwrap_or(0);
        let mut spans = Vec::with_capacity(columns);
        for column in 0..columns {
            let index = row * columns + column;
            let Some(entry) = state.palette.get(index) else {
                break;
            };
            let x = inner.x + u16::try_from(column).unwrap_or(0) * CELL_WIDTH;
            app.hits.push_target(
                Rect::new(x, y, CELL_WIDTH, 1),
                HitTarget::EmojiEntry(index),
            );
            let style = if focused && index == state.selected {
                Style::default().bg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else if state.insertable_at(index).is_none() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            spans.push(Span::styled(center(entry.trim(), CELL_WIDTH), style));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use fancyboard_core::emoji::EmojiPalette;

    use super::*;

    #[test]
    fn height_caps_at_max_rows() {
        let state = EmojiPanelState::new(EmojiPalette::default());
        // 40 entries over 10 columns need 4 rows.
        assert_eq!(panel_height(&state, 42), 6);
        // Narrow panels scroll instead of growing.
        assert_eq!(panel_height(&state, 10), MAX_ROWS + 2);
    }

    #[test]
    fn empty_palette_keeps_one_row() {
        let state = EmojiPanelState::new(EmojiPalette::new(Vec::new()));
        assert_eq!(panel_height(&state, 42), 3);
    }
}
