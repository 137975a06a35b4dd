use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::common::{HitTarget, display_width, wrap_rows};
use crate::state::{AppState, Focus};

const PLACEHOLDER: &str = "Type or click the keys below…";

/// Renders the output buffer, scrolled so the end stays visible, and
/// places the terminal cursor after the last char when it has focus.
pub fn render_output(app: &AppState, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Output;
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(" Output ");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    app.hits.push_target(area, HitTarget::Output);

    if inner.is_empty() {
        return;
    }

    if app.output.is_empty() {
        frame.render_widget(
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray)),
            inner,
        );
        if focused {
            frame.set_cursor_position(Position::new(inner.x, inner.y));
        }
        return;
    }

    let rows = wrap_rows(app.output.as_str(), inner.width);
    let visible = usize::from(inner.height);
    let first = rows.len().saturating_sub(visible);
    let shown = &rows[first..];
    let lines: Vec<Line> = shown.iter().map(|row| Line::raw(row.as_str())).collect();
    frame.render_widget(Paragraph::new(lines), inner);

    if focused && let Some(last) = shown.last() {
        let row = u16::try_from(shown.len() - 1).unwrap_or(0);
        let column = display_width(last).min(inner.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(inner.x + column, inner.y + row));
    }
}
