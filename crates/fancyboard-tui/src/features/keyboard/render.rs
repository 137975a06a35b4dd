use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::layout::{ROW_COUNT, VirtualKey, place_row, rows};
use crate::common::{HitTarget, center};
use crate::state::AppState;

/// Keyboard height: one line per row, a blank line between rows, borders.
pub const KEYBOARD_HEIGHT: u16 = ROW_COUNT * 2 - 1 + 2;

fn key_style(key: VirtualKey, caps_active: bool) -> Style {
    match key {
        VirtualKey::CapsLock if caps_active => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        VirtualKey::CapsLock | VirtualKey::Backspace => {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        }
        VirtualKey::Letter(_) | VirtualKey::Space => {
            Style::default().fg(Color::White).bg(Color::Indexed(238))
        }
    }
}

/// Renders the on-screen keyboard with glyphs for the current session.
pub fn render_keyboard(app: &AppState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let session = &app.session;
    for (row_index, row) in (0u16..).zip(rows().iter()) {
        let y = inner.y + row_index * 2;
        if y >= inner.y + inner.height {
            break;
        }
        for (rect, key) in place_row(inner, y, row) {
            let label = key.label(session.current_style, session.caps_active);
            frame.render_widget(
                Paragraph::new(center(&label, rect.width))
                    .style(key_style(key, session.caps_active)),
                rect,
            );
            app.hits.push_target(rect, HitTarget::Key(key));
        }
    }
}

#[cfg(test)]
mod tests {
    use fancyboard_core::config::Config;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    use super::*;

    const WIDTH: u16 = 61;

    fn draw(app: &AppState) -> Buffer {
        app.hits.clear();
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, KEYBOARD_HEIGHT)).unwrap();
        terminal
            .draw(|frame| render_keyboard(app, frame, frame.area()))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn caps_key_bg(app: &AppState, buffer: &Buffer) -> Color {
        (0..KEYBOARD_HEIGHT)
            .flat_map(|row| (0..WIDTH).map(move |column| (column, row)))
            .find(|&(column, row)| {
                app.hits.hit_test(column, row).target == Some(HitTarget::Key(VirtualKey::CapsLock))
            })
            .map(|position| buffer[position].bg)
            .expect("caps key drawn")
    }

    #[test]
    fn caps_highlights_key_and_uppercases_labels() {
        let mut app = AppState::new(&Config::default(), None);
        let buffer = draw(&app);
        assert_eq!(caps_key_bg(&app, &buffer), Color::DarkGray);
        assert!(text(&buffer).contains('q'));
        assert!(!text(&buffer).contains('Q'));

        app.session.toggle_caps();
        let buffer = draw(&app);
        assert_eq!(caps_key_bg(&app, &buffer), Color::Yellow);
        assert!(text(&buffer).contains('Q'));
        assert!(!text(&buffer).contains('q'));
    }
}
