use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::state::{AppState, Focus};

const HINTS: &str = "Tab style · ^K caps · ^E emoji · ^Y copy · ^L clear · ^Q quit";
const EMOJI_HINTS: &str = "←↑↓→ select · Enter insert · Esc close";

/// Renders the bottom status line: a pending notice, or the session state
/// followed by key hints.
pub fn render_status_line(app: &AppState, frame: &mut Frame, area: Rect) {
    let line = if let Some(notice) = app.status.notice() {
        Line::from(Span::styled(
            format!(" {}", notice.text),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    } else {
        let session = &app.session;
        let mut spans = vec![Span::styled(
            format!(" {} ", session.current_style),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )];
        if session.caps_active {
            spans.push(Span::styled(
                "CAPS ",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ));
        }
        let hints = match app.focus {
            Focus::Output => HINTS,
            Focus::EmojiPanel => EMOJI_HINTS,
        };
        spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line), area);
}
