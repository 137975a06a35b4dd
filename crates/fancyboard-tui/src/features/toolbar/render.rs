use fancyboard_core::{StyleName, stylize};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::Action;
use crate::common::{HitRegion, HitTarget, display_width};
use crate::state::AppState;

const TAB_SEPARATOR: &str = "│";
const BUTTON_GAP: u16 = 2;

/// Tab text: the style's label written in the style itself.
fn tab_label(style: StyleName) -> String {
    format!(" {} ", stylize(style, style.label(), false))
}

/// Renders the style selector tabs.
pub fn render_style_tabs(app: &AppState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Style ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = Vec::with_capacity(StyleName::ALL.len() * 2);
    let mut x = inner.x;
    let right_edge = inner.x + inner.width;

    for (i, style) in StyleName::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                TAB_SEPARATOR,
                Style::default().fg(Color::DarkGray),
            ));
            x = x.saturating_add(1);
        }
        let label = tab_label(style);
        let width = display_width(&label);
        let tab_style = if style == app.session.current_style {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        if x < right_edge {
            let visible = width.min(right_edge - x);
            app.hits
                .push_target(Rect::new(x, inner.y, visible, 1), HitTarget::StyleTab(style));
        }
        spans.push(Span::styled(label, tab_style));
        x = x.saturating_add(width);
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

/// Renders the Clear / Copy / Emoji buttons.
pub fn render_actions(app: &AppState, frame: &mut Frame, area: Rect) {
    let copied = app.toolbar.copy_feedback.is_showing();
    let right_edge = area.x + area.width;
    let mut x = area.x + 1;
    let mut spans = vec![Span::raw(" ")];

    for (i, action) in Action::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" ".repeat(BUTTON_GAP as usize)));
            x = x.saturating_add(BUTTON_GAP);
        }
        let label = format!("[ {} ]", action.label(copied));
        let width = display_width(&label);
        let style = match action {
            Action::Copy if copied => Style::default().fg(Color::Green),
            Action::Emoji if app.session.emoji_panel_visible => {
                Style::default().fg(Color::Yellow)
            }
            _ => Style::default(),
        };

        if x < right_edge {
            let visible = width.min(right_edge - x);
            app.hits
                .push_target(Rect::new(x, area.y, visible, 1), HitTarget::Action(action));
        }
        spans.push(Span::styled(label, style));
        x = x.saturating_add(width);
    }

    let cluster_width = x.min(right_edge).saturating_sub(area.x);
    app.hits.push_region(
        Rect::new(area.x, area.y, cluster_width, area.height.min(1)),
        HitRegion::Actions,
    );
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
