//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a ratatui
//! `Frame`, and record clickable areas in the hit map. They never mutate
//! anything else or return effects.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::emoji::{panel_height, render_emoji_panel};
use crate::keyboard::{KEYBOARD_HEIGHT, render_keyboard};
use crate::output::render_output;
use crate::state::AppState;
use crate::statusline::render_status_line;
use crate::toolbar::{render_actions, render_style_tabs};

const TABS_HEIGHT: u16 = 3;
const OUTPUT_MIN_HEIGHT: u16 = 3;
const ACTIONS_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;

/// Narrowest terminal that fits the widest key row.
pub const MIN_WIDTH: u16 = 62;

/// Shortest terminal that fits every section with the emoji panel closed.
pub const MIN_HEIGHT: u16 =
    TABS_HEIGHT + OUTPUT_MIN_HEIGHT + ACTIONS_HEIGHT + KEYBOARD_HEIGHT + STATUS_HEIGHT;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    app.hits.clear();
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(frame, area);
        return;
    }

    let emoji_height = if app.session.emoji_panel_visible {
        panel_height(&app.emoji, area.width)
    } else {
        0
    };

    let [tabs, output, actions, emoji, keyboard, status] = Layout::vertical([
        Constraint::Length(TABS_HEIGHT),
        Constraint::Min(OUTPUT_MIN_HEIGHT),
        Constraint::Length(ACTIONS_HEIGHT),
        Constraint::Length(emoji_height),
        Constraint::Length(KEYBOARD_HEIGHT),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .areas(area);

    render_style_tabs(app, frame, tabs);
    render_output(app, frame, output);
    render_actions(app, frame, actions);
    if app.session.emoji_panel_visible && !emoji.is_empty() {
        render_emoji_panel(app, frame, emoji);
    }
    render_keyboard(app, frame, keyboard);
    render_status_line(app, frame, status);
}

fn render_too_small(frame: &mut Frame, area: Rect) {
    let message = format!(
        "Terminal too small ({}x{}), need {MIN_WIDTH}x{MIN_HEIGHT}",
        area.width, area.height
    );
    frame.render_widget(
        Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow)),
        area,
    );
}
