//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use fancyboard_core::StyleName;

use crate::common::HitTarget;
use crate::effects::UiEffect;
use crate::emoji::Move;
use crate::events::UiEvent;
use crate::keyboard;
use crate::state::{AppState, Focus};
use crate::toolbar::Action;

/// Modifiers that turn a key press into a shortcut; such keys never type.
const SHORTCUT_MODIFIERS: KeyModifiers = KeyModifiers::CONTROL
    .union(KeyModifiers::ALT)
    .union(KeyModifiers::SUPER)
    .union(KeyModifiers::META)
    .union(KeyModifiers::HYPER);

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    update_at(app, event, Instant::now())
}

/// Reducer with an explicit clock, so timers are testable.
pub fn update_at(app: &mut AppState, event: UiEvent, now: Instant) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.toolbar.copy_feedback.expire(now);
            app.status.expire(now);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::ClipboardCopied => {
            tracing::info!(chars = app.output.as_str().chars().count(), "copied output");
            app.toolbar.copy_feedback.start(now);
            vec![]
        }
        UiEvent::ClipboardFailed { error } => {
            tracing::warn!(%error, "copy failed");
            app.status.show_error(format!("Copy failed: {error}"), now);
            vec![]
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Paste(text) => {
            if app.focus == Focus::Output {
                app.output.push_str(&text);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return handle_shortcut(app, key.code);
    }

    match key.code {
        KeyCode::Tab => {
            select_style(app, app.session.current_style.next());
            return vec![];
        }
        KeyCode::BackTab => {
            select_style(app, app.session.current_style.previous());
            return vec![];
        }
        _ => {}
    }

    match app.focus {
        Focus::EmojiPanel => handle_emoji_key(app, key.code),
        Focus::Output => handle_typing(app, key),
    }
    vec![]
}

fn handle_shortcut(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
    match code {
        KeyCode::Char('c' | 'q') => vec![UiEffect::Quit],
        KeyCode::Char('l') => perform_action(app, Action::Clear),
        KeyCode::Char('y') => perform_action(app, Action::Copy),
        KeyCode::Char('e') => perform_action(app, Action::Emoji),
        KeyCode::Char('k') => {
            keyboard::press_key(
                &mut app.session,
                &mut app.output,
                keyboard::VirtualKey::CapsLock,
            );
            vec![]
        }
        _ => vec![],
    }
}

/// Physical keyboard passthrough while the output has focus.
fn handle_typing(app: &mut AppState, key: KeyEvent) {
    if key.modifiers.intersects(SHORTCUT_MODIFIERS) {
        return;
    }
    match key.code {
        KeyCode::Char(ch) if ch.is_ascii_alphabetic() => {
            keyboard::type_letter(&app.session, &mut app.output, ch);
        }
        KeyCode::Char(ch) => app.output.push(ch),
        KeyCode::Backspace => {
            app.output.backspace();
        }
        KeyCode::Enter => app.output.push('\n'),
        _ => {}
    }
}

fn handle_emoji_key(app: &mut AppState, code: KeyCode) {
    match code {
        KeyCode::Left => app.emoji.move_selection(Move::Left),
        KeyCode::Right => app.emoji.move_selection(Move::Right),
        KeyCode::Up => app.emoji.move_selection(Move::Up),
        KeyCode::Down => app.emoji.move_selection(Move::Down),
        KeyCode::Enter => insert_emoji(app, app.emoji.selected),
        KeyCode::Esc => app.close_emoji_panel(),
        _ => {}
    }
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) -> Vec<UiEffect> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }

    let hit = app.hits.hit_test(mouse.column, mouse.row);
    // Hits come from the last drawn frame; a panel hidden since then is gone.
    if !app.session.emoji_panel_visible
        && (hit.in_emoji_panel || matches!(hit.target, Some(HitTarget::EmojiEntry(_))))
    {
        return vec![];
    }
    if app.session.emoji_panel_visible && !hit.keeps_emoji_panel() {
        app.close_emoji_panel();
    }

    match hit.target {
        Some(HitTarget::Output) => {
            app.focus = Focus::Output;
            vec![]
        }
        Some(HitTarget::StyleTab(style)) => {
            select_style(app, style);
            vec![]
        }
        Some(HitTarget::Action(action)) => perform_action(app, action),
        Some(HitTarget::Key(key)) => {
            keyboard::press_key(&mut app.session, &mut app.output, key);
            vec![]
        }
        Some(HitTarget::EmojiEntry(index)) => {
            app.emoji.selected = index;
            insert_emoji(app, index);
            vec![]
        }
        None => {
            if hit.in_emoji_panel {
                app.focus = Focus::EmojiPanel;
            }
            vec![]
        }
    }
}

fn select_style(app: &mut AppState, style: StyleName) {
    app.session.select_style(style);
    tracing::debug!(%style, "style selected");
}

fn perform_action(app: &mut AppState, action: Action) -> Vec<UiEffect> {
    match action {
        Action::Clear => {
            app.output.clear();
            app.focus = Focus::Output;
            vec![]
        }
        Action::Copy => {
            if app.output.is_blank() {
                return vec![];
            }
            vec![UiEffect::CopyToClipboard {
                text: app.output.as_str().to_string(),
            }]
        }
        Action::Emoji => {
            app.toggle_emoji_panel();
            vec![]
        }
    }
}

/// Appends a panel entry if it is insertable, then hands focus back to the
/// output. Entries that do not qualify leave everything unchanged.
fn insert_emoji(app: &mut AppState, index: usize) {
    let Some(text) = app.emoji.insertable_at(index) else {
        return;
    };
    app.output.push_str(text);
    app.focus = Focus::Output;
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use fancyboard_core::StyleName;
    use fancyboard_core::config::Config;
    use ratatui::layout::Rect;

    use super::*;
    use crate::common::HitRegion;
    use crate::keyboard::VirtualKey;

    fn app() -> AppState {
        AppState::new(&Config::default(), None)
    }

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn key_with(code: KeyCode, modifiers: KeyModifiers) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, modifiers)))
    }

    fn click(column: u16, row: u16) -> UiEvent {
        UiEvent::Terminal(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    fn type_str(app: &mut AppState, text: &str) {
        for ch in text.chars() {
            update(app, key(KeyCode::Char(ch)));
        }
    }

    /// Lays out a fake frame: output on row 0, actions on row 1 (copy at
    /// column 0, emoji at column 1), emoji panel on row 2, a key on row 3.
    fn record_hits(app: &AppState) {
        app.hits.clear();
        app.hits.push_target(Rect::new(0, 0, 10, 1), HitTarget::Output);
        app.hits
            .push_target(Rect::new(0, 1, 1, 1), HitTarget::Action(Action::Copy));
        app.hits
            .push_target(Rect::new(1, 1, 1, 1), HitTarget::Action(Action::Emoji));
        app.hits.push_region(Rect::new(0, 1, 2, 1), HitRegion::Actions);
        app.hits.push_region(Rect::new(0, 2, 10, 1), HitRegion::EmojiPanel);
        app.hits.push_target(Rect::new(0, 2, 1, 1), HitTarget::EmojiEntry(0));
        app.hits
            .push_target(Rect::new(0, 3, 1, 1), HitTarget::Key(VirtualKey::Letter('a')));
    }

    #[test]
    fn physical_typing_uses_current_style() {
        let mut app = app();
        app.session.select_style(StyleName::Bold);
        type_str(&mut app, "hi");
        assert_eq!(app.output.as_str(), "\u{1D421}\u{1D422}");
    }

    #[test]
    fn non_letters_are_inserted_verbatim() {
        let mut app = app();
        app.session.select_style(StyleName::Bold);
        type_str(&mut app, "a1 !");
        update(&mut app, key(KeyCode::Enter));
        assert_eq!(app.output.as_str(), "\u{1D41A}1 !\n");
    }

    #[test]
    fn modifier_keys_never_type() {
        let mut app = app();
        update(&mut app, key_with(KeyCode::Char('a'), KeyModifiers::ALT));
        update(&mut app, key_with(KeyCode::Char('x'), KeyModifiers::CONTROL));
        update(&mut app, key_with(KeyCode::Char('s'), KeyModifiers::SUPER));
        assert!(app.output.is_empty());

        update(&mut app, key_with(KeyCode::Char('A'), KeyModifiers::SHIFT));
        assert_eq!(app.output.as_str(), "A");
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = app();
        let mut release = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        update(&mut app, UiEvent::Terminal(Event::Key(release)));
        assert!(app.output.is_empty());
    }

    #[test]
    fn backspace_pops_one_char() {
        let mut app = app();
        app.session.select_style(StyleName::Strikethrough);
        type_str(&mut app, "ab");
        update(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.output.as_str(), "a\u{0336}b");
    }

    #[test]
    fn tab_cycles_styles_and_resets_caps() {
        let mut app = app();
        update(&mut app, key_with(KeyCode::Char('k'), KeyModifiers::CONTROL));
        assert!(app.session.caps_active);

        update(&mut app, key(KeyCode::Tab));
        assert_eq!(app.session.current_style, StyleName::Bold);
        assert!(!app.session.caps_active);

        update(&mut app, key(KeyCode::BackTab));
        update(&mut app, key(KeyCode::BackTab));
        assert_eq!(app.session.current_style, StyleName::Tiny);
    }

    #[test]
    fn caps_applies_to_physical_letters() {
        let mut app = app();
        update(&mut app, key_with(KeyCode::Char('k'), KeyModifiers::CONTROL));
        type_str(&mut app, "g");
        assert_eq!(app.output.as_str(), "G");
    }

    #[test]
    fn quit_shortcuts() {
        let mut app = app();
        let effects = update(&mut app, key_with(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert_eq!(effects, vec![UiEffect::Quit]);
        let effects = update(&mut app, key_with(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(effects, vec![UiEffect::Quit]);
    }

    #[test]
    fn clear_empties_buffer() {
        let mut app = app();
        type_str(&mut app, "abc");
        update(&mut app, key_with(KeyCode::Char('l'), KeyModifiers::CONTROL));
        assert!(app.output.is_empty());
        assert_eq!(app.focus, Focus::Output);
    }

    #[test]
    fn copy_emits_verbatim_buffer() {
        let mut app = app();
        app.output.push_str(" \u{1D421} ");
        let effects = update(&mut app, key_with(KeyCode::Char('y'), KeyModifiers::CONTROL));
        assert_eq!(
            effects,
            vec![UiEffect::CopyToClipboard {
                text: " \u{1D421} ".to_string()
            }]
        );
    }

    #[test]
    fn copy_of_blank_buffer_does_nothing() {
        let mut app = app();
        app.output.push_str("  \n ");
        let effects = update(&mut app, key_with(KeyCode::Char('y'), KeyModifiers::CONTROL));
        assert!(effects.is_empty());
        assert!(!app.toolbar.copy_feedback.is_showing());
    }

    #[test]
    fn copy_confirmation_reverts_after_feedback_duration() {
        let mut app = app();
        let t0 = Instant::now();
        update_at(&mut app, UiEvent::ClipboardCopied, t0);
        assert!(app.toolbar.copy_feedback.is_showing());

        update_at(&mut app, UiEvent::Tick, t0 + Duration::from_millis(1900));
        assert!(app.toolbar.copy_feedback.is_showing());

        update_at(&mut app, UiEvent::Tick, t0 + Duration::from_millis(2100));
        assert!(!app.toolbar.copy_feedback.is_showing());
    }

    #[test]
    fn copy_failure_shows_notice_and_keeps_buffer() {
        let mut app = app();
        app.output.push_str("x");
        let t0 = Instant::now();
        update_at(
            &mut app,
            UiEvent::ClipboardFailed {
                error: "no display".to_string(),
            },
            t0,
        );
        assert_eq!(
            app.status.notice().map(|n| n.text.as_str()),
            Some("Copy failed: no display")
        );
        assert!(!app.toolbar.copy_feedback.is_showing());
        assert_eq!(app.output.as_str(), "x");
    }

    #[test]
    fn paste_is_inserted_verbatim() {
        let mut app = app();
        app.session.select_style(StyleName::Bold);
        update(&mut app, UiEvent::Terminal(Event::Paste("hi there".to_string())));
        assert_eq!(app.output.as_str(), "hi there");
    }

    #[test]
    fn emoji_panel_toggle_moves_focus() {
        let mut app = app();
        update(&mut app, key_with(KeyCode::Char('e'), KeyModifiers::CONTROL));
        assert!(app.session.emoji_panel_visible);
        assert_eq!(app.focus, Focus::EmojiPanel);

        // Letters do not type while the panel has focus.
        type_str(&mut app, "a");
        assert!(app.output.is_empty());

        update(&mut app, key(KeyCode::Esc));
        assert!(!app.session.emoji_panel_visible);
        assert_eq!(app.focus, Focus::Output);
    }

    #[test]
    fn enter_inserts_selected_emoji() {
        let mut app = app();
        app.emoji.set_columns(10);
        update(&mut app, key_with(KeyCode::Char('e'), KeyModifiers::CONTROL));
        update(&mut app, key(KeyCode::Right));
        update(&mut app, key(KeyCode::Enter));
        assert_eq!(app.output.as_str(), "😂");
        assert_eq!(app.focus, Focus::Output);
    }

    #[test]
    fn clicking_a_long_entry_inserts_nothing() {
        let config = Config {
            emoji: vec!["abc".to_string()],
            ..Config::default()
        };
        let mut app = AppState::new(&config, None);
        app.toggle_emoji_panel();
        record_hits(&app);

        update(&mut app, click(0, 2));
        assert!(app.output.is_empty());
        assert!(app.session.emoji_panel_visible);
    }

    #[test]
    fn clicking_an_entry_appends_it() {
        let mut app = app();
        app.toggle_emoji_panel();
        record_hits(&app);

        update(&mut app, click(0, 2));
        assert_eq!(app.output.as_str(), "😀");
        assert_eq!(app.focus, Focus::Output);
        assert!(app.session.emoji_panel_visible);
    }

    #[test]
    fn click_on_hidden_panel_inserts_nothing() {
        let mut app = app();
        update(&mut app, key_with(KeyCode::Char('e'), KeyModifiers::CONTROL));
        record_hits(&app);
        update(&mut app, key_with(KeyCode::Char('e'), KeyModifiers::CONTROL));
        assert!(!app.session.emoji_panel_visible);

        // No frame drawn yet: the hit map still has the panel's entries.
        update(&mut app, click(0, 2));
        assert!(app.output.is_empty());
        assert!(!app.session.emoji_panel_visible);
        assert_eq!(app.focus, Focus::Output);
    }

    #[test]
    fn outside_click_closes_emoji_panel() {
        let mut app = app();
        app.toggle_emoji_panel();
        record_hits(&app);

        update(&mut app, click(5, 0));
        assert!(!app.session.emoji_panel_visible);
        assert_eq!(app.focus, Focus::Output);
    }

    #[test]
    fn click_in_action_cluster_keeps_panel() {
        let mut app = app();
        app.toggle_emoji_panel();
        app.output.push_str("x");
        record_hits(&app);

        let effects = update(&mut app, click(0, 1));
        assert!(app.session.emoji_panel_visible);
        assert_eq!(
            effects,
            vec![UiEffect::CopyToClipboard {
                text: "x".to_string()
            }]
        );

        update(&mut app, click(1, 1));
        assert!(!app.session.emoji_panel_visible);
    }

    #[test]
    fn virtual_key_click_types_and_closes_panel() {
        let mut app = app();
        app.session.select_style(StyleName::Italic);
        app.toggle_emoji_panel();
        record_hits(&app);

        update(&mut app, click(0, 3));
        assert_eq!(app.output.as_str(), "\u{1D44E}");
        assert!(!app.session.emoji_panel_visible);
    }

    #[test]
    fn tick_expires_notice() {
        let mut app = app();
        let t0 = Instant::now();
        app.status.show_error("boom", t0);
        update_at(&mut app, UiEvent::Tick, t0 + Duration::from_secs(5));
        assert!(app.status.notice().is_none());
    }
}
