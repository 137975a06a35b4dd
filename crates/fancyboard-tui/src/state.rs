//! Application state.
//!
//! `AppState` is owned by the runtime and mutated only by the reducer in
//! `update.rs`. Rendering reads it; the only interior mutability is the hit
//! map and the emoji grid width, both rebuilt on every frame.

use fancyboard_core::StyleName;
use fancyboard_core::config::{ClipboardBackend, Config};

use crate::common::HitMap;
use crate::emoji::EmojiPanelState;
use crate::output::OutputBuffer;
use crate::statusline::StatusLineState;
use crate::toolbar::ToolbarState;

/// Where physical key presses go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// Typing edits the output buffer.
    #[default]
    Output,
    /// Arrow keys navigate the emoji panel.
    EmojiPanel,
}

/// Keyboard session: what a key press produces right now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    pub current_style: StyleName,
    pub caps_active: bool,
    pub emoji_panel_visible: bool,
}

impl SessionState {
    pub fn new(style: StyleName) -> Self {
        Self {
            current_style: style,
            ..Self::default()
        }
    }

    /// Switches style. Caps lock never carries over to another style.
    pub fn select_style(&mut self, style: StyleName) {
        self.current_style = style;
        self.caps_active = false;
    }

    pub fn toggle_caps(&mut self) {
        self.caps_active = !self.caps_active;
    }

    /// Flips panel visibility and returns the new value.
    pub fn toggle_emoji_panel(&mut self) -> bool {
        self.emoji_panel_visible = !self.emoji_panel_visible;
        self.emoji_panel_visible
    }

    pub fn close_emoji_panel(&mut self) {
        self.emoji_panel_visible = false;
    }
}

/// Full application state.
#[derive(Debug)]
pub struct AppState {
    pub should_quit: bool,
    pub session: SessionState,
    pub output: OutputBuffer,
    pub focus: Focus,
    pub toolbar: ToolbarState,
    pub emoji: EmojiPanelState,
    pub status: StatusLineState,
    /// Transport used for copy.
    pub clipboard: ClipboardBackend,
    /// Clickable areas recorded by the last render.
    pub hits: HitMap,
}

impl AppState {
    /// Builds the initial state. `style` overrides the configured default.
    pub fn new(config: &Config, style: Option<StyleName>) -> Self {
        Self {
            should_quit: false,
            session: SessionState::new(style.unwrap_or(config.default_style)),
            output: OutputBuffer::new(),
            focus: Focus::Output,
            toolbar: ToolbarState::new(config.copy_feedback()),
            emoji: EmojiPanelState::new(config.emoji_palette()),
            status: StatusLineState::default(),
            clipboard: config.clipboard,
            hits: HitMap::default(),
        }
    }

    /// Shows or hides the emoji panel, moving focus along with it.
    pub fn toggle_emoji_panel(&mut self) {
        self.focus = if self.session.toggle_emoji_panel() {
            Focus::EmojiPanel
        } else {
            Focus::Output
        };
    }

    pub fn close_emoji_panel(&mut self) {
        self.session.close_emoji_panel();
        self.focus = Focus::Output;
    }
}
