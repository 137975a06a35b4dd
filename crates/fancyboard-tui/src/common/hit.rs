//! Mouse hit testing.
//!
//! The render pass records the rectangle of every clickable element into a
//! `HitMap`; the reducer resolves mouse clicks against it. Uses `RefCell` so
//! the map can be rebuilt during the immutable render pass.

use std::cell::RefCell;

use fancyboard_core::StyleName;
use ratatui::layout::{Position, Rect};

use crate::keyboard::VirtualKey;
use crate::toolbar::Action;

/// A clickable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The output buffer.
    Output,
    /// A style selector tab.
    StyleTab(StyleName),
    /// An action button.
    Action(Action),
    /// A key of the on-screen keyboard.
    Key(VirtualKey),
    /// An entry of the emoji panel, by palette index.
    EmojiEntry(usize),
}

/// Areas that matter for closing the emoji panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    EmojiPanel,
    Actions,
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hit {
    /// Topmost clickable element under the pointer.
    pub target: Option<HitTarget>,
    /// Pointer is inside the emoji panel.
    pub in_emoji_panel: bool,
    /// Pointer is inside the action button cluster.
    pub in_actions: bool,
}

impl Hit {
    /// Whether a click here leaves the emoji panel open.
    pub fn keeps_emoji_panel(&self) -> bool {
        self.in_emoji_panel || self.in_actions
    }
}

#[derive(Debug, Default)]
pub struct HitMap {
    targets: RefCell<Vec<(Rect, HitTarget)>>,
    regions: RefCell<Vec<(Rect, HitRegion)>>,
}

impl HitMap {
    /// Forgets everything recorded by the previous render.
    pub fn clear(&self) {
        self.targets.borrow_mut().clear();
        self.regions.borrow_mut().clear();
    }

    /// Records a clickable element. Later entries are on top.
    pub fn push_target(&self, area: Rect, target: HitTarget) {
        if !area.is_empty() {
            self.targets.borrow_mut().push((area, target));
        }
    }

    pub fn push_region(&self, area: Rect, region: HitRegion) {
        if !area.is_empty() {
            self.regions.borrow_mut().push((area, region));
        }
    }

    /// Resolves the cell at (`column`, `row`).
    pub fn hit_test(&self, column: u16, row: u16) -> Hit {
        let position = Position::new(column, row);
        let target = self
            .targets
            .borrow()
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target);
        let regions = self.regions.borrow();
        let in_region = |wanted: HitRegion| {
            regions
                .iter()
                .any(|(area, region)| *region == wanted && area.contains(position))
        };
        Hit {
            target,
            in_emoji_panel: in_region(HitRegion::EmojiPanel),
            in_actions: in_region(HitRegion::Actions),
        }
    }
}
