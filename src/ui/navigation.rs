// SPDX-License-Identifier: MPL-2.0
//! Navigation bar controller.
//!
//! Owns the mobile menu state and keeps the navbar in sync with the scroll
//! position: the compact "scrolled" style, the highlighted link of the
//! section being read, and smooth scrolling when a link is clicked.

use super::state::MenuState;
use crate::config::NavigationConfig;
use crate::dom::{Document, ScrollBehavior, ScrollRequest, Section};

/// Messages handled by the navigation controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The window scrolled to this vertical offset.
    Scrolled(f64),
    HamburgerClicked,
    /// The nav link at this index was clicked.
    LinkClicked(usize),
}

/// What the browser should do with the triggering event afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    /// The default action (jumping to the fragment) is suppressed.
    PreventDefault,
}

#[derive(Debug, Clone, Default)]
pub struct Navigation {
    menu: MenuState,
    config: NavigationConfig,
}

impl Navigation {
    #[must_use]
    pub fn new(config: NavigationConfig) -> Self {
        Self {
            menu: MenuState::Closed,
            config,
        }
    }

    #[must_use]
    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn update(&mut self, message: Message, doc: &mut Document) -> Propagation {
        match message {
            Message::Scrolled(y) => {
                self.on_scroll(y, doc);
                Propagation::Continue
            }
            Message::HamburgerClicked => {
                self.on_hamburger_click(doc);
                Propagation::Continue
            }
            Message::LinkClicked(index) => self.on_nav_link_click(index, doc),
        }
    }

    /// Updates the navbar style and the active link for a new scroll offset.
    pub fn on_scroll(&self, y: f64, doc: &mut Document) {
        doc.scroll_y = y;

        if let Some(navbar) = doc.navbar.as_mut() {
            navbar.scrolled = y > self.config.scroll_threshold;
        }

        self.highlight_active_link(doc);
    }

    pub fn on_hamburger_click(&mut self, doc: &mut Document) {
        self.menu = self.menu.toggled();
        apply_menu_state(self.menu, doc);
    }

    /// Closes the menu, then smooth-scrolls to the link's section.
    ///
    /// The default jump is always prevented, even when the link has no
    /// matching section.
    pub fn on_nav_link_click(&mut self, index: usize, doc: &mut Document) -> Propagation {
        self.close_menu(doc);

        let target_top = doc
            .nav_links
            .get(index)
            .and_then(|link| link.target_id())
            .and_then(|id| doc.section_by_id(id))
            .map(|section| section.top);

        if let Some(top) = target_top {
            doc.last_scroll_request = Some(ScrollRequest {
                top: (top - self.config.header_offset).max(0.0),
                behavior: ScrollBehavior::Smooth,
            });
        }

        Propagation::PreventDefault
    }

    pub fn close_menu(&mut self, doc: &mut Document) {
        self.menu = MenuState::Closed;
        apply_menu_state(self.menu, doc);
    }

    fn highlight_active_link(&self, doc: &mut Document) {
        let Some(id) = active_section(&doc.sections, doc.scroll_y, self.config.section_lookahead)
            .map(|section| section.id.clone())
        else {
            return;
        };

        for link in &mut doc.nav_links {
            link.active = link.target_id() == Some(id.as_str());
        }
    }
}

/// Picks the section under `scroll_y + lookahead`.
///
/// When several ranges contain the probe the last one in document order
/// wins. `None` means no section matched and the highlight stays as is.
#[must_use]
pub fn active_section(sections: &[Section], scroll_y: f64, lookahead: f64) -> Option<&Section> {
    let probe = scroll_y + lookahead;
    sections.iter().rev().find(|section| section.contains(probe))
}

fn apply_menu_state(menu: MenuState, doc: &mut Document) {
    if let Some(hamburger) = doc.hamburger.as_mut() {
        hamburger.active = menu.is_open();
        hamburger.bars = menu.bar_styles();
    }
    if let Some(nav_menu) = doc.nav_menu.as_mut() {
        nav_menu.active = menu.is_open();
    }
}
