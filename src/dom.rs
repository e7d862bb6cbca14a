// SPDX-License-Identifier: MPL-2.0
//! In-memory model of the page the controllers work on.
//!
//! The controllers never talk to each other; they only read and write this
//! document. Each element the page may or may not contain is an `Option`,
//! and a controller that finds `None` simply skips that effect.

/// Visual style of one hamburger bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BarStyle {
    pub transform: Option<&'static str>,
    pub opacity: Option<&'static str>,
}

/// `#navbar`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navbar {
    pub scrolled: bool,
}

/// `#hamburger` and its three `.bar` children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hamburger {
    pub active: bool,
    pub bars: [BarStyle; 3],
}

/// `#nav-menu`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavMenu {
    pub active: bool,
}

/// A `.nav-link`, bound to a section through its `#fragment` href.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub active: bool,
}

impl NavLink {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            active: false,
        }
    }

    /// Id of the section the link points at, if the href is a fragment.
    #[must_use]
    pub fn target_id(&self) -> Option<&str> {
        self.href.strip_prefix('#').filter(|id| !id.is_empty())
    }
}

/// A `section[id]` with its laid-out geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Whether `position` lies in `[top, top + height)`.
    #[must_use]
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

/// A `window.scrollTo` issued by a controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

/// An element carrying a `data-translate` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatableNode {
    pub key: String,
    pub text: String,
}

impl TranslatableNode {
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
        }
    }
}

/// `.project-overlay` inside a card.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Overlay {
    pub opacity: f32,
}

/// A `.project-card`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectCard {
    pub overlay: Option<Overlay>,
    /// `href` of the card's `.project-link`, when it has one.
    pub link: Option<String>,
}

/// The floating "private project" tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub left: f64,
    pub top: f64,
    pub title: String,
    pub message: String,
}

/// One entry of the language dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    pub code: String,
    pub label: String,
}

/// The fixed language selector in the page corner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageSwitcher {
    pub label: String,
    pub options: Vec<LanguageOption>,
}

/// `.profile-photo` and the fallback avatar that replaces it on error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileImage {
    pub hidden: bool,
    pub fallback: Option<String>,
}

/// The whole page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// `window.location.href`.
    pub location: String,
    /// `<html lang>`.
    pub lang: String,
    pub scroll_y: f64,
    pub last_scroll_request: Option<ScrollRequest>,
    pub navbar: Option<Navbar>,
    pub hamburger: Option<Hamburger>,
    pub nav_menu: Option<NavMenu>,
    pub nav_links: Vec<NavLink>,
    pub sections: Vec<Section>,
    /// `#typing-text` content.
    pub typing_text: Option<String>,
    pub translatable: Vec<TranslatableNode>,
    pub project_cards: Vec<ProjectCard>,
    pub tooltip: Option<Tooltip>,
    pub language_switcher: Option<LanguageSwitcher>,
    pub profile_image: Option<ProfileImage>,
    /// URLs opened in a new tab, oldest first.
    pub opened_tabs: Vec<String>,
}

impl Document {
    /// The first section whose id is `id`.
    #[must_use]
    pub fn section_by_id(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// The currently highlighted nav link, if any.
    #[must_use]
    pub fn active_link(&self) -> Option<&NavLink> {
        self.nav_links.iter().find(|link| link.active)
    }

    /// Text of the first node carrying `key`.
    #[must_use]
    pub fn text_of(&self, key: &str) -> Option<&str> {
        self.translatable
            .iter()
            .find(|node| node.key == key)
            .map(|node| node.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_link_target_id_strips_fragment_marker() {
        assert_eq!(NavLink::new("#about").target_id(), Some("about"));
        assert_eq!(NavLink::new("#").target_id(), None);
        assert_eq!(NavLink::new("https://example.com").target_id(), None);
    }

    #[test]
    fn section_range_is_half_open() {
        let section = Section::new("home", 0.0, 500.0);
        assert!(section.contains(0.0));
        assert!(section.contains(499.9));
        assert!(!section.contains(500.0));
        assert!(!section.contains(-1.0));
    }

    #[test]
    fn lookups_find_first_match() {
        let mut doc = Document::default();
        doc.sections.push(Section::new("about", 600.0, 400.0));
        doc.translatable.push(TranslatableNode::new("nav-home", "Início"));
        doc.nav_links.push(NavLink::new("#about"));

        assert_eq!(doc.section_by_id("about").map(|s| s.top), Some(600.0));
        assert!(doc.section_by_id("missing").is_none());
        assert_eq!(doc.text_of("nav-home"), Some("Início"));
        assert!(doc.active_link().is_none());
    }
}
