// SPDX-License-Identifier: MPL-2.0
//! Events fed to the page runtime.

/// What a click landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    Hamburger,
    /// Nav link, by index in `Document::nav_links`.
    NavLink(usize),
    /// A project card, outside its link.
    CardBody(usize),
    /// A project card's own `.project-link`.
    CardLink(usize),
    /// An entry of the language dropdown, by code.
    LanguageOption(String),
    /// Anything else on the page.
    Elsewhere,
}

/// Top-level messages consumed by `Page::update`.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Scrolled(f64),
    /// A click at viewport coordinates `(x, y)`.
    Click { target: ClickTarget, x: f64, y: f64 },
    CardHovered(usize),
    CardLeft(usize),
    ProfileImageFailed,
    /// Periodic tick for the tooltip auto-dismiss.
    Tick,
}

impl Message {
    /// A click without meaningful coordinates.
    #[must_use]
    pub fn click(target: ClickTarget) -> Self {
        Message::Click {
            target,
            x: 0.0,
            y: 0.0,
        }
    }
}
