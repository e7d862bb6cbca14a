// SPDX-License-Identifier: MPL-2.0
//! Mobile menu open/closed state.

use crate::dom::BarStyle;

/// Whether the mobile navigation menu is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// Returns the opposite state.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Styles of the three hamburger bars for this state.
    ///
    /// Open turns the bars into a cross: the top one rotates down, the middle
    /// one fades out and the bottom one rotates up. Closed clears every style.
    #[must_use]
    pub fn bar_styles(self) -> [BarStyle; 3] {
        match self {
            MenuState::Closed => [BarStyle::default(); 3],
            MenuState::Open => [
                BarStyle {
                    transform: Some("rotate(45deg) translate(6px, 6px)"),
                    opacity: None,
                },
                BarStyle {
                    transform: None,
                    opacity: Some("0"),
                },
                BarStyle {
                    transform: Some("rotate(-45deg) translate(6px, -6px)"),
                    opacity: None,
                },
            ],
        }
    }
}
