// SPDX-License-Identifier: MPL-2.0
//! Page controllers.
//!
//! Each controller owns its slice of state and mutates the shared
//! [`Document`](crate::dom::Document) in response to events. None of them
//! knows about the others; [`crate::app::Page`] wires them together.
//!
//! - [`navigation`] - Navbar style, active link, mobile menu, smooth scroll
//! - [`typing`] - Typewriter effect for the hero headline
//! - [`project_cards`] - Card overlays, click-through and the private tooltip
//! - [`language_switcher`] - Language dropdown rendering
//! - [`state`] - Small state types (menu, tooltip timeout)

pub mod language_switcher;
pub mod navigation;
pub mod project_cards;
pub mod state;
pub mod typing;
