// SPDX-License-Identifier: MPL-2.0
//! Project cards: hover overlay, click-through and the private tooltip.
//!
//! Clicking a card opens its public link in a new tab. Cards without one
//! are private projects; clicking them pops a tooltip next to the pointer
//! that goes away after a while or on the next click elsewhere.

use super::state::TooltipTimeout;
use crate::config::TooltipConfig;
use crate::dom::{Document, Overlay, Tooltip};
use std::time::{Duration, Instant};

pub const PRIVATE_TITLE: &str = "Projeto Privado";
pub const PRIVATE_MESSAGE: &str =
    "Este projeto é comercial e não está disponível publicamente";

/// Avatar shown when the profile photo fails to load.
pub const PROFILE_FALLBACK: &str = "👨‍💼";

/// Tooltip offset from the pointer, in px.
const TOOLTIP_OFFSET_X: f64 = 10.0;
const TOOLTIP_OFFSET_Y: f64 = -10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The card's own `.project-link`.
    Link,
    /// Anywhere else on the card.
    Body,
}

/// What a card click resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    /// Let the link's default navigation happen.
    FollowLink,
    OpenExternal(String),
    ShowTooltip,
    /// No card at that index.
    Ignored,
}

/// Bookkeeping for the tooltip currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TooltipTimer {
    shown_at: Instant,
}

#[derive(Debug, Clone)]
pub struct ProjectCards {
    timeout: TooltipTimeout,
    arm_delay: Duration,
    tooltip: Option<TooltipTimer>,
}

impl Default for ProjectCards {
    fn default() -> Self {
        Self::new(TooltipConfig::default())
    }
}

impl ProjectCards {
    #[must_use]
    pub fn new(config: TooltipConfig) -> Self {
        Self {
            timeout: TooltipTimeout::new(config.duration_ms),
            arm_delay: Duration::from_millis(config.arm_delay_ms),
            tooltip: None,
        }
    }

    pub fn on_hover(&self, index: usize, doc: &mut Document) {
        set_overlay_opacity(index, 1.0, doc);
    }

    pub fn on_leave(&self, index: usize, doc: &mut Document) {
        set_overlay_opacity(index, 0.0, doc);
    }

    pub fn on_click(
        &mut self,
        index: usize,
        target: ClickTarget,
        pointer: (f64, f64),
        now: Instant,
        doc: &mut Document,
    ) -> CardAction {
        let Some(card) = doc.project_cards.get(index) else {
            return CardAction::Ignored;
        };

        if target == ClickTarget::Link {
            return CardAction::FollowLink;
        }

        match card.link.as_deref().map(|href| resolve_href(href, &doc.location)) {
            Some(href) if is_public_link(&href, &doc.location) => {
                tracing::debug!(%href, "opening project in new tab");
                doc.opened_tabs.push(href.clone());
                CardAction::OpenExternal(href)
            }
            _ => {
                self.show_tooltip(pointer, now, doc);
                CardAction::ShowTooltip
            }
        }
    }

    /// Handles a click that reached the document, after the target's own
    /// handler ran. Dismisses the tooltip once it is armed.
    pub fn on_document_click(&mut self, now: Instant, doc: &mut Document) {
        if let Some(timer) = self.tooltip {
            if now.saturating_duration_since(timer.shown_at) >= self.arm_delay {
                self.dismiss(doc);
            }
        }
    }

    /// Removes the tooltip once its time is up.
    pub fn tick(&mut self, now: Instant, doc: &mut Document) {
        if let Some(deadline) = self.tooltip_deadline() {
            if now >= deadline {
                self.dismiss(doc);
            }
        }
    }

    /// When the visible tooltip will expire on its own.
    #[must_use]
    pub fn tooltip_deadline(&self) -> Option<Instant> {
        self.tooltip
            .map(|timer| timer.shown_at + self.timeout.as_duration())
    }

    /// Hides the broken profile photo and puts the fallback avatar in place.
    pub fn on_profile_image_error(&self, doc: &mut Document) {
        if let Some(image) = doc.profile_image.as_mut() {
            tracing::info!("profile image not found, using fallback");
            image.hidden = true;
            image.fallback = Some(PROFILE_FALLBACK.to_string());
        }
    }

    fn show_tooltip(&mut self, pointer: (f64, f64), now: Instant, doc: &mut Document) {
        let (x, y) = pointer;
        // Replaces whatever tooltip was showing
        doc.tooltip = Some(Tooltip {
            left: x + TOOLTIP_OFFSET_X,
            top: y + TOOLTIP_OFFSET_Y,
            title: PRIVATE_TITLE.to_string(),
            message: PRIVATE_MESSAGE.to_string(),
        });
        self.tooltip = Some(TooltipTimer { shown_at: now });
    }

    fn dismiss(&mut self, doc: &mut Document) {
        self.tooltip = None;
        doc.tooltip = None;
    }
}

/// The absolute URL a link attribute points at from `location`.
///
/// An empty attribute is the page itself; a bare fragment is appended to
/// the page URL.
#[must_use]
pub fn resolve_href(href: &str, location: &str) -> String {
    let href = href.trim();
    if href.is_empty() {
        location.to_string()
    } else if href.starts_with('#') {
        let page = location.split('#').next().unwrap_or(location);
        format!("{page}{href}")
    } else {
        href.to_string()
    }
}

/// Whether `href` leads somewhere real, as opposed to a `#` placeholder.
#[must_use]
pub fn is_public_link(href: &str, location: &str) -> bool {
    resolve_href(href, location) != format!("{location}#")
}

fn set_overlay_opacity(index: usize, opacity: f32, doc: &mut Document) {
    if let Some(overlay) = doc
        .project_cards
        .get_mut(index)
        .and_then(|card| card.overlay.as_mut())
    {
        *overlay = Overlay { opacity };
    }
}
