// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the site. Constants are organized by category.
//!
//! # Categories
//!
//! - **Server**: Listening port and document root
//! - **Navigation**: Scroll thresholds and header clearance
//! - **Typing**: Hero typing effect pacing and phrases
//! - **Localization**: Default language and geo lookup endpoint
//! - **Tooltip**: Private project tooltip timing

// ==========================================================================
// Server Defaults
// ==========================================================================

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 80;

/// Default directory the static files are served from.
pub const DEFAULT_ROOT_DIR: &str = "public";

/// Main document, served for `/`.
pub const INDEX_DOCUMENT: &str = "index.html";

/// Error document, served for `/404` and every unmatched path.
pub const NOT_FOUND_DOCUMENT: &str = "404.html";

/// Debug document, served for `/debug`.
pub const DEBUG_DOCUMENT: &str = "debug.html";

// ==========================================================================
// Navigation Defaults
// ==========================================================================

/// Scroll offset (px) past which the navbar switches to its compact style.
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 100.0;

/// Lookahead (px) added to the scroll offset when picking the active section.
pub const DEFAULT_SECTION_LOOKAHEAD_PX: f64 = 200.0;

/// Fixed header height (px) kept clear when scrolling to a section.
pub const DEFAULT_HEADER_OFFSET_PX: f64 = 70.0;

// ==========================================================================
// Typing Defaults
// ==========================================================================

/// Delay between two typed characters (ms). Deleting runs at half of it.
pub const DEFAULT_TYPING_SPEED_MS: u64 = 100;

/// Pause once a phrase is fully typed (ms).
pub const DEFAULT_TYPING_PAUSE_MS: u64 = 2000;

/// Phrases cycled by the hero typing effect.
pub const DEFAULT_TYPING_TEXTS: [&str; 3] =
    ["CEO & Fundador", "Backend Developer", "Tech Innovator"];

// ==========================================================================
// Localization Defaults
// ==========================================================================

/// Language used when no other source yields a supported one.
pub const DEFAULT_LANGUAGE: &str = "pt";

/// IP geolocation endpoint; must answer JSON with a `country_code` field.
pub const DEFAULT_GEO_ENDPOINT: &str = "https://ipapi.co/json/";

/// Upper bound for the geo lookup (ms).
pub const DEFAULT_GEO_TIMEOUT_MS: u64 = 5000;

// ==========================================================================
// Tooltip Defaults
// ==========================================================================

/// How long the private project tooltip stays up (ms).
pub const DEFAULT_TOOLTIP_DURATION_MS: u64 = 3000;

/// Delay before an outside click may dismiss the tooltip (ms).
pub const DEFAULT_TOOLTIP_ARM_DELAY_MS: u64 = 100;

/// Minimum tooltip duration (ms).
pub const MIN_TOOLTIP_DURATION_MS: u64 = 500;

/// Maximum tooltip duration (ms).
pub const MAX_TOOLTIP_DURATION_MS: u64 = 30_000;
