// SPDX-License-Identifier: MPL-2.0
//! Tooltip lifetime domain type.
//!
//! This module provides a type-safe wrapper for how long the private
//! project tooltip stays on screen, in milliseconds.

use crate::config::{
    DEFAULT_TOOLTIP_DURATION_MS, MAX_TOOLTIP_DURATION_MS, MIN_TOOLTIP_DURATION_MS,
};
use std::time::Duration;

/// Tooltip auto-dismiss timeout in milliseconds.
///
/// The value is always within the valid range (0.5–30 seconds).
///
/// # Example
///
/// ```
/// use portfolio::ui::state::TooltipTimeout;
///
/// let timeout = TooltipTimeout::new(2000);
/// assert_eq!(timeout.value(), 2000);
///
/// // Values outside range are clamped
/// let too_high = TooltipTimeout::new(100_000);
/// assert_eq!(too_high.value(), 30_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooltipTimeout(u64);

impl TooltipTimeout {
    /// Creates a new timeout value, clamping to valid range.
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value.clamp(MIN_TOOLTIP_DURATION_MS, MAX_TOOLTIP_DURATION_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TooltipTimeout {
    fn default() -> Self {
        Self(DEFAULT_TOOLTIP_DURATION_MS)
    }
}
