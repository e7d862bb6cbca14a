// SPDX-License-Identifier: MPL-2.0
//! Small state types shared by the page controllers.

pub mod menu;
pub mod tooltip_timeout;

pub use menu::MenuState;
pub use tooltip_timeout::TooltipTimeout;
