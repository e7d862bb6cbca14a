// SPDX-License-Identifier: MPL-2.0
//! `portfolio` is a single-page portfolio site.
//!
//! The [`server`] module hosts the static files. The rest of the crate models
//! the page's behaviour: the controllers in [`ui`] and [`i18n`] react to
//! events against an in-memory [`dom::Document`], wired together by
//! [`app::Page`].

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod i18n;
pub mod server;
pub mod ui;
