// SPDX-License-Identifier: MPL-2.0
//! Visitor state persistence using CBOR format.
//!
//! This is the site's equivalent of browser local storage: state that
//! outlives a visit but is not part of the operator's `settings.toml`.
//! Today it holds a single entry, the language the visitor picked by hand.
//!
//! # Path Resolution
//!
//! 1. Use `load_from()`/`save_to()` with explicit path override
//! 2. Set `PORTFOLIO_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the data directory.
const STATE_FILE: &str = "state.cbor";

/// State that persists across visits.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SiteState {
    /// Language code chosen through the language switcher.
    ///
    /// Once set it overrides every automatic detection until cleared.
    #[serde(default)]
    pub preferred_language: Option<String>,
}

impl SiteState {
    /// Loads state from a custom directory, or the default one for `None`.
    ///
    /// A missing file is not an error and yields the default state.
    pub fn load_from(base_dir: Option<PathBuf>) -> Result<Self> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let file = fs::File::open(&path)?;
        ciborium::from_reader(BufReader::new(file))
            .map_err(|e| Error::Storage(format!("{}: {}", path.display(), e)))
    }

    /// Saves state to a custom directory, or the default one for `None`.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Result<()> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Err(Error::Storage("no data directory available".to_string()));
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = fs::File::create(&path)?;
        ciborium::into_writer(self, BufWriter::new(file))
            .map_err(|e| Error::Storage(format!("{}: {}", path.display(), e)))
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }
}
