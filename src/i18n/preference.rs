// SPDX-License-Identifier: MPL-2.0
//! Where the visitor's explicit language choice is remembered.

use crate::app::persisted_state::SiteState;
use crate::error::Result;
use std::path::PathBuf;

/// Storage for the language picked through the switcher.
pub trait PreferenceStore {
    fn load(&self) -> Result<Option<String>>;
    fn save(&mut self, code: &str) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
}

/// Keeps the preference in the CBOR state file.
#[derive(Debug, Clone, Default)]
pub struct FileStore {
    base_dir: Option<PathBuf>,
}

impl FileStore {
    /// `None` uses the default data directory.
    #[must_use]
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self { base_dir }
    }

    fn update(&self, preferred_language: Option<String>) -> Result<()> {
        // Read-modify-write so other entries of the state file survive
        let mut state = SiteState::load_from(self.base_dir.clone()).unwrap_or_default();
        state.preferred_language = preferred_language;
        state.save_to(self.base_dir.clone())
    }
}

impl PreferenceStore for FileStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(SiteState::load_from(self.base_dir.clone())?.preferred_language)
    }

    fn save(&mut self, code: &str) -> Result<()> {
        self.update(Some(code.to_string()))
    }

    fn clear(&mut self) -> Result<()> {
        self.update(None)
    }
}

/// In-memory store, for tests and for visits that should leave no trace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    value: Option<String>,
}

impl MemoryStore {
    #[must_use]
    pub fn with_value(code: impl Into<String>) -> Self {
        Self {
            value: Some(code.into()),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.value.clone())
    }

    fn save(&mut self, code: &str) -> Result<()> {
        self.value = Some(code.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.value = None;
        Ok(())
    }
}
