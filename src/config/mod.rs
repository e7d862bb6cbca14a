// SPDX-License-Identifier: MPL-2.0
//! This module handles the site's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[server]` - Listening port and document root
//! - `[navigation]` - Navbar and active-section thresholds
//! - `[typing]` - Hero typing effect
//! - `[localization]` - Default language and geo lookup
//! - `[tooltip]` - Private project tooltip timing
//!
//! Every section and every field is optional; anything missing takes the
//! value from [`defaults`].
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. CLI `--config-dir` or `PORTFOLIO_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use portfolio::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.server.port = 8080;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Static asset host settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding `index.html`, `404.html`, `debug.html` and assets.
    pub root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            root: PathBuf::from(DEFAULT_ROOT_DIR),
        }
    }
}

/// Navbar behaviour.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavigationConfig {
    pub scroll_threshold: f64,
    pub section_lookahead: f64,
    pub header_offset: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD_PX,
            section_lookahead: DEFAULT_SECTION_LOOKAHEAD_PX,
            header_offset: DEFAULT_HEADER_OFFSET_PX,
        }
    }
}

/// Hero typing effect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TypingConfig {
    pub texts: Vec<String>,
    pub speed_ms: u64,
    pub pause_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            texts: DEFAULT_TYPING_TEXTS.iter().map(ToString::to_string).collect(),
            speed_ms: DEFAULT_TYPING_SPEED_MS,
            pause_ms: DEFAULT_TYPING_PAUSE_MS,
        }
    }
}

impl TypingConfig {
    #[must_use]
    pub fn speed(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }

    #[must_use]
    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}

/// Language detection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LocalizationConfig {
    pub default_language: String,
    /// Whether to ask the geo endpoint for the visitor's country.
    pub geo_lookup: bool,
    pub geo_endpoint: String,
    pub geo_timeout_ms: u64,
}

impl Default for LocalizationConfig {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_string(),
            geo_lookup: true,
            geo_endpoint: DEFAULT_GEO_ENDPOINT.to_string(),
            geo_timeout_ms: DEFAULT_GEO_TIMEOUT_MS,
        }
    }
}

/// Private project tooltip.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TooltipConfig {
    pub duration_ms: u64,
    pub arm_delay_ms: u64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_TOOLTIP_DURATION_MS,
            arm_delay_ms: DEFAULT_TOOLTIP_ARM_DELAY_MS,
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub navigation: NavigationConfig,
    pub typing: TypingConfig,
    pub localization: LocalizationConfig,
    pub tooltip: TooltipConfig,
}

// =============================================================================
// Load/Save Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Returns the config and an optional warning. A missing file is not a
/// warning; an unreadable or invalid one is, and yields the defaults.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("{}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
