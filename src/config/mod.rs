// SPDX-License-Identifier: MPL-2.0
//! This module handles the persisted user preferences, stored in a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Display language
//!
//! # Migration
//!
//! Old flat files carrying a top-level `language = "..."` are migrated to the
//! sectioned format when loaded. The next save writes the new format.
//!
//! # Examples
//!
//! ```no_run
//! use mixtex_locale::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("zh".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GeneralConfig {
    /// UI language tag (e.g., "en", "zh"). Stored verbatim, never validated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
}

/// Legacy flat configuration format.
#[derive(Debug, Deserialize)]
struct LegacyConfig {
    #[serde(default)]
    language: Option<String>,
}

impl From<LegacyConfig> for Config {
    fn from(legacy: LegacyConfig) -> Self {
        Config {
            general: GeneralConfig {
                language: legacy.language,
            },
        }
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the settings file path with an optional config directory override.
pub fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). A file that exists but cannot
/// be read yields the default config together with the error that caused it.
pub fn load() -> (Config, Option<Error>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<Error>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable settings file");
                    return (Config::default(), Some(err));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// Automatically migrates the legacy flat format to the sectioned format.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;

    if let Ok(config) = toml::from_str::<Config>(&content) {
        if content.contains("[general]") || config != Config::default() {
            return Ok(config);
        }
    }

    if let Ok(legacy) = toml::from_str::<LegacyConfig>(&content) {
        return Ok(Config::from(legacy));
    }

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
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
