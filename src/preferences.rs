// SPDX-License-Identifier: MPL-2.0
//! Port for the persisted `language` preference, plus its adapters.
//!
//! - [`SettingsStore`]: backed by `settings.toml` in the config directory
//! - [`MemoryPreference`]: process-local, for embedding and tests
//!
//! Values are stored and returned verbatim. Validation is the resolver's call.

use crate::config::{self, Config};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Read/write access to the stored language preference.
pub trait LanguagePreference {
    /// The stored tag, if any.
    fn stored_language(&self) -> Option<String>;

    /// Persists `tag` as the preference for future sessions.
    fn store_language(&mut self, tag: &str) -> Result<()>;
}

/// Language preference kept in memory only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPreference {
    language: Option<String>,
}

impl MemoryPreference {
    pub fn new(language: Option<String>) -> Self {
        Self { language }
    }
}

impl LanguagePreference for MemoryPreference {
    fn stored_language(&self) -> Option<String> {
        self.language.clone()
    }

    fn store_language(&mut self, tag: &str) -> Result<()> {
        self.language = Some(tag.to_string());
        Ok(())
    }
}

/// Language preference persisted in `settings.toml`.
///
/// The file is read once on open. Writes go straight to disk.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: Option<PathBuf>,
    config: Config,
}

impl SettingsStore {
    /// Opens the settings file in the default config directory.
    pub fn open() -> Self {
        Self::open_with_override(None)
    }

    /// Opens the settings file in `config_dir`, or the default directory when `None`.
    ///
    /// An unreadable file is logged and treated as empty; the next write replaces it.
    pub fn open_with_override(config_dir: Option<PathBuf>) -> Self {
        let path = config::config_path_with_override(config_dir.clone());
        let (config, _warning) = config::load_with_override(config_dir);
        Self { path, config }
    }

    /// Opens a settings file at an explicit path, failing if it exists but cannot be read.
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            config::load_from_path(path)?
        } else {
            Config::default()
        };
        Ok(Self {
            path: Some(path.to_path_buf()),
            config,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl LanguagePreference for SettingsStore {
    fn stored_language(&self) -> Option<String> {
        self.config.general.language.clone()
    }

    fn store_language(&mut self, tag: &str) -> Result<()> {
        self.config.general.language = Some(tag.to_string());
        match &self.path {
            Some(path) => config::save_to_path(&self.config, path),
            None => {
                tracing::warn!("no config directory available; language preference kept for this session only");
                Ok(())
            }
        }
    }
}
