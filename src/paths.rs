// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - `--config-dir` on the command line, or a test path
//! 2. **Environment variable** - `MIXTEX_CONFIG_DIR`
//! 3. **Platform default** - via `dirs` crate, with the app name appended
//!
//! Overrides are passed explicitly; there is no process-wide override.

use std::path::PathBuf;

/// Application name used for directory naming.
pub const APP_NAME: &str = "MixTeX";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "MIXTEX_CONFIG_DIR";

/// Returns the application config directory path.
///
/// - Linux: `~/.config/MixTeX/`
/// - macOS: `~/Library/Application Support/MixTeX/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\MixTeX\`
///
/// Returns `None` if the config directory cannot be determined.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
///
/// An empty `MIXTEX_CONFIG_DIR` is treated as unset.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
