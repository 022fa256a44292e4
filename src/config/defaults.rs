// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for locale selection and persistence.
//!
//! This module serves as the single source of truth for the constants shared by
//! the resolver and the settings file.

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale selected when neither a stored preference nor the host points elsewhere.
pub const DEFAULT_LOCALE_TAG: &str = "en";

/// Substring of a lowercased host language tag that selects Chinese.
pub const CHINESE_HOST_MARKER: &str = "zh";

// ==========================================================================
// Persistence Defaults
// ==========================================================================

/// File name of the settings file inside the config directory.
pub const CONFIG_FILE: &str = "settings.toml";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(!DEFAULT_LOCALE_TAG.is_empty());
    assert!(!CHINESE_HOST_MARKER.is_empty());
    assert!(!CONFIG_FILE.is_empty());
};
