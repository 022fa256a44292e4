// SPDX-License-Identifier: MPL-2.0
//! Startup language selection.
//!
//! Precedence, first match wins:
//!
//! | Input                          | Selected | Source    |
//! |--------------------------------|----------|-----------|
//! | non-empty stored preference    | as-is    | `Stored`  |
//! | host tag containing `zh`       | `zh`     | `Host`    |
//! | anything else                  | `en`     | `Default` |
//!
//! A stored preference is never checked against the supported set. An
//! unsupported value still becomes the active tag; every lookup then falls
//! through to the fallback table.

use super::locale::Locale;
use crate::config::{CHINESE_HOST_MARKER, DEFAULT_LOCALE_TAG};
use std::fmt;

/// Where the selected tag came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleSource {
    Stored,
    Host,
    Default,
}

impl fmt::Display for LocaleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LocaleSource::Stored => "stored preference",
            LocaleSource::Host => "host language",
            LocaleSource::Default => "default",
        })
    }
}

/// Outcome of [`resolve_locale`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub tag: String,
    pub source: LocaleSource,
}

impl Resolution {
    /// The selected tag as a supported locale, if a table of that exact name ships.
    pub fn supported(&self) -> Option<Locale> {
        Locale::from_table_tag(&self.tag)
    }
}

/// Picks the display language from a stored preference and the host tag.
pub fn resolve_locale(stored: Option<&str>, host: Option<&str>) -> Resolution {
    if let Some(tag) = stored.filter(|tag| !tag.is_empty()) {
        if Locale::from_table_tag(tag).is_none() {
            tracing::warn!(
                stored = tag,
                "stored language preference is not a supported locale; lookups will use the fallback table"
            );
        }
        return Resolution {
            tag: tag.to_string(),
            source: LocaleSource::Stored,
        };
    }

    if host.is_some_and(|tag| tag.to_lowercase().contains(CHINESE_HOST_MARKER)) {
        return Resolution {
            tag: Locale::Zh.tag().to_string(),
            source: LocaleSource::Host,
        };
    }

    Resolution {
        tag: DEFAULT_LOCALE_TAG.to_string(),
        source: LocaleSource::Default,
    }
}

/// The language tag reported by the operating system, e.g. `"zh-CN"`.
pub fn detect_host_language() -> Option<String> {
    sys_locale::get_locale()
}
