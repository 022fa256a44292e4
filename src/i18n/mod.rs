// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the MixTeX OCR front-end.
//!
//! This module provides localization using the Fluent localization system. It
//! selects the display language once per session, loads the translation tables
//! and hands out a [`Translator`] for dotted key lookups.
//!
//! # Features
//!
//! - Locale selection from the stored preference, then the host language,
//!   then English
//! - Embedded `.ftl` tables, or tables loaded from a directory
//! - English fallback when the active table lacks a key
//! - Completeness auditing across tables
//!
//! # Example
//!
//! ```no_run
//! use mixtex_locale::i18n;
//! use mixtex_locale::preferences::SettingsStore;
//!
//! let prefs = SettingsStore::open();
//! let translator = i18n::init(&prefs).expect("embedded tables should load");
//! println!("{}", translator.tr("messages.recognitionSuccess"));
//! ```

pub mod audit;
pub mod catalog;
pub mod key;
pub mod locale;
pub mod resolver;
pub mod translator;

pub use audit::{check_completeness, likely_misspellings, CompletenessReport, KeyMismatch};
pub use catalog::Catalog;
pub use locale::Locale;
pub use resolver::{detect_host_language, resolve_locale, LocaleSource, Resolution};
pub use translator::{LocaleConfig, Lookup, Translator};

use crate::error::Result;
use crate::preferences::LanguagePreference;
use std::sync::Arc;

/// Initializes a translator over the embedded tables, using the host language
/// reported by the operating system.
pub fn init<P: LanguagePreference + ?Sized>(prefs: &P) -> Result<Translator> {
    init_with_host(prefs, detect_host_language().as_deref())
}

/// Like [`init`], with the host language supplied by the caller.
pub fn init_with_host<P: LanguagePreference + ?Sized>(
    prefs: &P,
    host: Option<&str>,
) -> Result<Translator> {
    let catalog = Arc::new(Catalog::builtin()?);
    let (translator, _) = start(catalog, prefs.stored_language().as_deref(), host);
    Ok(translator)
}

/// Resolves the active locale and builds a translator over `catalog`.
///
/// Returns the resolution alongside so callers can report where the
/// language came from.
pub fn start(
    catalog: Arc<Catalog>,
    stored: Option<&str>,
    host: Option<&str>,
) -> (Translator, Resolution) {
    let resolution = resolve_locale(stored, host);
    tracing::debug!(locale = %resolution.tag, source = %resolution.source, "selected display language");
    let translator = Translator::new(catalog, LocaleConfig::new(resolution.tag.clone()));
    (translator, resolution)
}

/// Persists `locale` as the user's preference and returns a translator for it.
///
/// The previous translator stays valid; callers swap it out.
pub fn switch_language<P: LanguagePreference + ?Sized>(
    prefs: &mut P,
    catalog: Arc<Catalog>,
    locale: Locale,
) -> Result<Translator> {
    prefs.store_language(locale.tag())?;
    Ok(Translator::new(catalog, LocaleConfig::new(locale.tag())))
}
