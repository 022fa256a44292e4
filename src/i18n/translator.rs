// SPDX-License-Identifier: MPL-2.0
//! The formatting context handed to the presentation layer.

use super::catalog::Catalog;
use super::locale::Locale;
use fluent_bundle::FluentArgs;
use std::sync::Arc;

/// Immutable locale settings fixed when a [`Translator`] is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    /// Tag of the table consulted first. May name a locale with no table.
    pub active: String,
    /// Table consulted when the active one lacks a key.
    pub fallback: Locale,
}

impl LocaleConfig {
    pub fn new(active: impl Into<String>) -> Self {
        Self {
            active: active.into(),
            fallback: Locale::En,
        }
    }
}

/// Which table answered a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Active(String),
    Fallback(String),
    Missing,
}

impl Lookup {
    pub fn into_option(self) -> Option<String> {
        match self {
            Lookup::Active(text) | Lookup::Fallback(text) => Some(text),
            Lookup::Missing => None,
        }
    }
}

/// Translates dotted key paths against an active and a fallback table.
///
/// Cheap to clone; the catalog is shared.
#[derive(Debug, Clone)]
pub struct Translator {
    catalog: Arc<Catalog>,
    config: LocaleConfig,
}

impl Translator {
    pub fn new(catalog: Arc<Catalog>, config: LocaleConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> &LocaleConfig {
        &self.config
    }

    pub fn active_locale(&self) -> &str {
        &self.config.active
    }

    pub fn fallback_locale(&self) -> Locale {
        self.config.fallback
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Reports which table, if any, defines `key`.
    pub fn lookup(&self, key: &str) -> Lookup {
        self.lookup_with_args(key, None)
    }

    fn lookup_with_args(&self, key: &str, args: Option<&FluentArgs>) -> Lookup {
        if let Some(text) = self.catalog.get_with_args(&self.config.active, key, args) {
            return Lookup::Active(text);
        }

        let fallback = self.config.fallback.tag();
        if fallback != self.config.active {
            if let Some(text) = self.catalog.get_with_args(fallback, key, args) {
                tracing::debug!(key, active = %self.config.active, fallback, "using fallback table");
                return Lookup::Fallback(text);
            }
        }

        tracing::debug!(key, active = %self.config.active, "missing translation");
        Lookup::Missing
    }

    pub fn try_translate(&self, key: &str) -> Option<String> {
        self.lookup(key).into_option()
    }

    /// Returns the text for `key`, or the key path itself when no table has it.
    pub fn translate(&self, key: &str) -> String {
        self.try_translate(key).unwrap_or_else(|| key.to_string())
    }

    /// Shorthand for [`Translator::translate`].
    pub fn tr(&self, key: &str) -> String {
        self.translate(key)
    }

    /// Like [`Translator::translate`], filling `{ $name }` placeables from `args`.
    pub fn translate_with_args(&self, key: &str, args: &FluentArgs) -> String {
        self.lookup_with_args(key, Some(args))
            .into_option()
            .unwrap_or_else(|| key.to_string())
    }
}
