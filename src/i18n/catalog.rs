// SPDX-License-Identifier: MPL-2.0
//! Translation tables, one Fluent bundle per locale tag.
//!
//! The shipped tables are embedded from `assets/i18n/<tag>.ftl`. A directory
//! of `.ftl` files or in-memory sources can be loaded instead, which is how
//! deployments add or patch languages without rebuilding.

use super::key::{self, KeyPath};
use crate::error::{Error, Result};
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use fluent_syntax::ast;
use rust_embed::RustEmbed;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const TABLE_EXTENSION: &str = "ftl";

struct Table {
    bundle: FluentBundle<FluentResource>,
    keys: BTreeSet<String>,
}

impl Table {
    fn parse(tag: &str, source: String) -> Result<Self> {
        let locale: LanguageIdentifier = tag
            .parse()
            .map_err(|err| Error::Catalog(format!("{tag}: invalid language tag: {err}")))?;

        let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
            let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
            Error::Catalog(format!("{tag}.{TABLE_EXTENSION}: {}", details.join("; ")))
        })?;
        let keys = collect_keys(&resource);

        let mut bundle = FluentBundle::new_concurrent(vec![locale]);
        // Output must equal the table text byte for byte.
        bundle.set_use_isolating(false);
        bundle.add_resource(resource).map_err(|errors| {
            let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
            Error::Catalog(format!("{tag}.{TABLE_EXTENSION}: {}", details.join("; ")))
        })?;

        Ok(Self { bundle, keys })
    }

    fn format(&self, path: &str, args: Option<&FluentArgs>) -> Option<String> {
        let path = KeyPath::parse(path)?;
        let message = self.bundle.get_message(path.namespace)?;
        let pattern = match path.key {
            Some(key) => message.get_attribute(key)?.value(),
            None => message.value()?,
        };

        let mut errors = vec![];
        let value = self.bundle.format_pattern(pattern, args, &mut errors);
        if errors.is_empty() {
            Some(value.into_owned())
        } else {
            tracing::debug!(key = %path, ?errors, "formatting failed");
            None
        }
    }
}

/// Dotted paths for every message value and attribute in a resource.
fn collect_keys(resource: &FluentResource) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    for entry in resource.entries() {
        if let ast::Entry::Message(message) = entry {
            let namespace = message.id.name;
            if message.value.is_some() {
                keys.insert(namespace.to_string());
            }
            for attribute in &message.attributes {
                keys.insert(key::join(namespace, attribute.id.name));
            }
        }
    }
    keys
}

/// Every loaded locale table, keyed by tag.
pub struct Catalog {
    tables: BTreeMap<String, Table>,
}

impl Catalog {
    /// Loads the tables embedded in the binary.
    pub fn builtin() -> Result<Self> {
        let mut sources = Vec::new();
        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(tag) = table_tag(filename) else {
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                sources.push((
                    tag.to_string(),
                    String::from_utf8_lossy(content.data.as_ref()).into_owned(),
                ));
            }
        }
        Self::from_sources(sources)
    }

    /// Loads every `<tag>.ftl` file directly inside `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut sources = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let Some(tag) = path.file_name().and_then(|n| n.to_str()).and_then(table_tag) else {
                continue;
            };
            sources.push((tag.to_string(), fs::read_to_string(&path)?));
        }
        if sources.is_empty() {
            return Err(Error::Catalog(format!(
                "no .{TABLE_EXTENSION} tables found in {}",
                dir.display()
            )));
        }
        Self::from_sources(sources)
    }

    /// Builds a catalog from `(tag, fluent source)` pairs.
    pub fn from_sources<I, T, S>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (T, S)>,
        T: Into<String>,
        S: Into<String>,
    {
        let mut tables = BTreeMap::new();
        for (tag, source) in sources {
            let tag = tag.into();
            let table = Table::parse(&tag, source.into())?;
            tracing::debug!(locale = %tag, keys = table.keys.len(), "loaded locale table");
            tables.insert(tag, table);
        }
        if tables.is_empty() {
            return Err(Error::Catalog("catalog has no tables".to_string()));
        }
        Ok(Self { tables })
    }

    /// Locale tags with a loaded table, sorted.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tables.contains_key(tag)
    }

    /// Every dotted key the table for `tag` defines.
    pub fn keys(&self, tag: &str) -> Option<&BTreeSet<String>> {
        self.tables.get(tag).map(|table| &table.keys)
    }

    /// Looks `key` up in a single table, without any fallback.
    pub fn get(&self, tag: &str, key: &str) -> Option<String> {
        self.get_with_args(tag, key, None)
    }

    pub(crate) fn get_with_args(
        &self,
        tag: &str,
        key: &str,
        args: Option<&FluentArgs>,
    ) -> Option<String> {
        self.tables.get(tag)?.format(key, args)
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("locales", &self.tables.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn table_tag(filename: &str) -> Option<&str> {
    filename
        .strip_suffix(TABLE_EXTENSION)
        .and_then(|stem| stem.strip_suffix('.'))
        .filter(|tag| !tag.is_empty())
}
