// SPDX-License-Identifier: MPL-2.0
//! Cross-locale completeness checks.
//!
//! Every table should expose the same key set. A key defined by any table but
//! absent from another is reported against the table that lacks it, even though
//! the runtime lookup still succeeds through the fallback table.

use super::catalog::Catalog;
use super::key::KeyPath;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Maximum edit distance at which two one-sided keys count as the same key.
const MISSPELLING_DISTANCE: usize = 2;

/// Keys and namespaces each locale lacks compared to the union of all tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletenessReport {
    /// Locale tag -> dotted keys it does not define. Complete locales map to an empty set.
    pub missing_keys: BTreeMap<String, BTreeSet<String>>,
    /// Locale tag -> namespaces it does not define at all.
    pub missing_namespaces: BTreeMap<String, BTreeSet<String>>,
}

impl CompletenessReport {
    pub fn is_complete(&self) -> bool {
        self.missing_keys.values().all(BTreeSet::is_empty)
    }

    /// Keys absent from `tag`, empty when `tag` is complete or unknown.
    pub fn missing_in(&self, tag: &str) -> impl Iterator<Item = &str> {
        self.missing_keys
            .get(tag)
            .into_iter()
            .flat_map(|keys| keys.iter().map(String::as_str))
    }

    pub fn missing_key_count(&self) -> usize {
        self.missing_keys.values().map(BTreeSet::len).sum()
    }
}

impl fmt::Display for CompletenessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_complete() {
            return writeln!(f, "All locale tables define the same keys.");
        }

        writeln!(
            f,
            "Locale tables are incomplete ({} missing keys).",
            self.missing_key_count()
        )?;
        for (tag, keys) in &self.missing_keys {
            if keys.is_empty() {
                continue;
            }
            let noun = if keys.len() == 1 { "key" } else { "keys" };
            writeln!(f, "{tag} is missing {} {noun}:", keys.len())?;
            if let Some(namespaces) = self.missing_namespaces.get(tag).filter(|n| !n.is_empty()) {
                let names: Vec<&str> = namespaces.iter().map(String::as_str).collect();
                writeln!(f, "  (whole namespaces: {})", names.join(", "))?;
            }
            for key in keys {
                writeln!(f, "  {key}")?;
            }
        }
        Ok(())
    }
}

/// Compares every table in `catalog` against the union of all their keys.
pub fn check_completeness(catalog: &Catalog) -> CompletenessReport {
    let mut all_keys = BTreeSet::new();
    for tag in catalog.locales() {
        if let Some(keys) = catalog.keys(tag) {
            all_keys.extend(keys.iter().cloned());
        }
    }
    let all_namespaces = namespaces(&all_keys);

    let mut report = CompletenessReport::default();
    for tag in catalog.locales() {
        let empty = BTreeSet::new();
        let keys = catalog.keys(tag).unwrap_or(&empty);

        let missing: BTreeSet<String> = all_keys.difference(keys).cloned().collect();
        let present_namespaces = namespaces(keys);
        let missing_namespaces: BTreeSet<String> = all_namespaces
            .difference(&present_namespaces)
            .cloned()
            .collect();

        report.missing_keys.insert(tag.to_string(), missing);
        report
            .missing_namespaces
            .insert(tag.to_string(), missing_namespaces);
    }
    report
}

fn namespaces(keys: &BTreeSet<String>) -> BTreeSet<String> {
    keys.iter()
        .filter_map(|key| KeyPath::parse(key))
        .map(|path| path.namespace.to_string())
        .collect()
}

/// A pair of keys that exist on opposite sides and are probably one key
/// spelled two ways.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMismatch {
    pub namespace: String,
    /// `(locale, key)` for the side that sorts first by locale tag.
    pub left: (String, String),
    pub right: (String, String),
}

impl fmt::Display for KeyMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{ns}.{lk} ({ll}) looks like {ns}.{rk} ({rl})",
            ns = self.namespace,
            lk = self.left.1,
            ll = self.left.0,
            rk = self.right.1,
            rl = self.right.0,
        )
    }
}

/// Pairs keys missing from one locale with near-identical keys missing from
/// another, within a namespace both locales define.
pub fn likely_misspellings(report: &CompletenessReport) -> Vec<KeyMismatch> {
    let tags: Vec<&String> = report.missing_keys.keys().collect();
    let mut mismatches = Vec::new();

    for (i, left_tag) in tags.iter().enumerate() {
        for right_tag in &tags[i + 1..] {
            // Keys the left table has and the right lacks, and vice versa.
            let left_only = one_sided(report, right_tag, left_tag);
            let right_only = one_sided(report, left_tag, right_tag);

            for left in &left_only {
                for right in &right_only {
                    if left.namespace != right.namespace {
                        continue;
                    }
                    let (Some(left_key), Some(right_key)) = (left.key, right.key) else {
                        continue;
                    };
                    let distance = levenshtein(left_key, right_key);
                    if distance == 0 || distance > MISSPELLING_DISTANCE {
                        continue;
                    }
                    mismatches.push(KeyMismatch {
                        namespace: left.namespace.to_string(),
                        left: (left_tag.to_string(), left_key.to_string()),
                        right: (right_tag.to_string(), right_key.to_string()),
                    });
                }
            }
        }
    }
    mismatches
}

/// Keys missing from `lacking` whose namespace `lacking` does define.
fn one_sided<'r>(
    report: &'r CompletenessReport,
    lacking: &str,
    having: &str,
) -> Vec<KeyPath<'r>> {
    let lacking_namespaces = report.missing_namespaces.get(lacking);
    let having_missing = report.missing_keys.get(having);
    report
        .missing_in(lacking)
        .filter(|key| having_missing.is_none_or(|keys| !keys.contains(*key)))
        .filter_map(KeyPath::parse)
        .filter(|path| lacking_namespaces.is_none_or(|ns| !ns.contains(path.namespace)))
        .collect()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    for (i, &a_ch) in a_bytes.iter().enumerate() {
        let mut current = Vec::with_capacity(b_bytes.len() + 1);
        current.push(i + 1);
        for (j, &b_ch) in b_bytes.iter().enumerate() {
            let cost = usize::from(a_ch != b_ch);
            let insert = current[j] + 1;
            let delete = prev[j + 1] + 1;
            let replace = prev[j] + cost;
            current.push(insert.min(delete).min(replace));
        }
        prev = current;
    }

    prev[b_bytes.len()]
}
