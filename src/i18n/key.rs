// SPDX-License-Identifier: MPL-2.0
//! Dotted key paths such as `messages.recognitionSuccess`.
//!
//! Tables are two levels deep: a namespace, then a key inside it. A namespace
//! is stored as a Fluent message and its keys as that message's attributes, so
//! a path maps directly onto a message id and an optional attribute id.

use std::fmt;

/// A parsed `namespace[.key]` path borrowed from the caller's string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPath<'a> {
    pub namespace: &'a str,
    pub key: Option<&'a str>,
}

impl<'a> KeyPath<'a> {
    /// Splits a dotted path. Empty segments and paths nested deeper than two
    /// levels cannot name anything in a table and yield `None`.
    pub fn parse(path: &'a str) -> Option<Self> {
        let mut segments = path.split('.');
        let namespace = segments.next().filter(|s| !s.is_empty())?;
        let key = match segments.next() {
            None => None,
            Some(key) if !key.is_empty() => Some(key),
            Some(_) => return None,
        };
        if segments.next().is_some() {
            return None;
        }
        Some(Self { namespace, key })
    }
}

impl fmt::Display for KeyPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key {
            Some(key) => write!(f, "{}.{}", self.namespace, key),
            None => f.write_str(self.namespace),
        }
    }
}

/// Joins a namespace and key into the dotted form used by callers.
pub fn join(namespace: &str, key: &str) -> String {
    format!("{namespace}.{key}")
}
