// SPDX-License-Identifier: MPL-2.0
//! `mixtex_locale` is the localization layer of the MixTeX OCR front-end.
//!
//! It selects the display language at startup, ships the English and Chinese
//! translation tables as Fluent resources, and answers dotted key lookups with
//! an English fallback. It also audits the tables against each other so that
//! keys present in only one language are caught before release.

pub mod cli;
pub mod config;
pub mod error;
pub mod i18n;
pub mod paths;
pub mod preferences;
