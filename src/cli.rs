// SPDX-License-Identifier: MPL-2.0
//! Command-line front end for inspecting and maintaining the locale tables.

use crate::error::Error;
use crate::i18n::{self, Catalog, Locale, Lookup};
use crate::preferences::{LanguagePreference, SettingsStore};
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

pub const USAGE: &str = "\
mixtex-locale - locale tables for the MixTeX OCR front-end

USAGE:
    mixtex-locale [OPTIONS] <COMMAND>

COMMANDS:
    resolve              Print the selected locale and where it came from
    get <KEY>            Translate a dotted key such as messages.recognitionSuccess
    keys [LOCALE]        List the keys of a table (default: the selected locale)
    audit [--strict]     Report keys missing from any table
    set-lang <en|zh>     Persist the display language preference

OPTIONS:
    --lang <TAG>         Use TAG as the stored preference for this run only
    --host-lang <TAG>    Use TAG instead of the operating system language
    --config-dir <DIR>   Read and write settings.toml in DIR
    --i18n-dir <DIR>     Load <tag>.ftl tables from DIR instead of the embedded ones
    -h, --help           Print this help
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Resolve,
    Get { key: String },
    Keys { locale: Option<String> },
    Audit { strict: bool },
    SetLang { locale: Locale },
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flags {
    pub lang: Option<String>,
    pub host_lang: Option<String>,
    pub config_dir: Option<PathBuf>,
    pub i18n_dir: Option<PathBuf>,
    pub command: Command,
}

/// Parses process-style arguments, without the program name.
pub fn parse_args(raw: Vec<OsString>) -> anyhow::Result<Flags> {
    let mut args = pico_args::Arguments::from_vec(raw);

    let help = args.contains(["-h", "--help"]);
    let strict = args.contains("--strict");
    let lang: Option<String> = args.opt_value_from_str("--lang")?;
    let host_lang: Option<String> = args.opt_value_from_str("--host-lang")?;
    let config_dir: Option<PathBuf> = args.opt_value_from_str("--config-dir")?;
    let i18n_dir: Option<PathBuf> = args.opt_value_from_str("--i18n-dir")?;

    let name: Option<String> = args.opt_free_from_str()?;
    let command = match name.as_deref() {
        _ if help => Command::Help,
        None => Command::Help,
        Some("resolve") => Command::Resolve,
        Some("get") => Command::Get {
            key: args.free_from_str()?,
        },
        Some("keys") => Command::Keys {
            locale: args.opt_free_from_str()?,
        },
        Some("audit") => Command::Audit { strict },
        Some("set-lang") => {
            let tag: String = args.free_from_str()?;
            Command::SetLang {
                locale: tag.parse()?,
            }
        }
        Some(other) => anyhow::bail!("unknown command `{other}`\n\n{USAGE}"),
    };

    let rest = args.finish();
    if !rest.is_empty() && command != Command::Help {
        anyhow::bail!("unexpected arguments: {rest:?}");
    }

    Ok(Flags {
        lang,
        host_lang,
        config_dir,
        i18n_dir,
        command,
    })
}

/// Executes a parsed command, writing human-readable output to `out`.
///
/// Returns `Ok(false)` when the command ran but its check failed: a key with no
/// translation, or an incomplete catalog under `audit --strict`.
pub fn run(flags: Flags, out: &mut dyn Write) -> anyhow::Result<bool> {
    if flags.command == Command::Help {
        write!(out, "{USAGE}")?;
        return Ok(true);
    }

    let catalog = Arc::new(match &flags.i18n_dir {
        Some(dir) => Catalog::from_dir(dir)?,
        None => Catalog::builtin()?,
    });
    let mut store = SettingsStore::open_with_override(flags.config_dir.clone());

    let stored = flags
        .lang
        .clone()
        .filter(|tag| !tag.is_empty())
        .or_else(|| store.stored_language());
    let host = flags.host_lang.clone().or_else(i18n::detect_host_language);
    let (translator, resolution) = i18n::start(Arc::clone(&catalog), stored.as_deref(), host.as_deref());

    match flags.command {
        Command::Help => {
            write!(out, "{USAGE}")?;
            Ok(true)
        }
        Command::Resolve => {
            write!(out, "{} ({})", resolution.tag, resolution.source)?;
            if !catalog.contains(&resolution.tag) {
                write!(
                    out,
                    " [no table, using {} fallback]",
                    translator.fallback_locale()
                )?;
            }
            writeln!(out)?;
            Ok(true)
        }
        Command::Get { key } => match translator.lookup(&key) {
            Lookup::Active(text) => {
                writeln!(out, "{text}")?;
                Ok(true)
            }
            Lookup::Fallback(text) => {
                tracing::info!(key = %key, locale = %resolution.tag, "answered by fallback table");
                writeln!(out, "{text}")?;
                Ok(true)
            }
            Lookup::Missing => {
                writeln!(out, "{key}")?;
                Ok(false)
            }
        },
        Command::Keys { locale } => {
            let tag = locale.unwrap_or(resolution.tag);
            let keys = catalog
                .keys(&tag)
                .ok_or_else(|| Error::UnknownLocale(tag.clone()))?;
            for key in keys {
                writeln!(out, "{key}")?;
            }
            Ok(true)
        }
        Command::Audit { strict } => {
            let report = i18n::check_completeness(&catalog);
            write!(out, "{report}")?;
            let mismatches = i18n::likely_misspellings(&report);
            if !mismatches.is_empty() {
                writeln!(out, "Possible misspellings:")?;
                for mismatch in &mismatches {
                    writeln!(out, "  {mismatch}")?;
                }
            }
            Ok(!strict || report.is_complete())
        }
        Command::SetLang { locale } => {
            let translator = i18n::switch_language(&mut store, catalog, locale)?;
            writeln!(out, "{}", translator.tr("messages.languageChanged"))?;
            Ok(true)
        }
    }
}
