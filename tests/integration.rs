// SPDX-License-Identifier: MPL-2.0
use mixtex_locale::cli::{self, Command, Flags};
use mixtex_locale::config::{self, Config, GeneralConfig};
use mixtex_locale::i18n::{self, Catalog, Locale, LocaleSource, Lookup};
use mixtex_locale::preferences::{LanguagePreference, MemoryPreference, SettingsStore};
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;
use tempfile::tempdir;

fn builtin() -> Arc<Catalog> {
    Arc::new(Catalog::builtin().expect("embedded tables should parse"))
}

fn flags(command: Command, config_dir: &Path) -> Flags {
    Flags {
        lang: None,
        host_lang: Some("en-US".to_string()),
        config_dir: Some(config_dir.to_path_buf()),
        i18n_dir: None,
        command,
    }
}

fn run(flags: Flags) -> (bool, String) {
    let mut out = Vec::new();
    let ok = cli::run(flags, &mut out).expect("command should not error");
    (ok, String::from_utf8(out).expect("output should be UTF-8"))
}

#[test]
fn stored_zh_wins_over_any_host_language() {
    for host in ["en-US", "fr-FR", "zh-CN"] {
        let (translator, resolution) = i18n::start(builtin(), Some("zh"), Some(host));
        assert_eq!(resolution.tag, "zh");
        assert_eq!(resolution.source, LocaleSource::Stored);
        assert_eq!(translator.active_locale(), "zh");
    }
}

#[test]
fn host_language_decides_without_stored_preference() {
    let cases = [("zh-CN", "zh"), ("en-GB", "en"), ("fr-FR", "en")];
    for (host, expected) in cases {
        let (translator, _) = i18n::start(builtin(), None, Some(host));
        assert_eq!(translator.active_locale(), expected, "host {host}");
    }
}

#[test]
fn recognition_success_is_exact_in_both_languages() {
    let prefs_en = MemoryPreference::new(Some("en".to_string()));
    let prefs_zh = MemoryPreference::new(Some("zh".to_string()));

    let en = i18n::init_with_host(&prefs_en, None).unwrap();
    let zh = i18n::init_with_host(&prefs_zh, None).unwrap();

    assert_eq!(en.translate("messages.recognitionSuccess"), "Recognition successful");
    assert_eq!(zh.translate("messages.recognitionSuccess"), "识别成功");
}

#[test]
fn tables_have_known_drift_and_nothing_else() {
    let report = i18n::check_completeness(&builtin());

    let mut expected_missing_in_en: BTreeSet<String> = [
        "about.and",
        "about.backend",
        "about.credits",
        "about.frontend",
        "about.model",
        "about.modelText",
        "about.originalAuthor",
        "about.rebuilders",
        "about.techStack",
        "about.title",
        "about.typst",
        "about.webVersion",
        "app.title",
        "footer.projectLink",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    expected_missing_in_en.insert("messages.noImageToReReognize".to_string());

    let expected_missing_in_zh: BTreeSet<String> =
        ["messages.noImageToReRecognize".to_string()].into();

    assert!(!report.is_complete());
    assert_eq!(report.missing_keys["en"], expected_missing_in_en);
    assert_eq!(report.missing_keys["zh"], expected_missing_in_zh);

    let en_only_namespaces: BTreeSet<String> = ["about".to_string(), "app".to_string()].into();
    assert_eq!(report.missing_namespaces["en"], en_only_namespaces);
    assert!(report.missing_namespaces["zh"].is_empty());
}

#[test]
fn misspelled_re_recognize_key_is_flagged() {
    let report = i18n::check_completeness(&builtin());
    let mismatches = i18n::likely_misspellings(&report);

    assert_eq!(mismatches.len(), 1);
    assert_eq!(mismatches[0].namespace, "messages");
    assert_eq!(
        mismatches[0].left,
        ("en".to_string(), "noImageToReRecognize".to_string())
    );
    assert_eq!(
        mismatches[0].right,
        ("zh".to_string(), "noImageToReReognize".to_string())
    );
}

#[test]
fn shared_namespaces_exist_in_both_tables() {
    let catalog = builtin();
    for namespace in ["header", "download", "clipboard", "messages", "buttons", "dialogs", "footer"] {
        for locale in Locale::ALL {
            let keys = catalog.keys(locale.tag()).unwrap();
            assert!(
                keys.iter().any(|key| key.starts_with(&format!("{namespace}."))),
                "{namespace} missing from {locale}"
            );
        }
    }
}

#[test]
fn chinese_users_see_english_for_the_misspelled_key() {
    let (translator, _) = i18n::start(builtin(), Some("zh"), None);
    assert_eq!(
        translator.lookup("messages.noImageToReRecognize"),
        Lookup::Fallback("No image to re-recognize".to_string())
    );
}

#[test]
fn unsupported_stored_language_falls_back_silently() {
    let (translator, resolution) = i18n::start(builtin(), Some("ja"), Some("zh-CN"));
    assert_eq!(resolution.tag, "ja");
    assert_eq!(translator.translate("footer.poweredBy"), "Powered by MixTeX OCR");
    assert_eq!(translator.translate("footer.projectLink"), "footer.projectLink");
}

#[test]
fn stored_tag_in_another_case_is_unsupported_and_served_by_fallback() {
    let (translator, resolution) = i18n::start(builtin(), Some("ZH"), None);
    assert_eq!(resolution.supported(), None);
    assert_eq!(
        translator.lookup("messages.recognitionSuccess"),
        Lookup::Fallback("Recognition successful".to_string())
    );
}

#[test]
fn language_change_via_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let settings_path = dir.path().join("settings.toml");

    let initial = Config {
        general: GeneralConfig {
            language: Some("en".to_string()),
        },
    };
    config::save_to_path(&initial, &settings_path).expect("Failed to write initial config file");

    let mut store = SettingsStore::open_path(&settings_path).unwrap();
    let translator = i18n::init_with_host(&store, Some("zh-CN")).unwrap();
    assert_eq!(translator.active_locale(), "en");

    let switched = i18n::switch_language(&mut store, builtin(), Locale::Zh).unwrap();
    assert_eq!(switched.tr("messages.languageChanged"), "语言已切换");

    let reloaded = config::load_from_path(&settings_path).expect("Failed to reload config");
    assert_eq!(reloaded.general.language.as_deref(), Some("zh"));

    let reopened = SettingsStore::open_path(&settings_path).unwrap();
    assert_eq!(reopened.stored_language().as_deref(), Some("zh"));
}

#[test]
fn cli_resolve_reports_source() {
    let dir = tempdir().unwrap();
    let (ok, out) = run(flags(Command::Resolve, dir.path()));
    assert!(ok);
    assert_eq!(out, "en (default)\n");

    let mut with_lang = flags(Command::Resolve, dir.path());
    with_lang.lang = Some("xx".to_string());
    let (_, out) = run(with_lang);
    assert_eq!(out, "xx (stored preference) [no table, using en fallback]\n");
}

#[test]
fn cli_get_translates_and_flags_missing_keys() {
    let dir = tempdir().unwrap();
    let mut zh = flags(
        Command::Get {
            key: "clipboard.pasteHint".to_string(),
        },
        dir.path(),
    );
    zh.host_lang = Some("zh-CN".to_string());
    assert_eq!(run(zh), (true, "按 Ctrl+V 粘贴图片\n".to_string()));

    let missing = flags(
        Command::Get {
            key: "clipboard.nothing".to_string(),
        },
        dir.path(),
    );
    assert_eq!(run(missing), (false, "clipboard.nothing\n".to_string()));
}

#[test]
fn cli_set_lang_persists_preference() {
    let dir = tempdir().unwrap();

    let (ok, out) = run(flags(Command::SetLang { locale: Locale::Zh }, dir.path()));
    assert!(ok);
    assert_eq!(out, "语言已切换\n");

    let (_, out) = run(flags(Command::Resolve, dir.path()));
    assert_eq!(out, "zh (stored preference)\n");
}

#[test]
fn cli_empty_lang_flag_keeps_persisted_preference() {
    let dir = tempdir().unwrap();
    run(flags(Command::SetLang { locale: Locale::Zh }, dir.path()));

    let mut empty_lang = flags(Command::Resolve, dir.path());
    empty_lang.lang = Some(String::new());
    let (ok, out) = run(empty_lang);
    assert!(ok);
    assert_eq!(out, "zh (stored preference)\n");
}

#[test]
fn cli_audit_strict_fails_on_shipped_tables() {
    let dir = tempdir().unwrap();

    let (ok, out) = run(flags(Command::Audit { strict: false }, dir.path()));
    assert!(ok);
    assert!(out.contains("en is missing 15 keys:"));
    assert!(out.contains("zh is missing 1 key:"));
    assert!(out.contains("messages.noImageToReRecognize (en) looks like messages.noImageToReReognize (zh)"));

    let (ok, _) = run(flags(Command::Audit { strict: true }, dir.path()));
    assert!(!ok);
}

#[test]
fn cli_audit_strict_passes_on_consistent_directory() {
    let dir = tempdir().unwrap();
    let tables = dir.path().join("i18n");
    std::fs::create_dir_all(&tables).unwrap();
    std::fs::write(tables.join("en.ftl"), "dialogs =\n    .confirm = Confirm\n").unwrap();
    std::fs::write(tables.join("zh.ftl"), "dialogs =\n    .confirm = 确认\n").unwrap();

    let mut audit = flags(Command::Audit { strict: true }, dir.path());
    audit.i18n_dir = Some(tables);
    let (ok, out) = run(audit);
    assert!(ok);
    assert_eq!(out, "All locale tables define the same keys.\n");
}

#[test]
fn cli_keys_lists_requested_table() {
    let dir = tempdir().unwrap();
    let (ok, out) = run(flags(
        Command::Keys {
            locale: Some("zh".to_string()),
        },
        dir.path(),
    ));
    assert!(ok);
    assert!(out.lines().any(|line| line == "footer.projectLink"));
    assert_eq!(out.lines().count(), 62);

    let mut out = Vec::new();
    let unknown = flags(
        Command::Keys {
            locale: Some("de".to_string()),
        },
        dir.path(),
    );
    assert!(cli::run(unknown, &mut out).is_err());
}
