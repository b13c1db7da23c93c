// SPDX-License-Identifier: MPL-2.0
use iced_scribe::app::config::{self, Config, GeneralConfig, TranslatorConfig};
use iced_scribe::domain::{LanguageTag, Transcript, Translation};
use iced_scribe::i18n::fluent::I18n;
use iced_scribe::project::{file, ProjectDocument};
use std::path::{Path, PathBuf};
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn translator_settings_round_trip_through_disk() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let written = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        translator: TranslatorConfig {
            service_url: Some("https://translate.example.org".to_string()),
            timeout_secs: Some(45),
        },
    };
    config::save_to_path(&written, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    assert_eq!(
        loaded.translator.effective_service_url(),
        "https://translate.example.org"
    );
    assert_eq!(loaded.translator.effective_timeout_secs(), 45);
    assert_eq!(loaded.general.language.as_deref(), Some("fr"));
}

/// Collects the message keys of a Fluent catalog file.
fn catalog_keys(path: &Path) -> Vec<String> {
    let source = std::fs::read_to_string(path).expect("Failed to read catalog file");
    source
        .lines()
        .filter(|line| !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, _)| key.trim().to_string())
        .filter(|key| {
            !key.is_empty()
                && key
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
        .collect()
}

#[test]
fn every_locale_covers_the_full_catalog() {
    let i18n_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/i18n");
    let mut i18n = I18n::default();
    assert!(!i18n.available_locales.is_empty());

    // Extra arguments are ignored by messages without placeables, so one
    // superset covers every parametrized key in the catalog.
    let args = [
        ("date", "2026-01-01 12:00"),
        ("language", "French"),
        ("seconds", "30"),
    ];

    for locale in i18n.available_locales.clone() {
        let keys = catalog_keys(&i18n_dir.join(format!("{locale}.ftl")));
        assert!(!keys.is_empty(), "Empty catalog for '{locale}'");

        i18n.set_locale(locale.clone());
        for key in keys {
            let translated = i18n.tr_with_args(&key, &args);
            assert!(
                !translated.starts_with("MISSING:"),
                "Locale '{locale}' does not translate '{key}'"
            );
        }
    }
}

#[tokio::test]
async fn project_files_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("interview.scribe");

    let mut document = ProjectDocument::new("interview".to_string());
    document.transcript = Some(Transcript::new(
        LanguageTag::parse("en").expect("valid language tag"),
        "Hello everyone, and welcome.".to_string(),
    ));
    document.translations.push(Translation::new(
        LanguageTag::parse("fr").expect("valid language tag"),
        "Bonjour à tous, et bienvenue.".to_string(),
    ));

    file::save(path.clone(), document.clone())
        .await
        .expect("Failed to save project");
    let loaded = file::load(path).await.expect("Failed to load project");

    assert_eq!(loaded, document);
}

#[tokio::test]
async fn loading_a_missing_project_fails() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("nowhere.scribe");

    assert!(file::load(path).await.is_err());
}

#[test]
fn project_name_comes_from_the_file_stem() {
    let path = Path::new("/projects/city council meeting.scribe");
    assert_eq!(
        file::project_name_from_path(path),
        "city council meeting"
    );
}
