// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! This module handles saving user preferences to disk: the display
//! language, the theme choice and the translation service parameters.

use super::config;
use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::settings::State as SettingsState;
use crate::ui::theming::ThemeMode;
use iced::Task;
use unic_langid::LanguageIdentifier;

/// Persists the theme choice to disk.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic
/// through the in-memory state rather than the config file.
pub fn persist_theme_mode(theme_mode: ThemeMode) -> Task<Message> {
    if cfg!(test) {
        return Task::none();
    }

    let (mut cfg, _) = config::load();
    cfg.general.theme_mode = theme_mode;

    if let Err(error) = config::save(&cfg) {
        eprintln!("Failed to save config: {:?}", error);
    }

    Task::none()
}

/// Persists the translation service endpoint and timeout.
///
/// An emptied URL field is stored as `None` so the default endpoint
/// applies again on the next launch.
pub fn persist_translator(settings: &SettingsState) -> Task<Message> {
    if cfg!(test) {
        return Task::none();
    }

    let (mut cfg, _) = config::load();
    let url = settings.service_url().trim();
    cfg.translator.service_url = if url.is_empty() {
        None
    } else {
        Some(url.to_string())
    };
    cfg.translator.timeout_secs = Some(settings.timeout_secs());

    if let Err(error) = config::save(&cfg) {
        eprintln!("Failed to save config: {:?}", error);
    }

    Task::none()
}

/// Applies the newly selected locale and persists it to config.
pub fn apply_language_change(i18n: &mut I18n, locale: LanguageIdentifier) -> Task<Message> {
    i18n.set_locale(locale.clone());

    let (mut cfg, _) = config::load();
    cfg.general.language = Some(locale.to_string());

    if let Err(error) = config::save(&cfg) {
        eprintln!("Failed to save config: {:?}", error);
    }

    Task::none()
}
