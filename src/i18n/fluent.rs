// SPDX-License-Identifier: MPL-2.0
use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Builds the translation catalog from the embedded `.ftl` resources.
    ///
    /// When `i18n_dir` is given, `.ftl` files found there are loaded on top of
    /// the embedded set and replace locales with the same name. The starting
    /// locale is resolved from `cli_lang`, then the config file, then the OS.
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<PathBuf>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            if let Some(locale_str) = filename.strip_suffix(".ftl") {
                if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                    if let Some(content) = Asset::get(filename) {
                        let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
                        let bundle = build_bundle(&locale, source);
                        bundles.insert(locale.clone(), bundle);
                        available_locales.push(locale);
                    }
                }
            }
        }

        if let Some(dir) = i18n_dir {
            load_directory_overrides(&dir, &mut bundles, &mut available_locales);
        }

        available_locales.sort();

        let default_locale: LanguageIdentifier = "en-US".parse().unwrap();
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    /// Switches the active locale. Unknown locales are ignored.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Translates a message key for the active locale.
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates a message key, substituting the given named arguments.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn build_bundle(locale: &LanguageIdentifier, source: String) -> FluentBundle<FluentResource> {
    // A resource with syntax errors still yields its valid messages.
    let resource = FluentResource::try_new(source).unwrap_or_else(|(partial, errors)| {
        eprintln!("Translation file for '{}' has syntax errors: {:?}", locale, errors);
        partial
    });
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Unicode isolation marks around placeables garble plain-text widgets.
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        eprintln!("Duplicate messages for '{}': {:?}", locale, errors);
    }
    bundle
}

/// Loads `.ftl` files from a directory, replacing embedded locales of the same name.
fn load_directory_overrides(
    dir: &Path,
    bundles: &mut HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: &mut Vec<LanguageIdentifier>,
) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Cannot read translation directory {}: {}", dir.display(), e);
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(locale_str) = name.strip_suffix(".ftl") else {
            continue;
        };
        let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
            continue;
        };
        let Ok(source) = fs::read_to_string(&path) else {
            eprintln!("Cannot read translation file {}", path.display());
            continue;
        };
        let bundle = build_bundle(&locale, source);
        if bundles.insert(locale.clone(), bundle).is_none() {
            available_locales.push(locale);
        }
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check CLI args
    if let Some(lang_str) = cli_lang {
        if let Some(lang) = match_available(&lang_str, available) {
            return Some(lang);
        }
    }

    // 2. Check config file
    if let Some(lang_str) = &config.general.language {
        if let Some(lang) = match_available(lang_str, available) {
            return Some(lang);
        }
    }

    // 3. Check OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Some(lang) = match_available(&os_locale_str, available) {
            return Some(lang);
        }
    }

    None
}

/// Matches a locale string against the catalog, falling back to a
/// language-only match when the exact tag is not shipped ("fr-FR" -> "fr").
fn match_available(raw: &str, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    let lang: LanguageIdentifier = raw.parse().ok()?;
    if available.contains(&lang) {
        return Some(lang);
    }
    available
        .iter()
        .find(|candidate| candidate.language == lang.language && candidate.region.is_none())
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::{Config, GeneralConfig};
    use unic_langid::LanguageIdentifier;

    #[test]
    fn test_resolve_locale_cli() {
        let config = Config::default();
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "fr".parse().unwrap()];
        let lang = resolve_locale(Some("fr".to_string()), &config, &available);
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_config() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                ..GeneralConfig::default()
            },
            ..Config::default()
        };
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "fr".parse().unwrap()];
        let lang = resolve_locale(None, &config, &available);
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_default() {
        let config = Config::default();
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "fr".parse().unwrap()];
        let lang = resolve_locale(None, &config, &available);
        // This test is system dependent, so we just check it returns something or nothing
        // A more robust test would involve mocking the sys_locale::get_locale() call
        if let Some(l) = lang {
            assert!(available.contains(&l));
        }
    }

    #[test]
    fn regional_tag_falls_back_to_language_only_locale() {
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "fr".parse().unwrap()];
        let matched = match_available("fr-CA", &available);
        assert_eq!(matched, Some("fr".parse().unwrap()));
    }

    #[test]
    fn unknown_tag_matches_nothing() {
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "fr".parse().unwrap()];
        assert_eq!(match_available("ja", &available), None);
    }

    #[test]
    fn missing_key_returns_marker() {
        let i18n = I18n::default();
        assert_eq!(
            i18n.tr("this-key-does-not-exist"),
            "MISSING: this-key-does-not-exist"
        );
    }

    #[test]
    fn set_locale_ignores_unknown_locale() {
        let mut i18n = I18n::default();
        let before = i18n.current_locale().clone();
        i18n.set_locale("zz".parse().unwrap());
        assert_eq!(i18n.current_locale(), &before);
    }

    #[test]
    fn available_locales_are_sorted() {
        let i18n = I18n::default();
        let mut sorted = i18n.available_locales.clone();
        sorted.sort();
        assert_eq!(i18n.available_locales, sorted);
    }

    #[test]
    fn tr_with_args_substitutes_values() {
        let i18n = I18n::default();
        let text = i18n.tr_with_args("confirm-delete-translation", &[("language", "French")]);
        assert!(text.contains("French"), "got: {}", text);
    }
}
