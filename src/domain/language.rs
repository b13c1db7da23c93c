// SPDX-License-Identifier: MPL-2.0
//! Language tags and the built-in language catalog.
//!
//! Translations are keyed by a [`LanguageTag`], a validated subset of
//! BCP 47: a two- or three-letter primary subtag with an optional
//! two-letter region subtag (`fr`, `pt-BR`). The catalog provides
//! display names and the regional variants offered by the automatic
//! translation step.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// LanguageTag
// =============================================================================

/// A validated language tag (`xx`, `xxx`, or `xx-YY`).
///
/// Tags are normalized on parse: the primary subtag is lowercased and the
/// region subtag is uppercased, so `PT-br` and `pt-BR` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageTag(String);

/// Error returned when a string is not a valid language tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLanguageTag(pub String);

impl fmt::Display for InvalidLanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid language tag: {}", self.0)
    }
}

impl std::error::Error for InvalidLanguageTag {}

impl LanguageTag {
    /// Parses and normalizes a language tag.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidLanguageTag`] when the input is not a two- or
    /// three-letter primary subtag optionally followed by a two-letter
    /// region subtag.
    pub fn parse(input: &str) -> Result<Self, InvalidLanguageTag> {
        let mut parts = input.split('-');

        let primary = parts.next().unwrap_or_default();
        if !(2..=3).contains(&primary.len()) || !primary.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(InvalidLanguageTag(input.to_string()));
        }

        let region = parts.next();
        if let Some(region) = region {
            if region.len() != 2 || !region.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(InvalidLanguageTag(input.to_string()));
            }
        }

        // Anything beyond a region subtag is out of scope.
        if parts.next().is_some() {
            return Err(InvalidLanguageTag(input.to_string()));
        }

        let mut normalized = primary.to_ascii_lowercase();
        if let Some(region) = region {
            normalized.push('-');
            normalized.push_str(&region.to_ascii_uppercase());
        }

        Ok(Self(normalized))
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the primary subtag (`pt` for `pt-BR`).
    #[must_use]
    pub fn primary(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    /// Returns the region subtag, if any (`BR` for `pt-BR`).
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.0.split('-').nth(1)
    }

    /// Returns `true` when the tag carries a region subtag.
    #[must_use]
    pub fn is_regional(&self) -> bool {
        self.region().is_some()
    }

    /// Returns `true` when `other` is a regional variant of this tag's
    /// primary language (`pt-BR` is a variant of `pt`).
    #[must_use]
    pub fn is_variant_of(&self, root: &LanguageTag) -> bool {
        self.is_regional() && self.primary() == root.primary()
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LanguageTag {
    type Err = InvalidLanguageTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for LanguageTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for LanguageTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        LanguageTag::parse(&raw).map_err(de::Error::custom)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// A catalog entry: a language tag with its English display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub tag: &'static str,
    pub name: &'static str,
}

impl Language {
    /// The entry's tag as a validated [`LanguageTag`]. Catalog tags are
    /// already normalized, so no parsing is needed.
    #[must_use]
    pub fn to_tag(&self) -> LanguageTag {
        LanguageTag(self.tag.to_string())
    }
}

/// Built-in language catalog.
///
/// Entries without a region subtag populate the language picker; regional
/// entries are offered by the automatic-translation region step for their
/// primary language. Sorted by display name.
pub const CATALOG: &[Language] = &[
    Language { tag: "am", name: "Amharic" },
    Language { tag: "ar", name: "Arabic" },
    Language { tag: "ar-EG", name: "Arabic (Egypt)" },
    Language { tag: "ar-SA", name: "Arabic (Saudi Arabia)" },
    Language { tag: "bn", name: "Bengali" },
    Language { tag: "zh", name: "Chinese" },
    Language { tag: "zh-CN", name: "Chinese (China)" },
    Language { tag: "zh-TW", name: "Chinese (Taiwan)" },
    Language { tag: "nl", name: "Dutch" },
    Language { tag: "en", name: "English" },
    Language { tag: "en-GB", name: "English (United Kingdom)" },
    Language { tag: "en-US", name: "English (United States)" },
    Language { tag: "fr", name: "French" },
    Language { tag: "fr-CA", name: "French (Canada)" },
    Language { tag: "fr-FR", name: "French (France)" },
    Language { tag: "de", name: "German" },
    Language { tag: "ha", name: "Hausa" },
    Language { tag: "hi", name: "Hindi" },
    Language { tag: "it", name: "Italian" },
    Language { tag: "ja", name: "Japanese" },
    Language { tag: "ko", name: "Korean" },
    Language { tag: "pl", name: "Polish" },
    Language { tag: "pt", name: "Portuguese" },
    Language { tag: "pt-BR", name: "Portuguese (Brazil)" },
    Language { tag: "pt-PT", name: "Portuguese (Portugal)" },
    Language { tag: "ru", name: "Russian" },
    Language { tag: "es", name: "Spanish" },
    Language { tag: "es-ES", name: "Spanish (Spain)" },
    Language { tag: "es-MX", name: "Spanish (Mexico)" },
    Language { tag: "sw", name: "Swahili" },
    Language { tag: "tr", name: "Turkish" },
    Language { tag: "uk", name: "Ukrainian" },
];

/// Looks up a catalog entry by tag.
#[must_use]
pub fn lookup(tag: &LanguageTag) -> Option<&'static Language> {
    CATALOG.iter().find(|entry| entry.tag == tag.as_str())
}

/// Returns the display name for a tag, falling back to the raw tag for
/// languages outside the catalog.
#[must_use]
pub fn display_name(tag: &LanguageTag) -> String {
    lookup(tag).map_or_else(|| tag.to_string(), |entry| entry.name.to_string())
}

/// Languages without a region subtag, in catalog order.
pub fn roots() -> impl Iterator<Item = &'static Language> {
    CATALOG.iter().filter(|entry| !entry.tag.contains('-'))
}

/// Regional variants of the given language, in catalog order.
#[must_use]
pub fn regional_variants(root: &LanguageTag) -> Vec<&'static Language> {
    let prefix = format!("{}-", root.primary());
    CATALOG
        .iter()
        .filter(|entry| entry.tag.starts_with(&prefix))
        .collect()
}

/// Returns `true` when the catalog offers at least one regional variant
/// for the given language.
#[must_use]
pub fn has_regional_variants(root: &LanguageTag) -> bool {
    !regional_variants(root).is_empty()
}

/// Languages in the catalog that the translation service cannot handle.
const WITHOUT_MACHINE_TRANSLATION: &[&str] = &["am", "ha", "sw"];

/// Returns `true` when the translation service can produce text in the
/// given language. Languages outside the catalog are never supported.
#[must_use]
pub fn supports_machine_translation(tag: &LanguageTag) -> bool {
    lookup(tag).is_some() && !WITHOUT_MACHINE_TRANSLATION.contains(&tag.primary())
}
