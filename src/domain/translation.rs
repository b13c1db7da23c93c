// SPDX-License-Identifier: MPL-2.0
//! Saved translations and the in-progress translation draft.
//!
//! A [`Translation`] is persisted in the project document; at most one
//! exists per language. A [`TranslationDraft`] is the transient working
//! copy the workflow edits; at most one draft exists at any time, and it
//! never touches the disk.

use super::language::LanguageTag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Translation
// =============================================================================

/// A saved translation of the project transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub language: LanguageTag,
    pub value: String,
    pub date_created: DateTime<Utc>,
    pub date_modified: DateTime<Utc>,
}

impl Translation {
    /// Creates a translation stamped with the current time.
    /// Both timestamps are equal until the first later edit.
    #[must_use]
    pub fn new(language: LanguageTag, value: String) -> Self {
        let now = Utc::now();
        Self {
            language,
            value,
            date_created: now,
            date_modified: now,
        }
    }

    /// Returns `true` once the translation has been edited after creation.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.date_modified != self.date_created
    }
}

// =============================================================================
// RegionChoice
// =============================================================================

/// Region selection for the automatic-translation step.
///
/// The three variants are load-bearing: `Pending` (engaged, nothing picked
/// yet) is what routes the workflow into the automatic configuration step,
/// while `Inactive` keeps it in the language step.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RegionChoice {
    /// Automatic mode not engaged.
    #[default]
    Inactive,
    /// Automatic mode engaged, region not chosen yet.
    Pending,
    /// A regional variant was chosen as the translation target.
    Selected(LanguageTag),
}

impl RegionChoice {
    /// Returns `true` unless the choice is [`RegionChoice::Inactive`].
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, RegionChoice::Inactive)
    }

    /// Returns the chosen region tag, if one was selected.
    #[must_use]
    pub fn selected(&self) -> Option<&LanguageTag> {
        match self {
            RegionChoice::Selected(tag) => Some(tag),
            _ => None,
        }
    }
}

// =============================================================================
// TranslationDraft
// =============================================================================

/// The single in-progress translation edit.
///
/// Every field is optional on purpose: which fields are set determines the
/// workflow step shown to the user. The draft is replaced wholesale, never
/// merged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslationDraft {
    pub language: Option<LanguageTag>,
    pub region: RegionChoice,
    pub value: Option<String>,
}

impl TranslationDraft {
    /// Creates an empty draft (the begin/new-translation state).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a draft holding a full copy of an existing translation,
    /// used when opening the editor on a saved translation.
    #[must_use]
    pub fn from_translation(translation: &Translation) -> Self {
        Self {
            language: Some(translation.language.clone()),
            region: RegionChoice::Inactive,
            value: Some(translation.value.clone()),
        }
    }

    /// Returns `true` when a language has been chosen.
    #[must_use]
    pub fn has_language(&self) -> bool {
        self.language.is_some()
    }

    /// Returns `true` when a value exists, even an empty one.
    #[must_use]
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// The target for an automatic translation request: the chosen
    /// regional variant when one is selected, otherwise the draft
    /// language.
    #[must_use]
    pub fn auto_target(&self) -> Option<&LanguageTag> {
        self.region.selected().or(self.language.as_ref())
    }
}
