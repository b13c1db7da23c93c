// SPDX-License-Identifier: MPL-2.0
//! In-memory project content and mutation rules.
//!
//! The [`ContentStore`] owns everything the workspace presents: the
//! transcript, the saved translations, and the single in-progress
//! translation draft. All mutations go through it so the invariants hold
//! in one place:
//!
//! - at most one translation per language,
//! - at most one draft at any time,
//! - timestamps are stamped here, nowhere else,
//! - a pending automatic-translation request is identified by id, and a
//!   completion is dropped when the draft it was meant for is gone.

use crate::domain::{LanguageTag, Transcript, Translation, TranslationDraft};
use crate::error::TranslatorError;
use crate::project::document::ProjectDocument;
use chrono::Utc;

/// What a finished automatic-translation request amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoTranslationOutcome {
    /// The draft value was replaced with the service result.
    Applied,
    /// The request failed; the draft is untouched.
    Failed(TranslatorError),
    /// Nobody is interested in this result anymore.
    Stale,
}

#[derive(Debug, Clone)]
struct PendingFetch {
    id: u64,
    target: LanguageTag,
}

/// The project content and its mutation rules.
#[derive(Debug, Clone)]
pub struct ContentStore {
    name: String,
    transcript: Option<Transcript>,
    translations: Vec<Translation>,
    draft: Option<TranslationDraft>,
    pending_fetch: Option<PendingFetch>,
    next_request_id: u64,
}

impl ContentStore {
    /// Creates an empty store with the given project name.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            transcript: None,
            translations: Vec::new(),
            draft: None,
            pending_fetch: None,
            next_request_id: 1,
        }
    }

    /// Builds a store from a loaded project document.
    #[must_use]
    pub fn from_document(document: ProjectDocument) -> Self {
        Self {
            name: document.name,
            transcript: document.transcript,
            translations: document.translations,
            draft: None,
            pending_fetch: None,
            next_request_id: 1,
        }
    }

    /// Snapshots the persistent content as a document. Drafts and request
    /// state are transient and never leave the store.
    #[must_use]
    pub fn to_document(&self) -> ProjectDocument {
        ProjectDocument {
            version: crate::project::document::FORMAT_VERSION,
            name: self.name.clone(),
            transcript: self.transcript.clone(),
            translations: self.translations.clone(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    #[must_use]
    pub fn transcript(&self) -> Option<&Transcript> {
        self.transcript.as_ref()
    }

    pub fn set_transcript(&mut self, transcript: Transcript) {
        self.transcript = Some(transcript);
    }

    /// Saved translations, in insertion order.
    #[must_use]
    pub fn translations(&self) -> &[Translation] {
        &self.translations
    }

    /// Looks up a saved translation by language.
    #[must_use]
    pub fn translation(&self, language: &LanguageTag) -> Option<&Translation> {
        self.translations
            .iter()
            .find(|translation| &translation.language == language)
    }

    #[must_use]
    pub fn draft(&self) -> Option<&TranslationDraft> {
        self.draft.as_ref()
    }

    /// Replaces the draft wholesale. Any in-flight automatic translation
    /// loses its claim on the draft.
    pub fn set_draft(&mut self, draft: TranslationDraft) {
        self.pending_fetch = None;
        self.draft = Some(draft);
    }

    /// Removes the draft and drops interest in any in-flight request.
    pub fn clear_draft(&mut self) {
        self.pending_fetch = None;
        self.draft = None;
    }

    /// Creates or updates the translation for `language`.
    ///
    /// A new translation gets equal created/modified timestamps; updating
    /// an existing one only advances `date_modified`. Order is preserved
    /// on update, new languages append.
    pub fn set_translation(&mut self, language: &LanguageTag, value: String) {
        match self
            .translations
            .iter_mut()
            .find(|translation| &translation.language == language)
        {
            Some(existing) => {
                existing.value = value;
                existing.date_modified = Utc::now();
            }
            None => {
                self.translations
                    .push(Translation::new(language.clone(), value));
            }
        }
    }

    /// Removes the translation for `language`, if present. A draft derived
    /// from that translation is destroyed with it.
    pub fn delete_translation(&mut self, language: &LanguageTag) {
        self.translations
            .retain(|translation| &translation.language != language);

        let draft_matches = self
            .draft
            .as_ref()
            .is_some_and(|draft| draft.language.as_ref() == Some(language));
        if draft_matches {
            self.clear_draft();
        }
    }

    /// Registers interest in an automatic translation towards `target` and
    /// returns the request id the completion must present.
    pub fn begin_auto_translation(&mut self, target: LanguageTag) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        self.pending_fetch = Some(PendingFetch { id, target });
        id
    }

    /// Lands the result of an automatic translation request.
    ///
    /// The result is applied only when `id` matches the pending request
    /// and the draft still targets the same language; late completions
    /// after discard, retarget, or a newer request are reported as
    /// [`AutoTranslationOutcome::Stale`].
    pub fn complete_auto_translation(
        &mut self,
        id: u64,
        result: Result<String, TranslatorError>,
    ) -> AutoTranslationOutcome {
        let Some(fetch) = self.pending_fetch.take_if(|fetch| fetch.id == id) else {
            return AutoTranslationOutcome::Stale;
        };

        match result {
            Ok(value) => {
                let target_still_wanted = self
                    .draft
                    .as_ref()
                    .is_some_and(|draft| draft.auto_target() == Some(&fetch.target));
                if !target_still_wanted {
                    return AutoTranslationOutcome::Stale;
                }
                if let Some(draft) = self.draft.as_mut() {
                    draft.value = Some(value);
                }
                AutoTranslationOutcome::Applied
            }
            Err(error) => AutoTranslationOutcome::Failed(error),
        }
    }

    /// Whether an automatic translation request is in flight.
    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.pending_fetch.is_some()
    }

    /// Whether the draft holds a non-empty value that differs from the
    /// saved translation for its language. This is what gates the discard
    /// confirmation and enables the save button.
    #[must_use]
    pub fn has_unsaved_draft_value(&self) -> bool {
        let Some(draft) = &self.draft else {
            return false;
        };
        let Some(value) = &draft.value else {
            return false;
        };
        if value.is_empty() {
            return false;
        }
        let saved = draft
            .language
            .as_ref()
            .and_then(|language| self.translation(language))
            .map(|translation| translation.value.as_str());
        saved != Some(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RegionChoice;

    fn tag(s: &str) -> LanguageTag {
        LanguageTag::parse(s).unwrap()
    }

    fn store_with_translations(languages: &[(&str, &str)]) -> ContentStore {
        let mut store = ContentStore::new("test".to_string());
        for (language, value) in languages {
            store.set_translation(&tag(language), (*value).to_string());
        }
        store
    }

    #[test]
    fn set_translation_creates_with_equal_timestamps() {
        let store = store_with_translations(&[("es", "hola")]);
        let translation = store.translation(&tag("es")).unwrap();
        assert_eq!(translation.value, "hola");
        assert_eq!(translation.date_created, translation.date_modified);
    }

    #[test]
    fn set_translation_updates_in_place_and_stamps_modified() {
        let mut store = store_with_translations(&[("es", "hola"), ("fr", "salut")]);

        // Backdate creation so the update visibly advances date_modified.
        let created = Utc::now() - chrono::Duration::seconds(60);
        store.translations[0].date_created = created;
        store.translations[0].date_modified = created;

        store.set_translation(&tag("es"), "hola a todos".to_string());

        let languages: Vec<&str> = store
            .translations()
            .iter()
            .map(|t| t.language.as_str())
            .collect();
        assert_eq!(languages, vec!["es", "fr"]);

        let updated = store.translation(&tag("es")).unwrap();
        assert_eq!(updated.value, "hola a todos");
        assert_eq!(updated.date_created, created);
        assert!(updated.date_modified > created);
    }

    #[test]
    fn one_translation_per_language() {
        let mut store = store_with_translations(&[("es", "hola")]);
        store.set_translation(&tag("es"), "buenas".to_string());
        assert_eq!(store.translations().len(), 1);
    }

    #[test]
    fn delete_translation_removes_entry() {
        let mut store = store_with_translations(&[("es", "hola"), ("fr", "salut")]);
        store.delete_translation(&tag("es"));
        assert!(store.translation(&tag("es")).is_none());
        assert_eq!(store.translations().len(), 1);
    }

    #[test]
    fn delete_translation_destroys_derived_draft() {
        let mut store = store_with_translations(&[("es", "hola")]);
        let translation = store.translation(&tag("es")).unwrap().clone();
        store.set_draft(TranslationDraft::from_translation(&translation));

        store.delete_translation(&tag("es"));
        assert!(store.draft().is_none());
    }

    #[test]
    fn delete_translation_keeps_unrelated_draft() {
        let mut store = store_with_translations(&[("es", "hola")]);
        store.set_draft(TranslationDraft {
            language: Some(tag("fr")),
            region: RegionChoice::Inactive,
            value: Some("bonjour".to_string()),
        });

        store.delete_translation(&tag("es"));
        assert!(store.draft().is_some());
    }

    #[test]
    fn draft_is_replaced_wholesale() {
        let mut store = ContentStore::new("test".to_string());
        store.set_draft(TranslationDraft {
            language: Some(tag("fr")),
            region: RegionChoice::Pending,
            value: None,
        });
        store.set_draft(TranslationDraft::new());

        let draft = store.draft().unwrap();
        assert!(draft.language.is_none());
        assert_eq!(draft.region, RegionChoice::Inactive);
    }

    #[test]
    fn unsaved_detection_empty_value_is_clean() {
        let mut store = ContentStore::new("test".to_string());
        store.set_draft(TranslationDraft {
            language: Some(tag("fr")),
            region: RegionChoice::Inactive,
            value: Some(String::new()),
        });
        assert!(!store.has_unsaved_draft_value());
    }

    #[test]
    fn unsaved_detection_new_value_is_dirty() {
        let mut store = ContentStore::new("test".to_string());
        store.set_draft(TranslationDraft {
            language: Some(tag("fr")),
            region: RegionChoice::Inactive,
            value: Some("bonjour".to_string()),
        });
        assert!(store.has_unsaved_draft_value());
    }

    #[test]
    fn unsaved_detection_matches_saved_value() {
        let mut store = store_with_translations(&[("fr", "bonjour")]);
        let translation = store.translation(&tag("fr")).unwrap().clone();
        store.set_draft(TranslationDraft::from_translation(&translation));
        assert!(!store.has_unsaved_draft_value());

        let mut edited = store.draft().unwrap().clone();
        edited.value = Some("bonsoir".to_string());
        store.set_draft(edited);
        assert!(store.has_unsaved_draft_value());
    }

    #[test]
    fn unsaved_detection_without_draft() {
        let store = store_with_translations(&[("fr", "bonjour")]);
        assert!(!store.has_unsaved_draft_value());
    }

    #[test]
    fn auto_translation_applies_to_matching_draft() {
        let mut store = ContentStore::new("test".to_string());
        store.set_draft(TranslationDraft {
            language: Some(tag("fr")),
            region: RegionChoice::Pending,
            value: None,
        });

        let id = store.begin_auto_translation(tag("fr"));
        assert!(store.is_fetching());

        let outcome = store.complete_auto_translation(id, Ok("bonjour".to_string()));
        assert_eq!(outcome, AutoTranslationOutcome::Applied);
        assert!(!store.is_fetching());
        assert_eq!(store.draft().unwrap().value.as_deref(), Some("bonjour"));
        // Language and region survive the apply.
        assert_eq!(store.draft().unwrap().language, Some(tag("fr")));
        assert_eq!(store.draft().unwrap().region, RegionChoice::Pending);
    }

    #[test]
    fn auto_translation_discarded_draft_ignores_completion() {
        let mut store = ContentStore::new("test".to_string());
        store.set_draft(TranslationDraft {
            language: Some(tag("fr")),
            region: RegionChoice::Pending,
            value: None,
        });

        let id = store.begin_auto_translation(tag("fr"));
        store.clear_draft();
        assert!(!store.is_fetching());

        let outcome = store.complete_auto_translation(id, Ok("bonjour".to_string()));
        assert_eq!(outcome, AutoTranslationOutcome::Stale);
        assert!(store.draft().is_none());
    }

    #[test]
    fn auto_translation_replaced_draft_ignores_completion() {
        let mut store = ContentStore::new("test".to_string());
        store.set_draft(TranslationDraft {
            language: Some(tag("fr")),
            region: RegionChoice::Pending,
            value: None,
        });

        let id = store.begin_auto_translation(tag("fr"));
        // Editing the draft in any way drops interest.
        store.set_draft(TranslationDraft {
            language: Some(tag("de")),
            region: RegionChoice::Inactive,
            value: None,
        });

        let outcome = store.complete_auto_translation(id, Ok("bonjour".to_string()));
        assert_eq!(outcome, AutoTranslationOutcome::Stale);
        assert_eq!(store.draft().unwrap().value, None);
    }

    #[test]
    fn auto_translation_stale_id_keeps_newer_request() {
        let mut store = ContentStore::new("test".to_string());
        store.set_draft(TranslationDraft {
            language: Some(tag("fr")),
            region: RegionChoice::Pending,
            value: None,
        });

        let old_id = store.begin_auto_translation(tag("fr"));
        let new_id = store.begin_auto_translation(tag("fr"));
        assert_ne!(old_id, new_id);

        let outcome = store.complete_auto_translation(old_id, Ok("stale".to_string()));
        assert_eq!(outcome, AutoTranslationOutcome::Stale);
        // The newer request is still in flight.
        assert!(store.is_fetching());
        assert_eq!(store.draft().unwrap().value, None);

        let outcome = store.complete_auto_translation(new_id, Ok("fresh".to_string()));
        assert_eq!(outcome, AutoTranslationOutcome::Applied);
        assert_eq!(store.draft().unwrap().value.as_deref(), Some("fresh"));
    }

    #[test]
    fn auto_translation_failure_clears_fetch_and_keeps_draft() {
        let mut store = ContentStore::new("test".to_string());
        store.set_draft(TranslationDraft {
            language: Some(tag("fr")),
            region: RegionChoice::Selected(tag("fr-CA")),
            value: None,
        });

        let id = store.begin_auto_translation(tag("fr-CA"));
        let outcome = store.complete_auto_translation(id, Err(TranslatorError::Timeout));
        assert_eq!(
            outcome,
            AutoTranslationOutcome::Failed(TranslatorError::Timeout)
        );
        assert!(!store.is_fetching());
        assert_eq!(store.draft().unwrap().language, Some(tag("fr")));
    }

    #[test]
    fn document_round_trip_drops_transient_state() {
        let mut store = store_with_translations(&[("fr", "bonjour")]);
        store.set_transcript(Transcript::new(tag("en"), "hello".to_string()));
        store.set_draft(TranslationDraft::new());
        let _ = store.begin_auto_translation(tag("fr"));

        let document = store.to_document();
        let restored = ContentStore::from_document(document);

        assert_eq!(restored.name(), "test");
        assert!(restored.transcript().is_some());
        assert_eq!(restored.translations().len(), 1);
        assert!(restored.draft().is_none());
        assert!(!restored.is_fetching());
    }
}
