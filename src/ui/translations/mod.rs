// SPDX-License-Identifier: MPL-2.0
//! Translation workflow component.
//!
//! This is the heart of the Translations tab: a small state machine over
//! the draft held by the [`ContentStore`]. The visible step is never
//! stored; [`resolve_step`] derives it from the store content on every
//! render, so the store stays the single source of truth and the
//! component only keeps presentation state (the viewed-translation
//! pointer, the language filter and the editor buffer).
//!
//! Mutations flow through [`State::update`]. Destructive requests are not
//! applied there; they surface as [`Event`]s so the application can route
//! them through the confirmation prompt first.

mod view;

pub use view::{view, ViewContext};

use crate::domain::{LanguageTag, RegionChoice, TranslationDraft};
use crate::project::store::ContentStore;
use iced::widget::text_editor;
use std::fmt;

/// The workflow steps, derived from the store content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// No translations and no draft yet.
    Begin,
    /// A draft exists but language or value is still missing.
    ConfigureLanguage,
    /// Like `ConfigureLanguage`, with the automatic mode engaged.
    ConfigureAutomatic,
    /// A draft with both language and value is being edited.
    Editing,
    /// No draft; a saved translation is shown read-only.
    Viewing,
    /// Defensive fallback that renders nothing.
    Hidden,
}

/// Resolves which step the workflow is in.
///
/// The conditions are evaluated top to bottom and are mutually
/// exclusive: exactly one step matches any (translations, draft,
/// pointer) combination.
#[must_use]
pub fn resolve_step(store: &ContentStore, selected: Option<&LanguageTag>) -> Step {
    if store.translations().is_empty() && store.draft().is_none() {
        return Step::Begin;
    }

    if let Some(draft) = store.draft() {
        let unresolved = !draft.has_language() || !draft.has_value();
        if unresolved && !draft.region.is_active() {
            return Step::ConfigureLanguage;
        }
        if unresolved && draft.region.is_active() {
            return Step::ConfigureAutomatic;
        }
        return Step::Editing;
    }

    let pointer_resolves = selected.is_some_and(|tag| store.translation(tag).is_some());
    if pointer_resolves || !store.translations().is_empty() {
        return Step::Viewing;
    }

    Step::Hidden
}

/// Messages emitted by the workflow views.
#[derive(Debug, Clone)]
pub enum Message {
    /// Start the very first translation.
    Begin,
    /// Start another translation from the viewer.
    NewTranslation,
    /// The language list filter changed.
    LanguageFilterChanged(String),
    /// A target language was picked from the list.
    LanguageChosen(LanguageTag),
    /// Write the translation by hand.
    SelectModeManual,
    /// Let the translation service produce a first version.
    SelectModeAuto,
    /// The automatic target region changed. `None` leaves automatic mode.
    RegionChanged(Option<LanguageTag>),
    /// Send the transcript to the translation service.
    RequestAutoTranslation,
    /// Leave the configuration step.
    Back,
    /// The editor buffer received an action.
    EditorAction(text_editor::Action),
    /// Persist the draft value as the translation for the draft language.
    SaveDraft,
    /// Leave the editor, throwing away unsaved changes after confirmation.
    Discard,
    /// Copy a saved translation into the draft and edit it.
    OpenEditor(LanguageTag),
    /// Remove a saved translation.
    Delete(LanguageTag),
    /// Another translation was picked in the viewer header.
    TranslationSelected(LanguageTag),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// An automatic translation request must be dispatched. The id pairs
    /// the eventual completion with the store bookkeeping.
    AutoTranslationRequested {
        request_id: u64,
        target: LanguageTag,
    },
    /// The user wants to throw away unsaved draft work. The parent must
    /// confirm before calling [`State::discard_draft`].
    DiscardRequested,
    /// Deletion always goes through confirmation.
    DeleteRequested(LanguageTag),
}

/// Presentation state of the workflow.
///
/// Everything that matters for the project lives in the [`ContentStore`];
/// this struct only tracks what the user is looking at.
#[derive(Default)]
pub struct State {
    /// Language of the translation shown in the viewer.
    selected: Option<LanguageTag>,
    /// Filter text of the language list.
    language_filter: String,
    /// Editor buffer, rebuilt whenever the draft value changes outside
    /// of typing.
    editor: text_editor::Content,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("selected", &self.selected)
            .field("language_filter", &self.language_filter)
            .field("editor", &self.editor.text())
            .finish()
    }
}

impl State {
    /// Creates the workflow state for the given store, preselecting the
    /// first translation when one exists.
    #[must_use]
    pub fn new(store: &ContentStore) -> Self {
        let mut state = Self::default();
        state.sync(store);
        state
    }

    /// Language of the translation currently shown in the viewer.
    #[must_use]
    pub fn selected(&self) -> Option<&LanguageTag> {
        self.selected.as_ref()
    }

    /// The step the workflow is in right now.
    #[must_use]
    pub fn step(&self, store: &ContentStore) -> Step {
        resolve_step(store, self.selected.as_ref())
    }

    /// Processes a workflow message against the store.
    pub fn update(&mut self, message: Message, store: &mut ContentStore) -> Event {
        let event = self.apply(message, store);
        self.sync_pointer(store);
        event
    }

    /// Re-derives the pointer and the editor buffer after the store was
    /// mutated outside of [`State::update`], e.g. when an automatic
    /// translation lands or a confirmed action ran.
    pub fn sync(&mut self, store: &ContentStore) {
        self.sync_pointer(store);

        if let Some(value) = store.draft().and_then(|draft| draft.value.as_deref()) {
            if editor_text(&self.editor) != value {
                self.editor = text_editor::Content::with_text(value);
            }
        }
    }

    /// Removes the draft unconditionally. Callers are expected to have
    /// confirmed unsaved work already.
    pub fn discard_draft(&mut self, store: &mut ContentStore) {
        store.clear_draft();
        self.sync_pointer(store);
    }

    fn apply(&mut self, message: Message, store: &mut ContentStore) -> Event {
        match message {
            Message::Begin | Message::NewTranslation => {
                store.set_draft(TranslationDraft::new());
                self.language_filter.clear();
                Event::None
            }
            Message::LanguageFilterChanged(filter) => {
                self.language_filter = filter;
                Event::None
            }
            Message::LanguageChosen(language) => {
                let mut draft = store.draft().cloned().unwrap_or_default();
                draft.language = Some(language);
                store.set_draft(draft);
                Event::None
            }
            Message::SelectModeManual => {
                let mut draft = store.draft().cloned().unwrap_or_default();
                draft.value = Some(String::new());
                store.set_draft(draft);
                self.editor = text_editor::Content::new();
                Event::None
            }
            Message::SelectModeAuto => {
                let mut draft = store.draft().cloned().unwrap_or_default();
                draft.region = RegionChoice::Pending;
                store.set_draft(draft);
                Event::None
            }
            Message::RegionChanged(region) => {
                let mut draft = store.draft().cloned().unwrap_or_default();
                draft.region = match region {
                    Some(tag) => RegionChoice::Selected(tag),
                    None => RegionChoice::Inactive,
                };
                store.set_draft(draft);
                Event::None
            }
            Message::RequestAutoTranslation => {
                let Some(target) = store.draft().and_then(TranslationDraft::auto_target).cloned()
                else {
                    return Event::None;
                };
                let request_id = store.begin_auto_translation(target.clone());
                Event::AutoTranslationRequested { request_id, target }
            }
            Message::Back => {
                let Some(draft) = store.draft() else {
                    return Event::None;
                };
                if !draft.has_language() && !draft.has_value() {
                    // Nothing chosen yet: no data to lose.
                    store.clear_draft();
                } else if draft.has_language() && !draft.has_value() {
                    // The whole draft is reset, dropping any region intent
                    // along with the language.
                    store.set_draft(TranslationDraft::new());
                    self.language_filter.clear();
                }
                Event::None
            }
            Message::EditorAction(action) => {
                let edited = action.is_edit();
                self.editor.perform(action);
                if edited {
                    let mut draft = store.draft().cloned().unwrap_or_default();
                    draft.value = Some(editor_text(&self.editor));
                    store.set_draft(draft);
                }
                Event::None
            }
            Message::SaveDraft => {
                let Some(draft) = store.draft() else {
                    return Event::None;
                };
                let (Some(language), Some(value)) = (draft.language.clone(), draft.value.clone())
                else {
                    return Event::None;
                };
                store.set_translation(&language, value);
                store.clear_draft();
                self.selected = Some(language);
                Event::None
            }
            Message::Discard => {
                if store.has_unsaved_draft_value() {
                    Event::DiscardRequested
                } else {
                    self.discard_draft(store);
                    Event::None
                }
            }
            Message::OpenEditor(language) => {
                let Some(translation) = store.translation(&language) else {
                    return Event::None;
                };
                let draft = TranslationDraft::from_translation(translation);
                self.editor = text_editor::Content::with_text(translation.value.as_str());
                store.set_draft(draft);
                self.selected = Some(language);
                Event::None
            }
            Message::Delete(language) => Event::DeleteRequested(language),
            Message::TranslationSelected(language) => {
                self.selected = Some(language);
                Event::None
            }
        }
    }

    /// Keeps the pointer meaningful: it follows the draft language while
    /// one is chosen, and falls back to the first translation when the
    /// draft is gone and the pointed-at translation no longer exists.
    fn sync_pointer(&mut self, store: &ContentStore) {
        if let Some(language) = store.draft().and_then(|draft| draft.language.as_ref()) {
            self.selected = Some(language.clone());
            return;
        }

        if store.draft().is_none() {
            let resolves = self
                .selected
                .as_ref()
                .is_some_and(|tag| store.translation(tag).is_some());
            if !resolves {
                self.selected = store
                    .translations()
                    .first()
                    .map(|translation| translation.language.clone());
            }
        }
    }
}

/// The editor buffer always reports a trailing newline; strip it so the
/// draft value round-trips exactly and unsaved-change checks stay honest.
fn editor_text(editor: &text_editor::Content) -> String {
    let mut text = editor.text();
    if text.ends_with('\n') {
        text.pop();
    }
    text
}
