// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers `App::update`
//! dispatches to for the different parts of the application. Component
//! events that need confirmation are converted into prompts here; the
//! confirmed actions run in [`handle_confirm_message`].

use super::{config, persisted_state, persistence, Message, Screen};
use crate::domain::{language, LanguageTag};
use crate::error::{Error, TranslatorError};
use crate::i18n::fluent::I18n;
use crate::project::store::AutoTranslationOutcome;
use crate::project::{file, ContentStore, ProjectDocument};
use crate::translator::{HttpTranslator, TranslationProvider, TranslationRequest};
use crate::ui::about::{self, Event as AboutEvent};
use crate::ui::confirm;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::settings::{self, Event as SettingsEvent, State as SettingsState};
use crate::ui::theming::ThemeMode;
use crate::ui::translations::{self, Event as TranslationsEvent};
use crate::ui::workspace::{self, Event as WorkspaceEvent};
use iced::{window, Task};
use std::path::PathBuf;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub store: &'a mut ContentStore,
    pub project_path: &'a mut Option<PathBuf>,
    pub workspace: &'a mut workspace::State,
    pub translations: &'a mut translations::State,
    pub settings: &'a mut SettingsState,
    pub translator: &'a mut HttpTranslator,
    pub prompt: &'a mut Option<confirm::Prompt>,
    pub menu_open: &'a mut bool,
    pub theme_mode: &'a mut ThemeMode,
    pub app_state: &'a mut persisted_state::AppState,
    pub notifications: &'a mut notifications::Manager,
}

/// Builds the translation client from the settings buffers. An emptied
/// URL field falls back to the default endpoint.
pub fn build_translator(settings: &SettingsState) -> HttpTranslator {
    let url = settings.service_url().trim();
    let url = if url.is_empty() {
        config::DEFAULT_SERVICE_URL
    } else {
        url
    };
    HttpTranslator::new(url.to_string(), settings.timeout_secs())
}

/// Handles tab strip messages.
pub fn handle_workspace_message(
    ctx: &mut UpdateContext<'_>,
    message: workspace::Message,
) -> Task<Message> {
    match workspace::update(ctx.workspace, message, ctx.store.has_unsaved_draft_value()) {
        WorkspaceEvent::None => Task::none(),
        WorkspaceEvent::SwitchBlocked(tab) => {
            *ctx.prompt = Some(confirm::Prompt::discard_changes(confirm::Action::SwitchTab(
                tab,
            )));
            Task::none()
        }
    }
}

/// Handles translation workflow messages.
pub fn handle_translations_message(
    ctx: &mut UpdateContext<'_>,
    message: translations::Message,
) -> Task<Message> {
    match ctx.translations.update(message, ctx.store) {
        TranslationsEvent::None => Task::none(),
        TranslationsEvent::AutoTranslationRequested { request_id, target } => {
            dispatch_auto_translation(ctx, request_id, target)
        }
        TranslationsEvent::DiscardRequested => {
            *ctx.prompt = Some(confirm::Prompt::discard_changes(
                confirm::Action::DiscardDraft,
            ));
            Task::none()
        }
        TranslationsEvent::DeleteRequested(target) => {
            let name = language::display_name(&target);
            *ctx.prompt = Some(confirm::Prompt::delete_translation(&name, target));
            Task::none()
        }
    }
}

/// Spawns the async translation request the workflow asked for.
fn dispatch_auto_translation(
    ctx: &mut UpdateContext<'_>,
    request_id: u64,
    target: LanguageTag,
) -> Task<Message> {
    let Some(transcript) = ctx.store.transcript() else {
        // The translations tab is locked without a transcript; fail the
        // request so the fetching flag does not stay set.
        return handle_auto_translation_completed(
            ctx,
            request_id,
            Err(TranslatorError::Other("no transcript to translate".to_string())),
        );
    };

    let request = TranslationRequest {
        text: transcript.value.clone(),
        source: Some(transcript.language.clone()),
        target,
    };
    let translator = ctx.translator.clone();

    Task::perform(
        async move { translator.translate(request).await },
        move |result| Message::AutoTranslationCompleted { request_id, result },
    )
}

/// Applies a finished automatic translation. Stale results are dropped by
/// the store; failures surface as error toasts and keep the draft intact.
pub fn handle_auto_translation_completed(
    ctx: &mut UpdateContext<'_>,
    request_id: u64,
    result: Result<String, TranslatorError>,
) -> Task<Message> {
    match ctx.store.complete_auto_translation(request_id, result) {
        AutoTranslationOutcome::Applied => {
            ctx.translations.sync(ctx.store);
            ctx.notifications.clear_translate_errors();
        }
        AutoTranslationOutcome::Failed(error) => {
            ctx.translations.sync(ctx.store);
            ctx.notifications
                .push(Notification::error(error.i18n_key()));
        }
        AutoTranslationOutcome::Stale => {}
    }
    Task::none()
}

/// Handles navbar messages.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::OpenSettings => {
            *ctx.screen = Screen::Settings;
            Task::none()
        }
        NavbarEvent::OpenAbout => {
            *ctx.screen = Screen::About;
            Task::none()
        }
        NavbarEvent::NewProject => {
            if ctx.store.has_unsaved_draft_value() {
                *ctx.prompt = Some(confirm::Prompt::discard_changes(
                    confirm::Action::NewProject,
                ));
                Task::none()
            } else {
                start_new_project(ctx)
            }
        }
        NavbarEvent::OpenProject => {
            if ctx.store.has_unsaved_draft_value() {
                *ctx.prompt = Some(confirm::Prompt::discard_changes(
                    confirm::Action::OpenProject,
                ));
                Task::none()
            } else {
                open_project_dialog(ctx.app_state.last_open_directory.clone())
            }
        }
        NavbarEvent::SaveProject => save_project(ctx),
        NavbarEvent::SaveProjectAs => save_project_dialog(ctx),
    }
}

/// Replaces the current project with an empty untitled one.
pub fn start_new_project(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.store = ContentStore::new(config::UNTITLED_PROJECT_NAME.to_string());
    *ctx.project_path = None;
    *ctx.translations = translations::State::new(ctx.store);
    ctx.workspace.activate(workspace::Tab::Transcript);
    Task::none()
}

/// Opens the async file picker for project files.
pub fn open_project_dialog(last_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .add_filter("Scribe project", &[config::PROJECT_FILE_EXTENSION]);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::OpenProjectDialogResult,
    )
}

/// Starts the async load of a project file.
pub fn load_project_from_path(path: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            let document = file::load(path.clone()).await?;
            Ok((path, document))
        },
        Message::ProjectLoaded,
    )
}

/// Installs a loaded project document and records its path.
pub fn handle_project_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<(PathBuf, ProjectDocument), Error>,
) -> Task<Message> {
    match result {
        Ok((path, document)) => {
            *ctx.store = ContentStore::from_document(document);
            *ctx.translations = translations::State::new(ctx.store);
            ctx.workspace.activate(workspace::Tab::Transcript);
            *ctx.project_path = Some(path.clone());

            ctx.app_state.set_last_project(&path);
            if let Some(key) = ctx.app_state.save() {
                ctx.notifications.push(Notification::warning(key));
            }
        }
        Err(_error) => {
            ctx.notifications
                .push(Notification::error("notification-project-open-error"));
        }
    }
    Task::none()
}

/// Saves to the current project path, or asks for one first.
pub fn save_project(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match ctx.project_path.clone() {
        Some(path) => write_project(ctx.store.to_document(), path),
        None => save_project_dialog(ctx),
    }
}

/// Opens the async save-as picker, prefilled with the project name.
pub fn save_project_dialog(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let last_directory = ctx.app_state.last_open_directory.clone();
    let file_name = format!("{}.{}", ctx.store.name(), config::PROJECT_FILE_EXTENSION);

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .add_filter("Scribe project", &[config::PROJECT_FILE_EXTENSION])
                .set_file_name(&file_name);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.save_file().await.map(|h| h.path().to_path_buf())
        },
        Message::SaveProjectDialogResult,
    )
}

/// Handles the save-as dialog result. The chosen file stem becomes the
/// project name before writing.
pub fn handle_save_project_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog
        return Task::none();
    };

    ctx.store.set_name(file::project_name_from_path(&path));
    write_project(ctx.store.to_document(), path)
}

/// Starts the async write of the document.
fn write_project(document: ProjectDocument, path: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            file::save(path.clone(), document).await?;
            Ok(path)
        },
        Message::ProjectSaved,
    )
}

/// Reacts to a finished write: remembers the path and notifies.
pub fn handle_project_saved(
    ctx: &mut UpdateContext<'_>,
    result: Result<PathBuf, Error>,
) -> Task<Message> {
    match result {
        Ok(path) => {
            *ctx.project_path = Some(path.clone());
            ctx.app_state.set_last_project(&path);
            if let Some(key) = ctx.app_state.save() {
                ctx.notifications.push(Notification::warning(key));
            }
            ctx.notifications
                .push(Notification::success("notification-project-saved"));
        }
        Err(_error) => {
            ctx.notifications
                .push(Notification::error("notification-project-save-error"));
        }
    }
    Task::none()
}

/// Handles settings screen messages.
pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match settings::update(ctx.settings, message) {
        SettingsEvent::BackToWorkspace => {
            *ctx.screen = Screen::Workspace;
            Task::none()
        }
        SettingsEvent::LanguageSelected(locale) => {
            persistence::apply_language_change(ctx.i18n, locale)
        }
        SettingsEvent::ThemeModeSelected(mode) => {
            *ctx.theme_mode = mode;
            persistence::persist_theme_mode(mode)
        }
        SettingsEvent::TranslatorChanged => {
            *ctx.translator = build_translator(ctx.settings);
            persistence::persist_translator(ctx.settings)
        }
    }
}

/// Handles about screen messages.
pub fn handle_about_message(
    ctx: &mut UpdateContext<'_>,
    message: &about::Message,
) -> Task<Message> {
    match about::update(message) {
        AboutEvent::None => Task::none(),
        AboutEvent::BackToWorkspace => {
            *ctx.screen = Screen::Workspace;
            Task::none()
        }
    }
}

/// Handles confirmation prompt messages. The prompt is closed either way;
/// on confirm the guarded action runs.
pub fn handle_confirm_message(
    ctx: &mut UpdateContext<'_>,
    message: &confirm::Message,
) -> Task<Message> {
    let Some(prompt) = ctx.prompt.take() else {
        return Task::none();
    };

    match confirm::update(&prompt, message) {
        confirm::Event::Cancelled => Task::none(),
        confirm::Event::Confirmed(action) => apply_confirmed_action(ctx, action),
    }
}

/// Runs the action a confirmation prompt was guarding.
fn apply_confirmed_action(ctx: &mut UpdateContext<'_>, action: confirm::Action) -> Task<Message> {
    match action {
        confirm::Action::DiscardDraft => {
            ctx.translations.discard_draft(ctx.store);
            Task::none()
        }
        confirm::Action::DeleteTranslation(language) => {
            ctx.store.delete_translation(&language);
            ctx.translations.sync(ctx.store);
            Task::none()
        }
        confirm::Action::SwitchTab(tab) => {
            ctx.translations.discard_draft(ctx.store);
            ctx.workspace.activate(tab);
            Task::none()
        }
        confirm::Action::OpenProject => {
            ctx.translations.discard_draft(ctx.store);
            open_project_dialog(ctx.app_state.last_open_directory.clone())
        }
        confirm::Action::NewProject => {
            ctx.translations.discard_draft(ctx.store);
            start_new_project(ctx)
        }
        confirm::Action::CloseWindow(id) => window::close(id),
    }
}

/// Intercepts a window close. Unsaved draft work must be confirmed away
/// before the window actually closes.
pub fn handle_window_close_requested(
    ctx: &mut UpdateContext<'_>,
    id: window::Id,
) -> Task<Message> {
    if ctx.store.has_unsaved_draft_value() {
        *ctx.prompt = Some(confirm::Prompt::discard_changes(
            confirm::Action::CloseWindow(id),
        ));
        Task::none()
    } else {
        window::close(id)
    }
}
