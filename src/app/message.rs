// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::{Error, TranslatorError};
use crate::project::ProjectDocument;
use crate::ui::about;
use crate::ui::confirm;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::settings;
use crate::ui::translations;
use crate::ui::workspace;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Workspace(workspace::Message),
    Translations(translations::Message),
    Navbar(navbar::Message),
    Settings(settings::Message),
    About(about::Message),
    Confirm(confirm::Message),
    Notification(notifications::NotificationMessage),
    /// An automatic translation request finished. The id pairs the result
    /// with the store's bookkeeping; stale ids are dropped there.
    AutoTranslationCompleted {
        request_id: u64,
        result: Result<String, TranslatorError>,
    },
    /// Result from the open-project dialog. `None` means cancelled.
    OpenProjectDialogResult(Option<PathBuf>),
    /// Result from the save-as dialog. `None` means cancelled.
    SaveProjectDialogResult(Option<PathBuf>),
    /// A project file finished loading.
    ProjectLoaded(Result<(PathBuf, ProjectDocument), Error>),
    /// A project file finished writing.
    ProjectSaved(Result<PathBuf, Error>),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional project file to open on startup.
    pub project_path: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional data directory override (for the state file).
    /// Takes precedence over `SCRIBE_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SCRIBE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
