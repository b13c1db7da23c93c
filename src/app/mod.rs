// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the workspace,
//! settings and about views.
//!
//! The `App` struct wires together the project content, localization and
//! component states, and translates messages into side effects like
//! config persistence, project file I/O or translation requests. This
//! file keeps policy decisions (window sizing, startup project, unsaved
//! guards) close to the main update loop so user-facing behavior is easy
//! to audit.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::i18n::fluent::I18n;
use crate::project::ContentStore;
use crate::translator::HttpTranslator;
use crate::ui::confirm;
use crate::ui::notifications;
use crate::ui::settings::State as SettingsState;
use crate::ui::theming::ThemeMode;
use crate::ui::translations;
use crate::ui::workspace;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state that bridges the project content, UI
/// components, localization and persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    store: ContentStore,
    /// File behind the current project, once it has been saved or opened.
    project_path: Option<PathBuf>,
    workspace: workspace::State,
    translations: translations::State,
    settings: SettingsState,
    translator: HttpTranslator,
    /// Open confirmation prompt, if any. Rendered as a modal overlay.
    prompt: Option<confirm::Prompt>,
    /// Whether the hamburger menu is open.
    menu_open: bool,
    theme_mode: ThemeMode,
    /// Persisted application state (last project, last directory).
    app_state: persisted_state::AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("project", &self.store.name())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
///
/// Close requests are intercepted (not honored directly) so unsaved draft
/// work can be confirmed away before the window goes.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let store = ContentStore::new(config::UNTITLED_PROJECT_NAME.to_string());
        let translations = translations::State::new(&store);
        Self {
            i18n: I18n::default(),
            screen: Screen::Workspace,
            store,
            project_path: None,
            workspace: workspace::State::new(),
            translations,
            settings: SettingsState::default(),
            translator: HttpTranslator::new(
                config::DEFAULT_SERVICE_URL.to_string(),
                config::DEFAULT_TRANSLATE_TIMEOUT_SECS,
            ),
            prompt: None,
            menu_open: false,
            theme_mode: ThemeMode::System,
            app_state: persisted_state::AppState::default(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off the startup
    /// project load based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(
            flags.lang.clone(),
            flags.i18n_dir.clone().map(PathBuf::from),
            &config,
        );

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;
        app.settings = SettingsState::from_config(&config);
        app.translator = update::build_translator(&app.settings);

        // Load application state (last project, last directory)
        let (app_state, state_warning) = persisted_state::AppState::load();
        app.app_state = app_state;

        // Show warnings for config/state loading issues
        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }
        if let Some(key) = state_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        // A path given on the command line wins; otherwise reopen the
        // project from the previous session if its file still exists.
        let startup_path = flags.project_path.map(PathBuf::from).or_else(|| {
            app.app_state
                .last_project_path
                .clone()
                .filter(|path| path.exists())
        });

        let task = match startup_path {
            Some(path) => update::load_project_from_path(path),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let name = self.store.name();

        if self.store.has_unsaved_draft_value() {
            format!("*{name} - {app_name}")
        } else {
            format!("{name} - {app_name}")
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.prompt.is_some());
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            store: &self.store,
            workspace: &self.workspace,
            translations: &self.translations,
            settings: &self.settings,
            prompt: self.prompt.as_ref(),
            notifications: &self.notifications,
            menu_open: self.menu_open,
            theme_mode: self.theme_mode,
        })
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            store: &mut self.store,
            project_path: &mut self.project_path,
            workspace: &mut self.workspace,
            translations: &mut self.translations,
            settings: &mut self.settings,
            translator: &mut self.translator,
            prompt: &mut self.prompt,
            menu_open: &mut self.menu_open,
            theme_mode: &mut self.theme_mode,
            app_state: &mut self.app_state,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Workspace(workspace_message) => {
                update::handle_workspace_message(&mut ctx, workspace_message)
            }
            Message::Translations(translations_message) => {
                update::handle_translations_message(&mut ctx, translations_message)
            }
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Settings(settings_message) => {
                update::handle_settings_message(&mut ctx, settings_message)
            }
            Message::About(about_message) => {
                update::handle_about_message(&mut ctx, &about_message)
            }
            Message::Confirm(confirm_message) => {
                update::handle_confirm_message(&mut ctx, &confirm_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::AutoTranslationCompleted { request_id, result } => {
                update::handle_auto_translation_completed(&mut ctx, request_id, result)
            }
            Message::OpenProjectDialogResult(path) => match path {
                Some(path) => update::load_project_from_path(path),
                None => Task::none(),
            },
            Message::SaveProjectDialogResult(path) => {
                update::handle_save_project_dialog_result(&mut ctx, path)
            }
            Message::ProjectLoaded(result) => update::handle_project_loaded(&mut ctx, result),
            Message::ProjectSaved(result) => update::handle_project_saved(&mut ctx, result),
            Message::Tick(_instant) => {
                // Drive notification auto-dismiss
                self.notifications.tick();
                Task::none()
            }
            Message::WindowCloseRequested(id) => {
                update::handle_window_close_requested(&mut ctx, id)
            }
        }
    }
}
