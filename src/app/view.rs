// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current
//! screen, with the confirmation prompt and the notification toasts
//! stacked on top as overlays.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::project::ContentStore;
use crate::ui::about::{self, ViewContext as AboutViewContext};
use crate::ui::confirm::{self, ViewContext as ConfirmViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::settings::{self, State as SettingsState, ViewContext as SettingsViewContext};
use crate::ui::theming::ThemeMode;
use crate::ui::translations::{self, ViewContext as TranslationsViewContext};
use crate::ui::workspace::{self, TabStripContext, TranscriptContext};
use iced::widget::{Column, Container, Space, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub store: &'a ContentStore,
    pub workspace: &'a workspace::State,
    pub translations: &'a translations::State,
    pub settings: &'a SettingsState,
    pub prompt: Option<&'a confirm::Prompt>,
    pub notifications: &'a Manager,
    pub menu_open: bool,
    pub theme_mode: ThemeMode,
}

/// Renders the current screen and stacks the overlays over it.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Workspace => view_workspace(&ctx),
        Screen::Settings => view_settings(ctx.settings, ctx.i18n, ctx.theme_mode),
        Screen::About => view_about(ctx.i18n),
    };

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(current_view);

    if let Some(prompt) = ctx.prompt {
        layers = layers.push(
            confirm::view(ConfirmViewContext {
                prompt,
                i18n: ctx.i18n,
            })
            .map(Message::Confirm),
        );
    }

    layers = layers.push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification));

    layers.into()
}

fn view_workspace<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let has_transcript = ctx.store.transcript().is_some();

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        menu_open: ctx.menu_open,
        can_save: has_transcript || !ctx.store.translations().is_empty(),
    })
    .map(Message::Navbar);

    let tabs = workspace::tab_strip(TabStripContext {
        i18n: ctx.i18n,
        active: ctx.workspace.active(),
        has_transcript,
    })
    .map(Message::Workspace);

    let pane: Element<'a, Message> = match ctx.workspace.active() {
        workspace::Tab::Transcript => workspace::transcript_pane(TranscriptContext {
            i18n: ctx.i18n,
            transcript: ctx.store.transcript(),
        })
        .map(Message::Workspace),
        workspace::Tab::Translations => translations::view(TranslationsViewContext {
            state: ctx.translations,
            store: ctx.store,
            i18n: ctx.i18n,
        })
        .map(Message::Translations),
        // The analysis tab cannot be selected yet; keep the pane blank
        // if state ever points at it.
        workspace::Tab::Analysis => Space::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    };

    Column::new()
        .push(navbar_view)
        .push(tabs)
        .push(
            Container::new(pane)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .into()
}

fn view_settings<'a>(
    state: &'a SettingsState,
    i18n: &'a I18n,
    theme_mode: ThemeMode,
) -> Element<'a, Message> {
    settings::view(SettingsViewContext {
        state,
        i18n,
        theme_mode,
    })
    .map(Message::Settings)
}

fn view_about(i18n: &I18n) -> Element<'_, Message> {
    about::view(AboutViewContext { i18n }).map(Message::About)
}
