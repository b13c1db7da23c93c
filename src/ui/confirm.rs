// SPDX-License-Identifier: MPL-2.0
//! Modal confirmation prompt for destructive actions.
//!
//! The application opens a prompt before any action that would throw away
//! user input: discarding an edited draft, deleting a stored translation,
//! or leaving the translation editor through the tab strip. The prompt
//! carries the pending [`Action`] so the parent can resume it on Confirm.

use crate::domain::LanguageTag;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::workspace::Tab;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, window, Element, Length};

/// What the application should do once the user confirms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Throw away the draft edits and return to the previous workflow step.
    DiscardDraft,
    /// Remove a stored translation.
    DeleteTranslation(LanguageTag),
    /// Throw away the draft edits, then switch to another workspace tab.
    SwitchTab(Tab),
    /// Throw away the draft edits, then show the open-project dialog.
    OpenProject,
    /// Throw away the draft edits, then start an empty project.
    NewProject,
    /// Throw away the draft edits, then close the window.
    CloseWindow(window::Id),
}

/// An open confirmation prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    message_key: String,
    message_args: Vec<(String, String)>,
    confirm_key: String,
    action: Action,
}

impl Prompt {
    /// Prompt before throwing away unsaved draft edits.
    #[must_use]
    pub fn discard_changes(action: Action) -> Self {
        Self {
            message_key: "confirm-discard-message".to_string(),
            message_args: Vec::new(),
            confirm_key: "confirm-discard-button".to_string(),
            action,
        }
    }

    /// Prompt before deleting a stored translation.
    #[must_use]
    pub fn delete_translation(language_name: &str, language: LanguageTag) -> Self {
        Self {
            message_key: "confirm-delete-translation".to_string(),
            message_args: vec![("language".to_string(), language_name.to_string())],
            confirm_key: "confirm-delete-button".to_string(),
            action: Action::DeleteTranslation(language),
        }
    }

    /// The action this prompt is guarding.
    #[must_use]
    pub fn action(&self) -> &Action {
        &self.action
    }
}

/// Messages emitted by the prompt buttons.
#[derive(Debug, Clone)]
pub enum Message {
    Confirm,
    Cancel,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Confirmed(Action),
    Cancelled,
}

/// Process a prompt message and return the corresponding event.
#[must_use]
pub fn update(prompt: &Prompt, message: &Message) -> Event {
    match message {
        Message::Confirm => Event::Confirmed(prompt.action.clone()),
        Message::Cancel => Event::Cancelled,
    }
}

/// Contextual data needed to render the prompt.
pub struct ViewContext<'a> {
    pub prompt: &'a Prompt,
    pub i18n: &'a I18n,
}

/// Render the prompt as a full-window overlay with a centered dialog.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let message_text = if ctx.prompt.message_args.is_empty() {
        ctx.i18n.tr(&ctx.prompt.message_key)
    } else {
        let args: Vec<(&str, &str)> = ctx
            .prompt
            .message_args
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        ctx.i18n.tr_with_args(&ctx.prompt.message_key, &args)
    };

    let message = Text::new(message_text).size(typography::BODY_LG);

    let cancel_button = button(Text::new(ctx.i18n.tr("confirm-cancel-button")).size(typography::BODY))
        .on_press(Message::Cancel)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::unselected);

    let confirm_button = button(Text::new(ctx.i18n.tr(&ctx.prompt.confirm_key)).size(typography::BODY))
        .on_press(Message::Confirm)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::danger);

    let buttons = Row::new()
        .spacing(spacing::SM)
        .push(cancel_button)
        .push(confirm_button);

    let dialog = Container::new(
        Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Right)
            .push(message)
            .push(buttons),
    )
    .width(Length::Fixed(sizing::DIALOG_WIDTH))
    .padding(spacing::LG)
    .style(styles::container::dialog);

    Container::new(dialog)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::overlay::scrim)
        .into()
}
