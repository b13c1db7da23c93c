// SPDX-License-Identifier: MPL-2.0
//! Settings screen for the display language, the theme and the
//! translation service.
//!
//! The screen edits small buffers held in [`State`]; every change is
//! reported as an [`Event`] so the application can apply it and persist
//! the configuration right away.

use crate::app::config::{
    Config, MAX_TRANSLATE_TIMEOUT_SECS, MIN_TRANSLATE_TIMEOUT_SECS, TRANSLATE_TIMEOUT_STEP_SECS,
};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Horizontal,
    widget::{button, container, rule, scrollable, text, text_input, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};
use unic_langid::LanguageIdentifier;

/// Editable buffers of the translator section, initialized from the
/// loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct State {
    service_url: String,
    timeout_secs: u64,
}

impl State {
    /// Seeds the buffers with the effective configuration values.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            service_url: config.translator.effective_service_url().to_string(),
            timeout_secs: config.translator.effective_timeout_secs(),
        }
    }

    /// The service URL as currently typed.
    #[must_use]
    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// The request timeout in seconds.
    #[must_use]
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackToWorkspace,
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    ServiceUrlChanged(String),
    IncreaseTimeout,
    DecreaseTimeout,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    BackToWorkspace,
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    /// A translator buffer changed; the parent reads the new values from
    /// the [`State`] and persists them.
    TranslatorChanged,
}

/// Process a settings message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::BackToWorkspace => Event::BackToWorkspace,
        Message::LanguageSelected(locale) => Event::LanguageSelected(locale),
        Message::ThemeModeSelected(mode) => Event::ThemeModeSelected(mode),
        Message::ServiceUrlChanged(url) => {
            state.service_url = url;
            Event::TranslatorChanged
        }
        Message::IncreaseTimeout => {
            state.timeout_secs =
                (state.timeout_secs + TRANSLATE_TIMEOUT_STEP_SECS).min(MAX_TRANSLATE_TIMEOUT_SECS);
            Event::TranslatorChanged
        }
        Message::DecreaseTimeout => {
            state.timeout_secs = state
                .timeout_secs
                .saturating_sub(TRANSLATE_TIMEOUT_STEP_SECS)
                .max(MIN_TRANSLATE_TIMEOUT_SECS);
            Event::TranslatorChanged
        }
    }
}

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub state: &'a State,
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
}

/// Render the settings screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let back_button = button(
        text(format!("← {}", ctx.i18n.tr("settings-back-to-workspace-button")))
            .size(typography::BODY),
    )
    .on_press(Message::BackToWorkspace);

    let title = Text::new(ctx.i18n.tr("settings-title")).size(typography::TITLE_LG);

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .padding(spacing::MD)
        .push(back_button)
        .push(title)
        .push(build_general_section(&ctx))
        .push(build_translator_section(&ctx));

    scrollable(content).into()
}

/// Build the general section: display language and theme mode.
fn build_general_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr("settings-language-label")).size(typography::BODY))
        .push(build_language_choices(ctx))
        .push(Text::new(ctx.i18n.tr("settings-theme-label")).size(typography::BODY))
        .push(build_theme_choices(ctx));

    build_section(ctx.i18n.tr("settings-section-general"), content.into())
}

/// One button per available display locale, the active one highlighted.
fn build_language_choices<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut choices = Row::new().spacing(spacing::SM);

    for locale in &ctx.i18n.available_locales {
        // Locales name themselves: "language-name-fr" holds "Français".
        let translated_name = ctx.i18n.tr(&format!("language-name-{}", locale));
        let label = if translated_name.starts_with("MISSING:") {
            locale.to_string()
        } else {
            format!("{} ({})", translated_name, locale)
        };

        let style = if ctx.i18n.current_locale() == locale {
            styles::button::selected
        } else {
            styles::button::unselected
        };

        choices = choices.push(
            button(Text::new(label).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(style)
                .on_press(Message::LanguageSelected(locale.clone())),
        );
    }

    choices.into()
}

/// Light, dark and system theme buttons.
fn build_theme_choices<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let modes = [
        (ThemeMode::Light, "settings-theme-light"),
        (ThemeMode::Dark, "settings-theme-dark"),
        (ThemeMode::System, "settings-theme-system"),
    ];

    let mut choices = Row::new().spacing(spacing::SM);
    for (mode, key) in modes {
        let style = if ctx.theme_mode == mode {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        choices = choices.push(
            button(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(style)
                .on_press(Message::ThemeModeSelected(mode)),
        );
    }

    choices.into()
}

/// Build the translator section: service endpoint and request timeout.
fn build_translator_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let url_input = text_input(
        &ctx.i18n.tr("settings-service-url-placeholder"),
        &ctx.state.service_url,
    )
    .on_input(Message::ServiceUrlChanged)
    .padding(spacing::XS);

    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr("settings-service-url-label")).size(typography::BODY))
        .push(url_input)
        .push(Text::new(ctx.i18n.tr("settings-service-url-hint")).size(typography::BODY_SM))
        .push(Text::new(ctx.i18n.tr("settings-timeout-label")).size(typography::BODY))
        .push(build_timeout_stepper(ctx));

    build_section(ctx.i18n.tr("settings-section-translator"), content.into())
}

/// Stepper row adjusting the timeout in fixed increments.
fn build_timeout_stepper<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut decrease = button(Text::new("−").size(typography::BODY_LG))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::unselected);
    if ctx.state.timeout_secs > MIN_TRANSLATE_TIMEOUT_SECS {
        decrease = decrease.on_press(Message::DecreaseTimeout);
    }

    let mut increase = button(Text::new("+").size(typography::BODY_LG))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::unselected);
    if ctx.state.timeout_secs < MAX_TRANSLATE_TIMEOUT_SECS {
        increase = increase.on_press(Message::IncreaseTimeout);
    }

    let seconds = ctx.state.timeout_secs.to_string();
    let value = Text::new(
        ctx.i18n
            .tr_with_args("settings-timeout-value", &[("seconds", seconds.as_str())]),
    )
    .size(typography::BODY);

    Row::new()
        .spacing(spacing::SM)
        .align_y(iced::alignment::Vertical::Center)
        .push(decrease)
        .push(value)
        .push(increase)
        .into()
}

/// Build a section with title and content (same pattern as the about
/// screen).
fn build_section(title: String, content: Element<'_, Message>) -> Element<'_, Message> {
    let header = Text::new(title).size(typography::TITLE_SM);

    let inner = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(rule::horizontal(1))
        .push(content);

    Container::new(inner)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
