// SPDX-License-Identifier: MPL-2.0
//! About screen module displaying application information and licenses.
//!
//! This module shows application details, copyright information, the
//! MPL-2.0 license notice, credits for dependencies, and links to the
//! project repository.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, rule, scrollable, text, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Repository URL.
const REPOSITORY_URL: &str = "https://codeberg.org/Bawycle/iced_scribe";

/// Issues URL.
const ISSUES_URL: &str = "https://codeberg.org/Bawycle/iced_scribe/issues";

/// Dependencies list URL (Cargo.toml).
const DEPENDENCIES_URL: &str =
    "https://codeberg.org/Bawycle/iced_scribe/src/branch/master/Cargo.toml";

/// Contextual data needed to render the about screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the about screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackToWorkspace,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    BackToWorkspace,
}

/// Process an about screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::BackToWorkspace => Event::BackToWorkspace,
    }
}

/// Render the about screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let back_button = button(
        text(format!("← {}", ctx.i18n.tr("about-back-to-workspace-button")))
            .size(typography::BODY),
    )
    .on_press(Message::BackToWorkspace);

    let title = Text::new(ctx.i18n.tr("about-title")).size(typography::TITLE_LG);

    // Build sections
    let app_section = build_app_section(&ctx);
    let license_section = build_license_section(&ctx);
    let credits_section = build_credits_section(&ctx);
    let links_section = build_links_section(&ctx);

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .padding(spacing::MD)
        .push(back_button)
        .push(title)
        .push(app_section)
        .push(license_section)
        .push(credits_section)
        .push(links_section);

    scrollable(content).into()
}

/// Build the application info section.
fn build_app_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let app_name = Text::new(ctx.i18n.tr("about-app-name")).size(typography::TITLE_MD);
    let version = Text::new(format!("v{APP_VERSION}")).size(typography::BODY);
    let description = Text::new(ctx.i18n.tr("about-app-description")).size(typography::BODY);

    let content = Column::new()
        .spacing(spacing::XS)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(app_name)
                .push(version),
        )
        .push(description);

    build_section(ctx.i18n.tr("about-section-app"), content.into())
}

/// Build the license section (MPL-2.0).
fn build_license_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let license_name = Text::new(ctx.i18n.tr("about-license-name")).size(typography::BODY_LG);
    let license_summary = Text::new(ctx.i18n.tr("about-license-summary")).size(typography::BODY);

    let content = Column::new()
        .spacing(spacing::SM)
        .push(license_name)
        .push(license_summary);

    build_section(ctx.i18n.tr("about-section-license"), content.into())
}

/// Build the credits section.
fn build_credits_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XS)
        .push(build_credit_item(&ctx.i18n.tr("about-credits-iced")))
        .push(build_credit_item(&ctx.i18n.tr("about-credits-fluent")))
        .push(build_credit_item(&ctx.i18n.tr("about-credits-reqwest")))
        .push(build_link_item(
            &ctx.i18n.tr("about-credits-full-list"),
            DEPENDENCIES_URL,
        ));

    build_section(ctx.i18n.tr("about-section-credits"), content.into())
}

/// Build a single credit item.
fn build_credit_item<'a>(description: &str) -> Element<'a, Message> {
    Text::new(format!("• {description}"))
        .size(typography::BODY)
        .into()
}

/// Build the links section.
fn build_links_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let repo_label = ctx.i18n.tr("about-link-repository");
    let issues_label = ctx.i18n.tr("about-link-issues");

    let content = Column::new()
        .spacing(spacing::SM)
        .push(build_link_item(&repo_label, REPOSITORY_URL))
        .push(build_link_item(&issues_label, ISSUES_URL));

    build_section(ctx.i18n.tr("about-section-links"), content.into())
}

/// Build a link item with label and URL.
fn build_link_item<'a>(label: &str, url: &'a str) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .push(Text::new(format!("{label}:")).size(typography::BODY))
        .push(Text::new(url).size(typography::BODY))
        .into()
}

/// Build a section with title and content (same pattern as settings).
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn about_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext { i18n: &i18n };
        let _element = view(ctx);
    }

    #[test]
    fn back_to_workspace_emits_event() {
        let event = update(&Message::BackToWorkspace);
        assert!(matches!(event, Event::BackToWorkspace));
    }

    #[test]
    fn app_version_is_valid() {
        assert!(!APP_VERSION.is_empty());
    }
}
