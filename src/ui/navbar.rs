// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! This module provides the hamburger menu and the project file actions
//! that appear at the top of the workspace. The menu provides access to
//! the Settings and About screens.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub menu_open: bool,
    /// Whether the current project has content worth saving.
    pub can_save: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    OpenSettings,
    OpenAbout,
    NewProject,
    OpenProject,
    SaveProject,
    SaveProjectAs,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    OpenSettings,
    OpenAbout,
    NewProject,
    OpenProject,
    SaveProject,
    SaveProjectAs,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::OpenSettings => {
            *menu_open = false;
            Event::OpenSettings
        }
        Message::OpenAbout => {
            *menu_open = false;
            Event::OpenAbout
        }
        Message::NewProject => {
            *menu_open = false;
            Event::NewProject
        }
        Message::OpenProject => {
            *menu_open = false;
            Event::OpenProject
        }
        Message::SaveProject => {
            *menu_open = false;
            Event::SaveProject
        }
        Message::SaveProjectAs => {
            *menu_open = false;
            Event::SaveProjectAs
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    let top_bar = build_top_bar(&ctx);
    content = content.push(top_bar);

    // Dropdown menu (if open)
    if ctx.menu_open {
        let dropdown = build_dropdown(&ctx);
        content = content.push(dropdown);
    }

    content.into()
}

/// Build the top bar with hamburger menu button and project file actions.
fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let menu_button = button(Text::new("☰").size(typography::BODY_LG))
        .on_press(Message::ToggleMenu)
        .padding(spacing::XS);

    let new_button = button(Text::new(ctx.i18n.tr("navbar-new-button")))
        .on_press(Message::NewProject)
        .padding([spacing::XS, spacing::SM]);

    let open_button = button(Text::new(ctx.i18n.tr("navbar-open-button")))
        .on_press(Message::OpenProject)
        .padding([spacing::XS, spacing::SM]);

    let save_label = ctx.i18n.tr("navbar-save-button");
    let save_button = if ctx.can_save {
        button(Text::new(save_label))
            .on_press(Message::SaveProject)
            .padding([spacing::XS, spacing::SM])
    } else {
        // Nothing to persist yet: disabled
        button(Text::new(save_label)).padding([spacing::XS, spacing::SM])
    };

    let save_as_label = ctx.i18n.tr("navbar-save-as-button");
    let save_as_button = if ctx.can_save {
        button(Text::new(save_as_label))
            .on_press(Message::SaveProjectAs)
            .padding([spacing::XS, spacing::SM])
    } else {
        button(Text::new(save_as_label)).padding([spacing::XS, spacing::SM])
    };

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(menu_button)
        .push(new_button)
        .push(open_button)
        .push(save_button)
        .push(save_as_button);

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(styles::container::toolbar)
        .into()
}

/// Build the dropdown menu with Settings and About options.
fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let settings_item = build_menu_item(ctx.i18n.tr("menu-settings"), Message::OpenSettings);
    let about_item = build_menu_item(ctx.i18n.tr("menu-about"), Message::OpenAbout);

    let menu_column = Column::new()
        .spacing(spacing::XXS)
        .push(settings_item)
        .push(about_item);

    Container::new(menu_column)
        .padding(spacing::XS)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
            },
            ..Default::default()
        })
        .into()
}

/// Build a single menu item.
fn build_menu_item<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label))
        .on_press(message)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(menu_item_style)
        .into()
}

/// Style function for menu items.
fn menu_item_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.background.weak.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            menu_open: false,
            can_save: true,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navbar_view_renders_with_menu_open() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            menu_open: true,
            can_save: false,
        };
        let _element = view(ctx);
    }

    #[test]
    fn toggle_menu_changes_state() {
        let mut menu_open = false;
        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(menu_open);
        assert!(matches!(event, Event::None));

        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn menu_items_close_menu_and_emit_event() {
        let mut menu_open = true;

        let event = update(Message::OpenSettings, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::OpenSettings));

        menu_open = true;
        let event = update(Message::OpenAbout, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::OpenAbout));
    }

    #[test]
    fn file_actions_emit_events() {
        let mut menu_open = false;

        assert!(matches!(
            update(Message::NewProject, &mut menu_open),
            Event::NewProject
        ));
        assert!(matches!(
            update(Message::OpenProject, &mut menu_open),
            Event::OpenProject
        ));
        assert!(matches!(
            update(Message::SaveProject, &mut menu_open),
            Event::SaveProject
        ));
        assert!(matches!(
            update(Message::SaveProjectAs, &mut menu_open),
            Event::SaveProjectAs
        ));
    }
}
