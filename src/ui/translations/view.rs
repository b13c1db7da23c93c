// SPDX-License-Identifier: MPL-2.0
//! Per-step rendering of the translation workflow.

use super::{resolve_step, Message, State, Step};
use crate::domain::{language, LanguageTag, TranslationDraft};
use crate::i18n::fluent::I18n;
use crate::project::store::ContentStore;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use chrono::{DateTime, Utc};
use iced::widget::{
    button, pick_list, scrollable, text_editor, text_input, Column, Container, Row, Space, Text,
};
use iced::{alignment, Element, Length};
use std::fmt;

/// Contextual data needed to render the workflow.
pub struct ViewContext<'a> {
    pub state: &'a State,
    pub store: &'a ContentStore,
    pub i18n: &'a I18n,
}

/// Renders the step the workflow is currently in.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = match resolve_step(ctx.store, ctx.state.selected.as_ref()) {
        Step::Begin => step_begin(&ctx),
        Step::ConfigureLanguage => step_configure_language(&ctx),
        Step::ConfigureAutomatic => step_configure_automatic(&ctx),
        Step::Editing => step_editing(&ctx),
        Step::Viewing => step_viewing(&ctx),
        Step::Hidden => Column::new().into(),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .into()
}

fn step_begin<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let hint = Text::new(ctx.i18n.tr("workflow-begin-hint")).size(typography::TITLE_SM);

    let begin = button(Text::new(ctx.i18n.tr("workflow-begin-button")).size(typography::BODY_LG))
        .padding([spacing::SM, spacing::XL])
        .style(styles::button::primary)
        .on_press(Message::Begin);

    Container::new(
        Column::new()
            .push(hint)
            .push(begin)
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

fn step_configure_language<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let chosen = ctx.store.draft().and_then(|draft| draft.language.as_ref());
    let fetching = ctx.store.is_fetching();

    let title =
        Text::new(ctx.i18n.tr("workflow-choose-language-title")).size(typography::TITLE_SM);

    let mut filter = text_input(
        &ctx.i18n.tr("workflow-language-filter-placeholder"),
        &ctx.state.language_filter,
    )
    .width(sizing::LANGUAGE_LIST_WIDTH)
    .padding(spacing::XS);
    if !fetching {
        filter = filter.on_input(Message::LanguageFilterChanged);
    }

    let list = language_list(ctx, chosen, fetching);

    let footer = config_footer(ctx, chosen, fetching);

    Column::new()
        .push(title)
        .push(filter)
        .push(list)
        .push(footer)
        .spacing(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// The catalog languages still available as translation targets, filtered
/// by the search text. Languages that already have a translation are
/// hidden.
fn language_list<'a>(
    ctx: &ViewContext<'a>,
    chosen: Option<&LanguageTag>,
    fetching: bool,
) -> Element<'a, Message> {
    let needle = ctx.state.language_filter.to_lowercase();

    let mut list = Column::new().spacing(spacing::XXS);
    let mut matches = 0usize;

    for entry in language::roots() {
        let taken = ctx
            .store
            .translations()
            .iter()
            .any(|translation| translation.language.as_str() == entry.tag);
        if taken {
            continue;
        }
        if !needle.is_empty()
            && !entry.name.to_lowercase().contains(&needle)
            && !entry.tag.starts_with(&needle)
        {
            continue;
        }
        matches += 1;

        let is_chosen = chosen.is_some_and(|tag| tag.as_str() == entry.tag);
        let style = if is_chosen {
            styles::button::selected
        } else {
            styles::button::unselected
        };

        let mut row = button(Text::new(entry.name).size(typography::BODY))
            .width(Length::Fill)
            .padding([spacing::XXS, spacing::SM])
            .style(style);
        if !fetching {
            row = row.on_press(Message::LanguageChosen(entry.to_tag()));
        }
        list = list.push(row);
    }

    if matches == 0 {
        list = list.push(
            Text::new(ctx.i18n.tr("workflow-no-language-matches")).size(typography::BODY_SM),
        );
    }

    scrollable(list)
        .width(sizing::LANGUAGE_LIST_WIDTH)
        .height(Length::Fill)
        .into()
}

/// Back on the left, the manual and automatic mode choices on the right.
fn config_footer<'a>(
    ctx: &ViewContext<'a>,
    chosen: Option<&LanguageTag>,
    fetching: bool,
) -> Element<'a, Message> {
    let mut back = button(
        Text::new(format!("← {}", ctx.i18n.tr("workflow-back-button"))).size(typography::BODY),
    )
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::unselected);
    if !fetching {
        back = back.on_press(Message::Back);
    }

    let auto_offered = automatic_mode_offered(chosen);

    let mut manual = button(Text::new(ctx.i18n.tr(manual_button_key(chosen))).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::unselected);
    if chosen.is_some() && !fetching {
        manual = manual.on_press(Message::SelectModeManual);
    }

    let mut modes = Row::new().push(manual).spacing(spacing::SM);
    if auto_offered {
        let mut auto =
            button(Text::new(ctx.i18n.tr("workflow-automatic-button")).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary);
        if chosen.is_some() && !fetching {
            auto = auto.on_press(Message::SelectModeAuto);
        }
        modes = modes.push(auto);
    }

    Row::new()
        .push(back)
        .push(Space::new().width(Length::Fill))
        .push(modes)
        .width(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn step_configure_automatic<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    // The step needs a language; without one there is nothing to configure.
    let Some(draft) = ctx.store.draft() else {
        return Column::new().into();
    };
    let Some(chosen) = draft.language.as_ref() else {
        return Column::new().into();
    };
    let fetching = ctx.store.is_fetching();

    let header = Column::new()
        .push(Text::new(ctx.i18n.tr("workflow-auto-title")).size(typography::BODY_LG))
        .push(Text::new(language::display_name(chosen)).size(typography::TITLE_SM))
        .spacing(spacing::XXS);

    let mut content = Column::new().push(header).spacing(spacing::MD);

    if language::has_regional_variants(chosen) {
        content = content.push(region_choices(ctx, draft, chosen, fetching));
    }

    content = content
        .push(Text::new(ctx.i18n.tr("workflow-provider-title")).size(typography::TITLE_SM))
        .push(Text::new(ctx.i18n.tr("workflow-provider-consent")).size(typography::BODY_SM));

    if fetching {
        content = content
            .push(Text::new(ctx.i18n.tr("workflow-translating-hint")).size(typography::BODY_SM));
    }

    let mut cancel = button(Text::new(ctx.i18n.tr("workflow-cancel-button")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::unselected);
    if !fetching {
        cancel = cancel.on_press(Message::RegionChanged(None));
    }

    let mut create = button(
        Text::new(ctx.i18n.tr("workflow-create-translation-button")).size(typography::BODY),
    )
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::primary);
    if !fetching {
        create = create.on_press(Message::RequestAutoTranslation);
    }

    let footer = Row::new()
        .push(cancel)
        .push(create)
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center);

    content
        .push(Space::new().height(Length::Fill))
        .push(footer)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Choice buttons for the root language and its regional variants.
fn region_choices<'a>(
    ctx: &ViewContext<'a>,
    draft: &TranslationDraft,
    chosen: &LanguageTag,
    fetching: bool,
) -> Element<'a, Message> {
    let selected_region = draft.region.selected();

    let mut choices = Column::new().spacing(spacing::XXS);
    for entry in std::iter::once(language::lookup(chosen))
        .flatten()
        .chain(language::regional_variants(chosen))
    {
        let tag = entry.to_tag();
        let style = if selected_region == Some(&tag) {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        let mut choice = button(Text::new(entry.name).size(typography::BODY))
            .width(sizing::LANGUAGE_LIST_WIDTH)
            .padding([spacing::XXS, spacing::SM])
            .style(style);
        if !fetching {
            choice = choice.on_press(Message::RegionChanged(Some(tag)));
        }
        choices = choices.push(choice);
    }

    choices.into()
}

fn step_editing<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let fetching = ctx.store.is_fetching();
    let unsaved = ctx.store.has_unsaved_draft_value();

    let mut leave = button(Text::new(ctx.i18n.tr(leave_button_key(unsaved))).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::unselected);
    if !fetching {
        leave = leave.on_press(Message::Discard);
    }

    let mut save = button(Text::new(ctx.i18n.tr("workflow-save-button")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);
    if unsaved && !fetching {
        save = save.on_press(Message::SaveDraft);
    }

    let header = header_row(
        ctx,
        Row::new().push(leave).push(save).spacing(spacing::SM),
    );

    let mut editor = text_editor(&ctx.state.editor)
        .padding(spacing::SM)
        .height(Length::Fill);
    if !fetching {
        editor = editor.on_action(Message::EditorAction);
    }

    Column::new()
        .push(header)
        .push(editor)
        .spacing(spacing::SM)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn step_viewing<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let Some(selected) = ctx.state.selected.as_ref() else {
        return Column::new().into();
    };
    let Some(translation) = ctx.store.translation(selected) else {
        return Column::new().into();
    };
    let fetching = ctx.store.is_fetching();

    let mut new_translation = button(
        Text::new(ctx.i18n.tr("workflow-new-translation-button")).size(typography::BODY),
    )
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::unselected);
    if !fetching {
        new_translation = new_translation.on_press(Message::NewTranslation);
    }

    let mut edit = button(Text::new(ctx.i18n.tr("workflow-edit-button")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::unselected);
    if !fetching {
        edit = edit.on_press(Message::OpenEditor(selected.clone()));
    }

    let mut delete =
        button(Text::new(ctx.i18n.tr("workflow-delete-button")).size(typography::BODY))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::danger);
    if !fetching {
        delete = delete.on_press(Message::Delete(selected.clone()));
    }

    let header = header_row(
        ctx,
        Row::new()
            .push(new_translation)
            .push(edit)
            .push(delete)
            .spacing(spacing::SM),
    );

    let body = scrollable(
        Container::new(Text::new(translation.value.as_str()).size(typography::BODY))
            .width(Length::Fill)
            .padding(spacing::MD),
    )
    .height(Length::Fill);

    Column::new()
        .push(header)
        .push(body)
        .spacing(spacing::SM)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// The language label (or selector), the created/modified line and the
/// step's action buttons on one row.
fn header_row<'a>(ctx: &ViewContext<'a>, actions: Row<'a, Message>) -> Element<'a, Message> {
    let mut header = Row::new()
        .push(language_label(ctx))
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .width(Length::Fill);

    let dated = ctx
        .state
        .selected
        .as_ref()
        .and_then(|tag| ctx.store.translation(tag));
    if let Some(translation) = dated {
        header = header.push(
            Text::new(history_line(
                ctx.i18n,
                translation.is_modified(),
                &translation.date_created,
                &translation.date_modified,
            ))
            .size(typography::CAPTION),
        );
    }

    header
        .push(Space::new().width(Length::Fill))
        .push(actions)
        .into()
}

/// Static text while a draft language is set or only one translation
/// exists; a selector once there are several to choose from.
fn language_label<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    if let Some(language) = ctx.store.draft().and_then(|draft| draft.language.as_ref()) {
        return Text::new(language::display_name(language))
            .size(typography::TITLE_SM)
            .into();
    }

    let translations = ctx.store.translations();
    if translations.len() == 1 {
        return Text::new(language::display_name(&translations[0].language))
            .size(typography::TITLE_SM)
            .into();
    }

    let options: Vec<TranslationChoice> = translations
        .iter()
        .map(|translation| TranslationChoice {
            tag: translation.language.clone(),
            name: language::display_name(&translation.language),
        })
        .collect();
    let selected = options
        .iter()
        .find(|choice| Some(&choice.tag) == ctx.state.selected.as_ref())
        .cloned();

    pick_list(options, selected, |choice| {
        Message::TranslationSelected(choice.tag)
    })
    .padding(spacing::XS)
    .into()
}

/// Wrapper implementing `Display` so translations can feed a `pick_list`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TranslationChoice {
    tag: LanguageTag,
    name: String,
}

impl fmt::Display for TranslationChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Automatic mode stays on offer until a language the service cannot
/// handle is chosen.
pub(super) fn automatic_mode_offered(chosen: Option<&LanguageTag>) -> bool {
    chosen.is_none_or(language::supports_machine_translation)
}

/// Plain "translate" when automatic mode is off the table, "translate
/// manually" while both modes are offered.
pub(super) fn manual_button_key(chosen: Option<&LanguageTag>) -> &'static str {
    if automatic_mode_offered(chosen) {
        "workflow-manual-button"
    } else {
        "workflow-translate-button"
    }
}

/// The editor leave button only warns about throwing work away when
/// there is work to throw away.
pub(super) fn leave_button_key(unsaved: bool) -> &'static str {
    if unsaved {
        "workflow-discard-button"
    } else {
        "workflow-back-button"
    }
}

/// "Created ..." until the first edit, "Last modified ..." afterwards.
pub(super) fn history_line(
    i18n: &I18n,
    is_modified: bool,
    created: &DateTime<Utc>,
    modified: &DateTime<Utc>,
) -> String {
    if is_modified {
        i18n.tr_with_args("content-modified-on", &[("date", &format_timestamp(modified))])
    } else {
        i18n.tr_with_args("content-created-on", &[("date", &format_timestamp(created))])
    }
}

fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M").to_string()
}
