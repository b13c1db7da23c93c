// SPDX-License-Identifier: MPL-2.0
//! Workspace tab strip and the read-only transcript pane.

use super::{Message, Tab};
use crate::domain::{language, Transcript};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use chrono::{DateTime, Utc};
use iced::widget::{button, scrollable, tooltip, Column, Container, Row, Text};
use iced::{Element, Length};

/// Contextual data needed to render the tab strip.
pub struct TabStripContext<'a> {
    pub i18n: &'a I18n,
    pub active: Tab,
    /// Whether the project holds a transcript. Without one the
    /// translations tab stays locked.
    pub has_transcript: bool,
}

/// Contextual data needed to render the transcript pane.
pub struct TranscriptContext<'a> {
    pub i18n: &'a I18n,
    pub transcript: Option<&'a Transcript>,
}

/// Renders the three workspace tabs.
pub fn tab_strip(ctx: TabStripContext<'_>) -> Element<'_, Message> {
    let transcript_tab = tab_button(
        ctx.i18n.tr("workspace-tab-transcript"),
        Tab::Transcript,
        ctx.active,
        true,
    );

    let translations_tab = tab_button(
        ctx.i18n.tr("workspace-tab-translations"),
        Tab::Translations,
        ctx.active,
        ctx.has_transcript,
    );
    let translations_tab: Element<'_, Message> = if ctx.has_transcript {
        translations_tab
    } else {
        styles::tooltip::styled(
            translations_tab,
            ctx.i18n.tr("workspace-tab-translations-locked"),
            tooltip::Position::Bottom,
        )
        .into()
    };

    let analysis_tab = styles::tooltip::styled(
        tab_button(
            ctx.i18n.tr("workspace-tab-analysis"),
            Tab::Analysis,
            ctx.active,
            false,
        ),
        ctx.i18n.tr("workspace-tab-analysis-locked"),
        tooltip::Position::Bottom,
    );

    let strip = Row::new()
        .push(transcript_tab)
        .push(translations_tab)
        .push(analysis_tab)
        .spacing(spacing::XS);

    Container::new(strip)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .style(styles::container::toolbar)
        .into()
}

fn tab_button(label: String, tab: Tab, active: Tab, enabled: bool) -> Element<'static, Message> {
    let style = if tab == active {
        styles::button::selected
    } else {
        styles::button::unselected
    };

    let mut widget = button(Text::new(label).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(style);

    if enabled {
        widget = widget.on_press(Message::TabSelected(tab));
    }

    widget.into()
}

/// Renders the read-only transcript pane.
pub fn transcript_pane(ctx: TranscriptContext<'_>) -> Element<'_, Message> {
    let Some(transcript) = ctx.transcript else {
        return Container::new(
            Text::new(ctx.i18n.tr("workspace-transcript-empty")).size(typography::BODY_LG),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into();
    };

    let header = Row::new()
        .push(
            Text::new(language::display_name(&transcript.language)).size(typography::TITLE_SM),
        )
        .push(
            Text::new(history_line(
                ctx.i18n,
                transcript.is_modified(),
                &transcript.date_created,
                &transcript.date_modified,
            ))
            .size(typography::CAPTION),
        )
        .spacing(spacing::MD)
        .align_y(iced::alignment::Vertical::Center);

    let body = scrollable(
        Container::new(Text::new(transcript.value.as_str()).size(typography::BODY))
            .width(Length::Fill)
            .padding(spacing::MD),
    )
    .height(Length::Fill);

    Column::new()
        .push(header)
        .push(body)
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// "Created ..." when the content was never edited, "Last modified ..."
/// afterwards. Same treatment as the translation viewer header.
fn history_line(
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LanguageTag;

    fn sample_transcript() -> Transcript {
        Transcript::new(
            LanguageTag::parse("en").unwrap(),
            "Hello everyone.".to_string(),
        )
    }

    #[test]
    fn tab_strip_renders() {
        let i18n = I18n::default();
        let ctx = TabStripContext {
            i18n: &i18n,
            active: Tab::Transcript,
            has_transcript: true,
        };

        let _element = tab_strip(ctx);
    }

    #[test]
    fn transcript_pane_renders_content_and_empty_state() {
        let i18n = I18n::default();
        let transcript = sample_transcript();

        let _with_content = transcript_pane(TranscriptContext {
            i18n: &i18n,
            transcript: Some(&transcript),
        });
        let _empty = transcript_pane(TranscriptContext {
            i18n: &i18n,
            transcript: None,
        });
    }

    #[test]
    fn history_line_prefers_the_modification_date() {
        let i18n = I18n::default();
        let mut transcript = sample_transcript();
        transcript.date_modified = transcript.date_created + chrono::Duration::minutes(5);

        let line = history_line(
            &i18n,
            transcript.is_modified(),
            &transcript.date_created,
            &transcript.date_modified,
        );

        assert!(line.contains(&format_timestamp(&transcript.date_modified)));
    }
}
