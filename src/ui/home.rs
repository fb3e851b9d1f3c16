// SPDX-License-Identifier: MPL-2.0
//! Home screen: video selection, transcript import, and sentence selection.
//!
//! The transcript is rendered section by section with a checkbox per
//! sentence. All state lives in the project store; this module only maps
//! interactions to events for the application root.

use crate::domain::transcript::{Section, SentenceId};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::{
    widget::{button, checkbox, container, scrollable, text, Column, Row},
    Element, Length,
};

/// Contextual data needed to render the home screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub sections: &'a [Section],
    pub is_processing: bool,
    pub video_file_name: Option<&'a str>,
    pub import_error: Option<&'a str>,
}

/// Messages emitted by the home screen.
#[derive(Debug, Clone)]
pub enum Message {
    OpenVideoPressed,
    ImportTranscriptPressed,
    SentenceToggled(SentenceId),
    PreviewPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    OpenVideo,
    ImportTranscript,
    ToggleSentence(SentenceId),
    GoToPreview,
}

/// Process a home screen message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::OpenVideoPressed => Event::OpenVideo,
        Message::ImportTranscriptPressed => Event::ImportTranscript,
        Message::SentenceToggled(id) => Event::ToggleSentence(id),
        Message::PreviewPressed => Event::GoToPreview,
    }
}

/// Render the home screen.
#[must_use]
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = text(ctx.i18n.tr("home-title")).size(typography::TITLE_LG);

    let toolbar = Row::new()
        .spacing(spacing::SM)
        .push(
            button(text(ctx.i18n.tr("home-open-video")).size(typography::BODY))
                .on_press(Message::OpenVideoPressed),
        )
        .push(
            button(text(ctx.i18n.tr("home-import-transcript")).size(typography::BODY))
                .on_press_maybe((!ctx.is_processing).then_some(Message::ImportTranscriptPressed)),
        )
        .push(
            button(text(ctx.i18n.tr("nav-preview")).size(typography::BODY))
                .on_press(Message::PreviewPressed),
        );

    let video_line = match ctx.video_file_name {
        Some(name) => text(name.to_string()).size(typography::BODY),
        None => text(ctx.i18n.tr("home-no-video"))
            .size(typography::BODY)
            .color(palette::GRAY_400),
    };

    let mut content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(title)
        .push(toolbar)
        .push(video_line);

    if ctx.is_processing {
        content = content.push(
            text(ctx.i18n.tr("home-processing"))
                .size(typography::BODY)
                .color(palette::PRIMARY_500),
        );
    }

    if let Some(error) = ctx.import_error {
        content = content.push(
            text(error.to_string())
                .size(typography::BODY)
                .color(palette::ERROR_500),
        );
    }

    content = content.push(transcript_list(&ctx));

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Build the scrollable section/sentence list.
fn transcript_list<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    if ctx.sections.is_empty() {
        return text(ctx.i18n.tr("home-no-transcript"))
            .size(typography::BODY)
            .color(palette::GRAY_400)
            .into();
    }

    let mut list = Column::new().spacing(spacing::MD);
    for section in ctx.sections {
        let count = format!(
            "{} {}",
            section.sentences.len(),
            ctx.i18n.tr("home-sentence-count")
        );
        let header = Row::new()
            .spacing(spacing::SM)
            .align_y(iced::Alignment::Center)
            .push(text(section.title.clone()).size(typography::TITLE_SM))
            .push(
                text(count)
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            );

        let mut section_column = Column::new().spacing(spacing::XS).push(header);

        for sentence in &section.sentences {
            let id = sentence.id.clone();
            let label = format!("{}  {}", sentence.time, sentence.text);
            section_column = section_column.push(
                checkbox(sentence.selected)
                    .label(label)
                    .size(typography::BODY)
                    .on_toggle(move |_| Message::SentenceToggled(id.clone())),
            );
        }
        list = list.push(section_column);
    }

    scrollable(list).height(Length::Fill).into()
}
