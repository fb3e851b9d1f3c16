// SPDX-License-Identifier: MPL-2.0
//! Preview screen: transport bar, current-sentence highlight, and the
//! selected-sentences list.
//!
//! The seek slider spans the transcript extent; with no decoder in this
//! crate, the transcript is the only duration source available.

use crate::domain::transcript::{Sentence, SentenceId};
use crate::i18n::I18n;
use crate::media::format_time_label;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::{
    widget::{button, container, scrollable, slider, text, Column, Row},
    Element, Length,
};

/// Contextual data needed to render the preview screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub video_file_name: Option<&'a str>,
    pub current_time: f64,
    pub extent: f64,
    pub is_playing: bool,
    pub current_sentence: Option<&'a Sentence>,
    pub selected_sentences: Vec<&'a Sentence>,
}

/// Messages emitted by the preview screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackPressed,
    PlayPausePressed,
    Seeked(f64),
    SentenceToggled(SentenceId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    BackToHome,
    TogglePlayback,
    Seek(f64),
    ToggleSentence(SentenceId),
}

/// Process a preview screen message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::BackPressed => Event::BackToHome,
        Message::PlayPausePressed => Event::TogglePlayback,
        Message::Seeked(position) => Event::Seek(position),
        Message::SentenceToggled(id) => Event::ToggleSentence(id),
    }
}

/// Render the preview screen.
#[must_use]
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let back_button = button(
        text(format!("← {}", ctx.i18n.tr("preview-back"))).size(typography::BODY),
    )
    .on_press(Message::BackPressed);

    let title = text(ctx.i18n.tr("preview-title")).size(typography::TITLE_LG);

    let video_panel: Element<'a, Message> = match ctx.video_file_name {
        Some(name) => text(name.to_string()).size(typography::TITLE_SM).into(),
        None => text(ctx.i18n.tr("preview-no-video"))
            .size(typography::BODY)
            .color(palette::GRAY_400)
            .into(),
    };

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(back_button)
        .push(title)
        .push(video_panel)
        .push(transport_bar(&ctx))
        .push(current_sentence_line(&ctx))
        .push(selected_list(&ctx));

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Build the play/pause button, seek slider, and position label.
fn transport_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let play_pause_key = if ctx.is_playing {
        "preview-pause"
    } else {
        "preview-play"
    };
    let play_pause = button(text(ctx.i18n.tr(play_pause_key)).size(typography::BODY))
        .on_press(Message::PlayPausePressed);

    // The slider needs a non-empty range even before a transcript is loaded.
    let upper = ctx.extent.max(1.0);
    let seek = slider(0.0..=upper, ctx.current_time.clamp(0.0, upper), Message::Seeked)
        .step(0.1)
        .width(Length::Fill);

    let position = text(format!(
        "{} / {}",
        format_time_label(ctx.current_time),
        format_time_label(ctx.extent)
    ))
    .size(typography::CAPTION);

    Row::new()
        .spacing(spacing::SM)
        .push(play_pause)
        .push(seek)
        .push(position)
        .into()
}

/// Build the highlighted line for the sentence at the playback position.
fn current_sentence_line<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.current_sentence {
        Some(sentence) => container(
            text(sentence.text.clone())
                .size(typography::TITLE_SM)
                .color(palette::PRIMARY_500),
        )
        .padding(spacing::SM)
        .style(container::bordered_box)
        .into(),
        None => text(ctx.i18n.tr("preview-current-none"))
            .size(typography::BODY)
            .color(palette::GRAY_400)
            .into(),
    }
}

/// Build the selected-sentences list, ordered by start time.
fn selected_list<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let header = text(ctx.i18n.tr("preview-selected-title")).size(typography::TITLE_MD);

    if ctx.selected_sentences.is_empty() {
        return Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(
                text(ctx.i18n.tr("preview-selected-empty"))
                    .size(typography::BODY)
                    .color(palette::GRAY_400),
            )
            .into();
    }

    let mut list = Column::new().spacing(spacing::XS);
    for sentence in &ctx.selected_sentences {
        let id = sentence.id.clone();
        list = list.push(
            Row::new()
                .spacing(spacing::SM)
                .push(text(sentence.time.clone()).size(typography::CAPTION))
                .push(text(sentence.text.clone()).size(typography::BODY).width(Length::Fill))
                .push(
                    button(text(ctx.i18n.tr("preview-remove")).size(typography::CAPTION))
                        .on_press(Message::SentenceToggled(id)),
                ),
        );
    }

    Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(scrollable(list).height(Length::Fill))
        .into()
}
