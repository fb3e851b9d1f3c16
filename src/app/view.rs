// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the current screen from the project store; the screens own no
//! transcript state of their own.

use super::{App, Message, Screen};
use crate::ui::home;
use crate::ui::preview;
use iced::Element;

/// Renders the current application view based on the active screen.
pub fn view(app: &App) -> Element<'_, Message> {
    match app.screen {
        Screen::Home => home::view(home::ViewContext {
            i18n: &app.i18n,
            sections: app.store.sections(),
            is_processing: app.store.is_processing(),
            video_file_name: video_file_name(app),
            import_error: app.import_error.as_deref(),
        })
        .map(Message::Home),
        Screen::Preview => preview::view(preview::ViewContext {
            i18n: &app.i18n,
            video_file_name: video_file_name(app),
            current_time: app.store.current_time(),
            extent: app.store.transcript_extent(),
            is_playing: app.store.is_playing(),
            current_sentence: app.store.current_sentence(),
            selected_sentences: app.store.selected_sentences(),
        })
        .map(Message::Preview),
    }
}

fn video_file_name(app: &App) -> Option<&str> {
    app.store
        .video_file()
        .and_then(|path| path.file_name())
        .and_then(|name| name.to_str())
}
