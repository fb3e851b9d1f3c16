// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message, Screen};
use crate::config;
use crate::domain::transcript::{Section, SentenceId};
use crate::error::{Error, TranscriptError};
use crate::media;
use crate::transcript_file;
use crate::ui::home;
use crate::ui::preview;
use iced::Task;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Handles a top-level message against the application state.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Home(msg) => match home::update(msg) {
            home::Event::OpenVideo => open_video_dialog(app.config.last_open_dir.clone()),
            home::Event::ImportTranscript => {
                open_transcript_dialog(app.config.last_open_dir.clone())
            }
            home::Event::ToggleSentence(id) => toggle_sentence(app, &id),
            home::Event::GoToPreview => switch_screen(app, Screen::Preview),
        },
        Message::Preview(msg) => match preview::update(msg) {
            preview::Event::BackToHome => switch_screen(app, Screen::Home),
            preview::Event::TogglePlayback => toggle_playback(app),
            preview::Event::Seek(position) => {
                app.store.set_current_time(position);
                Task::none()
            }
            preview::Event::ToggleSentence(id) => toggle_sentence(app, &id),
        },
        Message::VideoFileChosen(Some(path)) => handle_video_chosen(app, path),
        Message::VideoFileChosen(None) => Task::none(),
        Message::TranscriptFileChosen(Some(path)) => handle_transcript_chosen(app, path),
        Message::TranscriptFileChosen(None) => Task::none(),
        Message::TranscriptLoaded(result) => {
            app.store.set_processing(false);
            match result {
                Ok(sections) => {
                    app.store.replace_sections(sections);
                    app.import_error = None;
                }
                Err(err) => app.import_error = Some(err.to_string()),
            }
            Task::none()
        }
        Message::Tick(now) => handle_tick(app, now),
    }
}

fn switch_screen(app: &mut App, screen: Screen) -> Task<Message> {
    app.screen = screen;
    Task::none()
}

fn toggle_sentence(app: &mut App, id: &SentenceId) -> Task<Message> {
    app.store.toggle_sentence_selection(id);
    Task::none()
}

fn toggle_playback(app: &mut App) -> Task<Message> {
    if app.store.is_playing() {
        app.store.set_is_playing(false);
        app.last_tick = None;
    } else {
        start_playback(app);
    }
    Task::none()
}

pub(super) fn start_playback(app: &mut App) {
    app.store.set_is_playing(true);
    // The first tick after resuming measures from itself, not from the
    // instant playback was paused.
    app.last_tick = None;
}

fn handle_video_chosen(app: &mut App, path: PathBuf) -> Task<Message> {
    remember_open_dir(app, &path);
    app.store.set_video_file(path);
    if app.config.autoplay.unwrap_or(false) {
        start_playback(app);
    }
    Task::none()
}

fn handle_transcript_chosen(app: &mut App, path: PathBuf) -> Task<Message> {
    remember_open_dir(app, &path);
    app.store.set_processing(true);
    Task::perform(load_transcript(path), Message::TranscriptLoaded)
}

/// Reads and parses a sidecar on the blocking pool; the read is synchronous
/// file I/O and must stay off the executor.
async fn load_transcript(path: PathBuf) -> Result<Vec<Section>, Error> {
    tokio::task::spawn_blocking(move || transcript_file::load_from_path(&path))
        .await
        .map_err(|e| Error::from(TranscriptError::IoError(e.to_string())))?
}

/// Advances the playback position by the elapsed wall-clock delta, pausing
/// at the transcript extent.
fn handle_tick(app: &mut App, now: Instant) -> Task<Message> {
    if !app.store.is_playing() {
        app.last_tick = None;
        return Task::none();
    }

    let delta = app
        .last_tick
        .map(|previous| now.saturating_duration_since(previous).as_secs_f64())
        .unwrap_or(0.0);
    app.last_tick = Some(now);

    let extent = app.store.transcript_extent();
    let next = app.store.current_time() + delta;
    if extent > 0.0 && next >= extent {
        app.store.set_current_time(extent);
        app.store.set_is_playing(false);
        app.last_tick = None;
    } else {
        app.store.set_current_time(next);
    }
    Task::none()
}

fn remember_open_dir(app: &mut App, chosen: &Path) {
    if let Some(parent) = chosen.parent() {
        app.config.last_open_dir = Some(parent.to_path_buf());
        // Preference persistence is best-effort; a failed write must not
        // interrupt the interaction that triggered it.
        let _ = config::save(&app.config);
    }
}

fn open_video_dialog(last_open_dir: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog =
                rfd::AsyncFileDialog::new().add_filter("Video", media::VIDEO_EXTENSIONS);
            if let Some(dir) = last_open_dir {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }
            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::VideoFileChosen,
    )
}

fn open_transcript_dialog(last_open_dir: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().add_filter("Transcript", &["toml"]);
            if let Some(dir) = last_open_dir {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }
            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::TranscriptFileChosen,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transcript::test_fixtures::sentence;
    use std::time::Duration;

    fn app_with_transcript() -> App {
        let mut app = App::default();
        app.store.replace_sections(vec![Section::new(
            "Only",
            vec![sentence("a", 0.0, 5.0), sentence("b", 5.0, 10.0)],
        )]);
        app
    }

    #[test]
    fn toggling_twice_through_the_home_screen_restores_state() {
        let mut app = app_with_transcript();
        let toggle =
            || Message::Home(home::Message::SentenceToggled(SentenceId::from("a")));

        let _ = update(&mut app, toggle());
        assert!(app.store.sections()[0].sentences[0].selected);

        let _ = update(&mut app, toggle());
        assert!(!app.store.sections()[0].sentences[0].selected);
    }

    #[test]
    fn screen_events_switch_screens_both_ways() {
        let mut app = App::default();
        let _ = update(&mut app, Message::Home(home::Message::PreviewPressed));
        assert_eq!(app.screen, Screen::Preview);

        let _ = update(&mut app, Message::Preview(preview::Message::BackPressed));
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn seeking_works_before_any_video_is_loaded() {
        // No sequencing is enforced between operations.
        let mut app = App::default();
        let _ = update(&mut app, Message::Preview(preview::Message::Seeked(42.0)));
        assert_eq!(app.store.current_time(), 42.0);
    }

    #[test]
    fn video_chosen_derives_a_url() {
        let mut app = App::default();
        let _ = update(
            &mut app,
            Message::VideoFileChosen(Some(PathBuf::from("/videos/talk.mp4"))),
        );
        assert!(app.store.video_url().is_some());
        assert!(!app.store.is_playing());
    }

    #[test]
    fn video_chosen_with_autoplay_starts_playback() {
        let mut app = App::default();
        app.config.autoplay = Some(true);
        let _ = update(
            &mut app,
            Message::VideoFileChosen(Some(PathBuf::from("/videos/talk.mp4"))),
        );
        assert!(app.store.is_playing());
    }

    #[test]
    fn cancelled_dialogs_change_nothing() {
        let mut app = App::default();
        let _ = update(&mut app, Message::VideoFileChosen(None));
        let _ = update(&mut app, Message::TranscriptFileChosen(None));
        assert!(app.store.video_file().is_none());
        assert!(!app.store.is_processing());
    }

    #[test]
    fn choosing_a_transcript_marks_processing() {
        let mut app = App::default();
        let _ = update(
            &mut app,
            Message::TranscriptFileChosen(Some(PathBuf::from("/tmp/talk.transcript.toml"))),
        );
        assert!(app.store.is_processing());
    }

    #[tokio::test]
    async fn load_transcript_reads_a_sidecar_off_the_executor() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("talk.transcript.toml");
        std::fs::write(
            &path,
            "[[section]]\ntitle = \"Intro\"\n\n[[section.sentence]]\nid = \"a\"\nstart = 0.0\nend = 5.0\n",
        )
        .expect("failed to write sidecar");

        let sections = load_transcript(path).await.expect("sidecar loads");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].sentences[0].id.as_str(), "a");
    }

    #[tokio::test]
    async fn load_transcript_surfaces_missing_files_as_errors() {
        let err = load_transcript(PathBuf::from("/nonexistent/transcript.toml"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Transcript(TranscriptError::IoError(_))));
    }

    #[test]
    fn transcript_loaded_replaces_sections_and_clears_processing() {
        let mut app = App::default();
        app.store.set_processing(true);
        let sections = vec![Section::new("New", vec![sentence("x", 0.0, 1.0)])];

        let _ = update(&mut app, Message::TranscriptLoaded(Ok(sections)));
        assert!(!app.store.is_processing());
        assert_eq!(app.store.sections().len(), 1);
        assert!(app.import_error.is_none());
    }

    #[test]
    fn transcript_load_failure_keeps_old_sections_and_records_error() {
        let mut app = app_with_transcript();
        app.store.set_processing(true);

        let err = Error::Transcript(TranscriptError::InvalidFormat("bad".into()));
        let _ = update(&mut app, Message::TranscriptLoaded(Err(err)));
        assert!(!app.store.is_processing());
        assert_eq!(app.store.sections().len(), 1);
        assert!(app.import_error.is_some());
    }

    #[test]
    fn tick_advances_position_by_elapsed_delta() {
        let mut app = app_with_transcript();
        start_playback(&mut app);

        let t0 = Instant::now();
        let _ = update(&mut app, Message::Tick(t0));
        assert_eq!(app.store.current_time(), 0.0);

        let _ = update(&mut app, Message::Tick(t0 + Duration::from_secs(2)));
        assert!((app.store.current_time() - 2.0).abs() < 1e-9);
        assert!(app.store.is_playing());
    }

    #[test]
    fn tick_pauses_at_the_transcript_extent() {
        let mut app = app_with_transcript();
        start_playback(&mut app);
        app.store.set_current_time(9.5);

        let t0 = Instant::now();
        let _ = update(&mut app, Message::Tick(t0));
        let _ = update(&mut app, Message::Tick(t0 + Duration::from_secs(3)));

        assert_eq!(app.store.current_time(), 10.0);
        assert!(!app.store.is_playing());
    }

    #[test]
    fn tick_while_paused_is_ignored() {
        let mut app = app_with_transcript();
        app.store.set_current_time(1.0);

        let _ = update(&mut app, Message::Tick(Instant::now()));
        assert_eq!(app.store.current_time(), 1.0);
    }
}
