// SPDX-License-Identifier: MPL-2.0
use iced_scribe::app::Screen;
use iced_scribe::config::{self, Config};
use iced_scribe::domain::transcript::SentenceId;
use iced_scribe::i18n::I18n;
use iced_scribe::store::ProjectStore;
use iced_scribe::transcript_file;
use std::path::PathBuf;
use tempfile::tempdir;

const SIDECAR: &str = r#"
    [[section]]
    title = "Opening"

    [[section.sentence]]
    id = "a"
    text = "Welcome."
    start = 0.0
    end = 5.0

    [[section.sentence]]
    id = "b"
    text = "Let's begin."
    start = 5.0
    end = 10.0
"#;

#[test]
fn import_select_and_preview_workflow() {
    let dir = tempdir().expect("failed to create temporary directory");
    let sidecar_path = dir.path().join("talk.transcript.toml");
    std::fs::write(&sidecar_path, SIDECAR).expect("failed to write sidecar");

    let mut store = ProjectStore::new();
    store.set_video_file(PathBuf::from("/videos/talk.mp4"));
    assert!(store.video_url().expect("url after load").starts_with("file://"));

    let sections = transcript_file::load_from_path(&sidecar_path).expect("sidecar loads");
    store.replace_sections(sections);

    // Seek into the first sentence, then toggle the second on and off.
    store.set_current_time(3.0);
    assert_eq!(store.current_sentence().map(|s| s.id.as_str()), Some("a"));

    store.toggle_sentence_selection(&SentenceId::from("b"));
    let selected: Vec<_> = store
        .selected_sentences()
        .iter()
        .map(|s| s.id.as_str().to_string())
        .collect();
    assert_eq!(selected, ["b"]);

    store.toggle_sentence_selection(&SentenceId::from("b"));
    assert!(store.selected_sentences().is_empty());
}

#[test]
fn route_table_resolves_both_screens_and_rejects_the_rest() {
    assert_eq!(Screen::from_path("/"), Some(Screen::Home));
    assert_eq!(Screen::from_path("/preview"), Some(Screen::Preview));
    assert_eq!(Screen::from_path("/export"), None);
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let initial = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial, &config_path).expect("failed to write initial config");
    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let french = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french, &config_path).expect("failed to write french config");
    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("nav-home"), "Accueil");
}

#[test]
fn replacing_the_video_changes_the_playback_url() {
    let mut store = ProjectStore::new();
    store.set_video_file(PathBuf::from("/videos/first.mp4"));
    let first = store.video_url().expect("first url").to_string();

    store.set_video_file(PathBuf::from("/videos/second.mp4"));
    assert_ne!(store.video_url().expect("second url"), first);
}
