// SPDX-License-Identifier: MPL-2.0
//! Project state store.
//!
//! [`ProjectStore`] owns everything the two screens render from: the chosen
//! video file, the playback position, and the transcript with per-sentence
//! selection flags. It is an explicitly owned struct held by the application
//! root and mutated in place by the update loop; nothing here is global.
//!
//! Every operation either succeeds unconditionally or is a silent no-op
//! (unknown sentence id). There is no validation layer and no enforced
//! sequencing: every field is independently settable, and nothing prevents
//! seeking before a video is loaded.

use crate::domain::transcript::{query, Section, Sentence, SentenceId};
use crate::media;
use std::path::{Path, PathBuf};

/// Mutable application state for one editing session.
///
/// Lifetime equals the application run; no part of it is persisted.
#[derive(Debug, Default)]
pub struct ProjectStore {
    /// The currently loaded video file; absent until one is chosen.
    video_file: Option<PathBuf>,
    /// Playable URL derived from `video_file` when set.
    video_url: Option<String>,
    /// Current playback position in seconds. Driven externally by the
    /// transport surface; the store never advances it on its own.
    current_time: f64,
    /// Playback flag, driven externally by the transport surface.
    is_playing: bool,
    /// The whole transcript. Replaced wholesale by the loader, never edited
    /// structurally by the store.
    sections: Vec<Section>,
    /// True while a transcript import is in flight. Set and cleared by the
    /// owner of that work; no state machine is enforced here.
    is_processing: bool,
}

impl ProjectStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the loaded video file and derives a fresh playback URL.
    ///
    /// No format validation happens here. The previous URL, if any, is
    /// overwritten; a plain `file://` URL holds no resource that would need
    /// releasing.
    pub fn set_video_file(&mut self, path: PathBuf) {
        self.video_url = Some(media::playback_url(&path));
        self.video_file = Some(path);
    }

    /// Flips the selection flag on every sentence whose id matches.
    ///
    /// Ids are expected to be unique, so this touches at most one sentence
    /// in practice. An unknown id is a silent no-op, not an error; callers
    /// rely on permissive lookup semantics. Toggling is deliberately not
    /// idempotent: two calls with the same id restore the original state.
    pub fn toggle_sentence_selection(&mut self, id: &SentenceId) {
        for section in &mut self.sections {
            for sentence in &mut section.sentences {
                if sentence.id == *id {
                    sentence.selected = !sentence.selected;
                }
            }
        }
    }

    /// Overwrites the playback position. The value is taken as-is; there is
    /// no negative or NaN guard at this layer.
    pub fn set_current_time(&mut self, time: f64) {
        self.current_time = time;
    }

    /// Overwrites the playback flag.
    pub fn set_is_playing(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    /// Replaces the whole transcript.
    ///
    /// Prior selection state is silently discarded along with the old
    /// sections; the store offers no guarantee that selection survives a
    /// reload.
    pub fn replace_sections(&mut self, sections: Vec<Section>) {
        self.sections = sections;
    }

    /// Sets the transcript-import-in-flight flag.
    pub fn set_processing(&mut self, processing: bool) {
        self.is_processing = processing;
    }

    /// The selected sentences ordered by start time. Recomputed on every
    /// read; see [`query::selected_sentences`] for the tie-break contract.
    #[must_use]
    pub fn selected_sentences(&self) -> Vec<&Sentence> {
        query::selected_sentences(&self.sections)
    }

    /// The sentence whose time range contains the current playback
    /// position, if any. Recomputed on every read.
    #[must_use]
    pub fn current_sentence(&self) -> Option<&Sentence> {
        query::sentence_at(&self.sections, self.current_time)
    }

    /// Largest sentence end time, or 0.0 for an empty transcript. Bounds
    /// the seek slider and the playback tick in lieu of a decoded duration.
    #[must_use]
    pub fn transcript_extent(&self) -> f64 {
        self.sections
            .iter()
            .flat_map(|section| section.sentences.iter())
            .map(|sentence| sentence.end_time)
            .fold(0.0, f64::max)
    }

    #[must_use]
    pub fn video_file(&self) -> Option<&Path> {
        self.video_file.as_deref()
    }

    #[must_use]
    pub fn video_url(&self) -> Option<&str> {
        self.video_url.as_deref()
    }

    #[must_use]
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.is_processing
    }
}
