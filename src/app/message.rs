// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::transcript::Section;
use crate::error::Error;
use crate::ui::home;
use crate::ui::preview;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// screen messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Home(home::Message),
    Preview(preview::Message),
    /// Result from the open-video file dialog.
    VideoFileChosen(Option<PathBuf>),
    /// Result from the import-transcript file dialog.
    TranscriptFileChosen(Option<PathBuf>),
    /// Result from loading a transcript sidecar.
    TranscriptLoaded(Result<Vec<Section>, Error>),
    /// Periodic tick advancing the playback position while playing.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional start route resolved through the navigation table
    /// (`/` or `/preview`).
    pub route: Option<String>,
    /// Optional video path to preload on startup.
    pub file_path: Option<String>,
}
