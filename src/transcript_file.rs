// SPDX-License-Identifier: MPL-2.0
//! Transcript sidecar loading.
//!
//! Transcripts arrive as a TOML document produced by an external
//! transcription step; this crate only reads the result. The document shape
//! mirrors the domain model:
//!
//! ```toml
//! [[section]]
//! title = "Introduction"
//!
//! [[section.sentence]]
//! id = "intro-1"
//! time = "00:00 - 00:05"
//! text = "Welcome back."
//! start = 0.0
//! end = 5.0
//! ```
//!
//! `id` and `time` are optional: missing ids are assigned `s{n}` in
//! flattened order (stable for a given document), and missing time labels
//! are synthesized from the range. All sentences start unselected.

use crate::domain::transcript::{Section, Sentence, SentenceId};
use crate::error::{Result, TranscriptError};
use crate::media::format_time_label;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct TranscriptDoc {
    #[serde(default, rename = "section")]
    sections: Vec<SectionDoc>,
}

#[derive(Debug, Deserialize)]
struct SectionDoc {
    #[serde(default)]
    title: String,
    #[serde(default, rename = "sentence")]
    sentences: Vec<SentenceDoc>,
}

#[derive(Debug, Deserialize)]
struct SentenceDoc {
    id: Option<String>,
    #[serde(default)]
    time: String,
    #[serde(default)]
    text: String,
    start: f64,
    end: f64,
}

/// Reads and parses a transcript sidecar file.
///
/// # Errors
///
/// Returns [`TranscriptError::IoError`] when the file cannot be read and
/// [`TranscriptError::InvalidFormat`] when it is not a valid transcript
/// document.
pub fn load_from_path(path: &Path) -> Result<Vec<Section>> {
    let content =
        fs::read_to_string(path).map_err(|e| TranscriptError::IoError(e.to_string()))?;
    parse_str(&content)
}

/// Parses a transcript document from a TOML string.
///
/// # Errors
///
/// Returns [`TranscriptError::InvalidFormat`] when the document does not
/// match the sidecar shape.
pub fn parse_str(content: &str) -> Result<Vec<Section>> {
    let doc: TranscriptDoc =
        toml::from_str(content).map_err(|e| TranscriptError::InvalidFormat(e.to_string()))?;

    let mut next_index = 0usize;
    let sections = doc
        .sections
        .into_iter()
        .map(|section| {
            let sentences = section
                .sentences
                .into_iter()
                .map(|raw| {
                    let sentence = into_sentence(raw, next_index);
                    next_index += 1;
                    sentence
                })
                .collect();
            Section::new(section.title, sentences)
        })
        .collect();
    Ok(sections)
}

fn into_sentence(raw: SentenceDoc, flattened_index: usize) -> Sentence {
    let id = raw
        .id
        .map(SentenceId::new)
        .unwrap_or_else(|| SentenceId::new(format!("s{flattened_index}")));
    let time = if raw.time.is_empty() {
        format!(
            "{} - {}",
            format_time_label(raw.start),
            format_time_label(raw.end)
        )
    } else {
        raw.time
    };
    Sentence {
        id,
        time,
        text: raw.text,
        start_time: raw.start,
        end_time: raw.end,
        selected: false,
    }
}
