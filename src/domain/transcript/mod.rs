// SPDX-License-Identifier: MPL-2.0
//! Transcript data model.
//!
//! A transcript is an ordered list of [`Section`]s, each holding an ordered
//! list of [`Sentence`]s. Order is meaningful (document order) and is never
//! changed by the model. "Flattened order" — sections first, then sentences
//! within each section — is the authoritative enumeration order used for
//! every tie-break in the derived views.

pub mod query;

use std::fmt;

/// Opaque, stable identifier for a [`Sentence`].
///
/// Uniqueness across the whole transcript is the only invariant; the id is
/// the sole key used to toggle sentence selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SentenceId(String);

impl SentenceId {
    /// Creates an id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SentenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SentenceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A single transcript unit with a time range and selection flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// Unique, stable identifier.
    pub id: SentenceId,
    /// Human-readable display label for the time range. The format is
    /// opaque to the model and carried through unchanged.
    pub time: String,
    /// Sentence text.
    pub text: String,
    /// Start offset in seconds into the video.
    pub start_time: f64,
    /// End offset in seconds into the video. `start_time <= end_time` is
    /// expected but not enforced here; a violation is a caller error, not a
    /// runtime fault.
    pub end_time: f64,
    /// Whether the sentence is flagged for inclusion in the preview.
    pub selected: bool,
}

impl Sentence {
    /// Returns true if `time` falls inside the sentence range, inclusive on
    /// both ends.
    #[must_use]
    pub fn contains(&self, time: f64) -> bool {
        self.start_time <= time && time <= self.end_time
    }
}

/// A named, ordered group of transcript sentences.
///
/// Titles carry no uniqueness constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub sentences: Vec<Sentence>,
}

impl Section {
    #[must_use]
    pub fn new(title: impl Into<String>, sentences: Vec<Sentence>) -> Self {
        Self {
            title: title.into(),
            sentences,
        }
    }
}
