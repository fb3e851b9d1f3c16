// SPDX-License-Identifier: MPL-2.0
//! Derived views over a transcript.
//!
//! Both queries are plain functions recomputed on every call; at the data
//! scale of a transcript (tens to low hundreds of sentences) caching buys
//! nothing. Callers must not assume referential stability across reads
//! after a mutation.

use super::{Section, Sentence};
use std::cmp::Ordering;

/// Enumerates sentences in flattened order: sections in stored order, then
/// sentences within each section in stored order.
fn flatten(sections: &[Section]) -> impl Iterator<Item = &Sentence> {
    sections.iter().flat_map(|section| section.sentences.iter())
}

/// Returns the selected sentences, ordered ascending by start time.
///
/// The sort is stable: two selected sentences with equal `start_time` keep
/// their relative flattened order. Returns a fresh vector on every call.
#[must_use]
pub fn selected_sentences(sections: &[Section]) -> Vec<&Sentence> {
    let mut selected: Vec<&Sentence> = flatten(sections).filter(|s| s.selected).collect();
    // Incomparable values (NaN) are left where the stable sort found them;
    // the model does not guard against them.
    selected.sort_by(|a, b| {
        a.start_time
            .partial_cmp(&b.start_time)
            .unwrap_or(Ordering::Equal)
    });
    selected
}

/// Returns the first sentence, in flattened order, whose time range contains
/// `time` (inclusive on both ends).
///
/// Selection flags are ignored. When several ranges overlap at `time` (a
/// data anomaly the model does not guard against), the flattened-order-first
/// sentence wins. Returns `None` when no range contains `time`; absence is
/// not an error.
#[must_use]
pub fn sentence_at(sections: &[Section], time: f64) -> Option<&Sentence> {
    flatten(sections).find(|s| s.contains(time))
}
