// SPDX-License-Identifier: MPL-2.0
//! Pure domain types and queries.
//!
//! This module holds the transcript data model and its derived views,
//! independent of the UI layer and of any I/O concerns.

pub mod transcript;
