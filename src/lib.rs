// SPDX-License-Identifier: MPL-2.0
//! `iced_scribe` is a video transcript preview editor built with the Iced GUI framework.
//!
//! It loads a video file and a transcript sidecar, lets the user select
//! transcript sentences per section, and previews the selection against the
//! playback position. The transcript state lives in an explicitly owned
//! [`store::ProjectStore`]; derived views are plain functions recomputed on
//! demand in [`domain::transcript::query`].

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod store;
pub mod transcript_file;
pub mod ui;
