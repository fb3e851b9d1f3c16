// SPDX-License-Identifier: MPL-2.0
//! UI components rendered by the application view.
//!
//! Each screen follows the same shape: a `Message` enum for interactions, a
//! pure `update` that maps messages to `Event`s for the parent, and a
//! `view` that renders from a borrowed `ViewContext`.

pub mod design_tokens;
pub mod home;
pub mod preview;
