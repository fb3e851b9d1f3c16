// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The only subscription is the playback tick: while the transport is
//! playing, a periodic timer drives `Message::Tick` so the position keeps
//! advancing between user interactions. When paused there is nothing to
//! subscribe to.

use super::{App, Message};
use iced::{time, Subscription};
use std::time::Duration;

/// Tick interval while playing. 100ms keeps the current-sentence highlight
/// responsive without redrawing every frame.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub fn subscription(app: &App) -> Subscription<Message> {
    if app.store.is_playing() {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
