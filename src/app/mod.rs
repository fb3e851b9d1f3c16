// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the two screens.
//!
//! The `App` struct owns the project store, the configuration, and the
//! localization bundles, and translates screen events into store operations
//! and side effects (file dialogs, transcript loading, preference
//! persistence). The store itself never reaches for the UI; the dependency
//! runs one way, from screens onto the store.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::i18n::I18n;
use crate::media;
use crate::store::ProjectStore;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state bridging the screens, localization, and the
/// project store.
pub struct App {
    i18n: I18n,
    screen: Screen,
    store: ProjectStore,
    config: Config,
    /// Instant of the last playback tick; `None` right after starting or
    /// resuming so the first tick does not count paused time.
    last_tick: Option<Instant>,
    /// Message of the most recent failed transcript import, shown on the
    /// home screen until the next successful load.
    import_error: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("has_video", &self.store.video_file().is_some())
            .field("section_count", &self.store.sections().len())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Home,
            store: ProjectStore::new(),
            config: Config::default(),
            last_tick: None,
            import_error: None,
        }
    }
}

impl App {
    /// Initializes application state from `Flags` received from the
    /// launcher: resolves the start route, loads preferences, and preloads
    /// a video when one was passed on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let screen = flags
            .route
            .as_deref()
            .and_then(Screen::from_path)
            .unwrap_or_default();

        let mut app = App {
            i18n,
            screen,
            config,
            ..Self::default()
        };

        if let Some(path) = flags.file_path.map(PathBuf::from) {
            if media::is_video_path(&path) {
                app.store.set_video_file(path);
                if app.config.autoplay.unwrap_or(false) {
                    update::start_playback(&mut app);
                }
            }
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        let base = self.i18n.tr("app-title");
        match self
            .store
            .video_file()
            .and_then(|path| path.file_name())
            .and_then(|name| name.to_str())
        {
            Some(name) => format!("{base} - {name}"),
            None => base,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}
