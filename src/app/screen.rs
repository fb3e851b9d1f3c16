// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration and route resolution for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Preview,
}

/// The route table: one path per screen, no parameters, no guards.
const ROUTES: &[(&str, Screen)] = &[("/", Screen::Home), ("/preview", Screen::Preview)];

impl Screen {
    /// Resolves a request path to a screen. Any path outside the table is
    /// no match; the caller decides what to do with it.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        ROUTES
            .iter()
            .find(|(route, _)| *route == path)
            .map(|(_, screen)| *screen)
    }

    /// Returns the path this screen is routed under.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Screen::Home => "/",
            Screen::Preview => "/preview",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_resolves_to_home() {
        assert_eq!(Screen::from_path("/"), Some(Screen::Home));
    }

    #[test]
    fn preview_path_resolves_to_preview() {
        assert_eq!(Screen::from_path("/preview"), Some(Screen::Preview));
    }

    #[test]
    fn unknown_paths_do_not_match() {
        assert_eq!(Screen::from_path("/settings"), None);
        assert_eq!(Screen::from_path(""), None);
        assert_eq!(Screen::from_path("/preview/"), None);
    }

    #[test]
    fn paths_round_trip_through_the_table() {
        for screen in [Screen::Home, Screen::Preview] {
            assert_eq!(Screen::from_path(screen.path()), Some(screen));
        }
    }
}
