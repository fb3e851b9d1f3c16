// SPDX-License-Identifier: MPL-2.0
//! Media source helpers.
//!
//! This module derives a playable URL from a chosen video file and provides
//! extension-based video detection for the open dialog and the CLI
//! positional argument. No decoding happens anywhere in this crate.

use std::path::Path;

/// Video file extensions accepted by the open dialog.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "webm", "mov", "avi", "m4v"];

/// Returns true if the path has a recognized video extension.
#[must_use]
pub fn is_video_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            VIDEO_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Derives a playable `file://` URL for the given video file.
///
/// Derivation is cheap and infallible at this layer; whether the file is
/// actually playable is the playback surface's concern. Replacing a source
/// simply drops the previous URL string — unlike a browser object URL there
/// is no registry entry to revoke.
#[must_use]
pub fn playback_url(path: &Path) -> String {
    format!("file://{}", path.display())
}

/// Formats a position in seconds as `mm:ss`, or `h:mm:ss` from one hour up.
///
/// Non-finite and negative inputs render as `00:00`.
#[must_use]
pub fn format_time_label(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn detects_video_extensions_case_insensitively() {
        assert!(is_video_path(Path::new("clip.mp4")));
        assert!(is_video_path(Path::new("clip.MKV")));
        assert!(!is_video_path(Path::new("notes.txt")));
        assert!(!is_video_path(Path::new("no_extension")));
    }

    #[test]
    fn playback_url_is_nonempty_and_file_scheme() {
        let url = playback_url(Path::new("/videos/talk.mp4"));
        assert_eq!(url, "file:///videos/talk.mp4");
    }

    #[test]
    fn playback_url_differs_per_file() {
        let a = playback_url(&PathBuf::from("/videos/a.mp4"));
        let b = playback_url(&PathBuf::from("/videos/b.mp4"));
        assert_ne!(a, b);
    }

    #[test]
    fn formats_short_positions_as_minutes_seconds() {
        assert_eq!(format_time_label(0.0), "00:00");
        assert_eq!(format_time_label(65.4), "01:05");
        assert_eq!(format_time_label(599.999), "09:59");
    }

    #[test]
    fn formats_long_positions_with_hours() {
        assert_eq!(format_time_label(3600.0), "1:00:00");
        assert_eq!(format_time_label(3723.0), "1:02:03");
    }

    #[test]
    fn clamps_invalid_positions_to_zero() {
        assert_eq!(format_time_label(-5.0), "00:00");
        assert_eq!(format_time_label(f64::NAN), "00:00");
    }
}
