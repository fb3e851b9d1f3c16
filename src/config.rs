// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading
//! and saving user preferences to a `settings.toml` file.
//!
//! Preferences are intentionally few: a locale override, the autoplay flag,
//! and the last directory used in the open dialogs. Store state (video,
//! transcript, selection) is never persisted.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedScribe";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub language: Option<String>,
    /// Whether playback starts as soon as a video is loaded.
    #[serde(default)]
    pub autoplay: Option<bool>,
    /// Directory the open dialogs start in.
    #[serde(default)]
    pub last_open_dir: Option<PathBuf>,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location, falling back to
/// defaults when no file exists.
///
/// # Errors
///
/// Returns an error when the file exists but cannot be read.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Saves the configuration to the default location.
///
/// # Errors
///
/// Returns an error when the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads the configuration from a specific path. A file that parses as
/// invalid TOML falls back to defaults rather than failing startup.
///
/// # Errors
///
/// Returns an error when the file cannot be read.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

/// Saves the configuration to a specific path, creating parent directories
/// as needed.
///
/// # Errors
///
/// Returns an error when serialization or the write fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
