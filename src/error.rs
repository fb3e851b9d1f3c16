// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Transcript(TranscriptError),
}

/// Specific error types for transcript sidecar loading.
/// The in-memory transcript model itself never fails: unknown ids and
/// unmatched playback positions are silent no-ops, not errors.
#[derive(Debug, Clone)]
pub enum TranscriptError {
    /// The sidecar document could not be parsed.
    InvalidFormat(String),

    /// The sidecar file could not be read.
    IoError(String),
}

impl fmt::Display for TranscriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptError::InvalidFormat(msg) => {
                write!(f, "Invalid transcript format: {}", msg)
            }
            TranscriptError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Transcript(e) => write!(f, "Transcript Error: {}", e),
        }
    }
}

impl From<TranscriptError> for Error {
    fn from(err: TranscriptError) -> Self {
        Error::Transcript(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
