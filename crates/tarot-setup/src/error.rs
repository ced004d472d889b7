//! Error types for host installation.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for setup operations.
pub type SetupResult<T> = Result<T, SetupError>;

/// Errors that can occur while installing into a host.
#[derive(Debug, Error)]
pub enum SetupError {
    /// A file or directory could not be read or written.
    #[error("{}: {source}", .path.display())]
    Io {
        /// The path involved.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// A JSON value could not be serialized.
    #[error("cannot serialize {what}: {source}")]
    Serialize {
        /// What was being written.
        what: &'static str,
        /// The underlying error.
        source: serde_json::Error,
    },

    /// No API key was supplied.
    #[error("an API key is required for tarot card image generation")]
    MissingApiKey,

    /// The skill is already installed and reinstall was not requested.
    #[error("already installed at {}", .0.display())]
    AlreadyInstalled(PathBuf),

    /// A daily schedule value is out of range or unparsable.
    #[error("invalid schedule: {0}")]
    InvalidSchedule(String),

    /// An unknown persona preset name.
    #[error("unknown persona: {0} (choose mystica, luna, oracle, or custom)")]
    UnknownPersona(String),
}

impl SetupError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
