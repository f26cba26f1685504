//! Errors surfaced while loading a question set.

use std::path::PathBuf;

use thiserror::Error;

/// Any failure of a single load attempt.
///
/// The whole batch is discarded on error; callers surface the message and let the
/// user retry. `Display` is the human-readable cause.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("invalid question source `{raw}`: {reason}")]
    InvalidLocation { raw: String, reason: String },

    #[error("could not reach {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error! Status: {status} - could not load {url}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed question document: {0}")]
    Malformed(#[from] roxmltree::Error),

    #[error("question document contains no questions")]
    NoQuestions,
}

impl LoadError {
    /// True for failures of reaching the source, as opposed to its content.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            LoadError::Transport { .. } | LoadError::HttpStatus { .. } | LoadError::Io { .. }
        )
    }
}
