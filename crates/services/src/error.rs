//! Shared error types for the services crate.

use thiserror::Error;

use loader::LoadError;
use quiz_core::SessionError;

/// Errors emitted by `QuizService`.
///
/// Only `Load` is meant for the end user; `Session` signals a caller bug.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
