//! Shared error types for the services crate.

use quiz_core::model::QuestionId;
use thiserror::Error;

use storage::repository::StorageError;

/// Errors emitted by the quiz controller.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no quiz has been started")]
    NotStarted,
    #[error("quiz already completed")]
    Completed,
    #[error("quiz is still in progress")]
    NotCompleted,
    #[error("position {position} is out of range for {len} questions")]
    InvalidPosition { position: usize, len: usize },
    #[error("option is not offered by this question")]
    InvalidOption,
    #[error("question {0} is not part of this quiz")]
    UnknownQuestion(QuestionId),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
