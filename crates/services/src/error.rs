//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{QuestionError, QuestionId};
use storage::repository::StorageError;

/// Errors emitted while loading a question bank.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankError {
    #[error("question bank is empty")]
    Empty,
    #[error("duplicate question id: {0}")]
    DuplicateId(QuestionId),
    #[error("question #{index} is invalid: {source}")]
    Question {
        index: usize,
        #[source]
        source: QuestionError,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Rejections emitted by the quiz session state machine.
///
/// A rejected call never changes session state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for session")]
    Empty,
    #[error("no session has been started")]
    NotStarted,
    #[error("session already completed")]
    Completed,
    #[error("no choice selected")]
    NotSelected,
    #[error("question already graded")]
    AlreadyGraded,
    #[error("question not graded yet")]
    NotGraded,
    #[error("choice {index} is out of range for {len} choices")]
    ChoiceOutOfRange { index: usize, len: usize },
}

/// Errors emitted by best-effort preference stores.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScoreStoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("stored value is not valid: {raw:?}")]
    Corrupt { raw: String },
}
