use thiserror::Error;

use super::date::ACCEPTED_FORMATS_HINT;
use super::model::TaskId;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task not found: {0}")]
    NotFound(TaskId),

    #[error("Invalid date format: '{0}' (expected {hint})", hint = ACCEPTED_FORMATS_HINT)]
    InvalidDateFormat(String),

    #[error("No task ids left: the highest id {} is already in use", u32::MAX)]
    IdsExhausted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed tasks file: {0}")]
    Json(#[from] serde_json::Error),
}

impl TaskError {
    /// Whether this error came from the tasks file rather than from the request.
    pub fn is_persistence(&self) -> bool {
        matches!(self, TaskError::Io(_) | TaskError::Json(_))
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;
