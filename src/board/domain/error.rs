//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The date is missing or not a `YYYY-MM-DD` calendar date.
    #[error("invalid task date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The owning user identifier is not a UUID.
    #[error("invalid user identifier '{0}'")]
    InvalidUserId(String),
}

/// Error returned while parsing a status label outside the fixed column set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
