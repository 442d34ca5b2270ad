//! Error types for board domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,
}

/// Error returned while parsing a lane identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown lane: {0}")]
pub struct ParseLaneError(pub String);

/// Error returned while parsing a task identifier from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid task identifier: {0:?}")]
pub struct ParseTaskIdError(pub String);
