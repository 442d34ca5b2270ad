//! Port for the one-shot initial task load.

use crate::board::domain::RemoteTodo;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task source operations.
pub type TaskSourceResult<T> = Result<T, TaskSourceError>;

/// Read-only source of the initial task list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskSource: Send + Sync {
    /// Fetches the initial set of raw task records.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError`] when the upstream cannot be reached,
    /// answers with a non-success status, or returns an undecodable body.
    async fn fetch_initial(&self) -> TaskSourceResult<Vec<RemoteTodo>>;
}

/// Errors returned by task source implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskSourceError {
    /// The upstream answered with a non-success status code.
    #[error("upstream returned HTTP status {0}")]
    Status(u16),

    /// The response body could not be decoded into task records.
    #[error("could not decode task list: {0}")]
    Decode(String),

    /// Transport-layer failure.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskSourceError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
