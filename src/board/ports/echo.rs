//! Port for best-effort mirroring of local mutations to the remote service.
//!
//! Local state is authoritative for the session. Implementations report
//! failures, but the caller only logs them; a failed echo never reverts a
//! committed change.

use crate::board::domain::TaskMutation;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for remote echo operations.
pub type RemoteEchoResult<T> = Result<T, RemoteEchoError>;

/// Fire-and-forget mirror of committed task mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteEcho: Send + Sync {
    /// Mirrors a committed mutation to the remote service.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteEchoError`] when the remote call fails. Callers log
    /// the error and carry on.
    async fn echo(&self, mutation: &TaskMutation) -> RemoteEchoResult<()>;
}

/// Errors returned by remote echo implementations.
#[derive(Debug, Clone, Error)]
pub enum RemoteEchoError {
    /// The remote answered with a non-success status code.
    #[error("remote returned HTTP status {0}")]
    Status(u16),

    /// The remote call was refused before it was sent.
    #[error("remote echo rejected: {0}")]
    Rejected(String),

    /// Transport-layer failure.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl RemoteEchoError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
