//! In-process remote echo implementations.

use crate::board::{
    domain::TaskMutation,
    ports::{RemoteEcho, RemoteEchoError, RemoteEchoResult},
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::info;

/// Remote echo that records every mutation it receives.
///
/// Can be switched to fail every call, which is useful for checking that
/// local state survives echo failures.
#[derive(Debug, Clone, Default)]
pub struct RecordingRemoteEcho {
    state: Arc<Mutex<RecordingState>>,
}

#[derive(Debug, Default)]
struct RecordingState {
    received: Vec<TaskMutation>,
    failure: Option<RemoteEchoError>,
}

impl RecordingRemoteEcho {
    /// Creates an echo that accepts every call.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an echo that records and then rejects every call.
    #[must_use]
    pub fn failing(error: RemoteEchoError) -> Self {
        Self {
            state: Arc::new(Mutex::new(RecordingState {
                received: Vec::new(),
                failure: Some(error),
            })),
        }
    }

    /// Returns the mutations received so far, oldest first.
    ///
    /// A lock poisoned by a panicking caller still yields what was recorded.
    #[must_use]
    pub fn received(&self) -> Vec<TaskMutation> {
        self.lock().received.clone()
    }

    fn lock(&self) -> MutexGuard<'_, RecordingState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl RemoteEcho for RecordingRemoteEcho {
    async fn echo(&self, mutation: &TaskMutation) -> RemoteEchoResult<()> {
        let mut state = self.lock();
        state.received.push(mutation.clone());
        state.failure.clone().map_or(Ok(()), Err)
    }
}

/// Remote echo that only logs what it would have sent.
///
/// Stands in for a backend that does not persist writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedRemoteEcho;

#[async_trait]
impl RemoteEcho for SimulatedRemoteEcho {
    async fn echo(&self, mutation: &TaskMutation) -> RemoteEchoResult<()> {
        info!(mutation = %mutation, "simulated remote echo");
        Ok(())
    }
}
