//! In-memory task source with a fixed outcome.

use crate::board::{
    domain::RemoteTodo,
    ports::{TaskSource, TaskSourceError, TaskSourceResult},
};
use async_trait::async_trait;

/// Task source that returns preconfigured records or a preconfigured error.
#[derive(Debug, Clone)]
pub struct StaticTaskSource {
    outcome: Result<Vec<RemoteTodo>, TaskSourceError>,
}

impl StaticTaskSource {
    /// Creates a source that yields `records`.
    #[must_use]
    pub fn new(records: impl IntoIterator<Item = RemoteTodo>) -> Self {
        Self {
            outcome: Ok(records.into_iter().collect()),
        }
    }

    /// Creates a source that yields no records.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            outcome: Ok(Vec::new()),
        }
    }

    /// Creates a source that always fails with `error`.
    #[must_use]
    pub const fn failing(error: TaskSourceError) -> Self {
        Self {
            outcome: Err(error),
        }
    }
}

#[async_trait]
impl TaskSource for StaticTaskSource {
    async fn fetch_initial(&self) -> TaskSourceResult<Vec<RemoteTodo>> {
        self.outcome.clone()
    }
}
