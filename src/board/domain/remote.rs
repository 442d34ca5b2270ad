//! Raw records as delivered by the upstream todo list endpoint.

use serde::{Deserialize, Serialize};

/// Upstream todo record.
///
/// Only the fields the board consumes are modelled; anything else in the
/// payload (for example `userId`) is ignored during decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteTodo {
    /// Upstream identifier, carried over verbatim.
    pub id: u64,
    /// Upstream title text.
    pub todo: String,
    /// Upstream completion flag.
    #[serde(default)]
    pub completed: bool,
}

impl RemoteTodo {
    /// Creates a raw record.
    #[must_use]
    pub fn new(id: u64, todo: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            todo: todo.into(),
            completed,
        }
    }
}

/// Paged list envelope returned by the upstream list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteTodoPage {
    /// Records in this page.
    pub todos: Vec<RemoteTodo>,
    /// Total number of records upstream.
    #[serde(default)]
    pub total: u64,
    /// Number of records skipped before this page.
    #[serde(default)]
    pub skip: u64,
    /// Page size requested.
    #[serde(default)]
    pub limit: u64,
}
