//! Committed local changes, as handed to the remote echo.

use super::{Task, TaskId};
use serde::Serialize;
use std::fmt;

/// A change that has already been applied to the local task collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskMutation {
    /// A task was added.
    Created {
        /// The task as inserted.
        task: Task,
    },
    /// A task's title and description were replaced.
    Updated {
        /// The task after the edit.
        task: Task,
    },
    /// A task changed lane.
    Moved {
        /// The task after the move.
        task: Task,
    },
    /// A task was removed.
    Deleted {
        /// Identifier of the removed task.
        id: TaskId,
    },
}

impl TaskMutation {
    /// Returns the identifier of the affected task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        match self {
            Self::Created { task } | Self::Updated { task } | Self::Moved { task } => task.id(),
            Self::Deleted { id } => *id,
        }
    }

    /// Returns a short name for log output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Created { .. } => "created",
            Self::Updated { .. } => "updated",
            Self::Moved { .. } => "moved",
            Self::Deleted { .. } => "deleted",
        }
    }
}

impl fmt::Display for TaskMutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} task {}", self.kind(), self.task_id())
    }
}
