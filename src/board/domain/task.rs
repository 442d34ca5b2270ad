//! Task record and its derived status view.

use super::{Lane, RemoteTodo, TaskDomainError, TaskId, TaskTitle};
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Unit of work tracked by the board.
///
/// The lane is stored once; [`Task::completed`] is derived from it so the
/// two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: String,
    lane: Lane,
}

impl Task {
    /// Creates a freshly added task in the pending lane.
    #[must_use]
    pub const fn new(id: TaskId, title: TaskTitle, description: String) -> Self {
        Self {
            id,
            title,
            description,
            lane: Lane::Pending,
        }
    }

    /// Maps an upstream record into a task.
    ///
    /// The lane is derived from the upstream completion flag and the
    /// description is replaced with `placeholder_description`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] if the upstream title is blank.
    pub fn from_remote(
        record: RemoteTodo,
        placeholder_description: &str,
    ) -> Result<Self, TaskDomainError> {
        Ok(Self {
            id: TaskId::new(record.id),
            title: TaskTitle::new(record.todo)?,
            description: placeholder_description.to_owned(),
            lane: Lane::from_completed(record.completed),
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the lane (status) of the task.
    #[must_use]
    pub const fn lane(&self) -> Lane {
        self.lane
    }

    /// Returns `true` when the task sits in the completed lane.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.lane.is_completed()
    }

    pub(crate) fn set_content(&mut self, title: TaskTitle, description: String) {
        self.title = title;
        self.description = description;
    }

    pub(crate) const fn set_lane(&mut self, lane: Lane) {
        self.lane = lane;
    }
}

impl Serialize for Task {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("Task", 5)?;
        record.serialize_field("id", &self.id)?;
        record.serialize_field("title", &self.title)?;
        record.serialize_field("description", &self.description)?;
        record.serialize_field("completed", &self.completed())?;
        record.serialize_field("status", &self.lane)?;
        record.end()
    }
}
