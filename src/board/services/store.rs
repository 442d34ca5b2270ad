//! Authoritative in-memory task collection.

use super::IdAllocator;
use crate::board::domain::{
    Lane, ParseLaneError, RemoteTodo, Task, TaskDomainError, TaskDraft, TaskId,
};
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

/// Description given to every task mapped from the upstream source.
pub const DEFAULT_PLACEHOLDER_DESCRIPTION: &str = "A task fetched from DummyJSON.";

/// Errors returned by task store operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskStoreError {
    /// Input failed validation before reaching the collection.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// No task with the identifier exists.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The lane identifier is not one of the board's lanes.
    #[error(transparent)]
    InvalidLane(#[from] ParseLaneError),

    /// The initial load contained the same identifier twice.
    #[error("duplicate task identifier in initial load: {0}")]
    DuplicateTask(TaskId),

    /// The identifier allocator has no identifiers left.
    #[error("task identifier space exhausted")]
    IdentifiersExhausted,
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Single owner and writer of the task collection.
///
/// Every mutation commits before the method returns. Newly created tasks are
/// placed at the front; all other tasks keep their relative order.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    allocator: IdAllocator,
    placeholder_description: String,
}

impl TaskStore {
    /// Creates an empty store with the default allocator seed and
    /// placeholder description.
    #[must_use]
    pub fn new() -> Self {
        Self::with_allocator(IdAllocator::default(), DEFAULT_PLACEHOLDER_DESCRIPTION)
    }

    /// Creates an empty store with an explicit allocator and placeholder
    /// description for loaded tasks.
    #[must_use]
    pub fn with_allocator(
        allocator: IdAllocator,
        placeholder_description: impl Into<String>,
    ) -> Self {
        Self {
            tasks: Vec::new(),
            allocator,
            placeholder_description: placeholder_description.into(),
        }
    }

    /// Replaces the collection with the mapped upstream records.
    ///
    /// Returns the number of tasks loaded. On failure the collection is left
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Validation`] when an upstream title is blank
    /// and [`TaskStoreError::DuplicateTask`] when two records share an
    /// identifier.
    pub fn load(
        &mut self,
        records: impl IntoIterator<Item = RemoteTodo>,
    ) -> TaskStoreResult<usize> {
        self.tasks.clear();
        let tasks = self.map_records(records)?;
        for task in &tasks {
            self.allocator.reserve_above(task.id());
        }
        self.tasks = tasks;
        debug!(count = self.tasks.len(), "loaded initial tasks");
        Ok(self.tasks.len())
    }

    fn map_records(
        &self,
        records: impl IntoIterator<Item = RemoteTodo>,
    ) -> TaskStoreResult<Vec<Task>> {
        let mut seen = HashSet::new();
        let mut tasks = Vec::new();
        for record in records {
            let task = Task::from_remote(record, &self.placeholder_description)?;
            if !seen.insert(task.id()) {
                return Err(TaskStoreError::DuplicateTask(task.id()));
            }
            tasks.push(task);
        }
        Ok(tasks)
    }

    /// Adds a new pending task at the front of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::IdentifiersExhausted`] when no identifier
    /// can be allocated.
    pub fn create(&mut self, draft: TaskDraft) -> TaskStoreResult<Task> {
        let id = self
            .allocator
            .allocate()
            .ok_or(TaskStoreError::IdentifiersExhausted)?;
        let (title, description) = draft.into_parts();
        let task = Task::new(id, title, description);
        self.tasks.insert(0, task.clone());
        debug!(task_id = %id, "created task");
        Ok(task)
    }

    /// Replaces the title and description of an existing task.
    ///
    /// Lane and identifier are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist.
    pub fn update(&mut self, id: TaskId, draft: TaskDraft) -> TaskStoreResult<Task> {
        let task = self.find_mut(id)?;
        let (title, description) = draft.into_parts();
        task.set_content(title, description);
        debug!(task_id = %id, "updated task");
        Ok(task.clone())
    }

    /// Removes a task, returning it when it was present.
    ///
    /// Deleting an absent identifier is a no-op.
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let position = self.tasks.iter().position(|task| task.id() == id)?;
        let removed = self.tasks.remove(position);
        debug!(task_id = %id, "deleted task");
        Some(removed)
    }

    /// Moves a task to another lane.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist.
    pub fn move_to(&mut self, id: TaskId, lane: Lane) -> TaskStoreResult<Task> {
        let task = self.find_mut(id)?;
        task.set_lane(lane);
        debug!(task_id = %id, lane = %lane, "moved task");
        Ok(task.clone())
    }

    /// Moves a task to the lane named by a raw identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist and
    /// [`TaskStoreError::InvalidLane`] when the lane is unknown.
    pub fn move_to_lane_id(&mut self, id: TaskId, lane_id: &str) -> TaskStoreResult<Task> {
        if !self.contains(id) {
            return Err(TaskStoreError::NotFound(id));
        }
        let lane = Lane::try_from(lane_id)?;
        self.move_to(id, lane)
    }

    /// Returns the task with the identifier, if present.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns `true` when a task with the identifier exists.
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the full collection in board order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the largest identifier currently held.
    #[must_use]
    pub fn max_id(&self) -> Option<TaskId> {
        self.tasks.iter().map(Task::id).max()
    }

    fn find_mut(&mut self, id: TaskId) -> TaskStoreResult<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or(TaskStoreError::NotFound(id))
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
