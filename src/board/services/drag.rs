//! Drag-and-drop gesture handling.
//!
//! A gesture carries the source task identifier as text through the
//! platform's transfer channel. [`DragPayload`] is the adapter for that
//! channel; everything past the boundary works with the explicit
//! [`DragMove`] message.

use super::{TaskStore, TaskStoreError};
use crate::board::domain::{Lane, ParseLaneError, ParseTaskIdError, Task, TaskId};
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

/// Text payload carried by the platform drag transfer channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DragPayload(String);

impl DragPayload {
    /// Serialises a task identifier for transfer.
    #[must_use]
    pub fn for_task(id: TaskId) -> Self {
        Self(id.to_string())
    }

    /// Wraps text received from the transfer channel.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the raw payload text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the carried task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ParseTaskIdError`] when the text is not an unsigned integer.
    pub fn task_id(&self) -> Result<TaskId, ParseTaskIdError> {
        self.0.parse()
    }
}

impl fmt::Display for DragPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Request to move one task into a lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragMove {
    /// Task being dragged.
    pub source_task_id: TaskId,
    /// Lane the task was dropped on.
    pub target_lane: Lane,
}

/// Acknowledgement returned when a lane is dragged over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    /// The lane accepts the dragged task as a move.
    Move,
}

/// Gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No gesture in flight.
    #[default]
    Idle,
    /// A task is being dragged.
    Dragging {
        /// Task picked up at drag start.
        task_id: TaskId,
    },
}

/// Errors raised while completing a drop. None of them change the store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DragError {
    /// The transfer payload did not contain a task identifier.
    #[error("malformed drag payload: {0}")]
    MalformedPayload(#[from] ParseTaskIdError),

    /// The dragged task is not on the board.
    #[error("dragged task not found: {0}")]
    UnknownTask(TaskId),

    /// The drop target is not a board lane.
    #[error(transparent)]
    InvalidLane(#[from] ParseLaneError),

    /// The store rejected the move.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Turns drag gestures into store moves.
#[derive(Debug, Clone, Default)]
pub struct DragMoveCoordinator {
    state: DragState,
}

impl DragMoveCoordinator {
    /// Creates an idle coordinator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    /// Returns the current gesture state.
    #[must_use]
    pub const fn state(&self) -> DragState {
        self.state
    }

    /// Captures the dragged task and returns the payload to put on the
    /// transfer channel.
    pub fn start(&mut self, task_id: TaskId) -> DragPayload {
        debug!(task_id = %task_id, "drag started");
        self.state = DragState::Dragging { task_id };
        DragPayload::for_task(task_id)
    }

    /// Accepts a drag over `lane`. Does not change any state.
    #[must_use]
    pub const fn drag_over(&self, _lane: Lane) -> DropEffect {
        DropEffect::Move
    }

    /// Completes the gesture by moving the dragged task to `lane_id`.
    ///
    /// The coordinator returns to [`DragState::Idle`] whether or not the drop
    /// succeeds. Failures are logged and leave the store untouched.
    ///
    /// # Errors
    ///
    /// Returns [`DragError`] when the payload, task, or lane is invalid.
    pub fn drop(
        &mut self,
        store: &mut TaskStore,
        payload: &DragPayload,
        lane_id: &str,
    ) -> Result<(DragMove, Task), DragError> {
        self.state = DragState::Idle;
        let outcome = Self::resolve(store, payload, lane_id)
            .and_then(|request| Self::apply(store, request).map(|task| (request, task)));
        if let Err(err) = &outcome {
            warn!(payload = %payload, lane = lane_id, error = %err, "drop rejected");
        }
        outcome
    }

    /// Abandons the gesture, for example when released outside any lane.
    pub fn cancel(&mut self) {
        if let DragState::Dragging { task_id } = self.state {
            debug!(task_id = %task_id, "drag cancelled");
        }
        self.state = DragState::Idle;
    }

    /// Validates a drop against the store and builds the move request.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::MalformedPayload`] when the payload does not
    /// parse, [`DragError::UnknownTask`] when the task is absent, and
    /// [`DragError::InvalidLane`] when the lane is unknown.
    pub fn resolve(
        store: &TaskStore,
        payload: &DragPayload,
        lane_id: &str,
    ) -> Result<DragMove, DragError> {
        let source_task_id = payload.task_id()?;
        if !store.contains(source_task_id) {
            return Err(DragError::UnknownTask(source_task_id));
        }
        let target_lane = Lane::try_from(lane_id)?;
        Ok(DragMove {
            source_task_id,
            target_lane,
        })
    }

    /// Applies a move request to the store.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::UnknownTask`] when the task is absent.
    pub fn apply(store: &mut TaskStore, request: DragMove) -> Result<Task, DragError> {
        store
            .move_to(request.source_task_id, request.target_lane)
            .map_err(|err| match err {
                TaskStoreError::NotFound(id) => DragError::UnknownTask(id),
                other => DragError::Store(other),
            })
    }
}
