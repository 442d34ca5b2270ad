//! Read-only lane projections over the task collection.

use crate::board::domain::{Lane, ParseLaneError, Task, TaskId};

/// Tasks of one lane, borrowed from the collection in collection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneView<'a> {
    lane: Lane,
    tasks: Vec<&'a Task>,
}

impl<'a> LaneView<'a> {
    /// Returns the projected lane.
    #[must_use]
    pub const fn lane(&self) -> Lane {
        self.lane
    }

    /// Returns the number of tasks in the lane.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the lane is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterates over the lane's tasks.
    pub fn iter(&self) -> impl Iterator<Item = &'a Task> + '_ {
        self.tasks.iter().copied()
    }

    /// Returns the identifiers of the lane's tasks in order.
    #[must_use]
    pub fn ids(&self) -> Vec<TaskId> {
        self.tasks.iter().map(|task| task.id()).collect()
    }
}

/// All three lanes of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView<'a> {
    /// Tasks in [`Lane::Pending`].
    pub pending: LaneView<'a>,
    /// Tasks in [`Lane::InProgress`].
    pub in_progress: LaneView<'a>,
    /// Tasks in [`Lane::Completed`].
    pub completed: LaneView<'a>,
}

impl<'a> BoardView<'a> {
    /// Returns the view for a lane.
    #[must_use]
    pub const fn lane(&self, lane: Lane) -> &LaneView<'a> {
        match lane {
            Lane::Pending => &self.pending,
            Lane::InProgress => &self.in_progress,
            Lane::Completed => &self.completed,
        }
    }

    /// Returns the number of tasks across all lanes.
    #[must_use]
    pub fn total(&self) -> usize {
        self.pending.len() + self.in_progress.len() + self.completed.len()
    }
}

/// Derives lane views by filtering on task status.
///
/// Views are recomputed from the collection on every call and hold only
/// shared borrows, so they cannot drift from the store.
#[derive(Debug, Clone, Copy, Default)]
pub struct LaneProjector;

impl LaneProjector {
    /// Returns the tasks in `lane`, preserving collection order.
    #[must_use]
    pub fn lane_view(tasks: &[Task], lane: Lane) -> LaneView<'_> {
        LaneView {
            lane,
            tasks: tasks.iter().filter(|task| task.lane() == lane).collect(),
        }
    }

    /// Returns the tasks in the lane named by a raw identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ParseLaneError`] when the identifier is not a board lane.
    pub fn lane_view_by_id<'a>(
        tasks: &'a [Task],
        lane_id: &str,
    ) -> Result<LaneView<'a>, ParseLaneError> {
        let lane = Lane::try_from(lane_id)?;
        Ok(Self::lane_view(tasks, lane))
    }

    /// Returns all three lane views.
    #[must_use]
    pub fn project(tasks: &[Task]) -> BoardView<'_> {
        BoardView {
            pending: Self::lane_view(tasks, Lane::Pending),
            in_progress: Self::lane_view(tasks, Lane::InProgress),
            completed: Self::lane_view(tasks, Lane::Completed),
        }
    }
}
