//! Board session orchestration: initial load, user mutations, and the
//! fire-and-forget remote echo.
//!
//! Echoes are queued to a single worker task per session, so the remote
//! service sees mutations in commit order.

use super::{
    BoardView, DragError, DragMoveCoordinator, DragPayload, DragState, DropEffect, IdAllocator,
    LaneProjector, LaneView, TaskStore, TaskStoreError,
};
use crate::board::{
    domain::{Lane, Task, TaskDraft, TaskEdit, TaskForm, TaskId, TaskMutation},
    ports::{RemoteEcho, TaskSource, TaskSourceError},
};
use crate::config::BoardConfig;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tokio::{
    runtime::Handle,
    sync::{mpsc, oneshot},
};
use tracing::{debug, error, info, warn};

/// Lifecycle phase of a board session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardPhase {
    /// Waiting for the initial load; no mutation is reachable.
    Loading,
    /// Tasks are loaded and the board accepts mutations.
    Ready,
    /// The initial load failed. Terminal for the session.
    Failed {
        /// Why the load failed.
        reason: String,
    },
}

impl BoardPhase {
    /// Returns `true` once the board accepts mutations.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

impl fmt::Display for BoardPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => f.write_str("loading"),
            Self::Ready => f.write_str("ready"),
            Self::Failed { reason } => write!(f, "failed: {reason}"),
        }
    }
}

/// Errors returned by board session operations.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The operation is not available in the current phase.
    #[error("board is not ready ({0})")]
    NotReady(BoardPhase),

    /// The initial load has already completed.
    #[error("board has already been loaded")]
    AlreadyLoaded,

    /// The task source failed during the initial load.
    #[error("failed to load tasks: {0}")]
    Load(#[from] TaskSourceError),

    /// The task source returned records the store refused.
    #[error("failed to load tasks: {0}")]
    InvalidInitialLoad(TaskStoreError),

    /// A store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),

    /// A drop could not be completed.
    #[error(transparent)]
    Drag(#[from] DragError),

    /// Confirmation was requested without a pending deletion.
    #[error("no deletion is awaiting confirmation")]
    NoPendingDeletion,
}

/// Result type for board session operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Work item for the echo worker.
#[derive(Debug)]
enum EchoCommand {
    Mirror(TaskMutation),
    Flush(oneshot::Sender<()>),
}

/// A board session.
///
/// Owns the task store; every mutation is funnelled through its typed
/// operations and then queued for the remote echo worker, whose outcome is
/// only logged.
pub struct BoardService<S, E>
where
    S: TaskSource,
    E: RemoteEcho + 'static,
{
    source: Arc<S>,
    echo: Arc<E>,
    store: TaskStore,
    drag: DragMoveCoordinator,
    phase: BoardPhase,
    pending_deletion: Option<TaskId>,
    echo_queue: Option<mpsc::UnboundedSender<EchoCommand>>,
}

impl<S, E> BoardService<S, E>
where
    S: TaskSource,
    E: RemoteEcho + 'static,
{
    /// Creates a session in the [`BoardPhase::Loading`] phase.
    #[must_use]
    pub fn new(source: Arc<S>, echo: Arc<E>, store: TaskStore) -> Self {
        Self {
            source,
            echo,
            store,
            drag: DragMoveCoordinator::new(),
            phase: BoardPhase::Loading,
            pending_deletion: None,
            echo_queue: None,
        }
    }

    /// Creates a session whose store follows `config`.
    #[must_use]
    pub fn from_config(source: Arc<S>, echo: Arc<E>, config: &BoardConfig) -> Self {
        let store = TaskStore::with_allocator(
            IdAllocator::new(config.id_seed),
            config.placeholder_description.clone(),
        );
        Self::new(source, echo, store)
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> &BoardPhase {
        &self.phase
    }

    /// Returns the task store for read access.
    #[must_use]
    pub const fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Returns all three lane views.
    #[must_use]
    pub fn lanes(&self) -> BoardView<'_> {
        LaneProjector::project(self.store.tasks())
    }

    /// Returns the view of a single lane.
    #[must_use]
    pub fn lane(&self, lane: Lane) -> LaneView<'_> {
        LaneProjector::lane_view(self.store.tasks(), lane)
    }

    /// Returns the drag gesture state.
    #[must_use]
    pub const fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    /// Returns the task awaiting delete confirmation, if any.
    #[must_use]
    pub const fn pending_deletion(&self) -> Option<TaskId> {
        self.pending_deletion
    }

    /// Performs the initial load.
    ///
    /// Success moves the session to [`BoardPhase::Ready`]; failure moves it
    /// to [`BoardPhase::Failed`], which is terminal.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Load`] or [`BoardError::InvalidInitialLoad`]
    /// when loading fails, [`BoardError::AlreadyLoaded`] when the board is
    /// already loaded, and [`BoardError::NotReady`] after a failed load.
    pub async fn load(&mut self) -> BoardResult<usize> {
        match &self.phase {
            BoardPhase::Loading => {}
            BoardPhase::Ready => return Err(BoardError::AlreadyLoaded),
            failed @ BoardPhase::Failed { .. } => return Err(BoardError::NotReady(failed.clone())),
        }

        let fetched = self.source.fetch_initial().await;
        let records = match fetched {
            Ok(records) => records,
            Err(err) => {
                self.fail(&err);
                return Err(BoardError::Load(err));
            }
        };

        match self.store.load(records) {
            Ok(count) => {
                self.phase = BoardPhase::Ready;
                info!(count, "board ready");
                Ok(count)
            }
            Err(err) => {
                self.fail(&err);
                Err(BoardError::InvalidInitialLoad(err))
            }
        }
    }

    /// Adds a task from the add-form payload.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] wrapping a validation error for a blank
    /// title, and [`BoardError::NotReady`] before the board is loaded.
    pub fn create(&mut self, form: TaskForm) -> BoardResult<Task> {
        self.ensure_ready()?;
        let draft = TaskDraft::try_from(form).map_err(TaskStoreError::from)?;
        let task = self.store.create(draft)?;
        self.dispatch_echo(TaskMutation::Created { task: task.clone() });
        Ok(task)
    }

    /// Applies the edit-form payload to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] wrapping a validation or not-found
    /// error, and [`BoardError::NotReady`] before the board is loaded.
    pub fn update(&mut self, edit: TaskEdit) -> BoardResult<Task> {
        self.ensure_ready()?;
        let (id, draft) = edit.into_draft().map_err(TaskStoreError::from)?;
        let task = self.store.update(id, draft)?;
        self.dispatch_echo(TaskMutation::Updated { task: task.clone() });
        Ok(task)
    }

    /// Deletes a task immediately. Absent identifiers are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotReady`] before the board is loaded.
    pub fn delete(&mut self, id: TaskId) -> BoardResult<Option<Task>> {
        self.ensure_ready()?;
        let removed = self.store.delete(id);
        if removed.is_some() {
            self.dispatch_echo(TaskMutation::Deleted { id });
        }
        if self.pending_deletion == Some(id) {
            self.pending_deletion = None;
        }
        Ok(removed)
    }

    /// Marks a task for deletion pending confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] wrapping a not-found error when the task
    /// is absent, and [`BoardError::NotReady`] before the board is loaded.
    pub fn request_delete(&mut self, id: TaskId) -> BoardResult<()> {
        self.ensure_ready()?;
        if !self.store.contains(id) {
            return Err(TaskStoreError::NotFound(id).into());
        }
        self.pending_deletion = Some(id);
        Ok(())
    }

    /// Deletes the task marked by [`Self::request_delete`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoPendingDeletion`] when nothing is pending.
    pub fn confirm_delete(&mut self) -> BoardResult<Option<Task>> {
        self.ensure_ready()?;
        let id = self
            .pending_deletion
            .take()
            .ok_or(BoardError::NoPendingDeletion)?;
        self.delete(id)
    }

    /// Drops a pending deletion without deleting anything.
    pub fn cancel_delete(&mut self) {
        self.pending_deletion = None;
    }

    /// Starts a drag gesture for `id` and returns the transfer payload.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotReady`] before the board is loaded.
    pub fn start_drag(&mut self, id: TaskId) -> BoardResult<DragPayload> {
        self.ensure_ready()?;
        Ok(self.drag.start(id))
    }

    /// Accepts a drag over `lane`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotReady`] before the board is loaded.
    pub fn drag_over(&self, lane: Lane) -> BoardResult<DropEffect> {
        self.ensure_ready()?;
        Ok(self.drag.drag_over(lane))
    }

    /// Completes a drag gesture on the lane named `lane_id`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Drag`] when the drop is rejected; the store is
    /// unchanged in that case.
    pub fn drop(&mut self, payload: &DragPayload, lane_id: &str) -> BoardResult<Task> {
        self.ensure_ready()?;
        let (_, task) = self.drag.drop(&mut self.store, payload, lane_id)?;
        self.dispatch_echo(TaskMutation::Moved { task: task.clone() });
        Ok(task)
    }

    /// Abandons the current drag gesture.
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Waits until every echo queued so far has been attempted.
    pub async fn flush_echoes(&self) {
        let Some(queue) = self.echo_queue.as_ref() else {
            return;
        };
        let (done, finished) = oneshot::channel();
        if queue.send(EchoCommand::Flush(done)).is_err() || finished.await.is_err() {
            warn!("remote echo worker stopped before flushing");
        }
    }

    fn ensure_ready(&self) -> BoardResult<()> {
        if self.phase.is_ready() {
            Ok(())
        } else {
            Err(BoardError::NotReady(self.phase.clone()))
        }
    }

    fn fail(&mut self, err: &dyn std::error::Error) {
        error!(error = %err, "initial load failed");
        self.phase = BoardPhase::Failed {
            reason: err.to_string(),
        };
    }

    fn dispatch_echo(&mut self, mutation: TaskMutation) {
        let Some(queue) = self.echo_queue() else {
            debug!(mutation = %mutation, "no async runtime, skipping remote echo");
            return;
        };
        if let Err(err) = queue.send(EchoCommand::Mirror(mutation)) {
            warn!(command = ?err.0, "remote echo worker stopped, dropping echo");
        }
    }

    /// Returns the live echo queue, starting a worker on the current runtime
    /// when there is none.
    fn echo_queue(&mut self) -> Option<mpsc::UnboundedSender<EchoCommand>> {
        if let Some(queue) = self.echo_queue.as_ref().filter(|queue| !queue.is_closed()) {
            return Some(queue.clone());
        }
        let handle = Handle::try_current().ok()?;
        let (queue, commands) = mpsc::unbounded_channel();
        handle.spawn(run_echo_worker(Arc::clone(&self.echo), commands));
        self.echo_queue = Some(queue.clone());
        Some(queue)
    }
}

async fn run_echo_worker<E>(echo: Arc<E>, mut commands: mpsc::UnboundedReceiver<EchoCommand>)
where
    E: RemoteEcho + 'static,
{
    while let Some(command) = commands.recv().await {
        match command {
            EchoCommand::Mirror(mutation) => match echo.echo(&mutation).await {
                Ok(()) => debug!(mutation = %mutation, "remote echo acknowledged"),
                Err(err) => warn!(mutation = %mutation, error = %err, "remote echo failed"),
            },
            EchoCommand::Flush(done) => {
                done.send(()).ok();
            }
        }
    }
}
