//! Application services for the task board.

mod allocator;
mod drag;
mod lanes;
mod session;
mod store;

pub use allocator::{DEFAULT_ID_SEED, IdAllocator};
pub use drag::{DragError, DragMove, DragMoveCoordinator, DragPayload, DragState, DropEffect};
pub use lanes::{BoardView, LaneProjector, LaneView};
pub use session::{BoardError, BoardPhase, BoardResult, BoardService};
pub use store::{DEFAULT_PLACEHOLDER_DESCRIPTION, TaskStore, TaskStoreError, TaskStoreResult};
