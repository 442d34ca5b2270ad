//! Domain model for the task board.
//!
//! The board domain models tasks, their lanes, and the validated form
//! payloads that create or edit them, while keeping transport and
//! presentation concerns outside of the domain boundary.

mod draft;
mod error;
mod ids;
mod lane;
mod mutation;
mod remote;
mod task;

pub use draft::{TaskDraft, TaskEdit, TaskForm, TaskTitle};
pub use error::{ParseLaneError, ParseTaskIdError, TaskDomainError};
pub use ids::TaskId;
pub use lane::Lane;
pub use mutation::TaskMutation;
pub use remote::{RemoteTodo, RemoteTodoPage};
pub use task::Task;
