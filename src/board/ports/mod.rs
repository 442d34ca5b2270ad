//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod echo;
pub mod source;

pub use echo::{RemoteEcho, RemoteEchoError, RemoteEchoResult};
pub use source::{TaskSource, TaskSourceError, TaskSourceResult};
