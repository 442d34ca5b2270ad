//! Kanban task board state management.
//!
//! Tasks are loaded once from an upstream list endpoint, shown in three
//! lanes by status, and then created, edited, deleted, and moved between
//! lanes locally. Local state is authoritative for the session; every
//! committed change is mirrored to the remote service on a best-effort
//! basis and never reverted. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Store, lane projection, drag handling, and session orchestration in
//!   [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
