//! Laneboard: a three-lane kanban task board.
//!
//! Tasks are fetched once from a DummyJSON-style todo API, grouped into
//! pending, in-progress, and completed lanes, and then managed locally. Each
//! local change is mirrored to the remote API without waiting for or acting
//! on the response.
//!
//! # Architecture
//!
//! Laneboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (HTTP, in-memory)
//!
//! # Modules
//!
//! - [`board`]: Task model, store, lanes, drag handling, and session
//! - [`config`]: Runtime settings from defaults, JSON, and environment

pub mod board;
pub mod config;
