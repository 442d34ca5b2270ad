//! Step definitions for kanban board BDD scenarios.

pub mod world;
mod given;
mod when;
mod then;
