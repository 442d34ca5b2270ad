//! In-memory adapters for the board ports.

mod echo;
mod source;

pub use echo::{RecordingRemoteEcho, SimulatedRemoteEcho};
pub use source::StaticTaskSource;
