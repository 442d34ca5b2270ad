//! Shared test helpers for in-memory board integration tests.

use std::sync::Arc;

use laneboard::board::{
    adapters::memory::{RecordingRemoteEcho, StaticTaskSource},
    domain::{Lane, RemoteTodo, TaskId},
    services::BoardService,
};
use laneboard::config::BoardConfig;
use rstest::fixture;

/// Board service wired to in-memory adapters.
pub type TestBoard = BoardService<StaticTaskSource, RecordingRemoteEcho>;

/// Upstream records shaped like the first page of the todo API.
#[must_use]
pub fn upstream_page() -> Vec<RemoteTodo> {
    vec![
        RemoteTodo::new(1, "Do something nice for someone you care about", false),
        RemoteTodo::new(2, "Memorize a poem", true),
        RemoteTodo::new(3, "Watch a classic movie", false),
        RemoteTodo::new(4, "Watch a documentary", true),
        RemoteTodo::new(5, "Invest in cryptocurrency", false),
        RemoteTodo::new(6, "Contribute code or a monetary donation to an open-source project", false),
    ]
}

/// Provides a recording echo shared with the board under test.
#[fixture]
pub fn echo() -> RecordingRemoteEcho {
    RecordingRemoteEcho::new()
}

/// Builds a board over [`upstream_page`] that reports to `echo`.
#[must_use]
pub fn board_with(echo: &RecordingRemoteEcho) -> TestBoard {
    BoardService::from_config(
        Arc::new(StaticTaskSource::new(upstream_page())),
        Arc::new(echo.clone()),
        &BoardConfig::default(),
    )
}

/// Returns the identifiers shown in `lane`, in display order.
#[must_use]
pub fn lane_ids(board: &TestBoard, lane: Lane) -> Vec<u64> {
    board.lane(lane).ids().into_iter().map(TaskId::value).collect()
}
