//! Shared world state for kanban board BDD scenarios.

use std::sync::Arc;

use eyre::eyre;
use laneboard::board::{
    adapters::memory::{RecordingRemoteEcho, StaticTaskSource},
    domain::{Lane, RemoteTodo, Task},
    ports::TaskSourceError,
    services::{BoardError, BoardService},
};
use laneboard::config::BoardConfig;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestBoard = BoardService<StaticTaskSource, RecordingRemoteEcho>;

/// Scenario world for kanban board behaviour tests.
pub struct BoardWorld {
    pub upstream: Vec<RemoteTodo>,
    pub upstream_down: bool,
    pub echo: RecordingRemoteEcho,
    pub board: Option<TestBoard>,
    pub last_change: Option<Result<Task, BoardError>>,
}

impl BoardWorld {
    /// Creates a world with an empty upstream and an accepting echo.
    #[must_use]
    pub fn new() -> Self {
        Self {
            upstream: Vec::new(),
            upstream_down: false,
            echo: RecordingRemoteEcho::new(),
            board: None,
            last_change: None,
        }
    }

    /// Builds the board from the scenario's upstream and runs the initial
    /// load.
    pub fn load_board(&mut self) -> Result<usize, BoardError> {
        let source = if self.upstream_down {
            StaticTaskSource::failing(TaskSourceError::Status(503))
        } else {
            StaticTaskSource::new(self.upstream.clone())
        };
        let board = self.board.insert(BoardService::from_config(
            Arc::new(source),
            Arc::new(self.echo.clone()),
            &BoardConfig::default(),
        ));
        run_async(board.load())
    }

    /// Returns the board, failing the step when it was never built.
    pub fn board_mut(&mut self) -> Result<&mut TestBoard, eyre::Report> {
        self.board
            .as_mut()
            .ok_or_else(|| eyre!("board has not been loaded in this scenario"))
    }

    /// Returns the board, failing the step when it was never built.
    pub fn board(&self) -> Result<&TestBoard, eyre::Report> {
        self.board
            .as_ref()
            .ok_or_else(|| eyre!("board has not been loaded in this scenario"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Parses a lane identifier used in a feature file.
pub fn parse_lane(raw: &str) -> Result<Lane, eyre::Report> {
    Lane::try_from(raw).map_err(|err| eyre!("invalid lane in scenario: {err}"))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
