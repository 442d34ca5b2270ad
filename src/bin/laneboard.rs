//! Loads the task board from the configured todo API and logs its lanes.
//!
//! Usage:
//!
//! ```text
//! laneboard [config-path]
//! ```
//!
//! The optional JSON document at `config-path` may set any of the
//! [`BoardConfig`] fields; `LANEBOARD_*` environment variables then override
//! it. A representative document is:
//!
//! ```json
//! {
//!   "base_url": "https://dummyjson.com",
//!   "fetch_limit": 15,
//!   "timeout_secs": 10
//! }
//! ```
//!
//! Log output is controlled through `RUST_LOG` and defaults to `info`.

use camino::Utf8PathBuf;
use laneboard::board::{
    adapters::http::{HttpRemoteEcho, HttpTaskSource},
    domain::Lane,
    services::BoardService,
};
use laneboard::config::{BoardConfig, ConfigError};
use std::env;
use std::sync::Arc;
use thiserror::Error;
use tokio::runtime::Builder;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
enum CliError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error("failed to load config file {path}: {source}")]
    ConfigRead {
        path: Utf8PathBuf,
        #[source]
        source: ConfigError,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] std::io::Error),
}

fn main() -> Result<(), BoxError> {
    init_tracing();
    let config = load_config(collect_args()?.into_iter())?;
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::RuntimeInit)?;
    runtime.block_on(run(config))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn collect_args() -> Result<Vec<Utf8PathBuf>, CliError> {
    env::args_os()
        .skip(1)
        .map(|arg_os| {
            let arg = arg_os
                .into_string()
                .map_err(|_| CliError::InvalidArgs("argument is not valid UTF-8".into()))?;
            Ok(Utf8PathBuf::from(arg))
        })
        .collect()
}

fn load_config(mut args: impl Iterator<Item = Utf8PathBuf>) -> Result<BoardConfig, CliError> {
    let base = args.next().map_or_else(
        || Ok(BoardConfig::default()),
        |path| {
            BoardConfig::from_file(&path).map_err(|source| CliError::ConfigRead { path, source })
        },
    )?;
    if let Some(extra) = args.next() {
        return Err(CliError::InvalidArgs(format!(
            "unexpected extra argument: {extra}"
        )));
    }
    Ok(base.with_overrides(|key| env::var(key).ok())?)
}

async fn run(config: BoardConfig) -> Result<(), BoxError> {
    info!(base_url = %config.base_url, limit = config.fetch_limit, "loading board");
    let source = HttpTaskSource::new(&config)?;
    let echo = HttpRemoteEcho::new(&config)?;
    let mut service = BoardService::from_config(Arc::new(source), Arc::new(echo), &config);

    service.load().await?;

    let board = service.lanes();
    for lane in Lane::ALL {
        let view = board.lane(lane);
        info!(lane = lane.as_str(), count = view.len(), "{}", lane.title());
        for task in view.iter() {
            debug!(lane = lane.as_str(), id = %task.id(), title = task.title().as_str(), "task");
        }
    }
    Ok(())
}
