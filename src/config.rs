//! Runtime configuration for the board.
//!
//! Settings come from built-in defaults, optionally a JSON document, and
//! then `LANEBOARD_*` environment variables, in that order of precedence
//! (later wins).

use crate::board::services::{DEFAULT_ID_SEED, DEFAULT_PLACEHOLDER_DESCRIPTION};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use serde::{Deserialize, Serialize};
use std::io;
use std::time::Duration;
use thiserror::Error;

/// Environment variable overriding [`BoardConfig::base_url`].
pub const ENV_BASE_URL: &str = "LANEBOARD_BASE_URL";
/// Environment variable overriding [`BoardConfig::fetch_limit`].
pub const ENV_FETCH_LIMIT: &str = "LANEBOARD_FETCH_LIMIT";
/// Environment variable overriding [`BoardConfig::id_seed`].
pub const ENV_ID_SEED: &str = "LANEBOARD_ID_SEED";
/// Environment variable overriding [`BoardConfig::placeholder_description`].
pub const ENV_PLACEHOLDER_DESCRIPTION: &str = "LANEBOARD_PLACEHOLDER_DESCRIPTION";
/// Environment variable overriding [`BoardConfig::timeout_secs`].
pub const ENV_TIMEOUT_SECS: &str = "LANEBOARD_TIMEOUT_SECS";

const DEFAULT_BASE_URL: &str = "https://dummyjson.com";
const DEFAULT_FETCH_LIMIT: u32 = 15;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors raised while building a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {path}: {reason}")]
    Read {
        /// Path that was requested.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        reason: String,
    },

    /// The JSON document could not be parsed.
    #[error("invalid configuration document: {0}")]
    Document(String),

    /// An environment variable held a value of the wrong shape.
    #[error("invalid value {value:?} for {key}")]
    InvalidValue {
        /// Variable name.
        key: &'static str,
        /// Offending value.
        value: String,
    },

    /// The base URL is empty.
    #[error("base URL must not be empty")]
    EmptyBaseUrl,
}

/// Board settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Base URL of the todo API, without a trailing slash.
    pub base_url: String,
    /// Number of records requested by the initial load.
    pub fetch_limit: u32,
    /// First identifier handed to locally created tasks.
    pub id_seed: u64,
    /// Description given to loaded tasks.
    pub placeholder_description: String,
    /// Per-request timeout in seconds for HTTP adapters.
    pub timeout_secs: u64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            fetch_limit: DEFAULT_FETCH_LIMIT,
            id_seed: DEFAULT_ID_SEED,
            placeholder_description: DEFAULT_PLACEHOLDER_DESCRIPTION.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl BoardConfig {
    /// Parses a JSON document; omitted fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Document`] for malformed JSON or unknown
    /// fields, and [`ConfigError::EmptyBaseUrl`] for a blank base URL.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(document)
            .map_err(|err| ConfigError::Document(err.to_string()))?;
        config.validated()
    }

    /// Reads and parses the JSON document at `path`.
    ///
    /// The file is opened through a directory handle on its parent, so a
    /// bare file name resolves against the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and the
    /// errors of [`Self::from_json`] for its contents.
    pub fn from_file(path: &Utf8Path) -> Result<Self, ConfigError> {
        let document = read_document(path).map_err(|err| ConfigError::Read {
            path: path.to_owned(),
            reason: err.to_string(),
        })?;
        Self::from_json(&document)
    }

    /// Builds a configuration from defaults and the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides looked up by variable name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a numeric variable does not
    /// parse and [`ConfigError::EmptyBaseUrl`] for a blank base URL.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(value) = lookup(ENV_BASE_URL) {
            self.base_url = value;
        }
        if let Some(value) = lookup(ENV_FETCH_LIMIT) {
            self.fetch_limit = parse_number(ENV_FETCH_LIMIT, value)?;
        }
        if let Some(value) = lookup(ENV_ID_SEED) {
            self.id_seed = parse_number(ENV_ID_SEED, value)?;
        }
        if let Some(value) = lookup(ENV_PLACEHOLDER_DESCRIPTION) {
            self.placeholder_description = value;
        }
        if let Some(value) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = parse_number(ENV_TIMEOUT_SECS, value)?;
        }
        self.validated()
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn validated(mut self) -> Result<Self, ConfigError> {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        self.base_url = trimmed.to_owned();
        Ok(self)
    }
}

fn read_document(path: &Utf8Path) -> io::Result<String> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "path does not name a file")
    })?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.read_to_string(file_name)
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}
