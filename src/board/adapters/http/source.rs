//! Initial task load over HTTP.

use super::build_client;
use crate::board::{
    domain::{RemoteTodo, RemoteTodoPage},
    ports::{TaskSource, TaskSourceError, TaskSourceResult},
};
use crate::config::BoardConfig;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Task source backed by `GET {base_url}/todos?limit={limit}`.
#[derive(Debug, Clone)]
pub struct HttpTaskSource {
    client: Client,
    base_url: String,
    limit: u32,
}

impl HttpTaskSource {
    /// Creates a source from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::Transport`] when the HTTP client cannot be
    /// built.
    pub fn new(config: &BoardConfig) -> TaskSourceResult<Self> {
        let client = build_client(config).map_err(TaskSourceError::transport)?;
        Ok(Self::with_client(client, &config.base_url, config.fetch_limit))
    }

    /// Creates a source around an existing client.
    #[must_use]
    pub fn with_client(client: Client, base_url: &str, limit: u32) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            limit,
        }
    }

    fn list_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }
}

#[async_trait]
impl TaskSource for HttpTaskSource {
    async fn fetch_initial(&self) -> TaskSourceResult<Vec<RemoteTodo>> {
        let url = self.list_url();
        debug!(url = %url, limit = self.limit, "fetching initial tasks");
        let response = self
            .client
            .get(&url)
            .query(&[("limit", self.limit)])
            .send()
            .await
            .map_err(TaskSourceError::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TaskSourceError::Status(status.as_u16()));
        }

        let page: RemoteTodoPage = response
            .json()
            .await
            .map_err(|err| TaskSourceError::Decode(err.to_string()))?;
        Ok(page.todos)
    }
}
