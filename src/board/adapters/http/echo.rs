//! Best-effort mirroring of local mutations over HTTP.

use super::build_client;
use crate::board::{
    domain::TaskMutation,
    ports::{RemoteEcho, RemoteEchoError, RemoteEchoResult},
};
use crate::config::BoardConfig;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::json;

/// Owner recorded on tasks created upstream.
const DEFAULT_USER_ID: u64 = 1;

/// Remote echo that issues the matching REST call for each mutation.
///
/// | mutation | request                                 |
/// |----------|-----------------------------------------|
/// | created  | `POST /todos/add` `{todo, completed, userId}` |
/// | updated  | `PUT /todos/{id}` `{todo}`              |
/// | moved    | `PUT /todos/{id}` `{completed}`         |
/// | deleted  | `DELETE /todos/{id}`                    |
#[derive(Debug, Clone)]
pub struct HttpRemoteEcho {
    client: Client,
    base_url: String,
    user_id: u64,
}

impl HttpRemoteEcho {
    /// Creates an echo from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteEchoError::Transport`] when the HTTP client cannot be
    /// built.
    pub fn new(config: &BoardConfig) -> RemoteEchoResult<Self> {
        let client = build_client(config).map_err(RemoteEchoError::transport)?;
        Ok(Self::with_client(client, &config.base_url))
    }

    /// Creates an echo around an existing client.
    #[must_use]
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            user_id: DEFAULT_USER_ID,
        }
    }

    fn request_for(&self, mutation: &TaskMutation) -> RequestBuilder {
        match mutation {
            TaskMutation::Created { task } => self
                .client
                .post(format!("{}/todos/add", self.base_url))
                .json(&json!({
                    "todo": task.title().as_str(),
                    "completed": task.completed(),
                    "userId": self.user_id,
                })),
            TaskMutation::Updated { task } => self
                .client
                .put(self.item_url(task.id().value()))
                .json(&json!({ "todo": task.title().as_str() })),
            TaskMutation::Moved { task } => self
                .client
                .put(self.item_url(task.id().value()))
                .json(&json!({ "completed": task.completed() })),
            TaskMutation::Deleted { id } => self.client.delete(self.item_url(id.value())),
        }
    }

    fn item_url(&self, id: u64) -> String {
        format!("{}/todos/{id}", self.base_url)
    }
}

#[async_trait]
impl RemoteEcho for HttpRemoteEcho {
    async fn echo(&self, mutation: &TaskMutation) -> RemoteEchoResult<()> {
        let response = self
            .request_for(mutation)
            .send()
            .await
            .map_err(RemoteEchoError::transport)?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(RemoteEchoError::Status(status.as_u16()))
        }
    }
}
