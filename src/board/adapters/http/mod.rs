//! HTTP adapters for a DummyJSON-compatible todo API.

mod echo;
mod source;

pub use echo::HttpRemoteEcho;
pub use source::HttpTaskSource;

use crate::config::BoardConfig;
use reqwest::Client;

const USER_AGENT: &str = concat!("laneboard/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client shared by the adapters.
///
/// # Errors
///
/// Returns [`reqwest::Error`] when the TLS backend cannot be initialised.
pub fn build_client(config: &BoardConfig) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(config.timeout())
        .user_agent(USER_AGENT)
        .build()
}
