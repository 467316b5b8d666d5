//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Directory with the built SPA bundle served under `/assets`.
    pub assets_dir: String,
    pub secret: String,
    /// Pre-issued API token. When unset a process-wide token is signed with
    /// `secret` on first request.
    pub api_token: Option<String>,
}
