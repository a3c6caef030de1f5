use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Server configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// Whether post/comment reads are served without credentials. Vote
    /// mutations always require an authenticated identity.
    pub allow_anonymous_read: bool,
    /// Static bearer tokens registered at startup.
    #[serde(default)]
    pub tokens: Vec<StaticToken>,
}

/// A statically configured bearer token.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StaticToken {
    pub token: String,
    pub name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".parse().expect("valid default addr"),
            allow_anonymous_read: true,
            tokens: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> ServerResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| ServerError::Config(e.to_string()))
    }
}
