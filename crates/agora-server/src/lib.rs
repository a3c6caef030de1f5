//! HTTP server for the Agora discussion board.
//!
//! Thin axum handlers over the voting core: vote casting and removal,
//! score-bearing post/comment reads, and a minimal create surface for
//! posts and comments. Authentication is a pluggable collaborator behind
//! [`AuthProvider`]; the handlers resolve the current user and hand typed
//! ids to `agora-vote`, which owns all transition policy.

pub mod auth;
pub mod config;
pub mod error;
pub mod handler;
pub mod model;
pub mod router;
pub mod server;
pub mod state;

pub use auth::{AuthProvider, Credentials, Identity, TokenRegistry};
pub use config::{ServerConfig, StaticToken};
pub use error::{ServerError, ServerResult};
pub use server::AgoraServer;
pub use state::AppState;
