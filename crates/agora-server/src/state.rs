//! Shared application state: the board, the voting core, and auth.

use std::sync::Arc;

use agora_store::{InMemoryBoard, InMemoryVoteStore};
use agora_vote::{ScoreAggregator, VoteEngine};
use axum::http::HeaderMap;

use crate::auth::{AuthProvider, Credentials, Identity};
use crate::error::ServerResult;

/// Everything a request handler needs, shared behind an `Arc`.
///
/// The engine, aggregator, and resolver are stateless per request; the
/// only mutable state is inside the stores.
pub struct AppState {
    pub board: Arc<InMemoryBoard>,
    pub engine: VoteEngine,
    pub scores: ScoreAggregator,
    pub auth: Arc<dyn AuthProvider>,
    pub allow_anonymous_read: bool,
}

impl AppState {
    /// Build a state backed by fresh in-memory stores.
    pub fn in_memory(auth: Arc<dyn AuthProvider>, allow_anonymous_read: bool) -> Arc<Self> {
        let post_votes = Arc::new(InMemoryVoteStore::new());
        let comment_votes = Arc::new(InMemoryVoteStore::new());
        let board = Arc::new(InMemoryBoard::new());

        let engine = VoteEngine::new(post_votes.clone(), comment_votes.clone(), board.clone());
        let scores = ScoreAggregator::new(post_votes, comment_votes);

        Arc::new(Self {
            board,
            engine,
            scores,
            auth,
            allow_anonymous_read,
        })
    }

    /// Resolve the current user or fail with 401.
    pub async fn require_user(&self, headers: &HeaderMap) -> ServerResult<Identity> {
        let credentials = Credentials::from_headers(headers);
        self.auth.authenticate(&credentials).await
    }

    /// Resolve the current user if credentials were supplied.
    ///
    /// Anonymous requests resolve to `None`; a supplied-but-invalid token
    /// is still a hard 401.
    pub async fn optional_user(&self, headers: &HeaderMap) -> ServerResult<Option<Identity>> {
        match Credentials::from_headers(headers) {
            Credentials::Anonymous => Ok(None),
            credentials => self.auth.authenticate(&credentials).await.map(Some),
        }
    }

    /// The identity a read handler should act as, honoring the
    /// anonymous-read setting.
    pub async fn reader(&self, headers: &HeaderMap) -> ServerResult<Option<Identity>> {
        if self.allow_anonymous_read {
            self.optional_user(headers).await
        } else {
            self.require_user(headers).await.map(Some)
        }
    }
}
