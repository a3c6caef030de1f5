use agora_types::{UserId, VoteId, VoteTarget};
use thiserror::Error;

/// Errors from vote store and target directory operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The (`user`, `target`) uniqueness constraint was violated on insert.
    #[error("duplicate vote by {user} on {target:?}")]
    DuplicateVote { user: UserId, target: VoteTarget },

    /// A record expected to exist was not found (e.g. the old record of a
    /// replace vanished mid-flight).
    #[error("vote record missing: {0}")]
    Missing(VoteId),

    /// Unexpected backend failure (lock poisoning, I/O, connection loss).
    #[error("store internal error: {0}")]
    Internal(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
