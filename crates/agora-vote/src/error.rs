use agora_store::StoreError;
use agora_types::{VoteId, VoteTarget};
use thiserror::Error;

/// Errors from the voting core.
///
/// Every error is terminal for the triggering request — nothing is retried
/// internally, nothing is logged and swallowed. The HTTP layer maps these
/// to status codes: not-found → 404, the two conflict variants → 409,
/// not-owner → 403, internal → 500.
#[derive(Debug, Error)]
pub enum VoteError {
    /// The referenced post or comment does not exist.
    #[error("target not found: {0:?}")]
    TargetNotFound(VoteTarget),

    /// The user already holds a vote in the requested direction, or lost
    /// a cast race to a concurrent request for the same pair.
    #[error("vote already exists on {0:?}")]
    AlreadyVoted(VoteTarget),

    /// There is no vote to remove.
    #[error("no vote to remove: {0}")]
    NothingToRemove(String),

    /// The vote record belongs to a different user.
    #[error("vote record {0} is owned by another user")]
    NotOwner(VoteId),

    /// Unexpected store failure or a transactional inconsistency detected
    /// mid-transition.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for VoteError {
    fn from(err: StoreError) -> Self {
        match err {
            // A constraint violation on insert is the race loser's view of
            // an ordinary conflict.
            StoreError::DuplicateVote { target, .. } => Self::AlreadyVoted(target),
            StoreError::Missing(id) => {
                Self::Internal(format!("vote record {id} vanished mid-transition"))
            }
            StoreError::Internal(msg) => Self::Internal(msg),
        }
    }
}

/// Result alias for voting-core operations.
pub type VoteResult<T> = Result<T, VoteError>;
