use agora_types::{Comment, CommentId, Post, PostId, UserId, VoteId, VoteRecord, VoteTarget};

use crate::error::StoreResult;

/// Durable keyed storage of vote records.
///
/// The system runs one store instance per votable kind, so a given
/// instance only ever sees post targets or only comment targets.
///
/// All implementations must satisfy these invariants:
/// - At most one record per (`user`, `target`) pair exists at any time.
///   [`insert`](Self::insert) enforces this as a uniqueness constraint and
///   fails with [`StoreError::DuplicateVote`](crate::StoreError::DuplicateVote)
///   on violation, which makes the engine's check-then-act read harmless
///   under concurrency.
/// - [`replace`](Self::replace) applies delete-old plus insert-new as one
///   atomic step, or not at all.
/// - Reads never mutate state.
pub trait VoteStore: Send + Sync {
    /// Look up a record by its id.
    ///
    /// Returns `Ok(None)` if no such record exists.
    fn find_by_id(&self, id: &VoteId) -> StoreResult<Option<VoteRecord>>;

    /// Look up the record for a (`user`, `target`) pair.
    ///
    /// Absence is a valid answer, never an error.
    fn find_by_user_target(
        &self,
        user: &UserId,
        target: &VoteTarget,
    ) -> StoreResult<Option<VoteRecord>>;

    /// Insert a new record.
    ///
    /// Fails with `DuplicateVote` if a record for the same (`user`,
    /// `target`) pair already exists, in either direction.
    fn insert(&self, record: &VoteRecord) -> StoreResult<()>;

    /// Delete a record by id. Returns `true` if the record existed.
    fn delete(&self, id: &VoteId) -> StoreResult<bool>;

    /// Atomically delete the record at `old` and insert `record`.
    ///
    /// Used for direction flips. Fails with `Missing` if `old` does not
    /// exist, leaving the store untouched; fails with `DuplicateVote` if
    /// `record` would collide with a record other than `old`.
    fn replace(&self, old: &VoteId, record: &VoteRecord) -> StoreResult<()>;

    /// All records for a target, in no guaranteed order.
    fn list_for_target(&self, target: &VoteTarget) -> StoreResult<Vec<VoteRecord>>;
}

/// The post/comment existence collaborator.
///
/// The transition engine consults this before any store mutation; a vote
/// on a target that does not resolve is rejected without side effects.
pub trait TargetDirectory: Send + Sync {
    /// Look up a post by id. Returns `Ok(None)` if absent.
    fn find_post(&self, id: &PostId) -> StoreResult<Option<Post>>;

    /// Look up a comment by id. Returns `Ok(None)` if absent.
    fn find_comment(&self, id: &CommentId) -> StoreResult<Option<Comment>>;
}
