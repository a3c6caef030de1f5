//! The vote transition engine.
//!
//! For a given (user, target) the state is `None`, `Up`, or `Down`; the
//! events are a requested direction or a removal. The engine applies the
//! transition table documented at the crate root, consulting the target
//! directory before any mutation and delegating the at-most-one-vote
//! invariant to the store's uniqueness constraint.

use std::sync::Arc;

use agora_store::{TargetDirectory, VoteStore};
use agora_types::{PostId, TargetKind, UserId, VoteDirection, VoteId, VoteRecord, VoteTarget};

use crate::error::{VoteError, VoteResult};
use crate::resolver::VoteStateResolver;

/// Applies vote transitions on behalf of authenticated users.
///
/// The engine is stateless with respect to any single request: it holds
/// only the two per-kind store partitions and the target directory, all
/// shared handles. Concurrent requests for the same (user, target) pair
/// are serialized by the store constraint, not by in-process locking.
pub struct VoteEngine {
    post_votes: Arc<dyn VoteStore>,
    comment_votes: Arc<dyn VoteStore>,
    targets: Arc<dyn TargetDirectory>,
    resolver: VoteStateResolver,
}

impl VoteEngine {
    /// Build an engine over the store partitions and target directory.
    pub fn new(
        post_votes: Arc<dyn VoteStore>,
        comment_votes: Arc<dyn VoteStore>,
        targets: Arc<dyn TargetDirectory>,
    ) -> Self {
        let resolver = VoteStateResolver::new(post_votes.clone(), comment_votes.clone());
        Self {
            post_votes,
            comment_votes,
            targets,
            resolver,
        }
    }

    /// The resolver sharing this engine's stores, for response builders.
    pub fn resolver(&self) -> &VoteStateResolver {
        &self.resolver
    }

    fn store_for(&self, kind: TargetKind) -> &dyn VoteStore {
        match kind {
            TargetKind::Post => self.post_votes.as_ref(),
            TargetKind::Comment => self.comment_votes.as_ref(),
        }
    }

    fn ensure_target_exists(&self, target: &VoteTarget) -> VoteResult<()> {
        let exists = match target {
            VoteTarget::Post(id) => self.targets.find_post(id)?.is_some(),
            VoteTarget::Comment(id) => self.targets.find_comment(id)?.is_some(),
        };
        if exists {
            Ok(())
        } else {
            Err(VoteError::TargetNotFound(*target))
        }
    }

    /// Cast a vote in `direction` on `target` for `user`.
    ///
    /// - No current vote: a fresh record is inserted.
    /// - Current vote in the opposite direction: the record is replaced
    ///   atomically (flip).
    /// - Current vote in the same direction: rejected with
    ///   [`VoteError::AlreadyVoted`] — deliberately a conflict, not a
    ///   toggle-off.
    ///
    /// The target must resolve through the directory before anything is
    /// written; a missing target fails with [`VoteError::TargetNotFound`]
    /// and creates no record.
    pub fn cast_vote(
        &self,
        target: VoteTarget,
        user: UserId,
        direction: VoteDirection,
    ) -> VoteResult<VoteId> {
        self.ensure_target_exists(&target)?;

        let store = self.store_for(target.kind());
        match self.resolver.current_record(&user, &target)? {
            Some(existing) if existing.direction == direction => {
                Err(VoteError::AlreadyVoted(target))
            }
            Some(existing) => {
                // Flip: both halves apply atomically or the request fails.
                // A Missing from replace means the old record vanished
                // mid-flight; From<StoreError> escalates that to Internal
                // rather than risking a doubled state.
                let record = VoteRecord::new(target, user, direction);
                store.replace(&existing.id, &record)?;
                Ok(record.id)
            }
            None => {
                let record = VoteRecord::new(target, user, direction);
                store.insert(&record)?;
                Ok(record.id)
            }
        }
    }

    /// Remove `user`'s vote from a post, keyed by (user, target).
    ///
    /// Fails with [`VoteError::NothingToRemove`] if no vote exists.
    pub fn remove_post_vote(&self, post: PostId, user: UserId) -> VoteResult<()> {
        let target = VoteTarget::Post(post);
        let existing = self
            .resolver
            .current_record(&user, &target)?
            .ok_or_else(|| VoteError::NothingToRemove(format!("post {post}")))?;

        if !self.post_votes.delete(&existing.id)? {
            // Raced with another remover; same outcome as finding nothing.
            return Err(VoteError::NothingToRemove(format!("post {post}")));
        }
        Ok(())
    }

    /// Remove a comment vote, keyed by vote RECORD id.
    ///
    /// Unlike post-vote removal this identifies the record directly, so
    /// ownership must be verified: a record owned by another user fails
    /// with [`VoteError::NotOwner`]. A missing record fails with
    /// [`VoteError::NothingToRemove`].
    pub fn remove_comment_vote(&self, vote: VoteId, user: UserId) -> VoteResult<()> {
        let record = self
            .comment_votes
            .find_by_id(&vote)?
            .ok_or_else(|| VoteError::NothingToRemove(format!("vote record {vote}")))?;

        if record.user != user {
            return Err(VoteError::NotOwner(vote));
        }

        if !self.comment_votes.delete(&vote)? {
            return Err(VoteError::NothingToRemove(format!("vote record {vote}")));
        }
        Ok(())
    }
}

impl std::fmt::Debug for VoteEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoteEngine").finish_non_exhaustive()
    }
}
