//! The vote state resolver.
//!
//! Given a (user, target) pair, reports the user's current vote state by
//! querying the store partition for the target's kind. No side effects.

use std::sync::Arc;

use agora_store::VoteStore;
use agora_types::{TargetKind, UserId, VoteRecord, VoteState, VoteTarget};

use crate::error::VoteResult;

/// Resolves a user's current vote on a target.
///
/// Used internally by the transition engine and exposed to response
/// builders that want to render "you upvoted this". An absent vote is a
/// valid answer ([`VoteState::None`]), never an error.
#[derive(Clone)]
pub struct VoteStateResolver {
    post_votes: Arc<dyn VoteStore>,
    comment_votes: Arc<dyn VoteStore>,
}

impl VoteStateResolver {
    /// Build a resolver over the two per-kind store partitions.
    pub fn new(post_votes: Arc<dyn VoteStore>, comment_votes: Arc<dyn VoteStore>) -> Self {
        Self {
            post_votes,
            comment_votes,
        }
    }

    fn store_for(&self, kind: TargetKind) -> &dyn VoteStore {
        match kind {
            TargetKind::Post => self.post_votes.as_ref(),
            TargetKind::Comment => self.comment_votes.as_ref(),
        }
    }

    /// The user's current vote state on `target`.
    pub fn resolve(&self, user: &UserId, target: &VoteTarget) -> VoteResult<VoteState> {
        let record = self.current_record(user, target)?;
        Ok(VoteState::from(record.map(|r| r.direction)))
    }

    /// The full record behind the state, if one exists.
    ///
    /// The transition engine uses this to learn the record id it must
    /// delete or replace.
    pub fn current_record(
        &self,
        user: &UserId,
        target: &VoteTarget,
    ) -> VoteResult<Option<VoteRecord>> {
        Ok(self.store_for(target.kind()).find_by_user_target(user, target)?)
    }
}
