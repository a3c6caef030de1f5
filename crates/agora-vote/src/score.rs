//! Score aggregation.
//!
//! A target's displayed score is the sum of the direction weights of all
//! its vote records (Up = +1, Down = −1). The score is derived, never
//! stored: it is recomputed from store contents on every call. Caching,
//! if wanted, belongs to a presentation-layer collaborator.

use std::sync::Arc;

use agora_store::VoteStore;
use agora_types::{TargetKind, VoteTarget};

use crate::error::VoteResult;

/// Computes displayed vote counts for posts and comments.
#[derive(Clone)]
pub struct ScoreAggregator {
    post_votes: Arc<dyn VoteStore>,
    comment_votes: Arc<dyn VoteStore>,
}

impl ScoreAggregator {
    /// Build an aggregator over the two per-kind store partitions.
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

    /// The target's score at call time. O(votes on the target).
    pub fn score(&self, target: &VoteTarget) -> VoteResult<i64> {
        let records = self.store_for(target.kind()).list_for_target(target)?;
        Ok(records.iter().map(|r| r.direction.weight()).sum())
    }
}
