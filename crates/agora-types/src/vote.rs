//! Vote primitives: directions, targets, states, and the persisted record.
//!
//! A vote is always directional — there is no stored "neutral" vote. The
//! absence of a [`VoteRecord`] for a (user, target) pair *is* the neutral
//! state, which is why [`VoteState`] has a `None` variant but
//! [`VoteDirection`] does not.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{CommentId, PostId, UserId, VoteId};

/// The direction of a cast vote, each carrying a signed weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    /// The numeric weight this direction contributes to a target's score.
    pub fn weight(&self) -> i64 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }

    /// The other direction. Flipping a vote replaces a record in this
    /// direction with one in the opposite.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

/// A user's current vote on a target, as reported by the state resolver.
///
/// `None` means no record exists — a valid answer, never an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteState {
    None,
    Up,
    Down,
}

impl From<Option<VoteDirection>> for VoteState {
    fn from(direction: Option<VoteDirection>) -> Self {
        match direction {
            None => Self::None,
            Some(VoteDirection::Up) => Self::Up,
            Some(VoteDirection::Down) => Self::Down,
        }
    }
}

/// The kind of entity a vote is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Post,
    Comment,
}

/// A votable entity: an opaque id tagged with its kind.
///
/// The target is not owned by the voting core — existence is checked
/// through the post/comment collaborators before any store mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteTarget {
    Post(PostId),
    Comment(CommentId),
}

impl VoteTarget {
    /// The kind tag, used to pick the vote store partition.
    pub fn kind(&self) -> TargetKind {
        match self {
            Self::Post(_) => TargetKind::Post,
            Self::Comment(_) => TargetKind::Comment,
        }
    }

    /// The raw UUID of the underlying post or comment.
    pub fn as_uuid(&self) -> &uuid::Uuid {
        match self {
            Self::Post(id) => id.as_uuid(),
            Self::Comment(id) => id.as_uuid(),
        }
    }
}

impl From<PostId> for VoteTarget {
    fn from(id: PostId) -> Self {
        Self::Post(id)
    }
}

impl From<CommentId> for VoteTarget {
    fn from(id: CommentId) -> Self {
        Self::Comment(id)
    }
}

/// The sole persisted entity of the voting core.
///
/// Invariant: for a given (`user`, `target`) pair at most one record
/// exists at any time, across both directions. Records are created only
/// by the transition engine (fresh cast, or flip — old record destroyed,
/// new one created, never mutated in place) and destroyed only when the
/// user removes their vote.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    /// Unique identifier, generated on creation, immutable.
    pub id: VoteId,
    /// The voted-on post or comment.
    pub target: VoteTarget,
    /// The voter.
    pub user: UserId,
    /// Up or Down.
    pub direction: VoteDirection,
    /// When the vote was cast.
    pub cast_at: DateTime<Utc>,
}

impl VoteRecord {
    /// Build a fresh record with a new id, timestamped now.
    pub fn new(target: VoteTarget, user: UserId, direction: VoteDirection) -> Self {
        Self {
            id: VoteId::new(),
            target,
            user,
            direction,
            cast_at: Utc::now(),
        }
    }
}
