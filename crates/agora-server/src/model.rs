//! Request and response bodies for the HTTP surface.
//!
//! Response objects are where the score aggregator and state resolver
//! surface: every rendered post or comment carries its current score, and
//! authenticated readers additionally see their own vote.

use agora_types::{Comment, CommentId, Post, PostId, UserId, VoteId, VoteState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub body: String,
}

/// A rendered post.
#[derive(Debug, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: PostId,
    pub title: String,
    pub body: String,
    pub author: UserId,
    pub created_at: DateTime<Utc>,
    /// Sum of direction weights over the post's vote records.
    pub vote_count: i64,
    pub comment_count: usize,
    /// The requesting user's vote, `none` for anonymous readers.
    pub your_vote: VoteState,
}

impl PostResponse {
    pub fn new(post: Post, vote_count: i64, comment_count: usize, your_vote: VoteState) -> Self {
        Self {
            id: post.id,
            title: post.title,
            body: post.body,
            author: post.author,
            created_at: post.created_at,
            vote_count,
            comment_count,
            your_vote,
        }
    }
}

/// A rendered comment.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: CommentId,
    pub body: String,
    pub author: UserId,
    pub created_at: DateTime<Utc>,
    pub vote_count: i64,
    pub your_vote: VoteState,
    /// Id of the requesting user's vote record, if any. Comment votes are
    /// removed by record id, so clients need this to build the removal
    /// request.
    pub your_vote_id: Option<VoteId>,
}

impl CommentResponse {
    pub fn new(
        comment: Comment,
        vote_count: i64,
        your_vote: VoteState,
        your_vote_id: Option<VoteId>,
    ) -> Self {
        Self {
            id: comment.id,
            body: comment.body,
            author: comment.author,
            created_at: comment.created_at,
            vote_count,
            your_vote,
            your_vote_id,
        }
    }
}
