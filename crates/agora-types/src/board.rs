//! Board entities: posts and comments.
//!
//! These are owned by the CRUD collaborators, not by the voting core. The
//! voting core only consults them for existence and renders their scores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{CommentId, PostId, UserId};

/// A post inside a board setting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub body: String,
    pub author: UserId,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Build a fresh post with a new id, timestamped now.
    pub fn new(title: impl Into<String>, body: impl Into<String>, author: UserId) -> Self {
        Self {
            id: PostId::new(),
            title: title.into(),
            body: body.into(),
            author,
            created_at: Utc::now(),
        }
    }
}

/// A comment attached to a post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub post: PostId,
    pub body: String,
    pub author: UserId,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Build a fresh comment with a new id, timestamped now.
    pub fn new(post: PostId, body: impl Into<String>, author: UserId) -> Self {
        Self {
            id: CommentId::new(),
            post,
            body: body.into(),
            author,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_construction() {
        let author = UserId::new();
        let post = Post::new("title", "body", author);
        assert_eq!(post.title, "title");
        assert_eq!(post.author, author);
    }

    #[test]
    fn comment_links_to_post() {
        let post = Post::new("t", "b", UserId::new());
        let comment = Comment::new(post.id, "nice", UserId::new());
        assert_eq!(comment.post, post.id);
    }

    #[test]
    fn post_serde_roundtrip() {
        let post = Post::new("t", "b", UserId::new());
        let json = serde_json::to_string(&post).unwrap();
        let parsed: Post = serde_json::from_str(&json).unwrap();
        assert_eq!(post, parsed);
    }
}
