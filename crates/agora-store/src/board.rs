//! In-memory board storage: posts and comments.
//!
//! [`InMemoryBoard`] backs the thin CRUD surface and implements
//! [`TargetDirectory`], the existence collaborator the vote engine
//! consults before mutating any vote store.

use std::collections::HashMap;
use std::sync::RwLock;

use agora_types::{Comment, CommentId, Post, PostId};

use crate::error::{StoreError, StoreResult};
use crate::traits::TargetDirectory;

/// An in-memory post/comment store.
pub struct InMemoryBoard {
    posts: RwLock<HashMap<PostId, Post>>,
    comments: RwLock<HashMap<CommentId, Comment>>,
}

impl InMemoryBoard {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
            comments: RwLock::new(HashMap::new()),
        }
    }

    /// Store a post.
    pub fn insert_post(&self, post: &Post) -> StoreResult<()> {
        let mut posts = self
            .posts
            .write()
            .map_err(|e| StoreError::Internal(format!("lock poisoned: {e}")))?;
        posts.insert(post.id, post.clone());
        Ok(())
    }

    /// Store a comment.
    pub fn insert_comment(&self, comment: &Comment) -> StoreResult<()> {
        let mut comments = self
            .comments
            .write()
            .map_err(|e| StoreError::Internal(format!("lock poisoned: {e}")))?;
        comments.insert(comment.id, comment.clone());
        Ok(())
    }

    /// All comments on a post, oldest first.
    pub fn comments_for_post(&self, post: &PostId) -> StoreResult<Vec<Comment>> {
        let comments = self
            .comments
            .read()
            .map_err(|e| StoreError::Internal(format!("lock poisoned: {e}")))?;
        let mut result: Vec<Comment> = comments
            .values()
            .filter(|comment| comment.post == *post)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(result)
    }

    /// Number of comments on a post.
    pub fn comment_count(&self, post: &PostId) -> StoreResult<usize> {
        Ok(self.comments_for_post(post)?.len())
    }
}

impl Default for InMemoryBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetDirectory for InMemoryBoard {
    fn find_post(&self, id: &PostId) -> StoreResult<Option<Post>> {
        let posts = self
            .posts
            .read()
            .map_err(|e| StoreError::Internal(format!("lock poisoned: {e}")))?;
        Ok(posts.get(id).cloned())
    }

    fn find_comment(&self, id: &CommentId) -> StoreResult<Option<Comment>> {
        let comments = self
            .comments
            .read()
            .map_err(|e| StoreError::Internal(format!("lock poisoned: {e}")))?;
        Ok(comments.get(id).cloned())
    }
}

impl std::fmt::Debug for InMemoryBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let posts = self.posts.read().map(|p| p.len()).unwrap_or(0);
        let comments = self.comments.read().map(|c| c.len()).unwrap_or(0);
        f.debug_struct("InMemoryBoard")
            .field("post_count", &posts)
            .field("comment_count", &comments)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_types::UserId;

    #[test]
    fn insert_and_find_post() {
        let board = InMemoryBoard::new();
        let post = Post::new("title", "body", UserId::new());
        board.insert_post(&post).unwrap();

        let found = board.find_post(&post.id).unwrap().expect("should exist");
        assert_eq!(found, post);
    }

    #[test]
    fn find_missing_post_returns_none() {
        let board = InMemoryBoard::new();
        assert!(board.find_post(&PostId::new()).unwrap().is_none());
    }

    #[test]
    fn insert_and_find_comment() {
        let board = InMemoryBoard::new();
        let post = Post::new("t", "b", UserId::new());
        board.insert_post(&post).unwrap();
        let comment = Comment::new(post.id, "nice", UserId::new());
        board.insert_comment(&comment).unwrap();

        let found = board
            .find_comment(&comment.id)
            .unwrap()
            .expect("should exist");
        assert_eq!(found, comment);
    }

    #[test]
    fn comments_for_post_filters_and_orders() {
        let board = InMemoryBoard::new();
        let post = Post::new("t", "b", UserId::new());
        let other = Post::new("t2", "b2", UserId::new());
        board.insert_post(&post).unwrap();
        board.insert_post(&other).unwrap();

        let first = Comment::new(post.id, "first", UserId::new());
        let second = Comment::new(post.id, "second", UserId::new());
        let elsewhere = Comment::new(other.id, "elsewhere", UserId::new());
        board.insert_comment(&second).unwrap();
        board.insert_comment(&first).unwrap();
        board.insert_comment(&elsewhere).unwrap();

        let comments = board.comments_for_post(&post.id).unwrap();
        assert_eq!(comments.len(), 2);
        assert!(comments[0].created_at <= comments[1].created_at);
        assert_eq!(board.comment_count(&post.id).unwrap(), 2);
    }
}
