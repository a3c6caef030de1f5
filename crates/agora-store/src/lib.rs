//! Storage backends for Agora vote records and board entities.
//!
//! This crate defines the storage seams of the voting core and provides
//! in-memory implementations for tests and embedding.
//!
//! # Storage Traits
//!
//! - [`VoteStore`] — durable keyed storage of vote records. The system runs
//!   one store instance per votable kind (post votes, comment votes).
//! - [`TargetDirectory`] — the post/comment existence collaborator consulted
//!   before any vote mutation.
//!
//! # Design Rules
//!
//! 1. The at-most-one-vote invariant lives HERE: [`VoteStore::insert`]
//!    enforces a uniqueness constraint on (`user`, `target`) and fails with
//!    [`StoreError::DuplicateVote`] when violated. Callers racing on the
//!    same pair lose with the same error a sequential caller would see.
//! 2. [`VoteStore::replace`] is atomic: the old record is gone and the new
//!    one present, or neither effect applies.
//! 3. Records are never mutated in place — a direction change is a replace.
//! 4. All storage failures are propagated, never silently ignored.

pub mod board;
pub mod error;
pub mod memory;
pub mod traits;

pub use board::InMemoryBoard;
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryVoteStore;
pub use traits::{TargetDirectory, VoteStore};
