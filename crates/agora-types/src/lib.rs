//! Foundation types for the Agora discussion board.
//!
//! This crate provides the identifier, vote, and board-entity types used
//! throughout the Agora system. Every other Agora crate depends on
//! `agora-types`.
//!
//! # Key Types
//!
//! - [`UserId`], [`PostId`], [`CommentId`], [`VoteId`] — Typed UUID identifiers
//! - [`VoteDirection`] — Up (+1) or Down (−1), the only two storable directions
//! - [`VoteState`] — A user's current vote on a target (`None` means no record)
//! - [`VoteTarget`] — A votable post or comment, tagged by kind
//! - [`VoteRecord`] — The sole persisted entity of the voting core
//! - [`Post`], [`Comment`] — Board entities owned by the CRUD collaborators

pub mod board;
pub mod error;
pub mod id;
pub mod vote;

pub use board::{Comment, Post};
pub use error::TypeError;
pub use id::{CommentId, PostId, UserId, VoteId};
pub use vote::{TargetKind, VoteDirection, VoteRecord, VoteState, VoteTarget};
