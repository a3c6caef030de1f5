//! The voting core of the Agora discussion board.
//!
//! Exactly one directional vote per (user, target) pair may exist at any
//! time. This crate owns that invariant and the transition policy around
//! it; everything else in the system is a thin pass-through from HTTP to
//! storage.
//!
//! # Components
//!
//! - [`VoteEngine`] — applies a requested direction to a target on behalf
//!   of a user: fresh cast, rejected repeat, atomic flip, or removal.
//! - [`VoteStateResolver`] — reports a user's current vote on a target
//!   (`None`, `Up`, or `Down`); absence is an answer, not an error.
//! - [`ScoreAggregator`] — a target's displayed score: the sum of
//!   direction weights over its records, recomputed on demand and never
//!   cached here.
//!
//! # Transition policy
//!
//! | current | request Up | request Down | request Remove |
//! |---------|------------|--------------|----------------|
//! | None    | insert Up  | insert Down  | conflict       |
//! | Up      | conflict   | flip to Down | delete         |
//! | Down    | flip to Up | conflict     | delete         |
//!
//! Re-requesting the direction a user already holds is a conflict, not a
//! toggle-off. Flips replace the old record atomically through
//! [`VoteStore::replace`](agora_store::VoteStore::replace) — a flip either
//! fully completes or fails without leaving a doubled or emptied state.
//!
//! # Concurrency
//!
//! The engine takes no locks. The at-most-one-vote invariant is delegated
//! to the store's uniqueness constraint on (user, target); the loser of a
//! concurrent cast race sees the same conflict a sequential caller would.

pub mod engine;
pub mod error;
pub mod resolver;
pub mod score;

pub use engine::VoteEngine;
pub use error::{VoteError, VoteResult};
pub use resolver::VoteStateResolver;
pub use score::ScoreAggregator;
