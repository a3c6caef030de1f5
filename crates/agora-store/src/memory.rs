//! In-memory vote store for testing and ephemeral use.
//!
//! [`InMemoryVoteStore`] keeps records in a `HashMap` alongside a
//! (`user`, `target`) uniqueness index, both protected by a single
//! `RwLock` so that inserts and replaces are atomic with respect to the
//! constraint check.

use std::collections::HashMap;
use std::sync::RwLock;

use agora_types::{UserId, VoteId, VoteRecord, VoteTarget};

use crate::error::{StoreError, StoreResult};
use crate::traits::VoteStore;

#[derive(Debug, Default)]
struct VoteTable {
    records: HashMap<VoteId, VoteRecord>,
    // Uniqueness index: at most one record id per (user, target) pair.
    by_user_target: HashMap<(UserId, VoteTarget), VoteId>,
}

/// An in-memory implementation of [`VoteStore`].
///
/// Both maps live behind one `RwLock`; every write path re-checks the
/// uniqueness index under the write lock, so concurrent casters racing on
/// the same (user, target) pair see exactly one success and
/// [`StoreError::DuplicateVote`] for the rest.
pub struct InMemoryVoteStore {
    table: RwLock<VoteTable>,
}

impl InMemoryVoteStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            table: RwLock::new(VoteTable::default()),
        }
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.table.read().expect("lock poisoned").records.len()
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.table.read().expect("lock poisoned").records.is_empty()
    }

    /// Remove all records.
    pub fn clear(&self) {
        let mut table = self.table.write().expect("lock poisoned");
        table.records.clear();
        table.by_user_target.clear();
    }

    fn read_table(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, VoteTable>> {
        self.table
            .read()
            .map_err(|e| StoreError::Internal(format!("lock poisoned: {e}")))
    }

    fn write_table(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, VoteTable>> {
        self.table
            .write()
            .map_err(|e| StoreError::Internal(format!("lock poisoned: {e}")))
    }
}

impl Default for InMemoryVoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VoteStore for InMemoryVoteStore {
    fn find_by_id(&self, id: &VoteId) -> StoreResult<Option<VoteRecord>> {
        let table = self.read_table()?;
        Ok(table.records.get(id).cloned())
    }

    fn find_by_user_target(
        &self,
        user: &UserId,
        target: &VoteTarget,
    ) -> StoreResult<Option<VoteRecord>> {
        let table = self.read_table()?;
        let id = table.by_user_target.get(&(*user, *target));
        Ok(id.and_then(|id| table.records.get(id)).cloned())
    }

    fn insert(&self, record: &VoteRecord) -> StoreResult<()> {
        let mut table = self.write_table()?;
        let key = (record.user, record.target);
        if table.by_user_target.contains_key(&key) {
            return Err(StoreError::DuplicateVote {
                user: record.user,
                target: record.target,
            });
        }
        table.by_user_target.insert(key, record.id);
        table.records.insert(record.id, record.clone());
        Ok(())
    }

    fn delete(&self, id: &VoteId) -> StoreResult<bool> {
        let mut table = self.write_table()?;
        match table.records.remove(id) {
            Some(record) => {
                table.by_user_target.remove(&(record.user, record.target));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn replace(&self, old: &VoteId, record: &VoteRecord) -> StoreResult<()> {
        let mut table = self.write_table()?;

        // Validate both halves before touching anything, so a failure
        // leaves the store exactly as it was.
        if !table.records.contains_key(old) {
            return Err(StoreError::Missing(*old));
        }
        let key = (record.user, record.target);
        if let Some(existing) = table.by_user_target.get(&key) {
            if existing != old {
                return Err(StoreError::DuplicateVote {
                    user: record.user,
                    target: record.target,
                });
            }
        }

        let removed = table
            .records
            .remove(old)
            .ok_or(StoreError::Missing(*old))?;
        table.by_user_target.remove(&(removed.user, removed.target));
        table.by_user_target.insert(key, record.id);
        table.records.insert(record.id, record.clone());
        Ok(())
    }

    fn list_for_target(&self, target: &VoteTarget) -> StoreResult<Vec<VoteRecord>> {
        let table = self.read_table()?;
        Ok(table
            .records
            .values()
            .filter(|record| record.target == *target)
            .cloned()
            .collect())
    }
}

impl std::fmt::Debug for InMemoryVoteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryVoteStore")
            .field("record_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_types::{CommentId, PostId, VoteDirection};

    fn post_target() -> VoteTarget {
        PostId::new().into()
    }

    fn up_vote(user: UserId, target: VoteTarget) -> VoteRecord {
        VoteRecord::new(target, user, VoteDirection::Up)
    }

    // -----------------------------------------------------------------------
    // Insert and lookup
    // -----------------------------------------------------------------------

    #[test]
    fn insert_and_find_by_id() {
        let store = InMemoryVoteStore::new();
        let record = up_vote(UserId::new(), post_target());
        store.insert(&record).unwrap();

        let found = store.find_by_id(&record.id).unwrap().expect("should exist");
        assert_eq!(found, record);
    }

    #[test]
    fn insert_and_find_by_user_target() {
        let store = InMemoryVoteStore::new();
        let record = up_vote(UserId::new(), post_target());
        store.insert(&record).unwrap();

        let found = store
            .find_by_user_target(&record.user, &record.target)
            .unwrap()
            .expect("should exist");
        assert_eq!(found.id, record.id);
    }

    #[test]
    fn find_missing_returns_none() {
        let store = InMemoryVoteStore::new();
        assert!(store.find_by_id(&VoteId::new()).unwrap().is_none());
        assert!(store
            .find_by_user_target(&UserId::new(), &post_target())
            .unwrap()
            .is_none());
    }

    // -----------------------------------------------------------------------
    // Uniqueness constraint
    // -----------------------------------------------------------------------

    #[test]
    fn duplicate_insert_same_direction_rejected() {
        let store = InMemoryVoteStore::new();
        let user = UserId::new();
        let target = post_target();
        store.insert(&up_vote(user, target)).unwrap();

        let err = store.insert(&up_vote(user, target)).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateVote { .. }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn duplicate_insert_opposite_direction_rejected() {
        let store = InMemoryVoteStore::new();
        let user = UserId::new();
        let target = post_target();
        store.insert(&up_vote(user, target)).unwrap();

        let down = VoteRecord::new(target, user, VoteDirection::Down);
        let err = store.insert(&down).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateVote { .. }));
    }

    #[test]
    fn same_user_different_targets_allowed() {
        let store = InMemoryVoteStore::new();
        let user = UserId::new();
        store.insert(&up_vote(user, post_target())).unwrap();
        store.insert(&up_vote(user, post_target())).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn different_users_same_target_allowed() {
        let store = InMemoryVoteStore::new();
        let target = post_target();
        store.insert(&up_vote(UserId::new(), target)).unwrap();
        store.insert(&up_vote(UserId::new(), target)).unwrap();
        assert_eq!(store.len(), 2);
    }

    // -----------------------------------------------------------------------
    // Delete
    // -----------------------------------------------------------------------

    #[test]
    fn delete_present_record() {
        let store = InMemoryVoteStore::new();
        let record = up_vote(UserId::new(), post_target());
        store.insert(&record).unwrap();

        assert!(store.delete(&record.id).unwrap());
        assert!(store.find_by_id(&record.id).unwrap().is_none());
        assert!(!store.delete(&record.id).unwrap());
    }

    #[test]
    fn delete_frees_the_uniqueness_slot() {
        let store = InMemoryVoteStore::new();
        let user = UserId::new();
        let target = post_target();
        let record = up_vote(user, target);
        store.insert(&record).unwrap();
        store.delete(&record.id).unwrap();

        // A fresh insert for the same pair must now succeed.
        store.insert(&up_vote(user, target)).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_missing_returns_false() {
        let store = InMemoryVoteStore::new();
        assert!(!store.delete(&VoteId::new()).unwrap());
    }

    // -----------------------------------------------------------------------
    // Replace (atomic flip)
    // -----------------------------------------------------------------------

    #[test]
    fn replace_swaps_old_for_new() {
        let store = InMemoryVoteStore::new();
        let user = UserId::new();
        let target = post_target();
        let old = up_vote(user, target);
        store.insert(&old).unwrap();

        let new = VoteRecord::new(target, user, VoteDirection::Down);
        store.replace(&old.id, &new).unwrap();

        assert!(store.find_by_id(&old.id).unwrap().is_none());
        let current = store
            .find_by_user_target(&user, &target)
            .unwrap()
            .expect("should exist");
        assert_eq!(current.id, new.id);
        assert_eq!(current.direction, VoteDirection::Down);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn replace_missing_old_fails_untouched() {
        let store = InMemoryVoteStore::new();
        let user = UserId::new();
        let target = post_target();
        let new = VoteRecord::new(target, user, VoteDirection::Down);

        let err = store.replace(&VoteId::new(), &new).unwrap_err();
        assert!(matches!(err, StoreError::Missing(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn replace_cannot_collide_with_another_pair() {
        let store = InMemoryVoteStore::new();
        let target = post_target();
        let alice = up_vote(UserId::new(), target);
        let bob = up_vote(UserId::new(), target);
        store.insert(&alice).unwrap();
        store.insert(&bob).unwrap();

        // Try to replace Alice's record with one keyed to Bob's pair.
        let stolen = VoteRecord::new(target, bob.user, VoteDirection::Down);
        let err = store.replace(&alice.id, &stolen).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateVote { .. }));

        // Nothing changed.
        assert_eq!(store.len(), 2);
        assert!(store.find_by_id(&alice.id).unwrap().is_some());
    }

    // -----------------------------------------------------------------------
    // Listing
    // -----------------------------------------------------------------------

    #[test]
    fn list_for_target_filters_by_target() {
        let store = InMemoryVoteStore::new();
        let target = post_target();
        let other = post_target();
        store.insert(&up_vote(UserId::new(), target)).unwrap();
        store.insert(&up_vote(UserId::new(), target)).unwrap();
        store.insert(&up_vote(UserId::new(), other)).unwrap();

        assert_eq!(store.list_for_target(&target).unwrap().len(), 2);
        assert_eq!(store.list_for_target(&other).unwrap().len(), 1);
    }

    #[test]
    fn list_for_absent_target_is_empty() {
        let store = InMemoryVoteStore::new();
        assert!(store.list_for_target(&post_target()).unwrap().is_empty());
    }

    #[test]
    fn post_and_comment_targets_do_not_mix() {
        let store = InMemoryVoteStore::new();
        let post_id = PostId::new();
        let post = VoteTarget::Post(post_id);
        let comment = VoteTarget::Comment(CommentId::from_uuid(*post_id.as_uuid()));
        store.insert(&up_vote(UserId::new(), post)).unwrap();

        assert!(store.list_for_target(&comment).unwrap().is_empty());
    }

    // -----------------------------------------------------------------------
    // Concurrent write safety
    // -----------------------------------------------------------------------

    #[test]
    fn concurrent_inserts_one_winner_per_pair() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(InMemoryVoteStore::new());
        let user = UserId::new();
        let target = post_target();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.insert(&up_vote(user, target)).is_ok())
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().expect("thread should not panic"))
            .filter(|&ok| ok)
            .count();
        assert_eq!(successes, 1);
        assert_eq!(store.len(), 1);
    }

    // -----------------------------------------------------------------------
    // Utility methods
    // -----------------------------------------------------------------------

    #[test]
    fn len_is_empty_clear() {
        let store = InMemoryVoteStore::new();
        assert!(store.is_empty());
        store.insert(&up_vote(UserId::new(), post_target())).unwrap();
        assert_eq!(store.len(), 1);
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn debug_format() {
        let store = InMemoryVoteStore::new();
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryVoteStore"));
        assert!(debug.contains("record_count"));
    }
}
