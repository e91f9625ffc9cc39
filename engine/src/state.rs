//! Signed-out wishlist state: the snapshot plus the tours still to push.
//!
//! While no user is signed in the device owns the wishlist. Every change is
//! applied here and tracked in the [`PendingSyncSet`] so it can be pushed
//! once a session exists.

use crate::{error::Result, PendingSyncSet, Timestamp, WishlistEntry, WishlistSnapshot};

/// What a local change did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalChange {
    /// The snapshot was modified
    Applied,
    /// Nothing to do (already present, or already absent)
    Unchanged,
}

impl LocalChange {
    pub fn is_applied(self) -> bool {
        matches!(self, LocalChange::Applied)
    }
}

/// Device-owned wishlist state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalWishlistState {
    snapshot: WishlistSnapshot,
    pending: PendingSyncSet,
}

impl LocalWishlistState {
    /// Combine a snapshot and pending set read from the device.
    ///
    /// Pending members without a matching entry are dropped.
    pub fn new(snapshot: WishlistSnapshot, mut pending: PendingSyncSet) -> Self {
        pending.retain_present(&snapshot);
        Self { snapshot, pending }
    }

    pub fn snapshot(&self) -> &WishlistSnapshot {
        &self.snapshot
    }

    pub fn pending(&self) -> &PendingSyncSet {
        &self.pending
    }

    pub fn into_parts(self) -> (WishlistSnapshot, PendingSyncSet) {
        (self.snapshot, self.pending)
    }

    /// Add a tour while signed out.
    ///
    /// A tour that is already present is left untouched, including its
    /// pending status.
    pub fn add(&mut self, item_id: &str, now: Timestamp) -> Result<LocalChange> {
        if self.snapshot.contains(item_id) {
            return Ok(LocalChange::Unchanged);
        }

        let entry = WishlistEntry::local(item_id, now)?;
        self.snapshot.insert(entry);
        self.pending.insert(item_id);

        Ok(LocalChange::Applied)
    }

    /// Remove a tour while signed out, evicting it from the pending set too.
    pub fn remove(&mut self, item_id: &str) -> LocalChange {
        let removed = self.snapshot.remove(item_id);
        let evicted = self.pending.remove(item_id);

        if removed || evicted {
            LocalChange::Applied
        } else {
            LocalChange::Unchanged
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn add_tracks_pending() {
        let mut state = LocalWishlistState::default();
        let change = state.add("tour-42", 1000).unwrap();

        assert_eq!(change, LocalChange::Applied);
        assert!(state.snapshot().contains("tour-42"));
        assert!(state.pending().contains("tour-42"));
    }

    #[test]
    fn add_twice_keeps_one_entry() {
        let mut state = LocalWishlistState::default();
        state.add("tour-42", 1000).unwrap();
        let change = state.add("tour-42", 2000).unwrap();

        assert_eq!(change, LocalChange::Unchanged);
        assert_eq!(state.snapshot().len(), 1);
        assert_eq!(state.pending().len(), 1);
    }

    #[test]
    fn add_existing_cached_entry_is_not_pending() {
        // Entry mirrored from a previous signed-in session
        let snapshot = WishlistSnapshot::from_remote(vec![crate::RemoteRecord::new(
            "rec-1", "tour-y", 500,
        )]);
        let mut state = LocalWishlistState::new(snapshot, PendingSyncSet::new());

        assert_eq!(state.add("tour-y", 1000).unwrap(), LocalChange::Unchanged);
        assert!(state.pending().is_empty());
    }

    #[test]
    fn remove_evicts_pending() {
        let mut state = LocalWishlistState::default();
        state.add("tour-1", 1000).unwrap();
        state.add("tour-2", 1000).unwrap();

        assert_eq!(state.remove("tour-1"), LocalChange::Applied);
        assert!(!state.snapshot().contains("tour-1"));
        assert!(!state.pending().contains("tour-1"));
        assert!(state.pending().contains("tour-2"));
    }

    #[test]
    fn remove_absent_is_unchanged() {
        let mut state = LocalWishlistState::default();
        assert_eq!(state.remove("tour-1"), LocalChange::Unchanged);
    }

    #[test]
    fn new_drops_orphaned_pending() {
        let mut pending = PendingSyncSet::new();
        pending.insert("tour-orphan");

        let state = LocalWishlistState::new(WishlistSnapshot::new(), pending);
        assert!(state.pending().is_empty());
    }

    #[test]
    fn add_empty_id_fails() {
        let mut state = LocalWishlistState::default();
        assert_eq!(state.add("", 1000), Err(Error::EmptyTourId));
        assert!(state.snapshot().is_empty());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Step {
            Add(String),
            Remove(String),
        }

        fn arb_tour_id() -> impl Strategy<Value = String> {
            prop_oneof![
                Just("tour-a".to_string()),
                Just("tour-b".to_string()),
                Just("tour-c".to_string()),
                Just("tour-d".to_string()),
            ]
        }

        fn arb_step() -> impl Strategy<Value = Step> {
            prop_oneof![
                arb_tour_id().prop_map(Step::Add),
                arb_tour_id().prop_map(Step::Remove),
            ]
        }

        proptest! {
            #[test]
            fn prop_ids_stay_unique(steps in prop::collection::vec(arb_step(), 0..40)) {
                let mut state = LocalWishlistState::default();
                for (i, step) in steps.iter().enumerate() {
                    match step {
                        Step::Add(id) => { state.add(id, i as u64).unwrap(); }
                        Step::Remove(id) => { state.remove(id); }
                    }
                }

                let mut ids: Vec<_> = state.snapshot().item_ids().collect();
                let total = ids.len();
                ids.sort_unstable();
                ids.dedup();
                prop_assert_eq!(ids.len(), total);
            }

            #[test]
            fn prop_pending_subset_of_snapshot(steps in prop::collection::vec(arb_step(), 0..40)) {
                let mut state = LocalWishlistState::default();
                for (i, step) in steps.iter().enumerate() {
                    match step {
                        Step::Add(id) => { state.add(id, i as u64).unwrap(); }
                        Step::Remove(id) => { state.remove(id); }
                    }
                }

                for id in state.pending().iter() {
                    prop_assert!(state.snapshot().contains(id));
                }
            }

            #[test]
            fn prop_double_add_single_entry(id in arb_tour_id(), t1 in 0u64..10_000, t2 in 0u64..10_000) {
                let mut state = LocalWishlistState::default();
                state.add(&id, t1).unwrap();
                state.add(&id, t2).unwrap();

                prop_assert_eq!(state.snapshot().len(), 1);
                prop_assert_eq!(state.snapshot().get(&id).unwrap().added_at, t1);
            }
        }
    }
}
