//! Wishlist persistence on top of a [`LocalStore`].
//!
//! Two independent keys are used: one for the wishlist snapshot and one for
//! the pending sync set. Storage failures never reach the caller: failed or
//! corrupt reads yield empty values and failed writes are logged and dropped.

use crate::store::LocalStore;
use std::sync::Arc;
use wishlist_engine::{LocalWishlistState, PendingSyncSet, WishlistSnapshot};

/// Default key namespace.
pub const DEFAULT_NAMESPACE: &str = "wishlist";

/// Storage keys for one wishlist namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishlistKeys {
    pub snapshot: String,
    pub pending: String,
}

impl WishlistKeys {
    pub fn new(namespace: &str) -> Self {
        Self {
            snapshot: format!("{}:items", namespace),
            pending: format!("{}:pending_sync", namespace),
        }
    }
}

impl Default for WishlistKeys {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

/// Reads and writes the wishlist snapshot and pending set.
#[derive(Clone)]
pub struct LocalWishlist {
    store: Arc<dyn LocalStore>,
    keys: WishlistKeys,
}

impl LocalWishlist {
    pub fn new(store: Arc<dyn LocalStore>, keys: WishlistKeys) -> Self {
        Self { store, keys }
    }

    pub fn keys(&self) -> &WishlistKeys {
        &self.keys
    }

    /// Read the cached snapshot, empty when missing or unreadable.
    pub async fn read_snapshot(&self) -> WishlistSnapshot {
        let Some(json) = self.read_raw(&self.keys.snapshot).await else {
            return WishlistSnapshot::new();
        };

        match WishlistSnapshot::from_json(&json) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(key = %self.keys.snapshot, error = %e, "Discarding unreadable wishlist snapshot");
                WishlistSnapshot::new()
            }
        }
    }

    /// Overwrite the cached snapshot.
    pub async fn write_snapshot(&self, snapshot: &WishlistSnapshot) {
        match snapshot.to_json() {
            Ok(json) => self.write_raw(&self.keys.snapshot, &json).await,
            Err(e) => tracing::warn!(error = %e, "Failed to encode wishlist snapshot"),
        }
    }

    /// Read the pending sync set, empty when missing or unreadable.
    pub async fn read_pending(&self) -> PendingSyncSet {
        let Some(json) = self.read_raw(&self.keys.pending).await else {
            return PendingSyncSet::new();
        };

        match PendingSyncSet::from_json(&json) {
            Ok(pending) => pending,
            Err(e) => {
                tracing::warn!(key = %self.keys.pending, error = %e, "Discarding unreadable pending sync set");
                PendingSyncSet::new()
            }
        }
    }

    pub async fn write_pending(&self, pending: &PendingSyncSet) {
        match pending.to_json() {
            Ok(json) => self.write_raw(&self.keys.pending, &json).await,
            Err(e) => tracing::warn!(error = %e, "Failed to encode pending sync set"),
        }
    }

    /// Forget every pending member.
    pub async fn clear_pending(&self) {
        if let Err(e) = self.store.remove_item(&self.keys.pending).await {
            tracing::warn!(key = %self.keys.pending, store = self.store.name(), error = %e, "Failed to clear pending sync set");
        }
    }

    /// Read snapshot and pending set together for a signed-out change.
    pub async fn read_state(&self) -> LocalWishlistState {
        let snapshot = self.read_snapshot().await;
        let pending = self.read_pending().await;
        LocalWishlistState::new(snapshot, pending)
    }

    /// Persist both halves of a signed-out state.
    pub async fn write_state(&self, state: &LocalWishlistState) {
        self.write_snapshot(state.snapshot()).await;
        self.write_pending(state.pending()).await;
    }

    async fn read_raw(&self, key: &str) -> Option<String> {
        match self.store.get_item(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key = %key, store = self.store.name(), error = %e, "Local store read failed");
                None
            }
        }
    }

    async fn write_raw(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set_item(key, value).await {
            tracing::warn!(key = %key, store = self.store.name(), error = %e, "Local store write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn local() -> (MemoryStore, LocalWishlist) {
        let store = MemoryStore::new();
        let local = LocalWishlist::new(Arc::new(store.clone()), WishlistKeys::default());
        (store, local)
    }

    #[test]
    fn keys_are_namespaced() {
        let keys = WishlistKeys::new("guest");
        assert_eq!(keys.snapshot, "guest:items");
        assert_eq!(keys.pending, "guest:pending_sync");
        assert_ne!(keys.snapshot, keys.pending);
    }

    #[tokio::test]
    async fn missing_keys_read_as_empty() {
        let (_, local) = local();
        assert!(local.read_snapshot().await.is_empty());
        assert!(local.read_pending().await.is_empty());
    }

    #[tokio::test]
    async fn corrupt_snapshot_reads_as_empty() {
        let (store, local) = local();
        store.set_item("wishlist:items", "{oops").await.unwrap();
        assert!(local.read_snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn state_roundtrip() {
        let (store, local) = local();

        let mut state = local.read_state().await;
        state.add("tour-42", 1000).unwrap();
        local.write_state(&state).await;

        assert_eq!(
            store.get_item("wishlist:pending_sync").await.unwrap().as_deref(),
            Some(r#"["tour-42"]"#)
        );
        assert_eq!(local.read_state().await, state);

        local.clear_pending().await;
        assert!(local.read_pending().await.is_empty());
        assert!(local.read_snapshot().await.contains("tour-42"));
    }
}
