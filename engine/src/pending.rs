//! Tours added while signed out that the server has not seen yet.

use crate::{error::Result, Error, TourId, WishlistSnapshot};
use serde::{Deserialize, Serialize};

/// Ordered set of tour ids waiting to be pushed to the remote wishlist.
///
/// Every member must also be present in the device snapshot. Members leave
/// the set when it is drained after sign-in, or when the entry is removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PendingSyncSet {
    items: Vec<TourId>,
}

impl PendingSyncSet {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add a tour id. Returns `true` if it was not already pending.
    pub fn insert(&mut self, item_id: impl Into<TourId>) -> bool {
        let item_id = item_id.into();
        if self.contains(&item_id) {
            return false;
        }
        self.items.push(item_id);
        true
    }

    /// Evict a tour id. Returns `true` if it was pending.
    pub fn remove(&mut self, item_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|id| id != item_id);
        self.items.len() != before
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.items.iter().any(|id| id == item_id)
    }

    /// Drop members whose entry is no longer in the snapshot.
    ///
    /// Returns the number of members dropped.
    pub fn retain_present(&mut self, snapshot: &WishlistSnapshot) -> usize {
        let before = self.items.len();
        self.items.retain(|id| snapshot.contains(id));
        before - self.items.len()
    }

    /// Take every member out, leaving the set empty.
    pub fn take_all(&mut self) -> Vec<TourId> {
        std::mem::take(&mut self.items)
    }

    /// Members in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Serialize to the JSON array of ids stored on the device.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::InvalidPending(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let ids: Vec<TourId> =
            serde_json::from_str(json).map_err(|e| Error::InvalidPending(e.to_string()))?;

        let mut set = Self::new();
        for id in ids {
            set.insert(id);
        }
        Ok(set)
    }
}
