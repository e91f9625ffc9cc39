//! Wishlist snapshots as persisted in the device store.
//!
//! A snapshot is the full ordered list of entries for one owner. It is
//! serialized as a plain JSON array so older app builds can still read it.

use crate::{error::Result, Error, RemoteRecord, WishlistEntry};
use serde::{Deserialize, Serialize};

/// Ordered wishlist contents, unique by tour id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WishlistSnapshot {
    entries: Vec<WishlistEntry>,
}

impl WishlistSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a snapshot from entries, keeping the first occurrence of each tour.
    pub fn from_entries(entries: impl IntoIterator<Item = WishlistEntry>) -> Self {
        let mut snapshot = Self::new();
        for entry in entries {
            snapshot.insert(entry);
        }
        snapshot
    }

    /// Build a snapshot mirroring a remote list, in the order the service returned it.
    pub fn from_remote(records: impl IntoIterator<Item = RemoteRecord>) -> Self {
        Self::from_entries(records.into_iter().map(WishlistEntry::from))
    }

    /// Append an entry unless its tour is already present.
    ///
    /// Returns `true` if the snapshot changed.
    pub fn insert(&mut self, entry: WishlistEntry) -> bool {
        if self.contains(&entry.item_id) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Remove the entry for a tour.
    ///
    /// Returns `true` if the snapshot changed; removing an absent tour is a no-op.
    pub fn remove(&mut self, item_id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.item_id != item_id);
        self.entries.len() != before
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.entries.iter().any(|e| e.item_id == item_id)
    }

    pub fn get(&self, item_id: &str) -> Option<&WishlistEntry> {
        self.entries.iter().find(|e| e.item_id == item_id)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[WishlistEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<WishlistEntry> {
        self.entries
    }

    /// Tour ids in insertion order.
    pub fn item_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.item_id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize to the JSON array stored on the device.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::InvalidSnapshot(e.to_string()))
    }

    /// Deserialize from JSON.
    ///
    /// Duplicate tour ids written by older builds are collapsed, first one wins.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<WishlistEntry> =
            serde_json::from_str(json).map_err(|e| Error::InvalidSnapshot(e.to_string()))?;
        Ok(Self::from_entries(entries))
    }
}
