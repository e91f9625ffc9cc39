//! Wishlist entries as seen by the app.

use crate::{error::Result, record::RemoteRecord, Error, RecordId, Timestamp, TourId};
use serde::{Deserialize, Serialize};

/// Where an entry currently lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Added on this device and never confirmed by the server
    Local,
    /// Backed by a record on the remote wishlist service
    Remote,
}

/// A saved reference to a bookable tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    /// The wishlisted tour
    pub item_id: TourId,
    /// Remote record id, absent until the server has persisted the entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_record_id: Option<RecordId>,
    /// Insertion time (milliseconds since epoch), display ordering only
    pub added_at: Timestamp,
    /// Tour details when the backend chose to embed them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tour: Option<serde_json::Value>,
}

impl WishlistEntry {
    /// Create an entry that exists only on this device.
    pub fn local(item_id: impl Into<TourId>, added_at: Timestamp) -> Result<Self> {
        let item_id = item_id.into();
        if item_id.is_empty() {
            return Err(Error::EmptyTourId);
        }

        Ok(Self {
            item_id,
            source_record_id: None,
            added_at,
            tour: None,
        })
    }

    pub fn origin(&self) -> Origin {
        if self.source_record_id.is_some() {
            Origin::Remote
        } else {
            Origin::Local
        }
    }
}

impl From<RemoteRecord> for WishlistEntry {
    fn from(record: RemoteRecord) -> Self {
        Self {
            item_id: record.tour_id,
            source_record_id: Some(record.record_id),
            added_at: record.added_at,
            tour: record.tour,
        }
    }
}
