//! Remote wishlist records as exchanged with the wishlist service.

use crate::{RecordId, Timestamp, TourId};
use serde::{Deserialize, Serialize};

/// A wishlist record persisted by the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteRecord {
    /// Identifier of the wishlist record itself
    pub record_id: RecordId,
    /// The wishlisted tour
    pub tour_id: TourId,
    /// When the record was created (milliseconds since epoch)
    pub added_at: Timestamp,
    /// Tour details, present when the service expands them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tour: Option<serde_json::Value>,
}

impl RemoteRecord {
    /// Create a record without embedded tour details.
    pub fn new(
        record_id: impl Into<RecordId>,
        tour_id: impl Into<TourId>,
        added_at: Timestamp,
    ) -> Self {
        Self {
            record_id: record_id.into(),
            tour_id: tour_id.into(),
            added_at,
            tour: None,
        }
    }

    /// Attach expanded tour details.
    pub fn with_tour(mut self, tour: serde_json::Value) -> Self {
        self.tour = Some(tour);
        self
    }
}
