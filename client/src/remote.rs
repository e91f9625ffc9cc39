//! The remote wishlist service as seen by the synchronizer.

use crate::error::RemoteError;
use async_trait::async_trait;
use wishlist_engine::RemoteRecord;

/// Per-user wishlist stored by the backend.
///
/// Implementations authenticate with whatever session is current; the
/// synchronizer only calls them while a user is signed in.
#[async_trait]
pub trait RemoteWishlist: Send + Sync {
    /// List the signed-in user's wishlist, in service order
    async fn list(&self) -> Result<Vec<RemoteRecord>, RemoteError>;

    /// Add a tour, returning the stored record
    async fn add(&self, tour_id: &str) -> Result<RemoteRecord, RemoteError>;

    /// Remove a tour; removing a non-member is not an error
    async fn remove(&self, tour_id: &str) -> Result<(), RemoteError>;
}
