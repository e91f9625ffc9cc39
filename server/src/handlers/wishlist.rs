//! Wishlist handlers - per-user membership of tours.

use crate::db;
use crate::error::{AppError, Result};
use sqlx::PgPool;
use wishlist_engine::RemoteRecord;

/// Outcome of an add request.
#[derive(Debug)]
pub struct AddOutcome {
    /// The stored record, new or existing
    pub record: RemoteRecord,
    /// Whether this request created it
    pub created: bool,
}

/// List the user's wishlist.
pub async fn handle_list(pool: &PgPool, user_id: &str) -> Result<Vec<RemoteRecord>> {
    let items = db::list_items(pool, user_id).await?;
    tracing::debug!(user_id, count = items.len(), "Listed wishlist");
    Ok(items.iter().map(db::StoredItem::to_record).collect())
}

/// Add a tour to the user's wishlist. Adding an existing member is a no-op.
pub async fn handle_add(pool: &PgPool, user_id: &str, tour_id: &str) -> Result<AddOutcome> {
    validate_tour_id(tour_id)?;

    let record_id = uuid::Uuid::new_v4().to_string();
    let added_at = chrono::Utc::now().timestamp_millis();
    let created = db::insert_item(pool, &record_id, user_id, tour_id, added_at).await?;

    // Re-read to pick up the existing row and the tour details
    let item = db::get_item(pool, user_id, tour_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("wishlist item {}", tour_id)))?;

    if created {
        tracing::info!(user_id, tour_id, "Added tour to wishlist");
    } else {
        tracing::debug!(user_id, tour_id, "Tour already on wishlist");
    }

    Ok(AddOutcome {
        record: item.to_record(),
        created,
    })
}

/// Remove a tour from the user's wishlist. Removing a non-member succeeds.
pub async fn handle_remove(pool: &PgPool, user_id: &str, tour_id: &str) -> Result<()> {
    validate_tour_id(tour_id)?;

    if db::delete_item(pool, user_id, tour_id).await? {
        tracing::info!(user_id, tour_id, "Removed tour from wishlist");
    }
    Ok(())
}

fn validate_tour_id(tour_id: &str) -> Result<()> {
    if tour_id.trim().is_empty() {
        return Err(wishlist_engine::Error::EmptyTourId.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_tour_ids() {
        assert!(matches!(
            validate_tour_id(""),
            Err(AppError::Engine(wishlist_engine::Error::EmptyTourId))
        ));
        assert!(validate_tour_id("  ").is_err());
        assert!(validate_tour_id("tour-1").is_ok());
    }
}
