//! Database operations for the wishlist_items table.

use sqlx::{PgPool, Row};
use wishlist_engine::RemoteRecord;

/// A wishlist row joined with its tour details.
#[derive(Debug)]
pub struct StoredItem {
    pub record_id: String,
    pub tour_id: String,
    pub added_at: i64,
    pub tour: Option<serde_json::Value>,
}

impl<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> for StoredItem {
    fn from_row(row: &'r sqlx::postgres::PgRow) -> Result<Self, sqlx::Error> {
        Ok(StoredItem {
            record_id: row.try_get("record_id")?,
            tour_id: row.try_get("tour_id")?,
            added_at: row.try_get("added_at")?,
            tour: row.try_get("tour")?,
        })
    }
}

impl StoredItem {
    /// Convert database row to the wire record.
    pub fn to_record(&self) -> RemoteRecord {
        let record = RemoteRecord::new(
            self.record_id.clone(),
            self.tour_id.clone(),
            self.added_at.max(0) as u64,
        );
        match &self.tour {
            Some(tour) => record.with_tour(tour.clone()),
            None => record,
        }
    }
}

/// List a user's wishlist, oldest first.
pub async fn list_items(pool: &PgPool, user_id: &str) -> Result<Vec<StoredItem>, sqlx::Error> {
    sqlx::query_as::<_, StoredItem>(
        r#"
        SELECT w.record_id, w.tour_id, w.added_at, t.details AS tour
        FROM wishlist_items w
        LEFT JOIN tours t ON t.id = w.tour_id
        WHERE w.user_id = $1
        ORDER BY w.added_at ASC, w.record_id ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Get a single wishlist item.
pub async fn get_item(
    pool: &PgPool,
    user_id: &str,
    tour_id: &str,
) -> Result<Option<StoredItem>, sqlx::Error> {
    sqlx::query_as::<_, StoredItem>(
        r#"
        SELECT w.record_id, w.tour_id, w.added_at, t.details AS tour
        FROM wishlist_items w
        LEFT JOIN tours t ON t.id = w.tour_id
        WHERE w.user_id = $1 AND w.tour_id = $2
        "#,
    )
    .bind(user_id)
    .bind(tour_id)
    .fetch_optional(pool)
    .await
}

/// Insert a wishlist item unless the user already has the tour.
///
/// Returns `true` when a new row was created.
pub async fn insert_item(
    pool: &PgPool,
    record_id: &str,
    user_id: &str,
    tour_id: &str,
    added_at: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO wishlist_items (record_id, user_id, tour_id, added_at)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (user_id, tour_id) DO NOTHING
        "#,
    )
    .bind(record_id)
    .bind(user_id)
    .bind(tour_id)
    .bind(added_at)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() == 1)
}

/// Delete a wishlist item. Returns `true` if a row was removed.
pub async fn delete_item(pool: &PgPool, user_id: &str, tour_id: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM wishlist_items WHERE user_id = $1 AND tour_id = $2"#)
        .bind(user_id)
        .bind(tour_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
