//! Wire-format tests for the wishlist API.
//!
//! These exercise the payloads the server produces and the client consumes;
//! they do not need a running database.

use serde_json::json;
use wishlist_engine::{RemoteRecord, WishlistSnapshot};

const SCHEMA: &str = include_str!("../migrations/0001_init.sql");

/// Test helper mirroring a row from the list query.
fn record(n: u64, tour_id: &str) -> RemoteRecord {
    RemoteRecord::new(format!("rec-{}", n), tour_id, 1706745600000 + n * 1000)
}

#[cfg(test)]
mod wire_format_tests {
    use super::*;

    #[test]
    fn test_list_response_shape() {
        let records = vec![
            record(1, "tour-1"),
            record(2, "tour-2").with_tour(json!({"title": "Harbour kayak", "price": 59})),
        ];

        let value = serde_json::to_value(&records).unwrap();

        assert_eq!(
            value,
            json!([
                {"recordId": "rec-1", "tourId": "tour-1", "addedAt": 1706745601000u64},
                {
                    "recordId": "rec-2",
                    "tourId": "tour-2",
                    "addedAt": 1706745602000u64,
                    "tour": {"title": "Harbour kayak", "price": 59}
                }
            ])
        );
    }

    #[test]
    fn test_add_response_deserialization() {
        let json = r#"{
            "recordId": "6f1c7e1a-8a8e-4c61-9d67-5b0f6c4b1f2a",
            "tourId": "tour-42",
            "addedAt": 1706745600000,
            "tour": null
        }"#;

        let parsed: RemoteRecord = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.tour_id, "tour-42");
        assert_eq!(parsed.added_at, 1706745600000);
        assert!(parsed.tour.is_none());
    }

    #[test]
    fn test_list_order_is_kept_by_client_snapshot() {
        let records = vec![record(3, "tour-c"), record(1, "tour-a"), record(2, "tour-b")];

        let snapshot = WishlistSnapshot::from_remote(records);
        let ids: Vec<&str> = snapshot.item_ids().collect();

        assert_eq!(ids, vec!["tour-c", "tour-a", "tour-b"]);
    }
}

#[cfg(test)]
mod schema_tests {
    use super::*;

    #[test]
    fn test_membership_is_unique_per_user() {
        assert!(SCHEMA.contains("UNIQUE (user_id, tour_id)"));
    }

    #[test]
    fn test_tables_present() {
        for table in ["wishlist_items", "tours", "api_tokens"] {
            assert!(
                SCHEMA.contains(&format!("CREATE TABLE IF NOT EXISTS {}", table)),
                "missing table {}",
                table
            );
        }
    }
}
