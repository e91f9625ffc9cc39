//! # Wishlist Engine
//!
//! The deterministic data model behind the tour wishlist.
//!
//! This crate holds the wishlist types and the rules for changing them while
//! signed out. It is the part of wishlist sync that can be reasoned about
//! without a network or a device: the same inputs always produce the same
//! outputs.
//!
//! ## Design Principles
//!
//! - **No IO**: the engine never touches storage, the network or the clock
//! - **Deterministic**: timestamps are passed in by the caller
//! - **Testable**: pure logic, no mocks needed
//!
//! ## Core Concepts
//!
//! ### Entries
//!
//! A [`WishlistEntry`] is a saved reference to a tour. Entries added on the
//! device have no remote record id until the server persists them.
//!
//! ### Snapshots
//!
//! A [`WishlistSnapshot`] is the ordered list of entries for one owner. Tour
//! ids are unique within a snapshot; inserting a tour twice is a no-op.
//!
//! ### Pending sync
//!
//! The [`PendingSyncSet`] lists tours added while signed out that the server
//! has not confirmed yet. [`LocalWishlistState`] keeps the two in step.
//!
//! ## Quick Start
//!
//! ```rust
//! use wishlist_engine::{LocalWishlistState, RemoteRecord, WishlistSnapshot};
//!
//! // Signed out: changes land on the device and are queued for sync
//! let mut state = LocalWishlistState::default();
//! state.add("tour-42", 1706745600000).unwrap();
//! state.add("tour-42", 1706745601000).unwrap();
//! assert_eq!(state.snapshot().len(), 1);
//! assert!(state.pending().contains("tour-42"));
//!
//! // Signed in: the server list becomes the device cache
//! let cache = WishlistSnapshot::from_remote(vec![
//!     RemoteRecord::new("rec-1", "tour-42", 1706745602000),
//! ]);
//! assert_eq!(cache.to_json().unwrap(),
//!     r#"[{"itemId":"tour-42","sourceRecordId":"rec-1","addedAt":1706745602000}]"#);
//! ```

pub mod entry;
pub mod error;
pub mod pending;
pub mod record;
pub mod snapshot;
pub mod state;

// Re-export main types at crate root
pub use entry::{Origin, WishlistEntry};
pub use error::Error;
pub use pending::PendingSyncSet;
pub use record::RemoteRecord;
pub use snapshot::WishlistSnapshot;
pub use state::{LocalChange, LocalWishlistState};

/// Type aliases for clarity
pub type TourId = String;
pub type RecordId = String;
pub type Timestamp = u64;
