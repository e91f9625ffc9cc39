//! # Wishlist Client
//!
//! Keeps a user's tour wishlist usable whether or not they are signed in.
//!
//! Signed out, the wishlist lives in a device [`LocalStore`] and every
//! addition is queued for sync. Once a user signs in, the remote service
//! becomes the source of truth: queued additions are pushed, the remote list
//! is mirrored to the device, and the mirror is used when the network fails.
//!
//! ## Components
//!
//! - [`LocalStore`] backends ([`MemoryStore`], [`FileStore`]) and the
//!   [`LocalWishlist`] helper that maps them to wishlist keys
//! - [`RemoteWishlist`], implemented over HTTP by [`HttpRemote`]
//! - [`SessionSignal`], the observable sign-in state
//! - [`WishlistSynchronizer`], which owns the load/drain/add/remove rules
//! - [`WishlistViewModel`], the reactive state screens render
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use wishlist_client::{
//!     HttpRemote, LocalWishlist, MemoryStore, SessionSignal, UserIdentity, WishlistKeys,
//!     WishlistSynchronizer, WishlistViewModel,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let session = SessionSignal::anonymous();
//! let local = LocalWishlist::new(Arc::new(MemoryStore::new()), WishlistKeys::default());
//! let remote = HttpRemote::new("https://api.example.com", session.clone(), wishlist_client::DEFAULT_TIMEOUT)?;
//! let sync = Arc::new(WishlistSynchronizer::new(local, Arc::new(remote), session.clone()));
//!
//! let vm = Arc::new(WishlistViewModel::new(sync));
//! vm.mount().await;
//! let _watcher = vm.watch_session();
//!
//! vm.add_to_wishlist("tour-42").await?;      // stored on the device
//! session.login(UserIdentity::new("user-1", "token"));  // pushed on next load
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod local;
pub mod remote;
pub mod session;
pub mod store;
pub mod sync;
pub mod view_model;

pub use config::{ClientConfig, ConfigError};
pub use error::{RemoteError, StorageError, SyncError};
pub use http::{HttpRemote, DEFAULT_TIMEOUT};
pub use local::{LocalWishlist, WishlistKeys};
pub use remote::RemoteWishlist;
pub use session::{Session, SessionSignal, UserIdentity};
pub use store::{FileStore, LocalStore, MemoryStore};
pub use sync::{Clock, DrainReport, SystemClock, WishlistSynchronizer};
pub use view_model::{WishlistState, WishlistViewModel};
