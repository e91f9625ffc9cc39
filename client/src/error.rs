//! Error types for wishlist sync.

use thiserror::Error;

/// Failure of the device key-value store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Failure of a call to the remote wishlist service.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("no signed-in session")]
    Unauthenticated,

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("invalid response: {0}")]
    Decode(String),
}

/// Errors surfaced to callers of the synchronizer.
///
/// Only mutations the user explicitly asked for produce these; loads degrade
/// to cached data instead.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("wishlist update was not saved: {0}")]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Engine(#[from] wishlist_engine::Error),
}

/// Result type for sync operations.
pub type Result<T> = std::result::Result<T, SyncError>;
