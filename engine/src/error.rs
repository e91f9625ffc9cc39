//! Error types for the wishlist engine.

use thiserror::Error;

/// All possible errors from the wishlist engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("tour id must not be empty")]
    EmptyTourId,

    // Persistence errors
    #[error("invalid wishlist snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("invalid pending sync set: {0}")]
    InvalidPending(String),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
