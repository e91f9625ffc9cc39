//! Client configuration loaded from the environment.

use crate::error::RemoteError;
use crate::http::{HttpRemote, DEFAULT_TIMEOUT};
use crate::local::{LocalWishlist, WishlistKeys, DEFAULT_NAMESPACE};
use crate::session::SessionSignal;
use crate::store::FileStore;
use crate::sync::WishlistSynchronizer;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Wishlist client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the wishlist REST API
    pub api_url: String,
    /// Directory for the device store
    pub store_dir: PathBuf,
    /// Key namespace inside the device store
    pub namespace: String,
    /// Per-request timeout for remote calls
    pub http_timeout: Duration,
}

impl ClientConfig {
    /// Load configuration from environment variables (and `.env`, if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = lookup("WISHLIST_API_URL").ok_or(ConfigError::MissingApiUrl)?;

        let store_dir = lookup("WISHLIST_STORE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".wishlist"));

        let namespace =
            lookup("WISHLIST_NAMESPACE").unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
        if namespace.is_empty() {
            return Err(ConfigError::EmptyNamespace);
        }

        let http_timeout = match lookup("WISHLIST_HTTP_TIMEOUT_SECS") {
            Some(secs) => secs
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .map(Duration::from_secs)
                .ok_or(ConfigError::InvalidTimeout)?,
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            api_url,
            store_dir,
            namespace,
            http_timeout,
        })
    }

    /// Wire a synchronizer backed by a file store and the HTTP service.
    pub async fn build(&self, session: SessionSignal) -> Result<WishlistSynchronizer, ConfigError> {
        let store = FileStore::open(&self.store_dir)
            .await
            .map_err(|e| ConfigError::Store(e.to_string()))?;
        let local = LocalWishlist::new(Arc::new(store), WishlistKeys::new(&self.namespace));
        let remote = HttpRemote::new(&self.api_url, session.clone(), self.http_timeout)?;

        tracing::info!(api = %self.api_url, store = %self.store_dir.display(), "Wishlist client configured");

        Ok(WishlistSynchronizer::new(local, Arc::new(remote), session))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("WISHLIST_API_URL environment variable is required")]
    MissingApiUrl,

    #[error("WISHLIST_NAMESPACE must not be empty")]
    EmptyNamespace,

    #[error("Invalid WISHLIST_HTTP_TIMEOUT_SECS value")]
    InvalidTimeout,

    #[error("Cannot open wishlist store: {0}")]
    Store(String),

    #[error("Cannot build HTTP client: {0}")]
    Http(#[from] RemoteError),
}
