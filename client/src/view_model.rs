//! Reactive wishlist state for screens.
//!
//! Screens subscribe to [`WishlistState`] and call the operations below. Load
//! failures never show up here; failed mutations are returned to the caller
//! so the screen can tell the user.

use crate::error::Result;
use crate::sync::WishlistSynchronizer;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use wishlist_engine::WishlistEntry;

/// Snapshot of what the wishlist screen renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WishlistState {
    /// Entries in the order the backing store returned them
    pub items: Vec<WishlistEntry>,
    /// First resolution after mount or after a session change
    pub loading: bool,
    /// Explicit pull-to-refresh in progress
    pub refreshing: bool,
}

pub struct WishlistViewModel {
    sync: Arc<WishlistSynchronizer>,
    state: watch::Sender<WishlistState>,
}

impl WishlistViewModel {
    pub fn new(sync: Arc<WishlistSynchronizer>) -> Self {
        let (state, _rx) = watch::channel(WishlistState::default());
        Self { sync, state }
    }

    pub fn state(&self) -> WishlistState {
        self.state.borrow().clone()
    }

    pub fn items(&self) -> Vec<WishlistEntry> {
        self.state.borrow().items.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<WishlistState> {
        self.state.subscribe()
    }

    /// Initial resolution, with `loading` set while it runs.
    pub async fn mount(&self) {
        self.state.send_modify(|s| s.loading = true);
        let items = self.sync.load().await;
        self.state.send_modify(|s| {
            s.items = items;
            s.loading = false;
        });
    }

    /// Pull-to-refresh, with `refreshing` set while it runs.
    pub async fn on_refresh(&self) {
        self.state.send_modify(|s| s.refreshing = true);
        let items = self.sync.load().await;
        self.state.send_modify(|s| {
            s.items = items;
            s.refreshing = false;
        });
    }

    /// Reload without touching either flag.
    pub async fn refetch(&self) {
        let items = self.sync.load().await;
        self.state.send_modify(|s| s.items = items);
    }

    pub async fn add_to_wishlist(&self, item_id: &str) -> Result<()> {
        let items = self.sync.add(item_id).await?;
        self.state.send_modify(|s| s.items = items);
        Ok(())
    }

    pub async fn remove_from_wishlist(&self, item_id: &str) -> Result<()> {
        let items = self.sync.remove(item_id).await?;
        self.state.send_modify(|s| s.items = items);
        Ok(())
    }

    /// Reload on every sign-in and sign-out.
    ///
    /// The task runs until aborted through the returned handle.
    pub fn watch_session(self: &Arc<Self>) -> JoinHandle<()> {
        let mut session = self.sync.session().subscribe();
        let vm = Arc::clone(self);

        tokio::spawn(async move {
            while session.changed().await.is_ok() {
                let authenticated = session.borrow_and_update().is_authenticated();
                tracing::debug!(authenticated, "Reloading wishlist after session change");
                vm.mount().await;
            }
        })
    }
}
