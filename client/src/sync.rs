//! Wishlist synchronizer.
//!
//! Decides, for every operation, which store is authoritative:
//!
//! - **Signed out**: the device store owns the wishlist. Additions are
//!   recorded in the pending sync set.
//! - **Signed in**: the remote service is the source of truth. The device
//!   store mirrors the last successful remote list and is used as a fallback
//!   when the service cannot be reached.
//!
//! # Load algorithm (signed in)
//!
//! 1. List the remote wishlist
//! 2. On success, overwrite the device snapshot with it
//! 3. Drain the pending sync set, pushing each tour once
//! 4. If anything was pushed, list again and mirror the result
//! 5. On any listing failure, fall back to the device snapshot
//!
//! Every operation that touches the device store runs under one FIFO
//! mutation queue, so concurrent read-modify-write cycles cannot interleave.

use crate::error::{RemoteError, Result};
use crate::local::LocalWishlist;
use crate::remote::RemoteWishlist;
use crate::session::SessionSignal;
use std::sync::Arc;
use tokio::sync::Mutex;
use wishlist_engine::{PendingSyncSet, Timestamp, TourId, WishlistEntry, WishlistSnapshot};

/// Source of "now" for entries added on the device.
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now(&self) -> Timestamp;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        chrono::Utc::now().timestamp_millis().max(0) as Timestamp
    }
}

/// Outcome of one drain of the pending sync set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrainReport {
    /// Tours the service accepted
    pub pushed: Vec<TourId>,
    /// Tours that failed to push; they are not retried
    pub failed: Vec<TourId>,
    /// Tours left pending because the session ended mid-drain
    pub deferred: Vec<TourId>,
}

impl DrainReport {
    pub fn attempted(&self) -> usize {
        self.pushed.len() + self.failed.len()
    }
}

/// Keeps the device store and the remote wishlist convergent across sign-in
/// and sign-out.
pub struct WishlistSynchronizer {
    local: LocalWishlist,
    remote: Arc<dyn RemoteWishlist>,
    session: SessionSignal,
    clock: Arc<dyn Clock>,
    queue: Mutex<()>,
}

impl WishlistSynchronizer {
    pub fn new(
        local: LocalWishlist,
        remote: Arc<dyn RemoteWishlist>,
        session: SessionSignal,
    ) -> Self {
        Self::with_clock(local, remote, session, Arc::new(SystemClock))
    }

    pub fn with_clock(
        local: LocalWishlist,
        remote: Arc<dyn RemoteWishlist>,
        session: SessionSignal,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            local,
            remote,
            session,
            clock,
            queue: Mutex::new(()),
        }
    }

    pub fn session(&self) -> &SessionSignal {
        &self.session
    }

    pub fn local(&self) -> &LocalWishlist {
        &self.local
    }

    /// Resolve the wishlist for the current session.
    ///
    /// Never fails: when the service is unreachable the last device snapshot
    /// is returned, which may be stale or empty.
    pub async fn load(&self) -> Vec<WishlistEntry> {
        let _guard = self.queue.lock().await;
        self.load_locked().await
    }

    /// Push tours added while signed out, then forget them.
    ///
    /// Each tour is attempted once, in the order it was added. Failures are
    /// logged and do not stop the remaining pushes. The set is cleared
    /// afterwards even when some pushes failed, unless the session ended
    /// part way: then the unpushed tours stay pending for the next sign-in.
    pub async fn drain_pending_sync(&self) -> DrainReport {
        let _guard = self.queue.lock().await;
        self.drain_locked().await
    }

    /// Add a tour to the wishlist, returning the resulting items.
    ///
    /// Signed in, a failed remote call is returned and nothing is written
    /// locally. Signed out, adding a tour that is already present is a no-op.
    pub async fn add(&self, item_id: &str) -> Result<Vec<WishlistEntry>> {
        let _guard = self.queue.lock().await;

        if self.session.is_authenticated() {
            self.remote.add(item_id).await.map_err(|e| {
                tracing::warn!(tour_id = %item_id, error = %e, "Remote wishlist add failed");
                e
            })?;
            tracing::debug!(tour_id = %item_id, "Added to remote wishlist");
            return Ok(self.load_locked().await);
        }

        let mut state = self.local.read_state().await;
        if state.add(item_id, self.clock.now())?.is_applied() {
            self.local.write_state(&state).await;
            tracing::debug!(tour_id = %item_id, pending = state.pending().len(), "Added to local wishlist");
        }

        let (snapshot, _) = state.into_parts();
        Ok(snapshot.into_entries())
    }

    /// Remove a tour from the wishlist, returning the resulting items.
    ///
    /// Removing a tour that is not present is a no-op.
    pub async fn remove(&self, item_id: &str) -> Result<Vec<WishlistEntry>> {
        let _guard = self.queue.lock().await;

        if self.session.is_authenticated() {
            self.remote.remove(item_id).await.map_err(|e| {
                tracing::warn!(tour_id = %item_id, error = %e, "Remote wishlist remove failed");
                e
            })?;
            tracing::debug!(tour_id = %item_id, "Removed from remote wishlist");
            return Ok(self.load_locked().await);
        }

        let mut state = self.local.read_state().await;
        if state.remove(item_id).is_applied() {
            self.local.write_state(&state).await;
            tracing::debug!(tour_id = %item_id, "Removed from local wishlist");
        }

        let (snapshot, _) = state.into_parts();
        Ok(snapshot.into_entries())
    }

    async fn load_locked(&self) -> Vec<WishlistEntry> {
        if !self.session.is_authenticated() {
            return self.local.read_snapshot().await.into_entries();
        }

        let snapshot = match self.fetch_remote().await {
            Some(snapshot) => snapshot,
            None => return self.local.read_snapshot().await.into_entries(),
        };

        let report = self.drain_locked().await;
        if report.pushed.is_empty() {
            return snapshot.into_entries();
        }

        // The drain changed the remote list; show what the service now holds
        match self.fetch_remote().await {
            Some(refreshed) => refreshed.into_entries(),
            None => self.local.read_snapshot().await.into_entries(),
        }
    }

    /// List the remote wishlist and mirror it into the device store.
    async fn fetch_remote(&self) -> Option<WishlistSnapshot> {
        match self.remote.list().await {
            Ok(records) => {
                let snapshot = WishlistSnapshot::from_remote(records);
                self.local.write_snapshot(&snapshot).await;
                tracing::debug!(items = snapshot.len(), "Mirrored remote wishlist");
                Some(snapshot)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Remote wishlist unavailable, using device copy");
                None
            }
        }
    }

    async fn drain_locked(&self) -> DrainReport {
        let mut report = DrainReport::default();
        if !self.session.is_authenticated() {
            return report;
        }

        let mut pending = self.local.read_pending().await;
        if pending.is_empty() {
            return report;
        }

        let mut queue = pending.take_all().into_iter();
        while let Some(item_id) = queue.next() {
            match self.remote.add(&item_id).await {
                Ok(_) => report.pushed.push(item_id),
                Err(RemoteError::Unauthenticated) => {
                    // Signed out mid-drain
                    report.deferred.push(item_id);
                    report.deferred.extend(queue.by_ref());
                }
                Err(e) => {
                    tracing::warn!(tour_id = %item_id, error = %e, "Dropping wishlist item that failed to sync");
                    report.failed.push(item_id);
                }
            }
        }

        if report.deferred.is_empty() {
            self.local.clear_pending().await;
        } else {
            self.keep_on_device(&report).await;
        }

        tracing::info!(
            pushed = report.pushed.len(),
            failed = report.failed.len(),
            deferred = report.deferred.len(),
            "Drained pending wishlist sync"
        );

        report
    }

    /// Restore an interrupted drain on the device: pushed and deferred tours
    /// stay visible, deferred ones stay pending.
    async fn keep_on_device(&self, report: &DrainReport) {
        let mut snapshot = self.local.read_snapshot().await;
        let mut pending = PendingSyncSet::new();

        for item_id in report.pushed.iter().chain(&report.deferred) {
            if !snapshot.contains(item_id) {
                if let Ok(entry) = WishlistEntry::local(item_id.as_str(), self.clock.now()) {
                    snapshot.insert(entry);
                }
            }
        }
        for item_id in &report.deferred {
            pending.insert(item_id.as_str());
        }

        self.local.write_snapshot(&snapshot).await;
        self.local.write_pending(&pending).await;
        tracing::debug!(deferred = pending.len(), "Session ended during drain, kept remaining tours");
    }
}
