//! Shared test doubles for the wishlist client.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use wishlist_client::{
    Clock, LocalStore, LocalWishlist, MemoryStore, RemoteError, RemoteWishlist, SessionSignal,
    StorageError, UserIdentity, WishlistKeys, WishlistSynchronizer,
};
use wishlist_engine::{RemoteRecord, Timestamp};

fn offline() -> RemoteError {
    RemoteError::Status {
        status: 503,
        message: "offline".into(),
    }
}

/// In-memory remote wishlist with failure injection.
#[derive(Default)]
pub struct FakeRemote {
    state: Mutex<FakeState>,
}

#[derive(Default)]
struct FakeState {
    records: Vec<RemoteRecord>,
    next_id: u64,
    offline: bool,
    failing_adds: HashSet<String>,
    add_calls: Vec<String>,
    remove_calls: Vec<String>,
    list_calls: usize,
    session: Option<SessionSignal>,
    logout_after: Option<String>,
}

impl FakeState {
    fn check_session(&self) -> Result<(), RemoteError> {
        match &self.session {
            Some(session) if !session.is_authenticated() => Err(RemoteError::Unauthenticated),
            _ => Ok(()),
        }
    }
}

impl FakeRemote {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_tours(tours: &[&str]) -> Arc<Self> {
        let remote = Self::default();
        {
            let mut state = remote.state.lock().unwrap();
            for tour in tours {
                state.next_id += 1;
                let record = RemoteRecord::new(format!("rec-{}", state.next_id), *tour, 100);
                state.records.push(record);
            }
        }
        Arc::new(remote)
    }

    /// Every call fails while offline.
    pub fn set_offline(&self, offline: bool) {
        self.state.lock().unwrap().offline = offline;
    }

    /// Adds of this tour fail.
    pub fn fail_add(&self, tour_id: &str) {
        self.state
            .lock()
            .unwrap()
            .failing_adds
            .insert(tour_id.to_string());
    }

    /// Calls made while this session is signed out fail as unauthenticated.
    pub fn bind_session(&self, session: SessionSignal) {
        self.state.lock().unwrap().session = Some(session);
    }

    /// Sign the bound session out once this tour has been added.
    pub fn logout_after_add(&self, tour_id: &str) {
        self.state.lock().unwrap().logout_after = Some(tour_id.to_string());
    }

    pub fn tour_ids(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state.records.iter().map(|r| r.tour_id.clone()).collect()
    }

    pub fn add_calls(&self) -> Vec<String> {
        self.state.lock().unwrap().add_calls.clone()
    }

    pub fn remove_calls(&self) -> Vec<String> {
        self.state.lock().unwrap().remove_calls.clone()
    }

    pub fn list_calls(&self) -> usize {
        self.state.lock().unwrap().list_calls
    }
}

#[async_trait]
impl RemoteWishlist for FakeRemote {
    async fn list(&self) -> Result<Vec<RemoteRecord>, RemoteError> {
        let mut state = self.state.lock().unwrap();
        state.list_calls += 1;
        state.check_session()?;
        if state.offline {
            return Err(offline());
        }
        Ok(state.records.clone())
    }

    async fn add(&self, tour_id: &str) -> Result<RemoteRecord, RemoteError> {
        let mut state = self.state.lock().unwrap();
        state.add_calls.push(tour_id.to_string());
        state.check_session()?;
        if state.offline || state.failing_adds.contains(tour_id) {
            return Err(RemoteError::Status {
                status: 500,
                message: "add failed".into(),
            });
        }

        if let Some(existing) = state.records.iter().find(|r| r.tour_id == tour_id) {
            return Ok(existing.clone());
        }

        state.next_id += 1;
        let record = RemoteRecord::new(format!("rec-{}", state.next_id), tour_id, 1000);
        state.records.push(record.clone());

        if state.logout_after.as_deref() == Some(tour_id) {
            state.logout_after = None;
            if let Some(session) = &state.session {
                session.logout();
            }
        }
        Ok(record)
    }

    async fn remove(&self, tour_id: &str) -> Result<(), RemoteError> {
        let mut state = self.state.lock().unwrap();
        state.remove_calls.push(tour_id.to_string());
        state.check_session()?;
        if state.offline {
            return Err(offline());
        }
        state.records.retain(|r| r.tour_id != tour_id);
        Ok(())
    }
}

/// Store whose reads and writes can be made to fail.
#[derive(Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    fail_reads: std::sync::atomic::AtomicBool,
    fail_writes: std::sync::atomic::AtomicBool,
}

impl FlakyStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl LocalStore for FlakyStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("read failed".into()));
        }
        self.inner.get_item(key).await
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("disk full".into()));
        }
        self.inner.set_item(key, value).await
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("disk full".into()));
        }
        self.inner.remove_item(key).await
    }

    fn name(&self) -> &'static str {
        "flaky"
    }
}

/// Clock that advances one millisecond per call.
pub struct StepClock {
    next: AtomicU64,
}

impl StepClock {
    pub fn starting_at(start: Timestamp) -> Arc<Self> {
        Arc::new(Self {
            next: AtomicU64::new(start),
        })
    }
}

impl Clock for StepClock {
    fn now(&self) -> Timestamp {
        self.next.fetch_add(1, Ordering::SeqCst)
    }
}

/// Everything a synchronizer test needs.
pub struct Harness {
    pub store: Arc<dyn LocalStore>,
    pub local: LocalWishlist,
    pub remote: Arc<FakeRemote>,
    pub session: SessionSignal,
    pub sync: Arc<WishlistSynchronizer>,
}

impl Harness {
    pub fn new(remote: Arc<FakeRemote>) -> Self {
        Self::with_store(Arc::new(MemoryStore::new()), remote)
    }

    pub fn with_store(store: Arc<dyn LocalStore>, remote: Arc<FakeRemote>) -> Self {
        let session = SessionSignal::anonymous();
        let local = LocalWishlist::new(store.clone(), WishlistKeys::default());
        let sync = Arc::new(WishlistSynchronizer::with_clock(
            local.clone(),
            remote.clone(),
            session.clone(),
            StepClock::starting_at(1_706_745_600_000),
        ));

        Self {
            store,
            local,
            remote,
            session,
            sync,
        }
    }

    pub fn login(&self) {
        self.session.login(UserIdentity::new("user-1", "token-1"));
    }

    pub fn logout(&self) {
        self.session.logout();
    }

    pub async fn snapshot_ids(&self) -> Vec<String> {
        self.local
            .read_snapshot()
            .await
            .item_ids()
            .map(String::from)
            .collect()
    }

    pub async fn pending_ids(&self) -> Vec<String> {
        self.local
            .read_pending()
            .await
            .iter()
            .map(String::from)
            .collect()
    }
}

pub fn ids(items: &[wishlist_engine::WishlistEntry]) -> Vec<&str> {
    items.iter().map(|e| e.item_id.as_str()).collect()
}
