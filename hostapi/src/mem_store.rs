//! In-memory versioned state store for testing.
//!
//! `MemStore` implements `StateStore` using a `BTreeMap` from key to the
//! full list of versions written to it. The current value is the last
//! version unless that version is a deletion. History is served from a
//! snapshot taken when the iterator is opened.
//!
//! Failures can be injected one operation at a time with
//! [`MemStore::fail_next`], and [`MemStore::open_iterators`] reports
//! history iterators that were never closed.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use medledger_primitives::TxContext;
use parking_lot::{Mutex, RwLock};

use crate::error::StoreError;
use crate::history::{HistoryIterator, KeyModification};
use crate::state_store::StateStore;
use crate::types::StoreConfig;

/// Store operations that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    Get,
    Put,
    History,
    HistoryNext,
    Close,
}

/// Pending one-shot failures.
#[derive(Debug, Default)]
struct FaultPlan {
    pending: Mutex<Vec<StoreOp>>,
}

impl FaultPlan {
    fn arm(&self, op: StoreOp) {
        self.pending.lock().push(op);
    }

    /// Consume a pending failure for `op`, if any.
    fn trip(&self, op: StoreOp) -> Result<(), StoreError> {
        let mut pending = self.pending.lock();
        if let Some(idx) = pending.iter().position(|armed| *armed == op) {
            pending.remove(idx);
            return Err(StoreError::unavailable(format!("injected {:?} failure", op)));
        }
        Ok(())
    }
}

/// In-memory versioned store backed by `BTreeMap`.
#[derive(Debug, Default)]
pub struct MemStore {
    config: StoreConfig,
    data: RwLock<BTreeMap<String, Vec<KeyModification>>>,
    faults: Arc<FaultPlan>,
    open_iterators: Arc<AtomicUsize>,
}

impl MemStore {
    /// Create a new empty store with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with custom limits.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Create a store pre-populated with data, one version per key.
    pub fn with_data(data: BTreeMap<String, Vec<u8>>) -> Self {
        let store = Self::new();
        for (key, value) in data {
            store.insert(&key, value);
        }
        store
    }

    /// Append a raw version to a key, bypassing limits and faults.
    ///
    /// Seeded versions carry an empty tx id and a zero timestamp.
    pub fn insert(&self, key: &str, value: Vec<u8>) {
        self.data
            .write()
            .entry(key.to_owned())
            .or_default()
            .push(KeyModification {
                tx_id: String::new(),
                value,
                timestamp: 0,
                is_delete: false,
            });
    }

    /// Delete a key, recording a tombstone in its history.
    pub fn remove(&self, ctx: &TxContext, key: &str) -> Result<(), StoreError> {
        self.faults.trip(StoreOp::Put)?;
        if key.is_empty() {
            return Err(StoreError::EmptyKey);
        }
        self.data
            .write()
            .entry(key.to_owned())
            .or_default()
            .push(KeyModification {
                tx_id: ctx.tx_id.clone(),
                value: Vec::new(),
                timestamp: ctx.timestamp,
                is_delete: true,
            });
        Ok(())
    }

    /// Make the next call of `op` fail with `StoreError::Unavailable`.
    ///
    /// Arming the same op twice fails the next two calls.
    pub fn fail_next(&self, op: StoreOp) {
        self.faults.arm(op);
    }

    /// Number of history iterators opened but not yet closed.
    pub fn open_iterators(&self) -> usize {
        self.open_iterators.load(Ordering::SeqCst)
    }

    /// Number of versions ever written to a key, deletions included.
    pub fn version_count(&self, key: &str) -> usize {
        self.data.read().get(key).map_or(0, Vec::len)
    }

    /// Returns the number of keys with a current value.
    pub fn len(&self) -> usize {
        self.data
            .read()
            .values()
            .filter(|versions| is_live(versions))
            .count()
    }

    /// Returns true if no key has a current value.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn is_live(versions: &[KeyModification]) -> bool {
    versions.last().is_some_and(|latest| !latest.is_delete)
}

impl StateStore for MemStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        self.faults.trip(StoreOp::Get)?;
        let data = self.data.read();
        Ok(data
            .get(key)
            .and_then(|versions| versions.last())
            .filter(|latest| !latest.is_delete)
            .map(|latest| latest.value.clone()))
    }

    fn put(&self, ctx: &TxContext, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.faults.trip(StoreOp::Put)?;
        self.config.validate_write(key, value)?;
        self.data
            .write()
            .entry(key.to_owned())
            .or_default()
            .push(KeyModification {
                tx_id: ctx.tx_id.clone(),
                value: value.to_vec(),
                timestamp: ctx.timestamp,
                is_delete: false,
            });
        Ok(())
    }

    fn history_for_key(&self, key: &str) -> Result<Box<dyn HistoryIterator>, StoreError> {
        self.faults.trip(StoreOp::History)?;
        let snapshot = self.data.read().get(key).cloned().unwrap_or_default();
        self.open_iterators.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MemHistoryIter {
            entries: snapshot.into_iter(),
            faults: Arc::clone(&self.faults),
            open_iterators: Arc::clone(&self.open_iterators),
            closed: false,
        }))
    }

    /// Validates every write before applying any of them.
    fn put_batch(
        &self,
        ctx: &TxContext,
        writes: &BTreeMap<String, Vec<u8>>,
    ) -> Result<(), StoreError> {
        self.faults.trip(StoreOp::Put)?;
        for (key, value) in writes {
            self.config.validate_write(key, value)?;
        }
        let mut data = self.data.write();
        for (key, value) in writes {
            data.entry(key.clone()).or_default().push(KeyModification {
                tx_id: ctx.tx_id.clone(),
                value: value.clone(),
                timestamp: ctx.timestamp,
                is_delete: false,
            });
        }
        Ok(())
    }

    fn limits(&self) -> StoreConfig {
        self.config.clone()
    }
}

/// History iterator over a snapshot of one key's versions.
struct MemHistoryIter {
    entries: std::vec::IntoIter<KeyModification>,
    faults: Arc<FaultPlan>,
    open_iterators: Arc<AtomicUsize>,
    closed: bool,
}

impl Iterator for MemHistoryIter {
    type Item = Result<KeyModification, StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.closed {
            return None;
        }
        if let Err(err) = self.faults.trip(StoreOp::HistoryNext) {
            return Some(Err(err));
        }
        self.entries.next().map(Ok)
    }
}

impl HistoryIterator for MemHistoryIter {
    fn close(&mut self) -> Result<(), StoreError> {
        if self.closed {
            return Ok(());
        }
        // Released even when the close itself reports a failure.
        self.closed = true;
        self.open_iterators.fetch_sub(1, Ordering::SeqCst);
        self.faults.trip(StoreOp::Close)
    }
}
