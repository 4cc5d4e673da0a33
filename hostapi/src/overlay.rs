//! Transactional write buffer over a base store.
//!
//! `OverlayStore` buffers writes made during one transaction and makes
//! them visible to later reads within it. On success the buffered writes
//! are committed to the base store in one batch; dropping the overlay
//! discards them.
//!
//! History reads go straight to the base store: uncommitted writes are
//! not part of any key's history yet.

use std::collections::BTreeMap;

use medledger_primitives::TxContext;
use parking_lot::Mutex;

use crate::error::StoreError;
use crate::history::HistoryIterator;
use crate::state_store::StateStore;
use crate::types::StoreConfig;

/// Per-transaction write buffer layered over a base store.
#[derive(Debug)]
pub struct OverlayStore<S> {
    base: S,
    /// Buffered writes, sorted by key.
    writes: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl<S: StateStore> OverlayStore<S> {
    /// Create an empty overlay over `base`.
    pub fn new(base: S) -> Self {
        Self {
            base,
            writes: Mutex::new(BTreeMap::new()),
        }
    }

    /// The store this overlay commits into.
    pub fn base(&self) -> &S {
        &self.base
    }

    /// Commit all buffered writes to the base store under `ctx`.
    ///
    /// Returns the number of keys written.
    pub fn commit(self, ctx: &TxContext) -> Result<usize, StoreError> {
        let writes = self.writes.into_inner();
        if writes.is_empty() {
            return Ok(0);
        }
        self.base.put_batch(ctx, &writes)?;
        Ok(writes.len())
    }

    /// Returns the number of keys written in this overlay.
    pub fn len(&self) -> usize {
        self.writes.lock().len()
    }

    /// Returns true if no writes have been buffered.
    pub fn is_empty(&self) -> bool {
        self.writes.lock().is_empty()
    }
}

impl<S: StateStore> StateStore for OverlayStore<S> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        if let Some(value) = self.writes.lock().get(key) {
            return Ok(Some(value.clone()));
        }
        self.base.get(key)
    }

    fn put(&self, _ctx: &TxContext, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.base.limits().validate_write(key, value)?;
        self.writes.lock().insert(key.to_owned(), value.to_vec());
        Ok(())
    }

    fn history_for_key(&self, key: &str) -> Result<Box<dyn HistoryIterator>, StoreError> {
        self.base.history_for_key(key)
    }

    fn limits(&self) -> StoreConfig {
        self.base.limits()
    }
}
