//! Versioned state storage abstraction.
//!
//! `StateStore` is the capability the contract services are written
//! against: current-value reads, writes stamped with the writing
//! transaction, and per-key history. Ordering, isolation, and conflict
//! resolution belong to the implementation.
//!
//! Implementations:
//! - `MemStore` (this crate) — in-memory versioned map for testing
//! - `OverlayStore` (this crate) — per-transaction write buffer over a base store

use std::collections::BTreeMap;
use std::sync::Arc;

use medledger_primitives::TxContext;

use crate::error::StoreError;
use crate::history::{HistoryIterator, HistoryScope};
use crate::types::StoreConfig;

/// Abstraction over the ledger world state.
pub trait StateStore: Send + Sync {
    /// Get the current value for a key.
    ///
    /// Returns `Ok(None)` if the key was never written or was deleted.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write a value, replacing the current one.
    ///
    /// The write is recorded in the key's history under `ctx.tx_id`.
    fn put(&self, ctx: &TxContext, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Open a single-pass iterator over every version of a key.
    fn history_for_key(&self, key: &str) -> Result<Box<dyn HistoryIterator>, StoreError>;

    /// Write several keys on behalf of one transaction.
    ///
    /// The default writes one key at a time and stops at the first
    /// failure; backends that can apply a batch atomically should.
    fn put_batch(
        &self,
        ctx: &TxContext,
        writes: &BTreeMap<String, Vec<u8>>,
    ) -> Result<(), StoreError> {
        for (key, value) in writes {
            self.put(ctx, key, value)?;
        }
        Ok(())
    }

    /// Write limits this store enforces.
    fn limits(&self) -> StoreConfig {
        StoreConfig::default()
    }

    /// Check if a key currently has a value.
    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get(key)?.is_some())
    }

    /// Open a key's history wrapped in a `HistoryScope`.
    fn history_scope(&self, key: &str) -> Result<HistoryScope, StoreError> {
        Ok(HistoryScope::new(key, self.history_for_key(key)?))
    }
}

impl<T: StateStore + ?Sized> StateStore for &T {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get(key)
    }

    fn put(&self, ctx: &TxContext, key: &str, value: &[u8]) -> Result<(), StoreError> {
        (**self).put(ctx, key, value)
    }

    fn history_for_key(&self, key: &str) -> Result<Box<dyn HistoryIterator>, StoreError> {
        (**self).history_for_key(key)
    }

    fn put_batch(
        &self,
        ctx: &TxContext,
        writes: &BTreeMap<String, Vec<u8>>,
    ) -> Result<(), StoreError> {
        (**self).put_batch(ctx, writes)
    }

    fn limits(&self) -> StoreConfig {
        (**self).limits()
    }

    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        (**self).contains(key)
    }
}

impl<T: StateStore + ?Sized> StateStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get(key)
    }

    fn put(&self, ctx: &TxContext, key: &str, value: &[u8]) -> Result<(), StoreError> {
        (**self).put(ctx, key, value)
    }

    fn history_for_key(&self, key: &str) -> Result<Box<dyn HistoryIterator>, StoreError> {
        (**self).history_for_key(key)
    }

    fn put_batch(
        &self,
        ctx: &TxContext,
        writes: &BTreeMap<String, Vec<u8>>,
    ) -> Result<(), StoreError> {
        (**self).put_batch(ctx, writes)
    }

    fn limits(&self) -> StoreConfig {
        (**self).limits()
    }

    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        (**self).contains(key)
    }
}
