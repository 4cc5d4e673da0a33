//! Generic record contract over one record type.
//!
//! `RecordContract<R, S>` maps domain operations onto a `StateStore`:
//!
//! - `save`: encode the record and write it under the key (full replace)
//! - `query`: read the key, fail with `NotFound` if absent, decode
//! - `query_history`: decode every stored version of the key, oldest first
//!
//! The contract adds no locking, versioning, or retries. Ordering and
//! isolation between calls come from the store.

use std::marker::PhantomData;

use medledger_hostapi::StateStore;
use medledger_primitives::{Record, RecordError, TxContext};
use tracing::{debug, info, warn};

use crate::config::{ContractConfig, DecodePolicy};
use crate::error::{ContractError, ContractResult};

/// Contract service for one record type over an injected store.
#[derive(Debug)]
pub struct RecordContract<R, S> {
    store: S,
    config: ContractConfig,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record, S: StateStore> RecordContract<R, S> {
    /// Create a contract with the default (strict) configuration.
    pub fn new(store: S) -> Self {
        Self::with_config(store, ContractConfig::default())
    }

    pub fn with_config(store: S, config: ContractConfig) -> Self {
        Self {
            store,
            config,
            _record: PhantomData,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &ContractConfig {
        &self.config
    }

    /// Lifecycle hook run when the chaincode is instantiated. Writes nothing.
    pub fn init_ledger(&self, ctx: &TxContext) -> ContractResult<()> {
        info!(tx_id = %ctx.tx_id, kind = R::KIND, "ledger initialized");
        Ok(())
    }

    /// Store `record` under `key`, replacing any current value.
    pub fn save(&self, ctx: &TxContext, key: &str, record: &R) -> ContractResult<()> {
        let bytes = record
            .encode()
            .map_err(|err| ContractError::Serialization(err.to_string()))?;
        debug!(tx_id = %ctx.tx_id, key, kind = R::KIND, bytes = bytes.len(), "saving record");
        self.store.put(ctx, key, &bytes)?;
        Ok(())
    }

    /// Read the current record under `key`.
    pub fn query(&self, ctx: &TxContext, key: &str) -> ContractResult<R> {
        debug!(tx_id = %ctx.tx_id, key, kind = R::KIND, "querying record");
        let bytes = self
            .store
            .get(key)?
            .ok_or_else(|| ContractError::NotFound { key: key.to_owned() })?;
        self.decode(key, &bytes)
    }

    /// Read every version of `key`, in the order the store reports them.
    ///
    /// Deletion markers carry no record and are skipped. A key that was
    /// never written yields an empty list. The history iterator is closed
    /// on every path out of this function.
    pub fn query_history(&self, ctx: &TxContext, key: &str) -> ContractResult<Vec<R>> {
        debug!(tx_id = %ctx.tx_id, key, kind = R::KIND, "querying history");
        let mut history = self.store.history_scope(key)?;

        let mut records = Vec::new();
        for modification in history.by_ref() {
            let modification = modification?;
            if modification.is_delete {
                continue;
            }
            records.push(self.decode(key, &modification.value)?);
        }
        history.close()?;

        debug!(tx_id = %ctx.tx_id, key, versions = records.len(), "history loaded");
        Ok(records)
    }

    fn decode(&self, key: &str, bytes: &[u8]) -> ContractResult<R> {
        match R::decode(bytes) {
            Ok(record) => Ok(record),
            Err(err) => match self.config.decode_policy {
                DecodePolicy::Strict => Err(malformed(key, err)),
                DecodePolicy::Lenient => {
                    warn!(key, kind = R::KIND, error = %err, "substituting empty record for malformed state");
                    Ok(R::default())
                }
            },
        }
    }
}

fn malformed(key: &str, err: RecordError) -> ContractError {
    let reason = match err {
        RecordError::Malformed { reason, .. } | RecordError::Serialization { reason, .. } => reason,
    };
    ContractError::MalformedRecord {
        key: key.to_owned(),
        reason,
    }
}
