//! Patient basic-info contract.

use medledger_hostapi::StateStore;
use medledger_primitives::{BasicInfo, TxContext};

use crate::config::ContractConfig;
use crate::contract::RecordContract;
use crate::error::ContractResult;

/// Saves and queries `BasicInfo` records.
#[derive(Debug)]
pub struct BasicInfoContract<S> {
    records: RecordContract<BasicInfo, S>,
}

impl<S: StateStore> BasicInfoContract<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, ContractConfig::default())
    }

    pub fn with_config(store: S, config: ContractConfig) -> Self {
        Self {
            records: RecordContract::with_config(store, config),
        }
    }

    /// The underlying generic contract.
    pub fn records(&self) -> &RecordContract<BasicInfo, S> {
        &self.records
    }

    pub fn init_ledger(&self, ctx: &TxContext) -> ContractResult<()> {
        self.records.init_ledger(ctx)
    }

    /// Store a patient's basic info under `key`.
    ///
    /// Field contents are not validated; empty strings are stored as-is.
    pub fn save(
        &self,
        ctx: &TxContext,
        key: &str,
        name: &str,
        mobile: &str,
        identity: &str,
    ) -> ContractResult<()> {
        self.records.save(ctx, key, &BasicInfo::new(identity, name, mobile))
    }

    pub fn query(&self, ctx: &TxContext, key: &str) -> ContractResult<BasicInfo> {
        self.records.query(ctx, key)
    }
}
