//! Medical-record contract with per-key history.

use medledger_hostapi::StateStore;
use medledger_primitives::{HistoryResult, MedicalRecord, TxContext};

use crate::config::ContractConfig;
use crate::contract::RecordContract;
use crate::error::ContractResult;

/// Saves, queries, and replays `MedicalRecord` documents.
#[derive(Debug)]
pub struct MedicalRecordContract<S> {
    records: RecordContract<MedicalRecord, S>,
}

impl<S: StateStore> MedicalRecordContract<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, ContractConfig::default())
    }

    pub fn with_config(store: S, config: ContractConfig) -> Self {
        Self {
            records: RecordContract::with_config(store, config),
        }
    }

    /// The underlying generic contract.
    pub fn records(&self) -> &RecordContract<MedicalRecord, S> {
        &self.records
    }

    pub fn init_ledger(&self, ctx: &TxContext) -> ContractResult<()> {
        self.records.init_ledger(ctx)
    }

    /// Store a medical record under `key`. Drug order is preserved.
    pub fn save(
        &self,
        ctx: &TxContext,
        key: &str,
        sick_name: &str,
        drug_names: Vec<String>,
        identity: &str,
    ) -> ContractResult<()> {
        self.records
            .save(ctx, key, &MedicalRecord::new(identity, sick_name, drug_names))
    }

    pub fn query(&self, ctx: &TxContext, key: &str) -> ContractResult<MedicalRecord> {
        self.records.query(ctx, key)
    }

    /// Every saved version of `key`; empty if it was never saved.
    pub fn query_history(&self, ctx: &TxContext, key: &str) -> ContractResult<HistoryResult> {
        self.records.query_history(ctx, key).map(HistoryResult::from)
    }
}
