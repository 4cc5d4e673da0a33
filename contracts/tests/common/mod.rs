//! Shared test helpers for contract integration tests.
//!
//! Provides deterministic transaction contexts, store factories, and
//! record builders used across all integration test files.

#![allow(dead_code)]

use medledger_hostapi::MemStore;
use medledger_primitives::{MedicalRecord, TxContext};

pub const CHANNEL: &str = "mychannel";
pub const MSP: &str = "Org1MSP";

// ── Transaction Contexts ──

/// Deterministic context: the nonce is `[seed; 24]`, the timestamp is
/// `1_700_000_000 + seed`.
pub fn ctx(seed: u8) -> TxContext {
    TxContext::with_nonce(CHANNEL, MSP, "User1", &[seed; 24])
        .with_timestamp(1_700_000_000 + seed as u64)
}

/// Context for a different creator in the same organization.
pub fn ctx_for(creator: &str, seed: u8) -> TxContext {
    TxContext::with_nonce(CHANNEL, MSP, creator, &[seed; 24])
}

// ── Stores ──

/// Store holding one raw (possibly invalid) value under `key`.
pub fn store_with_raw(key: &str, value: &[u8]) -> MemStore {
    let store = MemStore::new();
    store.insert(key, value.to_vec());
    store
}

// ── Records ──

pub fn drugs(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

pub fn flu(names: &[&str]) -> MedicalRecord {
    MedicalRecord::new("ID-001", "Flu", drugs(names))
}
