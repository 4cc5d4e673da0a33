//! Shared test helpers for gateway integration tests.
//!
//! Provides argument builders and gateway factories over an in-memory
//! store used across all integration test files.

#![allow(dead_code)]

use std::sync::Arc;

use medledger_gateway::{CacheConfig, Gateway, GatewayConfig};
use medledger_hostapi::MemStore;

pub use medledger_primitives::{BASIC_INFO_CHAINCODE as BASIC, RECORD_INFO_CHAINCODE as RECORD};

// ── Arguments ──

pub fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Arguments for `hospital_basicInfo` `Save`.
pub fn basic_save(key: &str, name: &str) -> Vec<String> {
    args(&[key, name, "555-0100", "ID-001"])
}

/// Arguments for `hospital_recordInfo` `Save` with `drugs` as a JSON array.
pub fn record_save(key: &str, sick_name: &str, drugs: &[&str]) -> Vec<String> {
    let list = serde_json::to_string(drugs).unwrap();
    args(&[key, sick_name, &list, "ID-001"])
}

// ── Gateways ──

/// Gateway over a fresh `MemStore` with the hospital chaincodes.
pub fn gateway(config: GatewayConfig) -> (Arc<MemStore>, Gateway) {
    let store = Arc::new(MemStore::new());
    let gateway = Gateway::with_default_chaincodes(store.clone(), config);
    (store, gateway)
}

pub fn uncached() -> (Arc<MemStore>, Gateway) {
    gateway(GatewayConfig::default())
}

pub fn cached(max_entries: usize) -> (Arc<MemStore>, Gateway) {
    gateway(GatewayConfig {
        cache: CacheConfig {
            enabled: true,
            max_entries,
        },
        ..GatewayConfig::default()
    })
}
