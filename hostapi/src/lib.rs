//! `medledger-hostapi` — state store capability for the MedLedger contracts.
//!
//! This crate defines the world-state interface the contract services are
//! written against. It provides:
//!
//! - `StateStore` trait — current-value reads, stamped writes, key history
//! - `HistoryIterator` / `HistoryScope` — single-pass history with scoped close
//! - `MemStore` — in-memory versioned `StateStore` with fault injection
//! - `OverlayStore` — per-transaction write buffer over a base store
//! - `StoreConfig` — key and value size limits
//! - `StoreError` — store-side error type
//!
//! This crate depends on `medledger-primitives` for the transaction
//! context and error codes.

pub mod error;
pub mod types;
pub mod history;
pub mod state_store;
pub mod mem_store;
pub mod overlay;

// Re-export commonly used types at the crate root.
pub use error::StoreError;
pub use types::StoreConfig;
pub use history::{HistoryIterator, HistoryScope, KeyModification};
pub use state_store::StateStore;
pub use mem_store::{MemStore, StoreOp};
pub use overlay::OverlayStore;
