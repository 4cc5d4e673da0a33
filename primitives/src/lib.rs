//! `medledger-primitives` — foundational types for the MedLedger state layer.
//!
//! This crate provides the transaction context, error codes, hashing
//! helpers, and the record schemas shared by the store, the contract
//! services, and the client gateway.

pub mod types;
pub mod error;
pub mod crypto;
pub mod context;
pub mod codec;
pub mod records;

// Re-export commonly used types at the crate root for convenience.
pub use types::{Timestamp, TxId, MAX_KEY_LEN, MAX_VALUE_LEN, BASIC_INFO_CHAINCODE, RECORD_INFO_CHAINCODE};
pub use error::{ErrorCode, RecordError};
pub use context::TxContext;
pub use codec::Record;
pub use records::{BasicInfo, MedicalRecord, HistoryResult};
