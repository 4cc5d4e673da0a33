//! `medledger-contracts` — patient basic-info and medical-record contracts.
//!
//! This crate implements thin contract services over an injected
//! `StateStore`: save a record under a key, query the current record, and
//! replay every stored version of a key. All consistency guarantees come
//! from the store.
//!
//! ## Architecture
//!
//! - [`contract::RecordContract`] — generic save/query/history over one record type
//! - [`basic_info::BasicInfoContract`] — patient basic info
//! - [`medical_record::MedicalRecordContract`] — medical records with history
//! - [`chaincode`] — named chaincodes dispatching string-argument invocations
//! - [`validation`] — argument checks for the invocation surface

pub mod error;
pub mod config;
pub mod contract;
pub mod basic_info;
pub mod medical_record;
pub mod validation;
pub mod chaincode;

// Re-export key types for convenience
pub use error::{ContractError, ContractResult};
pub use config::{ContractConfig, DecodePolicy};
pub use contract::RecordContract;
pub use basic_info::BasicInfoContract;
pub use medical_record::MedicalRecordContract;
pub use chaincode::{BasicInfoChaincode, Chaincode, RecordInfoChaincode};
