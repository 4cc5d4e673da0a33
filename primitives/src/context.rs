//! Transaction context passed into every contract and store write.
//!
//! The ledger platform supplies identity and invocation metadata per
//! transaction. MedLedger models it as an explicit value rather than
//! ambient state, so services can be driven directly in tests.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::crypto::{compute_tx_id, random_nonce};
use crate::types::{Timestamp, TxId};

/// Identity and metadata of the invoking transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxContext {
    /// Channel the transaction was submitted on.
    pub channel_id: String,
    /// Platform transaction id, `hex(sha256(nonce || creator))`.
    pub tx_id: TxId,
    /// MSP the creator belongs to.
    pub creator_msp: String,
    /// Creator identity within the MSP.
    pub creator: String,
    /// Proposal time, seconds since the Unix epoch.
    pub timestamp: Timestamp,
}

impl TxContext {
    /// Create a context with a fresh random nonce and the current time.
    pub fn new(channel_id: &str, creator_msp: &str, creator: &str) -> Self {
        Self::with_nonce(channel_id, creator_msp, creator, &random_nonce())
            .with_timestamp(now_secs())
    }

    /// Create a context whose tx id is derived from the given nonce.
    ///
    /// The timestamp is left at zero.
    pub fn with_nonce(channel_id: &str, creator_msp: &str, creator: &str, nonce: &[u8]) -> Self {
        let mut ctx = Self {
            channel_id: channel_id.to_owned(),
            tx_id: TxId::new(),
            creator_msp: creator_msp.to_owned(),
            creator: creator.to_owned(),
            timestamp: 0,
        };
        ctx.tx_id = compute_tx_id(nonce, ctx.creator_id().as_bytes());
        ctx
    }

    /// Replace the proposal timestamp.
    pub fn with_timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// `msp/creator`, the form mixed into the tx id.
    pub fn creator_id(&self) -> String {
        format!("{}/{}", self.creator_msp, self.creator)
    }
}

fn now_secs() -> Timestamp {
    // A clock before the epoch is reported as zero.
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
