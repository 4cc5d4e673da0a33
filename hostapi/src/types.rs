//! Store configuration types.
//!
//! `StoreConfig` bundles the size limits a store enforces on writes.

use medledger_primitives::{MAX_KEY_LEN, MAX_VALUE_LEN};
use serde::Deserialize;

use crate::error::StoreError;

/// Write limits enforced by a state store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Maximum length of a key in bytes.
    pub max_key_len: usize,
    /// Maximum length of a value in bytes.
    pub max_value_len: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_key_len: MAX_KEY_LEN,
            max_value_len: MAX_VALUE_LEN,
        }
    }
}

impl StoreConfig {
    /// Check a key/value pair against these limits.
    pub fn validate_write(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        if key.is_empty() {
            return Err(StoreError::EmptyKey);
        }
        if key.len() > self.max_key_len {
            return Err(StoreError::KeyTooLarge {
                len: key.len(),
                max: self.max_key_len,
            });
        }
        if value.len() > self.max_value_len {
            return Err(StoreError::ValueTooLarge {
                len: value.len(),
                max: self.max_value_len,
            });
        }
        Ok(())
    }
}
