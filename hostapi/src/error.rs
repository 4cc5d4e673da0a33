//! State store error type.
//!
//! Every `StoreError` reaches contract callers as
//! `ErrorCode::StoreUnavailable`; the variant keeps the detail for logs.

use medledger_primitives::ErrorCode;

/// Error returned by `StateStore` operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The backend could not serve the request.
    #[error("state store unavailable: {0}")]
    Unavailable(String),

    /// Keys must be non-empty.
    #[error("key must not be empty")]
    EmptyKey,

    /// Key exceeds `StoreConfig::max_key_len`.
    #[error("key is {len} bytes, limit is {max}")]
    KeyTooLarge { len: usize, max: usize },

    /// Value exceeds `StoreConfig::max_value_len`.
    #[error("value is {len} bytes, limit is {max}")]
    ValueTooLarge { len: usize, max: usize },
}

impl StoreError {
    /// Create an unavailable error with a message.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Code reported to contract callers.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::StoreUnavailable
    }

    /// Whether the same write can succeed on retry.
    ///
    /// Limit violations share the outage code but fail again every time.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_variants_map_to_store_unavailable() {
        let cases = [
            StoreError::unavailable("peer down"),
            StoreError::EmptyKey,
            StoreError::KeyTooLarge { len: 300, max: 256 },
            StoreError::ValueTooLarge { len: 70_000, max: 65_536 },
        ];
        for err in cases {
            assert_eq!(err.code(), ErrorCode::StoreUnavailable);
        }
    }

    #[test]
    fn test_only_outages_are_retryable() {
        assert!(StoreError::unavailable("peer down").is_retryable());
        assert!(!StoreError::EmptyKey.is_retryable());
        assert!(!StoreError::KeyTooLarge { len: 300, max: 256 }.is_retryable());
        assert!(!StoreError::ValueTooLarge { len: 70_000, max: 65_536 }.is_retryable());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            StoreError::unavailable("disk full").to_string(),
            "state store unavailable: disk full"
        );
        assert_eq!(
            StoreError::KeyTooLarge { len: 300, max: 256 }.to_string(),
            "key is 300 bytes, limit is 256"
        );
    }
}
