//! Contract service error type.

use medledger_hostapi::StoreError;
use medledger_primitives::ErrorCode;

/// Error returned by contract operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    /// Query on a key with no current value.
    #[error("{key} does not exist")]
    NotFound { key: String },

    /// The state store failed; surfaced as-is, never retried here.
    #[error("failed to access world state: {0}")]
    Store(#[from] StoreError),

    /// A record or response could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Stored bytes under `key` are not a valid record.
    #[error("malformed record under {key}: {reason}")]
    MalformedRecord { key: String, reason: String },

    /// The chaincode has no function by this name.
    #[error("{chaincode} has no function {function}")]
    UnknownFunction { chaincode: String, function: String },

    /// Wrong argument count or an unparsable argument.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
}

impl ContractError {
    /// Code reported to callers for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound { .. } => ErrorCode::NotFound,
            Self::Store(err) => err.code(),
            Self::Serialization(_) => ErrorCode::Serialization,
            Self::MalformedRecord { .. } => ErrorCode::MalformedRecord,
            Self::UnknownFunction { .. } => ErrorCode::UnknownFunction,
            Self::InvalidArguments(_) => ErrorCode::InvalidArguments,
        }
    }

    /// Whether retrying the same call unchanged can succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Store(err) => err.is_retryable(),
            _ => false,
        }
    }
}

/// Convenience result type for contract operations.
pub type ContractResult<T> = Result<T, ContractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        let cases = [
            (ContractError::NotFound { key: "p1".into() }, ErrorCode::NotFound),
            (StoreError::EmptyKey.into(), ErrorCode::StoreUnavailable),
            (ContractError::Serialization("x".into()), ErrorCode::Serialization),
            (
                ContractError::MalformedRecord { key: "p1".into(), reason: "x".into() },
                ErrorCode::MalformedRecord,
            ),
            (
                ContractError::UnknownFunction { chaincode: "c".into(), function: "f".into() },
                ErrorCode::UnknownFunction,
            ),
            (ContractError::InvalidArguments("x".into()), ErrorCode::InvalidArguments),
        ];
        for (err, code) in cases {
            assert_eq!(err.code(), code);
        }
    }

    #[test]
    fn test_not_found_message_names_key() {
        let err = ContractError::NotFound { key: "p1".into() };
        assert_eq!(err.to_string(), "p1 does not exist");
    }

    #[test]
    fn test_store_error_is_wrapped_verbatim() {
        let err: ContractError = StoreError::unavailable("peer down").into();
        assert_eq!(err, ContractError::Store(StoreError::unavailable("peer down")));
        assert!(err.to_string().contains("peer down"));
    }
}
