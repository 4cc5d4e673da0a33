//! Gateway error types.

use medledger_contracts::ContractError;
use medledger_hostapi::StoreError;
use medledger_primitives::ErrorCode;

/// Top-level error type for the gateway crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The chaincode rejected or failed the call.
    #[error("{0}")]
    Contract(#[from] ContractError),

    /// No chaincode is registered under this name.
    #[error("unknown chaincode: {0}")]
    UnknownChaincode(String),

    /// The chaincode succeeded but its writes could not be committed.
    #[error("commit failed: {0}")]
    Commit(#[from] StoreError),
}

impl GatewayError {
    /// Code reported to the client for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Contract(err) => err.code(),
            Self::UnknownChaincode(_) => ErrorCode::UnknownFunction,
            Self::Commit(err) => err.code(),
        }
    }

    /// Whether resubmitting the same call unchanged can succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Contract(err) => err.is_retryable(),
            Self::UnknownChaincode(_) => false,
            Self::Commit(err) => err.is_retryable(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_pass_through() {
        let not_found: GatewayError = ContractError::NotFound { key: "p1".into() }.into();
        assert_eq!(not_found.code(), ErrorCode::NotFound);
        assert_eq!(not_found.to_string(), "p1 does not exist");

        let commit: GatewayError = StoreError::unavailable("peer down").into();
        assert_eq!(commit.code(), ErrorCode::StoreUnavailable);

        assert_eq!(
            GatewayError::UnknownChaincode("fabcar".into()).code(),
            ErrorCode::UnknownFunction
        );
    }

    #[test]
    fn test_retryable_follows_store_variant() {
        let outage: GatewayError = StoreError::unavailable("peer down").into();
        assert!(outage.is_retryable());

        let oversized: GatewayError = StoreError::KeyTooLarge { len: 300, max: 256 }.into();
        assert_eq!(oversized.code(), ErrorCode::StoreUnavailable);
        assert!(!oversized.is_retryable());

        let wrapped: GatewayError = ContractError::Store(StoreError::EmptyKey).into();
        assert!(!wrapped.is_retryable());
        assert!(!GatewayError::UnknownChaincode("fabcar".into()).is_retryable());
    }
}
