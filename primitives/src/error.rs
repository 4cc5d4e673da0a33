//! Error codes and record codec errors for the MedLedger state layer.
//!
//! `ErrorCode` is the numeric table carried in invocation responses.
//! Every error type in the workspace maps onto exactly one code.

use std::fmt;

/// Invocation error codes.
///
/// `0` = OK, non-zero = error. The repr values are part of the response
/// format and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorCode {
    Ok = 0,
    NotFound = 1,
    StoreUnavailable = 2,
    Serialization = 3,
    MalformedRecord = 4,
    UnknownFunction = 5,
    InvalidArguments = 6,
    Internal = 10,
}

impl ErrorCode {
    /// Convert from an i32 error code.
    pub fn from_i32(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Ok),
            1 => Some(Self::NotFound),
            2 => Some(Self::StoreUnavailable),
            3 => Some(Self::Serialization),
            4 => Some(Self::MalformedRecord),
            5 => Some(Self::UnknownFunction),
            6 => Some(Self::InvalidArguments),
            10 => Some(Self::Internal),
            _ => None,
        }
    }

    /// Return the i32 representation of this error code.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Returns true if this is the `Ok` variant.
    pub fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::NotFound => write!(f, "ERR_NOT_FOUND"),
            Self::StoreUnavailable => write!(f, "ERR_STORE_UNAVAILABLE"),
            Self::Serialization => write!(f, "ERR_SERIALIZATION"),
            Self::MalformedRecord => write!(f, "ERR_MALFORMED_RECORD"),
            Self::UnknownFunction => write!(f, "ERR_UNKNOWN_FUNCTION"),
            Self::InvalidArguments => write!(f, "ERR_INVALID_ARGUMENTS"),
            Self::Internal => write!(f, "ERR_INTERNAL"),
        }
    }
}

/// Record encode/decode failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// The record could not be encoded.
    #[error("failed to encode {kind}: {reason}")]
    Serialization { kind: &'static str, reason: String },

    /// Stored bytes do not describe a record of the expected shape.
    #[error("malformed {kind}: {reason}")]
    Malformed { kind: &'static str, reason: String },
}

impl RecordError {
    /// Code reported to callers for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Serialization { .. } => ErrorCode::Serialization,
            Self::Malformed { .. } => ErrorCode::MalformedRecord,
        }
    }
}
