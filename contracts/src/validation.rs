//! Argument validation for string-encoded invocations.
//!
//! The invocation surface passes every argument as a string. These
//! helpers check argument counts and decode structured arguments before
//! a contract operation runs. Field contents are never validated.

use serde::Serialize;

use crate::error::{ContractError, ContractResult};

/// Require exactly `expected` arguments for `function`.
pub fn expect_arity(function: &str, args: &[String], expected: usize) -> ContractResult<()> {
    if args.len() != expected {
        return Err(ContractError::InvalidArguments(format!(
            "{} expects {} argument(s), got {}",
            function,
            expected,
            args.len()
        )));
    }
    Ok(())
}

/// Decode a JSON array of strings, e.g. `["Paracetamol","Ibuprofen"]`.
pub fn parse_string_list(name: &str, raw: &str) -> ContractResult<Vec<String>> {
    serde_json::from_str(raw).map_err(|e| {
        ContractError::InvalidArguments(format!("{} must be a JSON array of strings: {}", name, e))
    })
}

/// Encode a query result as the response payload.
pub fn to_payload<T: Serialize>(value: &T) -> ContractResult<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| ContractError::Serialization(e.to_string()))
}
