//! JSON codec for persisted records.
//!
//! Records are stored as self-describing JSON objects. Encoding is
//! `serde_json`'s compact form with fields in declaration order, so the
//! same record always produces the same bytes.
//!
//! Decoding accepts only a top-level JSON object. Missing fields fall back
//! to their empty values and unknown fields are ignored, which keeps
//! documents written by older contract versions readable.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::RecordError;

/// A document type that can be persisted under a ledger key.
pub trait Record:
    Serialize + DeserializeOwned + Default + Clone + PartialEq + fmt::Debug + Send + Sync + 'static
{
    /// Short type name used in errors and logs.
    const KIND: &'static str;

    /// Serialize this record to its stored byte form.
    fn encode(&self) -> Result<Vec<u8>, RecordError> {
        encode(self)
    }

    /// Parse a record from stored bytes.
    fn decode(bytes: &[u8]) -> Result<Self, RecordError> {
        decode(bytes)
    }
}

/// Encode a record as compact JSON.
pub fn encode<R: Record>(record: &R) -> Result<Vec<u8>, RecordError> {
    serde_json::to_vec(record).map_err(|e| RecordError::Serialization {
        kind: R::KIND,
        reason: e.to_string(),
    })
}

/// Decode a record from JSON bytes.
///
/// Fails with `RecordError::Malformed` unless the bytes are a JSON object
/// whose fields have the expected types.
pub fn decode<R: Record>(bytes: &[u8]) -> Result<R, RecordError> {
    let malformed = |reason: String| RecordError::Malformed {
        kind: R::KIND,
        reason,
    };

    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| malformed(e.to_string()))?;
    // serde would also accept a positional array for a struct.
    if !value.is_object() {
        return Err(malformed(format!("expected a JSON object, found {}", json_kind(&value))));
    }
    serde_json::from_value(value).map_err(|e| malformed(e.to_string()))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::BasicInfo;

    #[test]
    fn test_encode_is_compact_and_ordered() {
        let info = BasicInfo::new("ID-001", "Alice", "555-0100");
        let bytes = encode(&info).unwrap();
        assert_eq!(
            bytes,
            br#"{"identity":"ID-001","name":"Alice","mobile":"555-0100"}"#
        );
    }

    #[test]
    fn test_decode_rejects_non_json() {
        let err = decode::<BasicInfo>(b"not json").unwrap_err();
        assert!(matches!(err, RecordError::Malformed { kind: "BasicInfo", .. }));
    }

    #[test]
    fn test_decode_rejects_array_form() {
        let err = decode::<BasicInfo>(br#"["ID-001","Alice","555-0100"]"#).unwrap_err();
        match err {
            RecordError::Malformed { reason, .. } => assert!(reason.contains("an array")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode_rejects_null_and_scalars() {
        assert!(decode::<BasicInfo>(b"null").is_err());
        assert!(decode::<BasicInfo>(b"42").is_err());
        assert!(decode::<BasicInfo>(br#""text""#).is_err());
    }

    #[test]
    fn test_decode_rejects_wrong_field_type() {
        let err = decode::<BasicInfo>(br#"{"identity":1,"name":"A","mobile":"m"}"#).unwrap_err();
        assert!(matches!(err, RecordError::Malformed { .. }));
    }

    #[test]
    fn test_decode_empty_input() {
        assert!(decode::<BasicInfo>(b"").is_err());
    }
}
