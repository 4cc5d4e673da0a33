//! Core type aliases and constants for the MedLedger state layer.
//!
//! These types are used across the store, contract services, and gateway.

/// Transaction identifier as assigned by the ledger platform (hex string).
pub type TxId = String;

/// Seconds since the Unix epoch.
pub type Timestamp = u64;

/// Maximum key length accepted by the state store, in bytes.
pub const MAX_KEY_LEN: usize = 256;

/// Maximum value length accepted by the state store, in bytes.
pub const MAX_VALUE_LEN: usize = 65_536; // 64 KiB

/// Length of the random nonce mixed into a transaction id.
pub const NONCE_LEN: usize = 24;

/// Chaincode name of the patient basic-info contract.
pub const BASIC_INFO_CHAINCODE: &str = "hospital_basicInfo";

/// Chaincode name of the medical-record contract.
pub const RECORD_INFO_CHAINCODE: &str = "hospital_recordInfo";

/// Lowercase hex encoding without a prefix.
pub fn to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        use std::fmt::Write;
        let _ = write!(s, "{:02x}", byte);
    }
    s
}

/// Concatenate byte slices into a single Vec.
pub fn concat_bytes(slices: &[&[u8]]) -> Vec<u8> {
    let total: usize = slices.iter().map(|s| s.len()).sum();
    let mut out = Vec::with_capacity(total);
    for s in slices {
        out.extend_from_slice(s);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(&[0x00, 0xab, 0xff]), "00abff");
        assert_eq!(to_hex(&[]), "");
        assert_eq!(to_hex(&[0xab; 32]).len(), 64);
    }

    #[test]
    fn test_concat_bytes() {
        let result = concat_bytes(&[b"hello", b" ", b"world"]);
        assert_eq!(result, b"hello world");
    }

    #[test]
    fn test_chaincode_names() {
        assert_eq!(BASIC_INFO_CHAINCODE, "hospital_basicInfo");
        assert_eq!(RECORD_INFO_CHAINCODE, "hospital_recordInfo");
    }
}
