//! Hashing helpers for transaction identifiers.
//!
//! The ledger platform names a transaction by `sha256(nonce || creator)`.

use sha2::Digest;

use crate::types::{concat_bytes, to_hex, NONCE_LEN};

/// Compute SHA-256 hash of the input data.
pub fn hash_sha256(data: &[u8]) -> [u8; 32] {
    let result = sha2::Sha256::digest(data);
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// Derive the hex transaction id for a nonce and serialized creator.
pub fn compute_tx_id(nonce: &[u8], creator: &[u8]) -> String {
    to_hex(&hash_sha256(&concat_bytes(&[nonce, creator])))
}

/// Draw a fresh random nonce.
pub fn random_nonce() -> [u8; NONCE_LEN] {
    use rand::RngCore;
    let mut nonce = [0u8; NONCE_LEN];
    rand::thread_rng().fill_bytes(&mut nonce);
    nonce
}
