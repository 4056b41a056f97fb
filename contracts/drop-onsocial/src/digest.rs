//! Leaf, node and commitment hashing. Every digest is host SHA-256 over a
//! fixed byte layout, so off-chain tooling can rebuild them byte for byte.

use near_sdk::{AccountId, CryptoHash, env};

pub fn account_leaf(account_id: &AccountId) -> CryptoHash {
    env::sha256_array(account_id.as_bytes())
}

/// `sha256(account_id ‖ index_be32)`
pub fn indexed_leaf(account_id: &AccountId, index: u32) -> CryptoHash {
    let mut buf = Vec::with_capacity(account_id.as_str().len() + 4);
    buf.extend_from_slice(account_id.as_bytes());
    buf.extend_from_slice(&index.to_be_bytes());
    env::sha256_array(&buf)
}

/// Order-independent parent: the smaller child is hashed first.
pub fn hash_pair(a: &CryptoHash, b: &CryptoHash) -> CryptoHash {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(lo);
    buf[32..].copy_from_slice(hi);
    env::sha256_array(&buf)
}

/// `sha256(shift_be32 ‖ salt)`
pub fn commitment(shift: u32, salt: &CryptoHash) -> CryptoHash {
    let mut buf = [0u8; 36];
    buf[..4].copy_from_slice(&shift.to_be_bytes());
    buf[4..].copy_from_slice(salt);
    env::sha256_array(&buf)
}
