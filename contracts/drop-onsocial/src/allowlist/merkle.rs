use near_sdk::CryptoHash;

use crate::MAX_PROOF_DEPTH;
use crate::digest::hash_pair;

/// Folds `proof` over `leaf` with sorted-pair hashing and compares to `root`.
pub fn verify(proof: &[CryptoHash], root: &CryptoHash, leaf: &CryptoHash) -> bool {
    if proof.len() > MAX_PROOF_DEPTH {
        return false;
    }
    let computed = proof
        .iter()
        .fold(*leaf, |node, sibling| hash_pair(&node, sibling));
    &computed == root
}
