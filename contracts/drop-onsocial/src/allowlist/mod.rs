//! Presale allowlist accounting.
//!
//! Both strategies check inclusion against the same immutable Merkle root and
//! differ only in how a leaf is built and how consumption is recorded. Supply
//! and stage live in `SaleState`, outside the strategies, so both draw from
//! the same presale capacity.

mod bitmap;
mod flags;
pub mod merkle;

pub use bitmap::ClaimBitmap;
pub use flags::MintedFlags;

use near_sdk::{AccountId, CryptoHash};

use crate::DropError;

pub trait EntitlementStrategy {
    /// Extra allowlist coordinate beyond the account (unit for per-address, slot index for bitmap).
    type Slot;

    const NAME: &'static str;

    fn leaf(account_id: &AccountId, slot: &Self::Slot) -> CryptoHash;

    fn admits(&self, _slot: &Self::Slot) -> bool {
        true
    }

    fn is_consumed(&self, account_id: &AccountId, slot: &Self::Slot) -> bool;

    fn consume(&mut self, account_id: &AccountId, slot: &Self::Slot) -> Result<(), DropError>;
}

/// Verify, then check, then consume. Consumption is persisted before the
/// caller issues the token.
pub fn redeem<S: EntitlementStrategy>(
    strategy: &mut S,
    root: &CryptoHash,
    account_id: &AccountId,
    slot: &S::Slot,
    proof: &[CryptoHash],
) -> Result<(), DropError> {
    if !strategy.admits(slot) {
        return Err(DropError::NotEligible);
    }
    let leaf = S::leaf(account_id, slot);
    if !merkle::verify(proof, root, &leaf) {
        return Err(DropError::NotEligible);
    }
    if strategy.is_consumed(account_id, slot) {
        return Err(DropError::AlreadyMinted);
    }
    strategy.consume(account_id, slot)
}
