use near_sdk::store::LookupMap;
use near_sdk::{AccountId, CryptoHash, near};

use super::EntitlementStrategy;
use crate::DropError;
use crate::digest::account_leaf;
use crate::storage::StorageKey;

/// One presale mint per allowlisted account. Flags only ever go false -> true.
#[near(serializers = [borsh])]
pub struct MintedFlags {
    minted: LookupMap<AccountId, bool>,
}

impl MintedFlags {
    pub fn new() -> Self {
        Self {
            minted: LookupMap::new(StorageKey::MintedFlags),
        }
    }

    pub fn has_minted(&self, account_id: &AccountId) -> bool {
        self.minted.get(account_id).copied().unwrap_or(false)
    }
}

impl Default for MintedFlags {
    fn default() -> Self {
        Self::new()
    }
}

impl EntitlementStrategy for MintedFlags {
    type Slot = ();

    const NAME: &'static str = "address";

    fn leaf(account_id: &AccountId, _slot: &()) -> CryptoHash {
        account_leaf(account_id)
    }

    fn is_consumed(&self, account_id: &AccountId, _slot: &()) -> bool {
        self.has_minted(account_id)
    }

    fn consume(&mut self, account_id: &AccountId, _slot: &()) -> Result<(), DropError> {
        if self.has_minted(account_id) {
            return Err(DropError::AlreadyMinted);
        }
        self.minted.insert(account_id.clone(), true);
        Ok(())
    }
}
