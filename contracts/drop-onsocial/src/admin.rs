use near_contract_standards::non_fungible_token::NonFungibleToken;
use near_contract_standards::non_fungible_token::metadata::{NFT_METADATA_SPEC, NFTContractMetadata};
use near_sdk::json_types::Base58CryptoHash;

use crate::*;

fn default_metadata(base_uri: &str) -> NFTContractMetadata {
    NFTContractMetadata {
        spec: NFT_METADATA_SPEC.to_string(),
        name: DEFAULT_NAME.to_string(),
        symbol: DEFAULT_SYMBOL.to_string(),
        icon: None,
        base_uri: Some(base_uri.to_string()),
        reference: None,
        reference_hash: None,
    }
}

#[near]
impl Contract {
    /// `allowlist_root` is fixed for the life of the contract.
    #[init]
    pub fn new(
        owner_id: AccountId,
        allowlist_root: Base58CryptoHash,
        base_uri: String,
        placeholder_uri: String,
        metadata: Option<NFTContractMetadata>,
    ) -> Self {
        require!(!base_uri.is_empty(), "Base URI cannot be empty");
        require!(!placeholder_uri.is_empty(), "Placeholder URI cannot be empty");
        let metadata = metadata.unwrap_or_else(|| default_metadata(&base_uri));
        metadata.assert_valid();

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            tokens: NonFungibleToken::new(
                StorageKey::TokenOwners,
                owner_id.clone(),
                None::<StorageKey>,
                Some(StorageKey::TokenEnumeration),
                Some(StorageKey::TokenApprovals),
            ),
            metadata,
            owner_id,
            allowlist_root: allowlist_root.into(),
            sale: SaleState::new(),
            minted_flags: MintedFlags::new(),
            claim_bitmap: ClaimBitmap::all_claimable(PRESALE_SUPPLY),
            commitment: Commitment::default(),
            base_uri,
            placeholder_uri,
            pull_balances: LookupMap::new(StorageKey::PullBalances),
        }
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), DropError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(DropError::InvalidInput(
                "New owner must differ from current owner".to_string(),
            ));
        }
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner;
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}
