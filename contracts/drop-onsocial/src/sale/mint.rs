use near_contract_standards::non_fungible_token::TokenId;
use near_contract_standards::non_fungible_token::events::NftMint;
use near_sdk::json_types::Base58CryptoHash;

use crate::allowlist::{self, ClaimBitmap, EntitlementStrategy, MintedFlags};
use crate::*;

pub(crate) fn to_hashes(proof: Vec<Base58CryptoHash>) -> Vec<CryptoHash> {
    proof.into_iter().map(Into::into).collect()
}

#[near]
impl Contract {
    /// Presale mint against a per-account leaf. `leaf` must be the caller's own leaf.
    #[payable]
    #[handle_result]
    pub fn mint_presale(
        &mut self,
        proof: Vec<Base58CryptoHash>,
        leaf: Base58CryptoHash,
    ) -> Result<TokenId, DropError> {
        let actor_id = env::predecessor_account_id();
        self.internal_mint_presale(
            &actor_id,
            env::attached_deposit(),
            &to_hashes(proof),
            leaf.into(),
        )
    }

    /// Presale mint against an `(account, index)` leaf, consuming slot `index`.
    #[payable]
    #[handle_result]
    pub fn mint_presale_indexed(
        &mut self,
        proof: Vec<Base58CryptoHash>,
        index: u32,
    ) -> Result<TokenId, DropError> {
        let actor_id = env::predecessor_account_id();
        self.internal_mint_presale_indexed(
            &actor_id,
            env::attached_deposit(),
            &to_hashes(proof),
            index,
        )
    }

    #[payable]
    #[handle_result]
    pub fn mint_public(&mut self) -> Result<TokenId, DropError> {
        let actor_id = env::predecessor_account_id();
        self.internal_mint_public(&actor_id, env::attached_deposit())
    }
}

impl Contract {
    pub(crate) fn internal_mint_presale(
        &mut self,
        actor_id: &AccountId,
        attached: NearToken,
        proof: &[CryptoHash],
        leaf: CryptoHash,
    ) -> Result<TokenId, DropError> {
        self.sale.admit(Stage::Presale, attached)?;

        // Authorization boundary: a leaf is only usable by the account it was derived from.
        if leaf != MintedFlags::leaf(actor_id, &()) {
            return Err(DropError::NotEligible);
        }
        allowlist::redeem(
            &mut self.minted_flags,
            &self.allowlist_root,
            actor_id,
            &(),
            proof,
        )?;

        let token_id = self.issue(actor_id)?;
        events::emit_presale_mint(actor_id, &token_id, MintedFlags::NAME, None);
        Ok(token_id)
    }

    pub(crate) fn internal_mint_presale_indexed(
        &mut self,
        actor_id: &AccountId,
        attached: NearToken,
        proof: &[CryptoHash],
        index: u32,
    ) -> Result<TokenId, DropError> {
        self.sale.admit(Stage::Presale, attached)?;

        allowlist::redeem(
            &mut self.claim_bitmap,
            &self.allowlist_root,
            actor_id,
            &index,
            proof,
        )?;

        let token_id = self.issue(actor_id)?;
        events::emit_presale_mint(actor_id, &token_id, ClaimBitmap::NAME, Some(index));
        Ok(token_id)
    }

    pub(crate) fn internal_mint_public(
        &mut self,
        actor_id: &AccountId,
        attached: NearToken,
    ) -> Result<TokenId, DropError> {
        self.sale.admit(Stage::PublicSale, attached)?;

        let token_id = self.issue(actor_id)?;
        events::emit_public_mint(actor_id, &token_id, attached.as_yoctonear());
        Ok(token_id)
    }

    /// Advances the supply counter and mints the token it points at.
    fn issue(&mut self, receiver_id: &AccountId) -> Result<TokenId, DropError> {
        let slot = self.sale.record_mint()?;
        let token_id = slot.index.to_string();

        self.tokens
            .internal_mint_with_refund(token_id.clone(), receiver_id.clone(), None, None);
        NftMint {
            owner_id: receiver_id,
            token_ids: &[token_id.as_str()],
            memo: None,
        }
        .emit();

        if let Some(from) = slot.advanced_from {
            events::emit_stage_advanced(
                receiver_id,
                from,
                self.sale.stage(),
                self.sale.token_supply(),
            );
        }
        Ok(token_id)
    }
}
