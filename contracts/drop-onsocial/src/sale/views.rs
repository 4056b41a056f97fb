use near_sdk::json_types::{Base58CryptoHash, U128};

use crate::*;

#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct SaleInfo {
    pub stage: Stage,
    pub token_supply: u32,
    pub presale_supply: u32,
    pub max_supply: u32,
    pub remaining: u32,
    /// `None` once sold out.
    pub current_price: Option<U128>,
    pub presale_price: U128,
    pub public_sale_price: U128,
}

#[near]
impl Contract {
    pub fn get_sale_info(&self) -> SaleInfo {
        let stage = self.sale.stage();
        let token_supply = self.sale.token_supply();
        SaleInfo {
            stage,
            token_supply,
            presale_supply: PRESALE_SUPPLY,
            max_supply: MAX_SUPPLY,
            remaining: MAX_SUPPLY.saturating_sub(token_supply),
            current_price: stage.price().map(|p| U128(p.as_yoctonear())),
            presale_price: U128(PRESALE_PRICE.as_yoctonear()),
            public_sale_price: U128(PUBLIC_SALE_PRICE.as_yoctonear()),
        }
    }

    pub fn get_stage(&self) -> Stage {
        self.sale.stage()
    }

    pub fn get_token_supply(&self) -> u32 {
        self.sale.token_supply()
    }

    pub fn get_allowlist_root(&self) -> Base58CryptoHash {
        self.allowlist_root.into()
    }

    pub fn has_minted(&self, account_id: AccountId) -> bool {
        self.minted_flags.has_minted(&account_id)
    }

    /// `false` for claimed slots and for indices outside the presale range.
    pub fn is_slot_claimable(&self, index: u32) -> bool {
        self.claim_bitmap.is_claimable(index)
    }

    pub fn claimable_slot_count(&self) -> u32 {
        self.claim_bitmap.claimable_count()
    }
}
