use near_sdk::AccountId;

use super::SALE;
use super::builder::EventBuilder;
use crate::Stage;

pub fn emit_presale_mint(minter: &AccountId, token_id: &str, strategy: &str, slot: Option<u32>) {
    EventBuilder::new(SALE, "presale_mint", minter)
        .field("token_id", token_id)
        .field("strategy", strategy)
        .field_opt("slot", slot)
        .emit();
}

pub fn emit_public_mint(minter: &AccountId, token_id: &str, price: u128) {
    EventBuilder::new(SALE, "public_mint", minter)
        .field("token_id", token_id)
        .field("price", price)
        .emit();
}

pub fn emit_stage_advanced(actor: &AccountId, from: Stage, to: Stage, token_supply: u32) {
    EventBuilder::new(SALE, "stage_advanced", actor)
        .field("from", from.as_str())
        .field("to", to.as_str())
        .field("token_supply", token_supply)
        .emit();
}
