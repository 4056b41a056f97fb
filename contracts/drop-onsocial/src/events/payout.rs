use near_sdk::AccountId;

use super::PAYOUT;
use super::builder::EventBuilder;

pub fn emit_pull_credited(owner_id: &AccountId, beneficiary: &AccountId, amount: u128, new_balance: u128) {
    EventBuilder::new(PAYOUT, "pull_credited", owner_id)
        .field("beneficiary", beneficiary)
        .field("amount", amount)
        .field("new_balance", new_balance)
        .emit();
}

pub fn emit_pull_withdrawn(beneficiary: &AccountId, amount: u128) {
    EventBuilder::new(PAYOUT, "pull_withdrawn", beneficiary)
        .field("amount", amount)
        .emit();
}

pub fn emit_pull_withdraw_failed(beneficiary: &AccountId, amount: u128, restored_balance: u128) {
    EventBuilder::new(PAYOUT, "pull_withdraw_failed", beneficiary)
        .field("amount", amount)
        .field("restored_balance", restored_balance)
        .emit();
}

pub fn emit_withdraw_all(owner_id: &AccountId, amount: u128) {
    EventBuilder::new(PAYOUT, "withdraw_all", owner_id)
        .field("amount", amount)
        .emit();
}

pub fn emit_withdraw_all_failed(owner_id: &AccountId, amount: u128) {
    EventBuilder::new(PAYOUT, "withdraw_all_failed", owner_id)
        .field("amount", amount)
        .emit();
}
