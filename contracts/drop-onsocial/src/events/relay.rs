use near_sdk::AccountId;

use super::RELAY;
use super::builder::EventBuilder;

pub fn emit_batch_transfer(actor: &AccountId, token_ids: &[String]) {
    EventBuilder::new(RELAY, "batch_transfer", actor)
        .field("token_ids", token_ids)
        .field("count", token_ids.len() as u32)
        .emit();
}
