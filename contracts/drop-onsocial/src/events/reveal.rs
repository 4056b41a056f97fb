use near_sdk::AccountId;

use super::REVEAL;
use super::builder::EventBuilder;

pub fn emit_commit(owner_id: &AccountId, commit_hash: &str, min_reveal_block: u64) {
    EventBuilder::new(REVEAL, "commit", owner_id)
        .field("commit_hash", commit_hash)
        .field("min_reveal_block", min_reveal_block)
        .emit();
}

pub fn emit_reveal(owner_id: &AccountId, index_shift: u32, block_height: u64) {
    EventBuilder::new(REVEAL, "reveal", owner_id)
        .field("index_shift", index_shift)
        .field("block_height", block_height)
        .emit();
}
