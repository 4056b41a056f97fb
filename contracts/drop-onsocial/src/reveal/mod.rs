//! Commit-reveal for the metadata index shift.
//!
//! The owner commits `sha256(shift ‖ salt)` before the sale can reveal
//! anything useful, and may only open it `MIN_REVEAL_PERIOD` blocks later.
//! Until then every token resolves to the placeholder.

mod commitment;

pub use commitment::{Commitment, CommitmentView};

use near_sdk::json_types::Base58CryptoHash;

use crate::guards::parse_token_index;
use crate::*;

#[near]
impl Contract {
    #[handle_result]
    pub fn make_commit(&mut self, commit_hash: Base58CryptoHash) -> Result<u64, DropError> {
        let actor_id = env::predecessor_account_id();
        self.internal_make_commit(&actor_id, commit_hash.into())
    }

    #[handle_result]
    pub fn reveal(&mut self, shift: u32, salt: Base58CryptoHash) -> Result<(), DropError> {
        let actor_id = env::predecessor_account_id();
        self.internal_reveal(&actor_id, shift, &salt.into())
    }

    #[handle_result]
    pub fn token_uri(&self, token_id: String) -> Result<String, DropError> {
        let index = parse_token_index(&token_id)?;
        Ok(match self.commitment.displayed_index(index) {
            Some(displayed) => format!("{}{}{}", self.base_uri, displayed, METADATA_SUFFIX),
            None => self.placeholder_uri.clone(),
        })
    }

    #[handle_result]
    pub fn displayed_index(&self, token_id: String) -> Result<Option<u32>, DropError> {
        let index = parse_token_index(&token_id)?;
        Ok(self.commitment.displayed_index(index))
    }

    pub fn get_commitment(&self) -> CommitmentView {
        self.commitment.view()
    }

    /// Hash the owner must pass to `make_commit` for a given `(shift, salt)`.
    pub fn compute_commitment(&self, shift: u32, salt: Base58CryptoHash) -> Base58CryptoHash {
        digest::commitment(shift, &salt.into()).into()
    }
}

impl Contract {
    pub(crate) fn internal_make_commit(
        &mut self,
        actor_id: &AccountId,
        commit_hash: CryptoHash,
    ) -> Result<u64, DropError> {
        self.check_contract_owner(actor_id)?;
        let min_reveal_block = self.commitment.commit(commit_hash, env::block_height())?;
        events::emit_commit(
            actor_id,
            &String::from(&Base58CryptoHash::from(commit_hash)),
            min_reveal_block,
        );
        Ok(min_reveal_block)
    }

    pub(crate) fn internal_reveal(
        &mut self,
        actor_id: &AccountId,
        shift: u32,
        salt: &CryptoHash,
    ) -> Result<(), DropError> {
        self.check_contract_owner(actor_id)?;
        let block_height = env::block_height();
        let index_shift = self.commitment.reveal(shift, salt, block_height)?;
        events::emit_reveal(actor_id, index_shift, block_height);
        Ok(())
    }
}
