use near_sdk::json_types::Base58CryptoHash;
use near_sdk::{CryptoHash, near};

use crate::digest;
use crate::{DropError, MAX_SUPPLY, MIN_REVEAL_PERIOD};

/// Single pending commitment. `min_reveal_block == 0` means nothing has been committed yet.
#[near(serializers = [borsh])]
#[derive(Clone, Default)]
pub struct Commitment {
    commit_hash: CryptoHash,
    min_reveal_block: u64,
    revealed: bool,
    index_shift: u32,
}

#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct CommitmentView {
    pub commit_hash: Option<Base58CryptoHash>,
    pub min_reveal_block: Option<u64>,
    pub revealed: bool,
    pub index_shift: Option<u32>,
}

impl Commitment {
    pub fn is_committed(&self) -> bool {
        self.min_reveal_block != 0
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn min_reveal_block(&self) -> u64 {
        self.min_reveal_block
    }

    /// `None` until revealed.
    pub fn index_shift(&self) -> Option<u32> {
        self.revealed.then_some(self.index_shift)
    }

    pub fn commit(&mut self, commit_hash: CryptoHash, block_height: u64) -> Result<u64, DropError> {
        if self.is_committed() {
            return Err(DropError::AlreadyCommitted);
        }
        let min_reveal_block = block_height
            .checked_add(MIN_REVEAL_PERIOD)
            .ok_or_else(|| DropError::InvalidInput("Block height overflow".into()))?;
        self.commit_hash = commit_hash;
        self.min_reveal_block = min_reveal_block;
        Ok(min_reveal_block)
    }

    /// On a valid opening stores `shift mod MAX_SUPPLY` and returns it.
    pub fn reveal(&mut self, shift: u32, salt: &CryptoHash, block_height: u64) -> Result<u32, DropError> {
        if !self.is_committed() {
            return Err(DropError::NotCommitted);
        }
        if self.revealed {
            return Err(DropError::AlreadyRevealed);
        }
        if block_height < self.min_reveal_block {
            return Err(DropError::RevealTooEarly(format!(
                "current block {} is before reveal block {}",
                block_height, self.min_reveal_block
            )));
        }
        if digest::commitment(shift, salt) != self.commit_hash {
            return Err(DropError::InvalidSecret);
        }
        self.revealed = true;
        self.index_shift = shift % MAX_SUPPLY;
        Ok(self.index_shift)
    }

    /// `(index + shift) mod MAX_SUPPLY` once revealed.
    pub fn displayed_index(&self, index: u32) -> Option<u32> {
        self.index_shift()
            .map(|shift| (index % MAX_SUPPLY + shift) % MAX_SUPPLY)
    }

    pub fn view(&self) -> CommitmentView {
        let committed = self.is_committed();
        CommitmentView {
            commit_hash: committed.then(|| self.commit_hash.into()),
            min_reveal_block: committed.then_some(self.min_reveal_block),
            revealed: self.revealed,
            index_shift: self.index_shift(),
        }
    }
}
