use near_sdk::{AccountId, CryptoHash, near};

use super::EntitlementStrategy;
use crate::DropError;
use crate::digest::indexed_leaf;

const WORD_BITS: u32 = 64;

/// Fixed-length claim bitmap. Polarity: a SET bit is claimable, a CLEARED bit
/// is claimed. Every slot starts set and can be cleared exactly once.
#[near(serializers = [borsh])]
pub struct ClaimBitmap {
    len: u32,
    words: Vec<u64>,
}

impl ClaimBitmap {
    pub fn all_claimable(len: u32) -> Self {
        let word_count = len.div_ceil(WORD_BITS) as usize;
        let mut words = vec![u64::MAX; word_count];
        let tail = len % WORD_BITS;
        if tail != 0 {
            if let Some(last) = words.last_mut() {
                *last = (1u64 << tail) - 1;
            }
        }
        Self { len, words }
    }

    pub fn capacity(&self) -> u32 {
        self.len
    }

    /// Out-of-range indices are never claimable.
    pub fn is_claimable(&self, index: u32) -> bool {
        if index >= self.len {
            return false;
        }
        let (word, mask) = Self::locate(index);
        self.words[word] & mask != 0
    }

    pub fn claimable_count(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    fn locate(index: u32) -> (usize, u64) {
        ((index / WORD_BITS) as usize, 1u64 << (index % WORD_BITS))
    }
}

impl EntitlementStrategy for ClaimBitmap {
    type Slot = u32;

    const NAME: &'static str = "index";

    fn leaf(account_id: &AccountId, slot: &u32) -> CryptoHash {
        indexed_leaf(account_id, *slot)
    }

    fn admits(&self, slot: &u32) -> bool {
        *slot < self.len
    }

    fn is_consumed(&self, _account_id: &AccountId, slot: &u32) -> bool {
        !self.is_claimable(*slot)
    }

    fn consume(&mut self, _account_id: &AccountId, slot: &u32) -> Result<(), DropError> {
        if *slot >= self.len {
            return Err(DropError::NotEligible);
        }
        if !self.is_claimable(*slot) {
            return Err(DropError::AlreadyMinted);
        }
        let (word, mask) = Self::locate(*slot);
        self.words[word] &= !mask;
        Ok(())
    }
}
