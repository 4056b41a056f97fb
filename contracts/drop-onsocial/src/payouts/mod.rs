//! Pull-payment ledger and owner withdrawal.
//!
//! Outbound transfers are only ever built from a [`Payout`], and a `Payout`
//! only comes out of a bookkeeping debit, so state is always settled before
//! any NEAR leaves the contract.

use near_sdk::json_types::U128;

use crate::*;

/// Funds already removed from bookkeeping and owed to `receiver_id`.
#[must_use]
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Payout {
    receiver_id: AccountId,
    amount: u128,
}

impl Payout {
    pub(crate) fn receiver_id(&self) -> &AccountId {
        &self.receiver_id
    }

    pub(crate) fn amount(&self) -> u128 {
        self.amount
    }

    fn into_transfer(self) -> Promise {
        Promise::new(self.receiver_id).transfer(NearToken::from_yoctonear(self.amount))
    }
}

/// Balance not locked for storage staking.
pub(crate) fn available_balance_yocto() -> u128 {
    let locked = env::storage_usage() as u128 * env::storage_byte_cost().as_yoctonear();
    env::account_balance().as_yoctonear().saturating_sub(locked)
}

#[near]
impl Contract {
    #[handle_result]
    pub fn allow_for_pull(
        &mut self,
        beneficiary: AccountId,
        amount: U128,
    ) -> Result<U128, DropError> {
        let actor_id = env::predecessor_account_id();
        self.internal_allow_for_pull(&actor_id, &beneficiary, amount.0)
            .map(U128)
    }

    #[handle_result]
    pub fn withdraw_pull(&mut self) -> Result<Promise, DropError> {
        let actor_id = env::predecessor_account_id();
        let payout = self.debit_pull(&actor_id)?;
        let callback = Self::ext(env::current_account_id())
            .with_static_gas(Gas::from_tgas(GAS_PAYOUT_CALLBACK_TGAS))
            .on_pull_withdrawn(payout.receiver_id().clone(), U128(payout.amount()));
        Ok(payout.into_transfer().then(callback))
    }

    #[handle_result]
    pub fn withdraw_all(&mut self) -> Result<Promise, DropError> {
        let actor_id = env::predecessor_account_id();
        let payout = self.debit_all(&actor_id)?;
        let callback = Self::ext(env::current_account_id())
            .with_static_gas(Gas::from_tgas(GAS_PAYOUT_CALLBACK_TGAS))
            .on_withdraw_all(payout.receiver_id().clone(), U128(payout.amount()));
        Ok(payout.into_transfer().then(callback))
    }

    #[private]
    pub fn on_pull_withdrawn(&mut self, beneficiary: AccountId, amount: U128) -> bool {
        let succeeded = env::promise_result_checked(0, 0).is_ok();
        self.resolve_pull_withdrawal(&beneficiary, amount.0, succeeded)
    }

    #[private]
    #[handle_result]
    pub fn on_withdraw_all(&mut self, owner_id: AccountId, amount: U128) -> Result<(), DropError> {
        let succeeded = env::promise_result_checked(0, 0).is_ok();
        resolve_withdraw_all(&owner_id, amount.0, succeeded)
    }

    pub fn pull_balance_of(&self, account_id: AccountId) -> U128 {
        U128(self.pull_balances.get(&account_id).copied().unwrap_or(0))
    }

    pub fn available_balance(&self) -> U128 {
        U128(available_balance_yocto())
    }
}

impl Contract {
    pub(crate) fn internal_allow_for_pull(
        &mut self,
        actor_id: &AccountId,
        beneficiary: &AccountId,
        amount: u128,
    ) -> Result<u128, DropError> {
        self.check_contract_owner(actor_id)?;
        if amount == 0 {
            return Err(DropError::InvalidInput("Credit amount must be positive".into()));
        }
        let current = self.pull_balances.get(beneficiary).copied().unwrap_or(0);
        let new_balance = current
            .checked_add(amount)
            .ok_or_else(|| DropError::InvalidInput("Pull balance overflow".into()))?;
        self.pull_balances.insert(beneficiary.clone(), new_balance);

        events::emit_pull_credited(actor_id, beneficiary, amount, new_balance);
        Ok(new_balance)
    }

    /// Zeroes the beneficiary's credit and hands back the matching payout.
    pub(crate) fn debit_pull(&mut self, beneficiary: &AccountId) -> Result<Payout, DropError> {
        let amount = self.pull_balances.get(beneficiary).copied().unwrap_or(0);
        if amount == 0 {
            return Err(DropError::NothingToWithdraw);
        }
        let available = available_balance_yocto();
        if amount > available {
            return Err(DropError::InsufficientBalance(format!(
                "owed {} yoctoNEAR, contract holds {}",
                amount, available
            )));
        }
        self.pull_balances.remove(beneficiary);

        events::emit_pull_withdrawn(beneficiary, amount);
        Ok(Payout {
            receiver_id: beneficiary.clone(),
            amount,
        })
    }

    pub(crate) fn debit_all(&mut self, actor_id: &AccountId) -> Result<Payout, DropError> {
        self.check_contract_owner(actor_id)?;
        let amount = available_balance_yocto();
        if amount == 0 {
            return Err(DropError::NothingToWithdraw);
        }

        events::emit_withdraw_all(actor_id, amount);
        Ok(Payout {
            receiver_id: self.owner_id.clone(),
            amount,
        })
    }

    /// A failed transfer refunds the contract, so the credit is put back.
    pub(crate) fn resolve_pull_withdrawal(
        &mut self,
        beneficiary: &AccountId,
        amount: u128,
        succeeded: bool,
    ) -> bool {
        if succeeded {
            return true;
        }
        let current = self.pull_balances.get(beneficiary).copied().unwrap_or(0);
        let restored = current.saturating_add(amount);
        self.pull_balances.insert(beneficiary.clone(), restored);
        events::emit_pull_withdraw_failed(beneficiary, amount, restored);
        false
    }
}

pub(crate) fn resolve_withdraw_all(
    owner_id: &AccountId,
    amount: u128,
    succeeded: bool,
) -> Result<(), DropError> {
    if succeeded {
        return Ok(());
    }
    events::emit_withdraw_all_failed(owner_id, amount);
    Err(DropError::WithdrawalFailed(format!(
        "transfer of {} yoctoNEAR to {} failed",
        amount, owner_id
    )))
}
