//! Batched transfer relay.
//!
//! Payloads are JSON method envelopes decoded into the closed [`RelayCall`]
//! set and dispatched in-process with the original predecessor as actor.
//! The whole batch is validated against a staged ownership view before the
//! first ledger write, so a failing entry leaves every token where it was.

mod payload;

pub use payload::{RelayCall, TRANSFER_FROM_METHOD, TransferFromArgs, TransferOutcome};

use near_contract_standards::non_fungible_token::TokenId;
use near_sdk::json_types::Base64VecU8;
use std::collections::HashMap;

use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    #[payable]
    #[handle_result]
    pub fn batch_transfer(
        &mut self,
        payloads: Vec<Base64VecU8>,
    ) -> Result<Vec<Base64VecU8>, DropError> {
        check_one_yocto()?;
        let actor_id = env::predecessor_account_id();
        let payloads: Vec<Vec<u8>> = payloads.into_iter().map(|p| p.0).collect();
        let results = self.internal_batch_transfer(&actor_id, &payloads)?;
        Ok(results.into_iter().map(Base64VecU8::from).collect())
    }

    #[handle_result]
    pub fn build_transfer_payload(
        &self,
        from: AccountId,
        to: AccountId,
        token_id: TokenId,
    ) -> Result<Base64VecU8, DropError> {
        RelayCall::TransferFrom(TransferFromArgs { from, to, token_id })
            .encode()
            .map(Base64VecU8::from)
    }
}

impl Contract {
    pub(crate) fn internal_batch_transfer(
        &mut self,
        actor_id: &AccountId,
        payloads: &[Vec<u8>],
    ) -> Result<Vec<Vec<u8>>, DropError> {
        if payloads.is_empty() || payloads.len() > MAX_BATCH_CALLS {
            return Err(DropError::InvalidInput(format!(
                "Batch size must be 1-{}",
                MAX_BATCH_CALLS
            )));
        }

        // Owners as they will be after the entries staged so far.
        let mut staged: HashMap<TokenId, AccountId> = HashMap::new();
        let mut plan = Vec::with_capacity(payloads.len());
        let mut results = Vec::with_capacity(payloads.len());
        for payload in payloads {
            let call = RelayCall::decode(payload)?;
            let outcome = match &call {
                RelayCall::TransferFrom(args) => {
                    self.stage_transfer_from(actor_id, args, &mut staged)?
                }
            };
            results.push(outcome.to_bytes()?);
            plan.push(call);
        }

        // Commit point: nothing below can fail.
        let mut token_ids = Vec::with_capacity(plan.len());
        for call in plan {
            token_ids.push(self.dispatch_relay_call(actor_id, call));
        }

        events::emit_batch_transfer(actor_id, &token_ids);
        Ok(results)
    }

    fn stage_transfer_from(
        &self,
        actor_id: &AccountId,
        args: &TransferFromArgs,
        staged: &mut HashMap<TokenId, AccountId>,
    ) -> Result<TransferOutcome, DropError> {
        // A transfer clears approvals, so a token moved earlier in the batch only answers to its new owner.
        let (owner_id, moved) = match staged.get(&args.token_id) {
            Some(owner_id) => (owner_id.clone(), true),
            None => {
                let owner_id = self.ledger_owner_of(&args.token_id).ok_or_else(|| {
                    DropError::SubcallFailed(format!("token {} not found", args.token_id))
                })?;
                (owner_id, false)
            }
        };

        if args.from != owner_id {
            return Err(DropError::SubcallFailed(format!(
                "{} does not own token {}",
                args.from, args.token_id
            )));
        }
        let authorized = actor_id == &owner_id
            || (!moved && self.ledger_is_approved(&args.token_id, actor_id));
        if !authorized {
            return Err(DropError::SubcallFailed(format!(
                "{} is not owner or approved for token {}",
                actor_id, args.token_id
            )));
        }
        if args.to == owner_id {
            return Err(DropError::SubcallFailed(
                "current and next owner must differ".into(),
            ));
        }

        staged.insert(args.token_id.clone(), args.to.clone());
        Ok(TransferOutcome {
            token_id: args.token_id.clone(),
            old_owner_id: owner_id,
            new_owner_id: args.to.clone(),
        })
    }

    fn dispatch_relay_call(&mut self, actor_id: &AccountId, call: RelayCall) -> TokenId {
        match call {
            RelayCall::TransferFrom(TransferFromArgs { to, token_id, .. }) => {
                self.tokens
                    .internal_transfer(actor_id, &to, &token_id, None, None);
                token_id
            }
        }
    }
}
