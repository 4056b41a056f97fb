//! Integration tests for the drop contract (drop-onsocial).
//!
//! Covers the flows that need a real chain:
//! - Presale minting through both allowlist strategies
//! - Commit-reveal across real block heights
//! - Batched transfer relay
//! - Pull-payment withdrawal moving NEAR

use anyhow::Result;
use near_workspaces::types::NearToken;
use near_workspaces::{Account, Contract};
use serde_json::{json, Value};

use crate::utils::{
    account_leaf, base58, commitment, deploy_contract, get_wasm_path, hash_pair, indexed_leaf,
    setup_sandbox,
};

const MIN_REVEAL_PERIOD: u64 = 10;

// =============================================================================
// Setup helpers
// =============================================================================

struct DropFixture {
    worker: near_workspaces::Worker<near_workspaces::network::Sandbox>,
    contract: Contract,
    alice: Account,
    bob: Account,
    carol: Account,
    /// Allowlist leaves: `[address(alice), indexed(bob, 0)]`.
    leaves: [[u8; 32]; 2],
}

async fn create_user(root: &Account, name: &str) -> Result<Account> {
    let account = root
        .create_subaccount(name)
        .initial_balance(NearToken::from_near(20))
        .transact()
        .await?
        .into_result()?;
    Ok(account)
}

async fn setup_drop() -> Result<DropFixture> {
    let worker = setup_sandbox().await?;
    let contract = deploy_contract(&worker, &get_wasm_path("drop_onsocial")).await?;
    let root = worker.root_account()?;
    let alice = create_user(&root, "alice").await?;
    let bob = create_user(&root, "bob").await?;
    let carol = create_user(&root, "carol").await?;

    let leaves = [
        account_leaf(alice.id().as_str()),
        indexed_leaf(bob.id().as_str(), 0),
    ];
    let root_hash = hash_pair(&leaves[0], &leaves[1]);

    contract
        .call("new")
        .args_json(json!({
            "owner_id": contract.id(),
            "allowlist_root": base58(&root_hash),
            "base_uri": "ipfs://drop/",
            "placeholder_uri": "ipfs://drop/hidden.json",
        }))
        .transact()
        .await?
        .into_result()?;

    Ok(DropFixture {
        worker,
        contract,
        alice,
        bob,
        carol,
        leaves,
    })
}

impl DropFixture {
    async fn mint_alice(&self) -> Result<String> {
        let token_id: String = self
            .alice
            .call(self.contract.id(), "mint_presale")
            .args_json(json!({
                "proof": [base58(&self.leaves[1])],
                "leaf": base58(&self.leaves[0]),
            }))
            .deposit(NearToken::from_near(1))
            .transact()
            .await?
            .into_result()?
            .json()?;
        Ok(token_id)
    }

    async fn owner_of(&self, token_id: &str) -> Result<String> {
        let token: Value = self
            .contract
            .view("nft_token")
            .args_json(json!({ "token_id": token_id }))
            .await?
            .json()?;
        Ok(token["owner_id"].as_str().unwrap_or_default().to_string())
    }
}

// =============================================================================
// Presale
// =============================================================================

#[tokio::test]
async fn test_presale_both_strategies() -> Result<()> {
    let fx = setup_drop().await?;

    assert_eq!(fx.mint_alice().await?, "0");

    let token_id: String = fx
        .bob
        .call(fx.contract.id(), "mint_presale_indexed")
        .args_json(json!({ "proof": [base58(&fx.leaves[0])], "index": 0 }))
        .deposit(NearToken::from_near(1))
        .transact()
        .await?
        .into_result()?
        .json()?;
    assert_eq!(token_id, "1");

    assert_eq!(fx.owner_of("0").await?, fx.alice.id().as_str());
    assert_eq!(fx.owner_of("1").await?, fx.bob.id().as_str());

    let has_minted: bool = fx
        .contract
        .view("has_minted")
        .args_json(json!({ "account_id": fx.alice.id() }))
        .await?
        .json()?;
    assert!(has_minted);

    let claimable: bool = fx
        .contract
        .view("is_slot_claimable")
        .args_json(json!({ "index": 0 }))
        .await?
        .json()?;
    assert!(!claimable);

    Ok(())
}

#[tokio::test]
async fn test_presale_rejections() -> Result<()> {
    let fx = setup_drop().await?;

    // Carol replays alice's leaf and proof.
    let res = fx
        .carol
        .call(fx.contract.id(), "mint_presale")
        .args_json(json!({
            "proof": [base58(&fx.leaves[1])],
            "leaf": base58(&fx.leaves[0]),
        }))
        .deposit(NearToken::from_near(1))
        .transact()
        .await?;
    assert!(res.is_failure());

    // Wrong price.
    let res = fx
        .alice
        .call(fx.contract.id(), "mint_presale")
        .args_json(json!({
            "proof": [base58(&fx.leaves[1])],
            "leaf": base58(&fx.leaves[0]),
        }))
        .deposit(NearToken::from_near(2))
        .transact()
        .await?;
    assert!(res.is_failure());

    fx.mint_alice().await?;
    let res = fx
        .alice
        .call(fx.contract.id(), "mint_presale")
        .args_json(json!({
            "proof": [base58(&fx.leaves[1])],
            "leaf": base58(&fx.leaves[0]),
        }))
        .deposit(NearToken::from_near(1))
        .transact()
        .await?;
    assert!(res.is_failure());

    let supply: u32 = fx.contract.view("get_token_supply").args_json(json!({})).await?.json()?;
    assert_eq!(supply, 1);

    Ok(())
}

// =============================================================================
// Commit-reveal
// =============================================================================

#[tokio::test]
async fn test_commit_then_reveal_after_delay() -> Result<()> {
    let fx = setup_drop().await?;
    let salt = [7u8; 32];
    let shift = 5u32;

    fx.contract
        .call("make_commit")
        .args_json(json!({ "commit_hash": base58(&commitment(shift, &salt)) }))
        .transact()
        .await?
        .into_result()?;

    let uri: String = fx
        .contract
        .view("token_uri")
        .args_json(json!({ "token_id": "0" }))
        .await?
        .json()?;
    assert_eq!(uri, "ipfs://drop/hidden.json");

    let res = fx
        .contract
        .call("reveal")
        .args_json(json!({ "shift": shift, "salt": base58(&salt) }))
        .transact()
        .await?;
    assert!(res.is_failure(), "reveal before the delay must fail");

    fx.worker.fast_forward(MIN_REVEAL_PERIOD + 1).await?;

    fx.contract
        .call("reveal")
        .args_json(json!({ "shift": shift, "salt": base58(&salt) }))
        .transact()
        .await?
        .into_result()?;

    let uri: String = fx
        .contract
        .view("token_uri")
        .args_json(json!({ "token_id": "27" }))
        .await?
        .json()?;
    assert_eq!(uri, "ipfs://drop/2.json");

    Ok(())
}

// =============================================================================
// Relay
// =============================================================================

#[tokio::test]
async fn test_batch_transfer() -> Result<()> {
    let fx = setup_drop().await?;
    fx.mint_alice().await?;

    let payload: String = fx
        .contract
        .view("build_transfer_payload")
        .args_json(json!({
            "from": fx.alice.id(),
            "to": fx.carol.id(),
            "token_id": "0",
        }))
        .await?
        .json()?;

    // Carol cannot relay a transfer of alice's token.
    let res = fx
        .carol
        .call(fx.contract.id(), "batch_transfer")
        .args_json(json!({ "payloads": [payload.clone()] }))
        .deposit(NearToken::from_yoctonear(1))
        .transact()
        .await?;
    assert!(res.is_failure());
    assert_eq!(fx.owner_of("0").await?, fx.alice.id().as_str());

    let results: Vec<String> = fx
        .alice
        .call(fx.contract.id(), "batch_transfer")
        .args_json(json!({ "payloads": [payload] }))
        .deposit(NearToken::from_yoctonear(1))
        .transact()
        .await?
        .into_result()?
        .json()?;
    assert_eq!(results.len(), 1);
    assert_eq!(fx.owner_of("0").await?, fx.carol.id().as_str());

    Ok(())
}

// =============================================================================
// Payouts
// =============================================================================

#[tokio::test]
async fn test_pull_withdrawal_pays_beneficiary() -> Result<()> {
    let fx = setup_drop().await?;
    fx.mint_alice().await?;

    let credit = NearToken::from_millinear(500);
    fx.contract
        .call("allow_for_pull")
        .args_json(json!({
            "beneficiary": fx.carol.id(),
            "amount": credit.as_yoctonear().to_string(),
        }))
        .transact()
        .await?
        .into_result()?;

    let before = fx.carol.view_account().await?.balance;
    fx.carol
        .call(fx.contract.id(), "withdraw_pull")
        .max_gas()
        .transact()
        .await?
        .into_result()?;
    let after = fx.carol.view_account().await?.balance;

    // Net of gas.
    assert!(after.as_yoctonear() > before.as_yoctonear() + NearToken::from_millinear(400).as_yoctonear());

    let owed: String = fx
        .contract
        .view("pull_balance_of")
        .args_json(json!({ "account_id": fx.carol.id() }))
        .await?
        .json()?;
    assert_eq!(owed, "0");

    let res = fx
        .carol
        .call(fx.contract.id(), "withdraw_pull")
        .transact()
        .await?;
    assert!(res.is_failure(), "second withdrawal must find nothing");

    Ok(())
}

#[tokio::test]
async fn test_withdraw_all_owner_only() -> Result<()> {
    let fx = setup_drop().await?;

    let res = fx
        .alice
        .call(fx.contract.id(), "withdraw_all")
        .max_gas()
        .transact()
        .await?;
    assert!(res.is_failure());

    fx.contract
        .call("withdraw_all")
        .max_gas()
        .transact()
        .await?
        .into_result()?;

    Ok(())
}
