use crate::tests::test_utils::*;
use crate::*;
use near_contract_standards::non_fungible_token::approval::NonFungibleTokenApproval;
use near_contract_standards::non_fungible_token::core::NonFungibleTokenCore;
use near_contract_standards::non_fungible_token::enumeration::NonFungibleTokenEnumeration;
use near_contract_standards::non_fungible_token::metadata::NonFungibleTokenMetadataProvider;
use near_sdk::testing_env;

#[test]
fn metadata_defaults() {
    let contract = new_contract();
    let metadata = contract.nft_metadata();
    assert_eq!(metadata.name, DEFAULT_NAME);
    assert_eq!(metadata.symbol, DEFAULT_SYMBOL);
    assert_eq!(metadata.base_uri.as_deref(), Some(BASE_URI));
}

#[test]
fn minted_token_visible_through_nep171() {
    let mut contract = new_contract();
    presale_mint(&mut contract, 2).unwrap();

    let token = contract.nft_token("0".to_string()).unwrap();
    assert_eq!(token.owner_id, minter(2));
    assert!(contract.nft_token("1".to_string()).is_none());
}

#[test]
fn enumeration_follows_mints() {
    let mut contract = new_contract();
    presale_mint(&mut contract, 0).unwrap();
    presale_mint(&mut contract, 1).unwrap();

    assert_eq!(contract.nft_total_supply().0, 2);
    assert_eq!(contract.nft_supply_for_owner(minter(0)).0, 1);
    let tokens = contract.nft_tokens_for_owner(minter(1), None, None);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].token_id, "1");
}

#[test]
fn standard_transfer_moves_token() {
    let mut contract = new_contract();
    presale_mint(&mut contract, 0).unwrap();

    testing_env!(context_with_deposit(minter(0), 1).build());
    contract.nft_transfer(outsider(), "0".to_string(), None, None);
    assert_eq!(contract.ledger_owner_of(&"0".to_string()), Some(outsider()));
}

#[test]
fn approval_is_reported() {
    let mut contract = new_contract();
    presale_mint(&mut contract, 0).unwrap();

    testing_env!(context_with_deposit(minter(0), 10_000_000_000_000_000_000_000).build());
    let _ = contract.nft_approve("0".to_string(), outsider(), None);

    assert!(contract.ledger_is_approved(&"0".to_string(), &outsider()));
    assert!(contract.nft_is_approved("0".to_string(), outsider(), None));
    assert!(!contract.ledger_is_approved(&"0".to_string(), &other()));
}

#[test]
fn unknown_token_has_no_owner() {
    let contract = new_contract();
    assert_eq!(contract.ledger_owner_of(&"0".to_string()), None);
    assert!(!contract.ledger_is_approved(&"0".to_string(), &outsider()));
}
