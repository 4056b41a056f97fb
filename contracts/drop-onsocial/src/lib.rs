use near_contract_standards::non_fungible_token::NonFungibleToken;
use near_contract_standards::non_fungible_token::metadata::NFTContractMetadata;
use near_sdk::store::LookupMap;
use near_sdk::{
    AccountId, CryptoHash, Gas, NearToken, PanicOnDefault, Promise, PromiseOrValue, env, near,
    require,
};

pub mod constants;
pub mod digest;
mod errors;
mod guards;
mod storage;

mod events;

pub mod allowlist;
mod payouts;
pub mod relay;
mod reveal;
mod sale;

mod admin;
mod ledger;


pub use allowlist::{ClaimBitmap, EntitlementStrategy, MintedFlags};
pub use constants::*;
pub use errors::DropError;
pub use reveal::{Commitment, CommitmentView};
pub use sale::{SaleInfo, SaleState, Stage};
pub use storage::StorageKey;

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/OnSocial-Labs/onsocial-protocol",
        standard(standard = "nep171", version = "1.2.0"),
        standard(standard = "nep177", version = "2.0.0"),
        standard(standard = "nep178", version = "1.0.0"),
        standard(standard = "nep181", version = "1.0.0"),
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,
    pub owner_id: AccountId,

    pub(crate) tokens: NonFungibleToken,
    pub(crate) metadata: NFTContractMetadata,

    // Immutable after init: both presale strategies verify against this root.
    pub(crate) allowlist_root: CryptoHash,
    pub(crate) sale: SaleState,
    pub(crate) minted_flags: MintedFlags,
    pub(crate) claim_bitmap: ClaimBitmap,

    pub(crate) commitment: Commitment,
    pub(crate) base_uri: String,
    pub(crate) placeholder_uri: String,

    pub(crate) pull_balances: LookupMap<AccountId, u128>,
}
