use near_sdk::NearToken;

// Supply thresholds: presale ceiling first, then the hard cap.
pub const PRESALE_SUPPLY: u32 = 20;
pub const MAX_SUPPLY: u32 = 30;

pub const PRESALE_PRICE: NearToken = NearToken::from_near(1);
pub const PUBLIC_SALE_PRICE: NearToken = NearToken::from_near(2);

/// Blocks that must pass between `make_commit` and `reveal`.
pub const MIN_REVEAL_PERIOD: u64 = 10;

pub const MAX_PROOF_DEPTH: usize = 32;
pub const MAX_BATCH_CALLS: usize = 20;

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

pub const DEFAULT_NAME: &str = "OnSocial Drop";
pub const DEFAULT_SYMBOL: &str = "DROP";
pub const METADATA_SUFFIX: &str = ".json";

pub const GAS_PAYOUT_CALLBACK_TGAS: u64 = 10;
