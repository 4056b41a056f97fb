mod builder;
mod types;

mod contract;
mod payout;
mod relay;
mod reveal;
mod sale;

pub use contract::*;
pub use payout::*;
pub use relay::*;
pub use reveal::*;
pub use sale::*;

pub(crate) const STANDARD: &str = "onsocial";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const SALE: &str = "SALE_UPDATE";
pub(crate) const REVEAL: &str = "REVEAL_UPDATE";
pub(crate) const RELAY: &str = "RELAY_UPDATE";
pub(crate) const PAYOUT: &str = "PAYOUT_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
