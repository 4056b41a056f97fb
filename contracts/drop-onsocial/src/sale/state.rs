use near_sdk::{NearToken, near};

use crate::{DropError, MAX_SUPPLY, PRESALE_PRICE, PRESALE_SUPPLY, PUBLIC_SALE_PRICE};

#[near(serializers = [borsh, json])]
#[serde(rename_all = "snake_case")]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Presale,
    PublicSale,
    SoldOut,
}

impl Stage {
    /// Stage implied by a supply counter; the stored stage must always agree.
    pub fn for_supply(token_supply: u32) -> Self {
        if token_supply < PRESALE_SUPPLY {
            Self::Presale
        } else if token_supply < MAX_SUPPLY {
            Self::PublicSale
        } else {
            Self::SoldOut
        }
    }

    /// Supply at which this stage is left.
    pub fn ceiling(self) -> Option<u32> {
        match self {
            Self::Presale => Some(PRESALE_SUPPLY),
            Self::PublicSale => Some(MAX_SUPPLY),
            Self::SoldOut => None,
        }
    }

    pub fn price(self) -> Option<NearToken> {
        match self {
            Self::Presale => Some(PRESALE_PRICE),
            Self::PublicSale => Some(PUBLIC_SALE_PRICE),
            Self::SoldOut => None,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Presale => Self::PublicSale,
            Self::PublicSale | Self::SoldOut => Self::SoldOut,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Presale => "presale",
            Self::PublicSale => "public_sale",
            Self::SoldOut => "sold_out",
        }
    }
}

/// Outcome of a recorded mint: the token index to issue and, when a ceiling
/// was reached, the stage that was left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MintSlot {
    pub index: u32,
    pub advanced_from: Option<Stage>,
}

#[near(serializers = [borsh])]
pub struct SaleState {
    stage: Stage,
    token_supply: u32,
}

impl Default for SaleState {
    fn default() -> Self {
        Self::new()
    }
}

impl SaleState {
    pub fn new() -> Self {
        Self {
            stage: Stage::Presale,
            token_supply: 0,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn token_supply(&self) -> u32 {
        self.token_supply
    }

    /// Stage gate first, then exact-price gate.
    pub fn admit(&self, expected: Stage, attached: NearToken) -> Result<(), DropError> {
        if self.stage != expected {
            return Err(DropError::invalid_stage(expected, self.stage));
        }
        let price = expected
            .price()
            .ok_or_else(|| DropError::invalid_stage(expected, self.stage))?;
        if attached != price {
            return Err(DropError::invalid_payment(
                price.as_yoctonear(),
                attached.as_yoctonear(),
            ));
        }
        Ok(())
    }

    pub fn record_mint(&mut self) -> Result<MintSlot, DropError> {
        let ceiling = self
            .stage
            .ceiling()
            .ok_or_else(|| DropError::invalid_stage(Stage::PublicSale, self.stage))?;
        let index = self.token_supply;
        self.token_supply = index
            .checked_add(1)
            .filter(|supply| *supply <= MAX_SUPPLY)
            .ok_or_else(|| DropError::invalid_stage(Stage::PublicSale, Stage::SoldOut))?;

        let advanced_from = if self.token_supply == ceiling {
            let left = self.stage;
            self.stage = left.next();
            Some(left)
        } else {
            None
        };

        Ok(MintSlot {
            index,
            advanced_from,
        })
    }
}
