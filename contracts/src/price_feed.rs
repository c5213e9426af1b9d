//! Price feed contract.
//!
//! One instance per collateral asset. Stores an 8-decimal USD price set by
//! an admin account; the engine treats it as the single trusted source for
//! that asset and rescales to 18 decimals internally. Staleness and
//! deviation enforcement are deliberately left to the feed operator.

use odra::casper_types::U256;
use odra::prelude::*;

use crate::errors::EngineError;
use crate::health::FEED_DECIMALS;
use crate::types::PriceRound;

/// USD price feed for a single collateral asset
#[odra::module]
pub struct PriceFeed {
    /// Latest price, 8 decimals
    price: Var<U256>,
    /// Decimal places reported by this feed
    decimals: Var<u8>,
    /// Timestamp of the last update
    updated_at: Var<u64>,
    /// Account allowed to push prices
    admin: Var<Address>,
}

#[odra::module]
impl PriceFeed {
    /// Initialize the feed with a starting price (8 decimals).
    /// The deployer becomes the feed admin.
    pub fn init(&mut self, initial_price: U256) {
        self.admin.set(self.env().caller());
        self.price.set(initial_price);
        self.decimals.set(FEED_DECIMALS);
        self.updated_at.set(self.env().get_block_time());
    }

    /// Push a new price (admin only)
    pub fn set_price(&mut self, price: U256) {
        self.require_admin();
        self.price.set(price);
        self.updated_at.set(self.env().get_block_time());
    }

    /// Latest price, 8 decimals
    pub fn get_price(&self) -> U256 {
        self.price.get().unwrap_or(U256::zero())
    }

    /// Decimal places for prices from this feed
    pub fn get_decimals(&self) -> u8 {
        self.decimals.get().unwrap_or(FEED_DECIMALS)
    }

    /// Full round data: price, decimals and update timestamp
    pub fn latest_round(&self) -> PriceRound {
        PriceRound {
            price: self.get_price(),
            decimals: self.get_decimals(),
            updated_at: self.updated_at.get().unwrap_or(0),
        }
    }

    fn require_admin(&self) {
        let caller = self.env().caller();
        if self.admin.get() != Some(caller) {
            self.env().revert(EngineError::Unauthorized);
        }
    }
}
