//! Common types used across the xUSD protocol.

use odra::casper_types::U256;
use odra::prelude::*;

/// Snapshot of one account's ledger position
#[odra::odra_type]
pub struct AccountSummary {
    /// Outstanding xUSD debt (18 decimals)
    pub debt: U256,
    /// Total collateral value in USD (18 decimals)
    pub collateral_value_usd: U256,
}

/// Price data returned by a feed
#[odra::odra_type]
pub struct PriceRound {
    /// Integer price value
    pub price: U256,
    /// Decimal places for `price`
    pub decimals: u8,
    /// Timestamp of the last update, in milliseconds
    pub updated_at: u64,
}

/// Result of a single liquidation
#[odra::odra_type]
pub struct LiquidationOutcome {
    /// Account that was liquidated
    pub target: Address,
    /// Collateral asset that was seized
    pub token: Address,
    /// Debt repaid on behalf of the target
    pub debt_covered: U256,
    /// Total collateral paid to the liquidator, bonus included
    pub collateral_seized: U256,
    /// Bonus portion of the seized collateral
    pub bonus_paid: U256,
}
