//! Health factor and valuation math.
//!
//! Pure fixed-point arithmetic over `U256`; no storage, no cross-contract
//! calls. The engine layers oracle reads on top of these functions.
//!
//! All USD values and the health factor use 18-decimal fixed point. Price
//! feeds report 8 decimals and are rescaled with `ADDITIONAL_FEED_PRECISION`.

use odra::casper_types::U256;

/// Internal fixed-point precision (1e18)
pub const PRECISION: u64 = 1_000_000_000_000_000_000;

/// Rescale factor from 8-decimal feed prices to 18 decimals (1e10)
pub const ADDITIONAL_FEED_PRECISION: u64 = 10_000_000_000;

/// Decimals expected from every price feed
pub const FEED_DECIMALS: u8 = 8;

/// Liquidation threshold: 50% haircut, i.e. 200% overcollateralization
pub const LIQUIDATION_THRESHOLD: u64 = 50;

/// Denominator for threshold and bonus percentages
pub const LIQUIDATION_PRECISION: u64 = 100;

/// Liquidator bonus: 10% extra collateral
pub const LIQUIDATION_BONUS: u64 = 10;

/// Minimum health factor (1.0 in 18-decimal fixed point)
pub const MIN_HEALTH_FACTOR: u64 = PRECISION;

/// USD value (18 decimals) of `amount` of an asset priced at `price`
/// (8 decimals).
///
/// `price * 1e10 * amount / 1e18`. U256 intermediates make the
/// multiply-before-divide safe from overflow for any realistic input.
pub fn usd_value(price: U256, amount: U256) -> U256 {
    price * U256::from(ADDITIONAL_FEED_PRECISION) * amount / U256::from(PRECISION)
}

/// Asset amount equivalent to `usd_amount` (18 decimals) at `price`
/// (8 decimals). Inverse of [`usd_value`].
///
/// Division truncates toward zero. The truncation is load-bearing: it
/// determines exactly how much collateral a liquidator receives.
pub fn token_amount_from_usd(price: U256, usd_amount: U256) -> U256 {
    usd_amount * U256::from(PRECISION) / (price * U256::from(ADDITIONAL_FEED_PRECISION))
}

/// Health factor of an account with `debt` outstanding against
/// `collateral_value_usd` of collateral (both 18 decimals).
///
/// Zero debt is maximally healthy regardless of collateral. Otherwise:
/// `(collateral_value_usd * 50 / 100) * 1e18 / debt`, in exactly this
/// order; reordering the operations changes the rounding.
pub fn health_factor(debt: U256, collateral_value_usd: U256) -> U256 {
    if debt.is_zero() {
        return U256::MAX;
    }
    let adjusted = collateral_value_usd * U256::from(LIQUIDATION_THRESHOLD)
        / U256::from(LIQUIDATION_PRECISION);
    adjusted * U256::from(PRECISION) / debt
}

/// Whether a health factor satisfies the solvency invariant.
///
/// The boundary is inclusive: a factor of exactly 1.0 passes.
pub fn is_healthy(factor: U256) -> bool {
    factor >= U256::from(MIN_HEALTH_FACTOR)
}
