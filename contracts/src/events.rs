//! Domain events emitted by the debt engine.
//!
//! Per-effect events are emitted during the effects phase of each
//! operation, before any cross-contract interaction, and are the audit
//! trail of the ledger. `Liquidated` is a summary event and is emitted
//! last, after the whole liquidation has been validated.

use odra::casper_types::U256;
use odra::prelude::*;

/// Collateral was credited to an account
#[odra::event]
pub struct CollateralDeposited {
    /// Depositing account
    pub account: Address,
    /// Collateral asset
    pub token: Address,
    /// Amount deposited
    pub amount: U256,
}

/// Collateral was debited from an account
#[odra::event]
pub struct CollateralRedeemed {
    /// Account the collateral was taken from
    pub from: Address,
    /// Recipient of the collateral (the owner, or a liquidator)
    pub to: Address,
    /// Collateral asset
    pub token: Address,
    /// Amount redeemed
    pub amount: U256,
}

/// Debt was recorded against an account
#[odra::event]
pub struct DebtMinted {
    /// Minting account
    pub account: Address,
    /// Amount of xUSD minted
    pub amount: U256,
}

/// Debt was repaid and destroyed
#[odra::event]
pub struct DebtBurned {
    /// Account whose debt was reduced
    pub on_behalf_of: Address,
    /// Account that supplied the xUSD
    pub paid_by: Address,
    /// Amount of xUSD burned
    pub amount: U256,
}

/// An unhealthy account was liquidated
#[odra::event]
pub struct Liquidated {
    /// Account that was liquidated
    pub target: Address,
    /// Caller that performed the liquidation
    pub liquidator: Address,
    /// Collateral asset seized
    pub token: Address,
    /// Debt repaid on behalf of the target
    pub debt_covered: U256,
    /// Collateral paid out, bonus included
    pub collateral_seized: U256,
}
