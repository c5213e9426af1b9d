//! xUSD Contracts
//!
//! Casper-native collateral-backed synthetic dollar.
//!
//! ## Architecture
//!
//! - **DebtEngine**: the ledger — collateral balances, xUSD debt, and the
//!   deposit/redeem/mint/burn/liquidate operations, each gated by the
//!   solvency invariant (health factor >= 1.0)
//! - **CollateralRegistry**: immutable token -> price feed mapping,
//!   embedded in the engine
//! - **health**: pure fixed-point valuation and health-factor math
//! - **XUsd**: the stablecoin, minted only by the engine
//! - **PriceFeed**: per-asset USD price source, 8 decimals
//! - **CollateralToken**: CEP-18 style collateral asset
//!
//! ## Solvency invariant
//!
//! After every operation, for every account: debt is zero, or collateral
//! value discounted by the 50% liquidation threshold covers the debt.
//! Accounts below the bar can be liquidated by anyone for a 10% collateral
//! bonus.

#![cfg_attr(target_arch = "wasm32", no_std)]

#[cfg(target_arch = "wasm32")]
extern crate alloc;

// Re-export odra for downstream usage
pub use odra;

// Core module declarations
pub mod errors;
pub mod events;
pub mod health;
pub mod types;

// Contract modules
pub mod collateral_token;
pub mod debt_engine;
pub mod price_feed;
pub mod registry;
pub mod stablecoin;
