//! Debt Engine Contract
//!
//! The top-level ledger: per-account collateral balances, per-account xUSD
//! debt, and the operations that mutate them. Every mutating entry point
//! enforces the solvency invariant: discounted collateral value must cover
//! outstanding debt (health factor >= 1.0) for the acting account.
//!
//! Entry discipline (checks-effects-interactions):
//! 1. take the reentrancy latch
//! 2. validate preconditions
//! 3. apply ledger effects and emit the domain event
//! 4. perform cross-contract interactions (token moves, mint/burn)
//! 5. re-validate the invariant where the operation requires it
//! 6. release the latch
//!
//! Liquidation additionally emits a terminal `Liquidated` summary event
//! once both legs and the re-validation have succeeded.
//!
//! A revert at any step rolls the whole call back; there is no partial
//! commit.

use odra::casper_types::{runtime_args, RuntimeArgs, U256};
use odra::prelude::*;
use odra::CallDef;

use crate::errors::EngineError;
use crate::events::{CollateralDeposited, CollateralRedeemed, DebtBurned, DebtMinted, Liquidated};
use crate::health;
use crate::registry::CollateralRegistry;
use crate::types::{AccountSummary, LiquidationOutcome};

/// Debt Engine Contract
#[odra::module(events = [
    CollateralDeposited,
    CollateralRedeemed,
    DebtMinted,
    DebtBurned,
    Liquidated
])]
pub struct DebtEngine {
    /// Supported collateral assets and their price feeds
    registry: SubModule<CollateralRegistry>,
    /// xUSD stablecoin contract address
    stablecoin: Var<Address>,
    /// Collateral balances per (account, token)
    collateral: Mapping<(Address, Address), U256>,
    /// Outstanding xUSD debt per account
    debt: Mapping<Address, U256>,
    /// Reentrancy latch, held for the duration of one operation
    entered: Var<bool>,
}

#[odra::module]
impl DebtEngine {
    /// Initialize the engine with parallel lists of collateral tokens and
    /// their price feeds, plus the stablecoin address. The asset set is
    /// immutable afterwards.
    pub fn init(
        &mut self,
        collateral_tokens: Vec<Address>,
        price_feeds: Vec<Address>,
        stablecoin: Address,
    ) {
        if collateral_tokens.len() != price_feeds.len() {
            self.env().revert(EngineError::ConfigurationMismatch);
        }
        for (token, feed) in collateral_tokens.iter().zip(price_feeds.iter()) {
            self.registry.register(*token, *feed);
        }
        self.stablecoin.set(stablecoin);
        self.entered.set(false);
    }

    // ========== Mutating Operations ==========

    /// Deposit collateral into the caller's account
    pub fn deposit_collateral(&mut self, token: Address, amount: U256) {
        self.enter();
        let caller = self.env().caller();
        self.deposit_collateral_internal(caller, token, amount);
        self.exit();
    }

    /// Mint xUSD against the caller's collateral
    pub fn mint_debt(&mut self, amount: U256) {
        self.enter();
        let caller = self.env().caller();
        self.mint_debt_internal(caller, amount);
        self.exit();
    }

    /// Deposit collateral and mint xUSD as one atomic unit
    pub fn deposit_and_mint(
        &mut self,
        token: Address,
        collateral_amount: U256,
        debt_amount: U256,
    ) {
        self.enter();
        let caller = self.env().caller();
        self.deposit_collateral_internal(caller, token, collateral_amount);
        self.mint_debt_internal(caller, debt_amount);
        self.exit();
    }

    /// Withdraw collateral from the caller's account.
    ///
    /// The collateral leaves the ledger before the final solvency check;
    /// a redemption that would break the invariant fails after the
    /// transfer has been attempted and rolls back in full.
    pub fn redeem_collateral(&mut self, token: Address, amount: U256) {
        self.enter();
        let caller = self.env().caller();
        self.redeem_collateral_internal(token, amount, caller, caller);
        self.require_healthy(caller);
        self.exit();
    }

    /// Repay xUSD debt for the caller.
    ///
    /// Burning can only improve the health factor; the final check is a
    /// safety net rather than an expected failure path.
    pub fn burn_debt(&mut self, amount: U256) {
        self.enter();
        let caller = self.env().caller();
        self.burn_debt_internal(amount, caller, caller);
        self.require_healthy(caller);
        self.exit();
    }

    /// Repay debt and withdraw collateral as one atomic unit;
    /// burns first so the withdrawal is judged against the reduced debt
    pub fn redeem_collateral_for_debt(
        &mut self,
        token: Address,
        collateral_amount: U256,
        debt_amount: U256,
    ) {
        self.enter();
        let caller = self.env().caller();
        self.burn_debt_internal(debt_amount, caller, caller);
        self.redeem_collateral_internal(token, collateral_amount, caller, caller);
        self.require_healthy(caller);
        self.exit();
    }

    /// Liquidate an unhealthy account.
    ///
    /// The caller repays `debt_to_cover` of the target's xUSD debt and
    /// receives the equivalent collateral plus a 10% bonus. Fails if the
    /// target is healthy, if the seizure does not strictly improve the
    /// target's health factor, or if it would leave the caller insolvent.
    ///
    /// When the target holds less collateral than the seizure requires
    /// (protocol at or under 100% collateralization) the call fails with
    /// `InsufficientBalance`; that regime has no remediation path here.
    pub fn liquidate(
        &mut self,
        token: Address,
        target: Address,
        debt_to_cover: U256,
    ) -> LiquidationOutcome {
        self.enter();
        if debt_to_cover.is_zero() {
            self.env().revert(EngineError::InvalidAmount);
        }
        let liquidator = self.env().caller();

        let starting_factor = self.health_factor_of(target);
        if health::is_healthy(starting_factor) {
            self.env().revert(EngineError::HealthFactorOk);
        }

        let price = self.read_price(token);
        let seized = health::token_amount_from_usd(price, debt_to_cover);
        let bonus = seized * U256::from(health::LIQUIDATION_BONUS)
            / U256::from(health::LIQUIDATION_PRECISION);
        let total_seized = seized + bonus;

        self.redeem_collateral_internal(token, total_seized, target, liquidator);
        self.burn_debt_internal(debt_to_cover, target, liquidator);

        let ending_factor = self.health_factor_of(target);
        if ending_factor <= starting_factor {
            self.env().revert(EngineError::HealthFactorNotImproved);
        }
        self.require_healthy(liquidator);

        self.env().emit_event(Liquidated {
            target,
            liquidator,
            token,
            debt_covered: debt_to_cover,
            collateral_seized: total_seized,
        });
        self.exit();

        LiquidationOutcome {
            target,
            token,
            debt_covered: debt_to_cover,
            collateral_seized: total_seized,
            bonus_paid: bonus,
        }
    }

    // ========== Query Functions ==========

    /// Debt and total collateral value for an account
    pub fn get_account_information(&self, account: Address) -> AccountSummary {
        AccountSummary {
            debt: self.debt_of(account),
            collateral_value_usd: self.account_collateral_value(account),
        }
    }

    /// Current health factor of an account (U256::MAX when debt is zero)
    pub fn get_health_factor(&self, account: Address) -> U256 {
        self.health_factor_of(account)
    }

    /// Total USD value of an account's collateral, 18 decimals
    pub fn get_account_collateral_value(&self, account: Address) -> U256 {
        self.account_collateral_value(account)
    }

    /// Collateral balance of an account for one token
    pub fn get_collateral_balance(&self, account: Address, token: Address) -> U256 {
        self.collateral.get(&(account, token)).unwrap_or(U256::zero())
    }

    /// USD value of `amount` of a collateral token at the current price
    pub fn get_usd_value(&self, token: Address, amount: U256) -> U256 {
        health::usd_value(self.read_price(token), amount)
    }

    /// Token amount equivalent to `usd_amount` at the current price
    pub fn get_token_amount_from_usd(&self, token: Address, usd_amount: U256) -> U256 {
        health::token_amount_from_usd(self.read_price(token), usd_amount)
    }

    /// Supported collateral tokens, in registration order
    pub fn get_collateral_tokens(&self) -> Vec<Address> {
        self.registry.all_tokens()
    }

    /// Price feed for a collateral token
    pub fn get_feed(&self, token: Address) -> Option<Address> {
        self.registry.feed_of(token)
    }

    /// xUSD stablecoin address
    pub fn get_stablecoin(&self) -> Option<Address> {
        self.stablecoin.get()
    }

    // ========== Constant Accessors ==========

    /// Liquidation threshold numerator (50 = 50% haircut)
    pub fn get_liquidation_threshold(&self) -> u64 {
        health::LIQUIDATION_THRESHOLD
    }

    /// Denominator for threshold and bonus percentages
    pub fn get_liquidation_precision(&self) -> u64 {
        health::LIQUIDATION_PRECISION
    }

    /// Liquidator bonus numerator (10 = 10%)
    pub fn get_liquidation_bonus(&self) -> u64 {
        health::LIQUIDATION_BONUS
    }

    /// Minimum health factor, 18-decimal fixed point
    pub fn get_min_health_factor(&self) -> U256 {
        U256::from(health::MIN_HEALTH_FACTOR)
    }

    /// Internal fixed-point precision (1e18)
    pub fn get_precision(&self) -> U256 {
        U256::from(health::PRECISION)
    }

    /// Rescale factor applied to feed prices (1e10)
    pub fn get_additional_feed_precision(&self) -> U256 {
        U256::from(health::ADDITIONAL_FEED_PRECISION)
    }

    // ========== Internal: operations ==========

    fn deposit_collateral_internal(&mut self, account: Address, token: Address, amount: U256) {
        if amount.is_zero() {
            self.env().revert(EngineError::InvalidAmount);
        }
        if !self.registry.is_supported(token) {
            self.env().revert(EngineError::UnsupportedAsset);
        }

        let held = self.collateral.get(&(account, token)).unwrap_or(U256::zero());
        self.collateral.set(&(account, token), held + amount);
        self.env().emit_event(CollateralDeposited { account, token, amount });

        self.pull_collateral(token, account, amount);
    }

    fn mint_debt_internal(&mut self, account: Address, amount: U256) {
        if amount.is_zero() {
            self.env().revert(EngineError::InvalidAmount);
        }

        let owed = self.debt_of(account);
        self.debt.set(&account, owed + amount);
        self.require_healthy(account);
        self.env().emit_event(DebtMinted { account, amount });

        self.mint_stablecoin(account, amount);
    }

    /// Move collateral out of `from`'s ledger entry to the `to` address.
    /// Callers re-check `from`'s health factor where the operation
    /// requires it; liquidation passes a different `to` than `from`.
    fn redeem_collateral_internal(
        &mut self,
        token: Address,
        amount: U256,
        from: Address,
        to: Address,
    ) {
        if amount.is_zero() {
            self.env().revert(EngineError::InvalidAmount);
        }

        let held = self.collateral.get(&(from, token)).unwrap_or(U256::zero());
        if held < amount {
            self.env().revert(EngineError::InsufficientBalance);
        }
        self.collateral.set(&(from, token), held - amount);
        self.env().emit_event(CollateralRedeemed { from, to, token, amount });

        self.push_collateral(token, to, amount);
    }

    /// Reduce `on_behalf_of`'s recorded debt and destroy the equivalent
    /// xUSD, pulled from `paid_by`.
    fn burn_debt_internal(&mut self, amount: U256, on_behalf_of: Address, paid_by: Address) {
        if amount.is_zero() {
            self.env().revert(EngineError::InvalidAmount);
        }

        let owed = self.debt_of(on_behalf_of);
        if owed < amount {
            self.env().revert(EngineError::InsufficientBalance);
        }
        self.debt.set(&on_behalf_of, owed - amount);
        self.env().emit_event(DebtBurned { on_behalf_of, paid_by, amount });

        self.pull_and_burn_stablecoin(paid_by, amount);
    }

    // ========== Internal: valuation ==========

    fn debt_of(&self, account: Address) -> U256 {
        self.debt.get(&account).unwrap_or(U256::zero())
    }

    fn account_collateral_value(&self, account: Address) -> U256 {
        let mut total = U256::zero();
        for token in self.registry.all_tokens() {
            let held = self.collateral.get(&(account, token)).unwrap_or(U256::zero());
            if held.is_zero() {
                continue;
            }
            total = total + health::usd_value(self.read_price(token), held);
        }
        total
    }

    fn health_factor_of(&self, account: Address) -> U256 {
        health::health_factor(self.debt_of(account), self.account_collateral_value(account))
    }

    fn require_healthy(&self, account: Address) {
        if !health::is_healthy(self.health_factor_of(account)) {
            self.env().revert(EngineError::HealthFactorBroken);
        }
    }

    fn read_price(&self, token: Address) -> U256 {
        let feed = match self.registry.feed_of(token) {
            Some(feed) => feed,
            None => self.env().revert(EngineError::UnsupportedAsset),
        };
        let call_def = CallDef::new("get_price", false, RuntimeArgs::new());
        let price: U256 = self.env().call_contract(feed, call_def);
        if price.is_zero() {
            self.env().revert(EngineError::InvalidPrice);
        }
        price
    }

    // ========== Internal: interactions ==========

    fn pull_collateral(&self, token: Address, from: Address, amount: U256) {
        let args = runtime_args! {
            "owner" => from,
            "recipient" => self.env().self_address(),
            "amount" => amount
        };
        let call_def = CallDef::new("transfer_from", true, args);
        let ok: bool = self.env().call_contract(token, call_def);
        if !ok {
            self.env().revert(EngineError::TransferFailed);
        }
    }

    fn push_collateral(&self, token: Address, to: Address, amount: U256) {
        let args = runtime_args! {
            "recipient" => to,
            "amount" => amount
        };
        let call_def = CallDef::new("transfer", true, args);
        let ok: bool = self.env().call_contract(token, call_def);
        if !ok {
            self.env().revert(EngineError::TransferFailed);
        }
    }

    fn mint_stablecoin(&self, to: Address, amount: U256) {
        let stablecoin = self.stablecoin_address();
        let args = runtime_args! {
            "to" => to,
            "amount" => amount
        };
        let call_def = CallDef::new("mint", true, args);
        let ok: bool = self.env().call_contract(stablecoin, call_def);
        if !ok {
            self.env().revert(EngineError::MintFailed);
        }
    }

    fn pull_and_burn_stablecoin(&self, from: Address, amount: U256) {
        let stablecoin = self.stablecoin_address();

        let args = runtime_args! {
            "owner" => from,
            "recipient" => self.env().self_address(),
            "amount" => amount
        };
        let call_def = CallDef::new("transfer_from", true, args);
        let ok: bool = self.env().call_contract(stablecoin, call_def);
        if !ok {
            self.env().revert(EngineError::TransferFailed);
        }

        let args = runtime_args! {
            "amount" => amount
        };
        let call_def = CallDef::new("burn", true, args);
        self.env().call_contract::<()>(stablecoin, call_def);
    }

    fn stablecoin_address(&self) -> Address {
        match self.stablecoin.get() {
            Some(address) => address,
            None => self.env().revert(EngineError::ConfigurationMismatch),
        }
    }

    // ========== Internal: entry discipline ==========

    fn enter(&mut self) {
        if self.entered.get().unwrap_or(false) {
            self.env().revert(EngineError::ReentrantCall);
        }
        self.entered.set(true);
    }

    fn exit(&mut self) {
        self.entered.set(false);
    }
}
