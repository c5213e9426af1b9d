//! xUSD Stablecoin Contract
//!
//! CEP-18 compatible synthetic dollar with engine-controlled minting.
//! Only authorized minters (the debt engine) can create supply; burning
//! destroys tokens from the caller's own balance.
//!
//! `transfer` and `transfer_from` report failure by returning `false`
//! instead of reverting, so the engine can roll an operation back and
//! surface `TransferFailed` itself. `burn` fails loudly.

use odra::casper_types::U256;
use odra::prelude::*;

use crate::errors::EngineError;

/// xUSD Stablecoin Contract
#[odra::module]
pub struct XUsd {
    /// Token name
    name: Var<String>,
    /// Token symbol
    symbol: Var<String>,
    /// Decimals (18 for xUSD)
    decimals: Var<u8>,
    /// Total supply
    total_supply: Var<U256>,
    /// Balance mapping
    balances: Mapping<Address, U256>,
    /// Allowance mapping (owner -> spender -> amount)
    allowances: Mapping<(Address, Address), U256>,
    /// Admin account (manages the minter set)
    admin: Var<Address>,
    /// Authorized minters (the debt engine)
    authorized_minters: Mapping<Address, bool>,
    /// Optional supply cap (0 = unlimited)
    supply_cap: Var<U256>,
}

#[odra::module]
impl XUsd {
    /// Initialize the stablecoin; the deployer becomes admin
    pub fn init(&mut self) {
        self.name.set(String::from("xUSD"));
        self.symbol.set(String::from("xUSD"));
        self.decimals.set(18);
        self.total_supply.set(U256::zero());
        self.admin.set(self.env().caller());
        self.supply_cap.set(U256::zero());
    }

    // ========== CEP-18 Standard Functions ==========

    /// Get token name
    pub fn name(&self) -> String {
        self.name.get().unwrap_or_else(|| String::from("xUSD"))
    }

    /// Get token symbol
    pub fn symbol(&self) -> String {
        self.symbol.get().unwrap_or_else(|| String::from("xUSD"))
    }

    /// Get decimals
    pub fn decimals(&self) -> u8 {
        self.decimals.get().unwrap_or(18)
    }

    /// Get total supply
    pub fn total_supply(&self) -> U256 {
        self.total_supply.get().unwrap_or(U256::zero())
    }

    /// Get balance of an account
    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).unwrap_or(U256::zero())
    }

    /// Get allowance for spender
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get(&(owner, spender)).unwrap_or(U256::zero())
    }

    /// Transfer tokens to recipient; reports failure instead of reverting
    pub fn transfer(&mut self, recipient: Address, amount: U256) -> bool {
        let sender = self.env().caller();
        self.transfer_internal(sender, recipient, amount)
    }

    /// Approve spender to spend tokens
    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        let owner = self.env().caller();
        self.allowances.set(&(owner, spender), amount);
        true
    }

    /// Transfer tokens from owner to recipient using an allowance;
    /// reports failure instead of reverting
    pub fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool {
        let spender = self.env().caller();

        let current_allowance = self.allowance(owner, spender);
        if current_allowance < amount {
            return false;
        }
        if !self.transfer_internal(owner, recipient, amount) {
            return false;
        }
        self.allowances.set(&(owner, spender), current_allowance - amount);
        true
    }

    // ========== Protocol Functions (Restricted) ==========

    /// Mint new tokens (only authorized minters).
    /// Reports `false` when the supply cap would be exceeded.
    pub fn mint(&mut self, to: Address, amount: U256) -> bool {
        self.require_authorized_minter();
        if amount.is_zero() {
            self.env().revert(EngineError::InvalidAmount);
        }

        let new_supply = self.total_supply() + amount;
        let cap = self.supply_cap.get().unwrap_or(U256::zero());
        if !cap.is_zero() && new_supply > cap {
            return false;
        }

        let current_balance = self.balance_of(to);
        self.balances.set(&to, current_balance + amount);
        self.total_supply.set(new_supply);
        true
    }

    /// Burn tokens from the caller's balance; fails loudly
    pub fn burn(&mut self, amount: U256) {
        if amount.is_zero() {
            self.env().revert(EngineError::InvalidAmount);
        }

        let caller = self.env().caller();
        let current_balance = self.balance_of(caller);
        if current_balance < amount {
            self.env().revert(EngineError::InsufficientBalance);
        }

        self.balances.set(&caller, current_balance - amount);
        self.total_supply.set(self.total_supply() - amount);
    }

    // ========== Admin Functions ==========

    /// Add an authorized minter (admin only)
    pub fn add_minter(&mut self, minter: Address) {
        self.require_admin();
        self.authorized_minters.set(&minter, true);
    }

    /// Remove an authorized minter (admin only)
    pub fn remove_minter(&mut self, minter: Address) {
        self.require_admin();
        self.authorized_minters.set(&minter, false);
    }

    /// Check if address is an authorized minter
    pub fn is_minter(&self, account: Address) -> bool {
        self.authorized_minters.get(&account).unwrap_or(false)
    }

    /// Set the supply cap, 0 for unlimited (admin only)
    pub fn set_supply_cap(&mut self, cap: U256) {
        self.require_admin();
        self.supply_cap.set(cap);
    }

    /// Get the supply cap
    pub fn get_supply_cap(&self) -> U256 {
        self.supply_cap.get().unwrap_or(U256::zero())
    }

    // ========== Internal Functions ==========

    fn transfer_internal(&mut self, from: Address, to: Address, amount: U256) -> bool {
        let from_balance = self.balance_of(from);
        if from_balance < amount {
            return false;
        }

        self.balances.set(&from, from_balance - amount);
        let to_balance = self.balance_of(to);
        self.balances.set(&to, to_balance + amount);
        true
    }

    fn require_authorized_minter(&self) {
        let caller = self.env().caller();
        if !self.is_minter(caller) {
            self.env().revert(EngineError::Unauthorized);
        }
    }

    fn require_admin(&self) {
        let caller = self.env().caller();
        if self.admin.get() != Some(caller) {
            self.env().revert(EngineError::Unauthorized);
        }
    }
}
