//! Collateral asset registry.
//!
//! Maps each supported collateral token to its price feed and keeps the
//! registration order. Populated once while the engine is constructed and
//! read-only afterwards; the ordered list drives deterministic valuation
//! summation.

use odra::prelude::*;

use crate::errors::EngineError;

/// Registry of supported collateral assets, embedded in the engine
#[odra::module]
pub struct CollateralRegistry {
    /// Price feed per collateral token
    feeds: Mapping<Address, Address>,
    /// Supported tokens in registration order
    tokens: Var<Vec<Address>>,
}

#[odra::module]
impl CollateralRegistry {
    /// Register a collateral token with its price feed.
    /// Only called from the engine constructor; there is no removal.
    /// A token can be registered once; a duplicate would double-count
    /// the asset during valuation.
    pub fn register(&mut self, token: Address, feed: Address) {
        if self.is_supported(token) {
            self.env().revert(EngineError::ConfigurationMismatch);
        }
        self.feeds.set(&token, feed);
        let mut tokens = self.tokens.get().unwrap_or_default();
        tokens.push(token);
        self.tokens.set(tokens);
    }

    /// Whether a token is registered as collateral
    pub fn is_supported(&self, token: Address) -> bool {
        self.feeds.get(&token).is_some()
    }

    /// Price feed for a token, if registered
    pub fn feed_of(&self, token: Address) -> Option<Address> {
        self.feeds.get(&token)
    }

    /// All supported tokens, in registration order
    pub fn all_tokens(&self) -> Vec<Address> {
        self.tokens.get().unwrap_or_default()
    }
}
