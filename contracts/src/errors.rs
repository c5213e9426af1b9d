//! Protocol error definitions.

use odra::prelude::*;

/// xUSD protocol errors
#[repr(u16)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EngineError {
    // Configuration errors (1xx)
    ConfigurationMismatch = 100,
    UnsupportedAsset = 101,

    // Amount errors (2xx)
    InvalidAmount = 200,
    InsufficientBalance = 201,

    // Capability errors (3xx)
    TransferFailed = 300,
    MintFailed = 301,
    InvalidPrice = 302,

    // Solvency errors (4xx)
    HealthFactorBroken = 400,
    HealthFactorOk = 401,
    HealthFactorNotImproved = 402,

    // Entry discipline errors (5xx)
    ReentrantCall = 500,

    // Access control errors (6xx)
    Unauthorized = 600,
}

impl EngineError {
    pub const fn message(&self) -> &'static str {
        match self {
            // Configuration
            EngineError::ConfigurationMismatch => "Collateral and price feed lists differ in length",
            EngineError::UnsupportedAsset => "Asset is not registered as collateral",

            // Amounts
            EngineError::InvalidAmount => "Amount must be greater than zero",
            EngineError::InsufficientBalance => "Amount exceeds held balance",

            // Capabilities
            EngineError::TransferFailed => "Token transfer reported failure",
            EngineError::MintFailed => "Stablecoin mint reported failure",
            EngineError::InvalidPrice => "Oracle returned a zero price",

            // Solvency
            EngineError::HealthFactorBroken => "Health factor below minimum",
            EngineError::HealthFactorOk => "Account is healthy, not liquidatable",
            EngineError::HealthFactorNotImproved => "Liquidation did not improve health factor",

            // Entry discipline
            EngineError::ReentrantCall => "Engine re-entered during an operation",

            // Access control
            EngineError::Unauthorized => "Caller is not authorized",
        }
    }
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

impl From<EngineError> for OdraError {
    fn from(error: EngineError) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            OdraError::user(error as u16)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            OdraError::user(error as u16, error.message())
        }
    }
}
