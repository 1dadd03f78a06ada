//! Rate provider port.
//!
//! This trait defines the interface for historical exchange rate services.
//! Implementations can be HTTP clients, mock providers, etc.

use exchange_rates::CurrencyCode;

use crate::domain::{ConversionDate, RateQuote};

/// Error type for rate lookups. Never fatal to a session.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Provider returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Invalid response body: {0}")]
    InvalidBody(String),

    #[error("Rate not available for {0} -> {1}")]
    MissingRate(CurrencyCode, CurrencyCode),
}

/// Port trait for historical rate providers.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync {
    /// Get the rate on `date`: how many units of `target` one unit of `base` buys.
    async fn fetch(
        &self,
        date: ConversionDate,
        base: CurrencyCode,
        target: CurrencyCode,
    ) -> Result<RateQuote, ProviderError>;
}
