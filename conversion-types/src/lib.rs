//! # Conversion Types
//!
//! Domain types and port traits for the currency conversion session.
//! This crate has ZERO external IO dependencies - only data structures,
//! validation rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Amount, ConversionDate, ConversionRecord)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Wire shapes of the rate provider
//! - `error/` - Validation and session error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Amount, ConversionDate, ConversionRecord, ConversionRequest, CurrencyPair, RateQuote,
};
pub use dto::*;
pub use error::{AmountError, DateError, SessionError};
pub use exchange_rates::{CurrencyCode, CurrencyError};
pub use ports::{Console, OutputStore, ProviderError, RateProvider, StoreError};
