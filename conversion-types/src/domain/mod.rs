//! Domain models for the conversion session.

pub mod amount;
pub mod conversion;
pub mod date;

pub use amount::Amount;
pub use conversion::{ConversionRecord, ConversionRequest, CurrencyPair, RateQuote};
pub use date::ConversionDate;
