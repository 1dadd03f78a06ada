//! Conversion requests, provider quotes and completed records.

use serde::{Deserialize, Serialize};
use std::fmt;

use exchange_rates::CurrencyCode;

use super::{Amount, ConversionDate};

/// Directional (base, target) pair. `EUR -> BGN` and `BGN -> EUR` are distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyPair {
    pub base: CurrencyCode,
    pub target: CurrencyCode,
}

impl CurrencyPair {
    pub fn new(base: CurrencyCode, target: CurrencyCode) -> Self {
        Self { base, target }
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.base, self.target)
    }
}

/// One fully validated set of prompt answers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest {
    pub amount: Amount,
    pub base: CurrencyCode,
    pub target: CurrencyCode,
}

impl ConversionRequest {
    pub fn new(amount: Amount, base: CurrencyCode, target: CurrencyCode) -> Self {
        Self {
            amount,
            base,
            target,
        }
    }

    pub fn pair(&self) -> CurrencyPair {
        CurrencyPair::new(self.base, self.target)
    }
}

/// Raw per-unit rate returned by a rate provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateQuote {
    pub date: ConversionDate,
    pub base: CurrencyCode,
    pub target: CurrencyCode,
    pub rate: f64,
}

/// One completed conversion, as written to the output file.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub date: ConversionDate,
    pub amount: Amount,
    pub base_currency: CurrencyCode,
    pub target_currency: CurrencyCode,
    pub converted_amount: f64,
}

impl ConversionRecord {
    pub fn new(date: ConversionDate, request: &ConversionRequest, converted_amount: f64) -> Self {
        Self {
            date,
            amount: request.amount,
            base_currency: request.base,
            target_currency: request.target,
            converted_amount,
        }
    }
}

impl fmt::Display for ConversionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {} = {:.2} {}",
            self.date, self.amount, self.base_currency, self.converted_amount, self.target_currency
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_record_key_order() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 8).unwrap();
        let date = ConversionDate::resolve("2024-06-08", today).unwrap();
        let request =
            ConversionRequest::new(Amount::new(1.0), CurrencyCode::EUR, CurrencyCode::BGN);
        let record = ConversionRecord::new(date, &request, 1.95);

        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"date":"2024-06-08","amount":1.0,"base_currency":"EUR","target_currency":"BGN","converted_amount":1.95}"#
        );
    }

    #[test]
    fn test_record_display() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 8).unwrap();
        let date = ConversionDate::resolve("now", today).unwrap();
        let request =
            ConversionRequest::new(Amount::new(3.0), CurrencyCode::USD, CurrencyCode::EUR);
        let record = ConversionRecord::new(date, &request, 3.7);
        assert_eq!(record.to_string(), "2024-06-08: 3 USD = 3.70 EUR");
    }

    #[test]
    fn test_pair_is_directional() {
        let forward = CurrencyPair::new(CurrencyCode::EUR, CurrencyCode::USD);
        let inverse = CurrencyPair::new(CurrencyCode::USD, CurrencyCode::EUR);
        assert_ne!(forward, inverse);
        assert_eq!(forward.to_string(), "EUR -> USD");
    }
}
