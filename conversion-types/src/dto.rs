//! Data Transfer Objects (DTOs) for the rate provider wire format.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use exchange_rates::CurrencyCode;

/// Body of a successful `GET /historical` response.
///
/// ```json
/// { "date": "2024-06-08", "base": "EUR", "results": { "BGN": 1.9558 }, "ms": 3 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalRatesResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    /// Target currency code -> units of target per one unit of base
    pub results: HashMap<String, f64>,
}

impl HistoricalRatesResponse {
    /// Looks up the rate quoted for `target`.
    pub fn rate_for(&self, target: CurrencyCode) -> Option<f64> {
        self.results.get(target.code()).copied()
    }
}
