//! ISO 4217 Currency Registry and Conversion Arithmetic
//!
//! Currencies are declared once in the `define_iso_4217!` invocation below.
//! The macro generates the `CurrencyCode` enum together with its lookup,
//! display and parsing support, so the code list stays pure data.
//!
//! # Adding a New Currency
//! Append the three-letter code to the macro invocation:
//! ```ignore
//! define_iso_4217! {
//!     // ... existing codes ...
//!     ZWG,
//! }
//! ```
//!
//! # Example
//! ```
//! use exchange_rates::{CurrencyCode, convert_at_rate};
//!
//! let eur: CurrencyCode = "eur".parse().unwrap();
//! assert_eq!(eur, CurrencyCode::EUR);
//!
//! // Finance rounds down: 3 * 1.2345 = 3.7035 -> 3.70
//! assert_eq!(convert_at_rate(3.0, 1.2345), 3.7);
//! ```

use std::fmt;
use std::str::FromStr;

/// Error returned when a string is not a known ISO 4217 code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurrencyError {
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

// ─────────────────────────────────────────────────────────────────────────────
// THE MACRO: Defines the CurrencyCode enum and its runtime lookups
// ─────────────────────────────────────────────────────────────────────────────

/// Generates `CurrencyCode` from a list of ISO 4217 codes.
///
/// # Syntax
/// ```ignore
/// define_iso_4217! {
///     AED, AFN, ALL,
/// }
/// ```
#[macro_export]
macro_rules! define_iso_4217 {
    ( $( $code:ident ),* $(,)? ) => {
        /// A validated ISO 4217 three-letter currency code.
        #[allow(clippy::upper_case_acronyms)]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(rename_all = "UPPERCASE")]
        pub enum CurrencyCode {
            $($code),*
        }

        impl CurrencyCode {
            /// The upper-case three-letter code.
            pub fn code(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$code => stringify!($code)),*
                }
            }

            /// Every registered code, in declaration order.
            pub fn all() -> &'static [CurrencyCode] {
                &[$(CurrencyCode::$code),*]
            }
        }
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// CURRENCY DEFINITIONS - Add new codes here!
// ─────────────────────────────────────────────────────────────────────────────

define_iso_4217! {
    AED, AFN, ALL, AMD, ANG, AOA, ARS, AUD, AWG, AZN,
    BAM, BBD, BDT, BGN, BHD, BIF, BMD, BND, BOB, BOV,
    BRL, BSD, BTN, BWP, BYN, BZD, CAD, CDF, CHE, CHF,
    CHW, CLF, CLP, CNY, COP, COU, CRC, CUC, CUP, CVE,
    CZK, DJF, DKK, DOP, DZD, EGP, ERN, ETB, EUR, FJD,
    FKP, FOK, GBP, GEL, GGP, GHS, GIP, GMD, GNF, GTQ,
    GYD, HKD, HNL, HRK, HTG, HUF, IDR, ILS, IMP, INR,
    IQD, IRR, ISK, JEP, JMD, JOD, JPY, KES, KGS, KHR,
    KID, KMF, KRW, KWD, KYD, KZT, LAK, LBP, LKR, LRD,
    LSL, LYD, MAD, MDL, MGA, MKD, MMK, MNT, MOP, MRU,
    MUR, MVR, MWK, MXN, MXV, MYR, MZN, NAD, NGN, NIO,
    NOK, NPR, NZD, OMR, PAB, PEN, PGK, PHP, PKR, PLN,
    PYG, QAR, RON, RSD, RUB, RWF, SAR, SBD, SCR, SDG,
    SEK, SGD, SHP, SLE, SLL, SOS, SRD, SSP, STN, SVC,
    SYP, SZL, THB, TJS, TMT, TND, TOP, TRY, TTD, TVD,
    TWD, TZS, UAH, UGX, USD, USN, UYI, UYU, UYW, UZS,
    VED, VES, VND, VUV, WST, XAF, XAG, XAU, XBA, XBB,
    XBC, XBD, XCD, XDR, XOF, XPD, XPF, XPT, XSU, XTS,
    XUA, XXX, YER, ZAR, ZMW, ZWL,
}

/// Reference list shown to users who enter an unknown code.
pub const ISO_4217_REFERENCE_URL: &str =
    "https://en.wikipedia.org/wiki/ISO_4217#List_of_ISO_4217_currency_codes";

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyError;

    /// Case-insensitive lookup against the registry.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        CurrencyCode::all()
            .iter()
            .copied()
            .find(|c| c.code() == upper)
            .ok_or_else(|| CurrencyError::UnknownCurrency(s.to_string()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion Arithmetic
// ─────────────────────────────────────────────────────────────────────────────

/// Floors a value to the hundredths place.
///
/// Finance rounds down: `floor(value * 100) / 100`.
pub fn floor_to_cents(value: f64) -> f64 {
    (value * 100.0).floor() / 100.0
}

/// Converts `amount` at a per-unit `rate`, floored to cents.
pub fn convert_at_rate(amount: f64, rate: f64) -> f64 {
    floor_to_cents(amount * rate)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_size() {
        assert_eq!(CurrencyCode::all().len(), 186);
    }

    #[test]
    fn test_every_code_parses_in_any_casing() {
        for &currency in CurrencyCode::all() {
            let upper = currency.code();
            let lower = upper.to_lowercase();
            let mixed: String = upper
                .chars()
                .enumerate()
                .map(|(i, c)| if i % 2 == 0 { c.to_ascii_lowercase() } else { c })
                .collect();

            assert_eq!(upper.parse::<CurrencyCode>().unwrap(), currency);
            assert_eq!(lower.parse::<CurrencyCode>().unwrap(), currency);
            assert_eq!(mixed.parse::<CurrencyCode>().unwrap(), currency);
        }
    }

    #[test]
    fn test_unknown_codes_rejected() {
        for input in ["", "EU", "EURO", "ABC", "QQQ", "end", "12E"] {
            assert_eq!(
                input.parse::<CurrencyCode>(),
                Err(CurrencyError::UnknownCurrency(input.to_string()))
            );
        }
    }

    #[test]
    fn test_currency_code_display() {
        assert_eq!(CurrencyCode::BGN.to_string(), "BGN");
        assert_eq!(CurrencyCode::TRY.code(), "TRY");
    }

    #[test]
    fn test_currency_code_serde() {
        let json = serde_json::to_string(&CurrencyCode::EUR).unwrap();
        assert_eq!(json, "\"EUR\"");
        let back: CurrencyCode = serde_json::from_str("\"JPY\"").unwrap();
        assert_eq!(back, CurrencyCode::JPY);
    }

    #[test]
    fn test_floor_not_round() {
        assert_eq!(convert_at_rate(3.0, 1.2345), 3.7);
        assert_eq!(convert_at_rate(1.0, 1.9558), 1.95);
        assert_eq!(convert_at_rate(10.0, 0.5), 5.0);
    }

    #[test]
    fn test_floor_negative_goes_down() {
        assert_eq!(floor_to_cents(-1.234), -1.24);
    }
}
