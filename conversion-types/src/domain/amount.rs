//! User-entered monetary amount.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AmountError;

/// Message shown for every rejected amount.
pub const INVALID_AMOUNT_HINT: &str =
    "Please enter an integer or a decimal value with up to 2 floating points.";

/// An amount with at most two typed decimal places.
///
/// Zero and negative values are accepted; no upper bound is enforced.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Longest fractional part a user may type.
    pub const MAX_FRACTION_DIGITS: usize = 2;

    /// Parses user input.
    ///
    /// A fractional part longer than two characters is rejected before any
    /// numeric parse. If the text does not parse, a second attempt is made
    /// with `.0` appended. Non-finite results are rejected.
    pub fn parse(text: &str) -> Result<Self, AmountError> {
        if text.is_empty() {
            return Err(AmountError::Empty);
        }

        let parts: Vec<&str> = text.split('.').collect();
        if parts.len() == 2 && parts[1].chars().count() > Self::MAX_FRACTION_DIGITS {
            return Err(AmountError::TooManyFractionDigits(text.to_string()));
        }

        let value = text
            .parse::<f64>()
            .or_else(|_| format!("{text}.0").parse::<f64>())
            .map_err(|_| AmountError::NotANumber(text.to_string()))?;

        if !value.is_finite() {
            return Err(AmountError::NotANumber(text.to_string()));
        }

        Ok(Self(value))
    }

    /// Wraps an already validated value.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
