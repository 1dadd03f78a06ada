//! The single historical date a session converts at.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DateError;

/// First year the rate provider has data for.
pub const EARLIEST_SUPPORTED_YEAR: i32 = 2015;

/// A validated conversion date, rendered as zero-padded `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversionDate(NaiveDate);

impl ConversionDate {
    /// Resolves the `--date` argument against `today`.
    ///
    /// Accepts `now` in any casing, or three `-`-separated integers forming a
    /// real date between 2015-01-01 and `today` inclusive.
    pub fn resolve(input: &str, today: NaiveDate) -> Result<Self, DateError> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("now") {
            return Ok(Self(today));
        }

        let parts: Vec<&str> = input.split('-').collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::Malformed(input.to_string()));
        };

        let (year, month, day) = match (
            year.parse::<i32>(),
            month.parse::<u32>(),
            day.parse::<u32>(),
        ) {
            (Ok(y), Ok(m), Ok(d)) => (y, m, d),
            _ => return Err(DateError::NonInteger(input.to_string())),
        };

        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| DateError::InvalidCalendarDate(input.to_string()))?;

        if date.year() < EARLIEST_SUPPORTED_YEAR {
            return Err(DateError::BeforeSupportedRange);
        }
        if date > today {
            return Err(DateError::InFuture);
        }

        Ok(Self(date))
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for ConversionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
