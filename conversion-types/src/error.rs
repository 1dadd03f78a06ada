//! Error types for the conversion session.

use crate::ports::StoreError;

/// Rejected amount input. Always recoverable by re-prompting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("Amount cannot be empty")]
    Empty,

    #[error("Amount {0} has more than 2 decimal places")]
    TooManyFractionDigits(String),

    #[error("Amount {0} is not a number")]
    NotANumber(String),
}

/// Rejected `--date` argument. Fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Please make sure to specify a --date / -d flag in YYYY-MM-DD format or 'now' (got {0:?}).")]
    Malformed(String),

    #[error("Please make sure your YYYY-MM-DD format only uses integer values (got {0:?}).")]
    NonInteger(String),

    #[error("{0} is not a real calendar date.")]
    InvalidCalendarDate(String),

    #[error("There's no data for anything before 2015-01-01.")]
    BeforeSupportedRange,

    #[error("This program doesn't have the capabilities to foresee future currency values... yet.")]
    InFuture,
}

/// Unrecoverable failures while running a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Console error: {0}")]
    Console(#[from] std::io::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}
