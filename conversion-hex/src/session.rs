//! Session state and how a session ends.

use std::path::PathBuf;

use conversion_types::ConversionDate;

use crate::{OutputLog, RateCache};

/// Printed whenever a session ends without going through `end`.
pub const PREMATURE_EXIT_WARNING: &str =
    "Type out 'end' instead of forcing an exit because the program won't write it's output otherwise!";

/// State owned by one run of the converter.
///
/// Every record appended here carries `date`.
#[derive(Debug)]
pub struct Session {
    date: ConversionDate,
    pub(crate) cache: RateCache,
    pub(crate) output: OutputLog,
}

impl Session {
    pub fn new(date: ConversionDate) -> Self {
        Self {
            date,
            cache: RateCache::new(),
            output: OutputLog::new(),
        }
    }

    pub fn date(&self) -> ConversionDate {
        self.date
    }

    pub fn cache(&self) -> &RateCache {
        &self.cache
    }

    pub fn output(&self) -> &OutputLog {
        &self.output
    }
}

/// Terminal state of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// `end` was entered and the records were written to this path.
    Saved(PathBuf),
    /// `end` was entered but the user chose not to write anything.
    NotSaved,
    /// Input was cut off (interrupt or closed stdin). Nothing was written.
    Interrupted,
}

impl SessionEnd {
    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            SessionEnd::Saved(_) => 0,
            SessionEnd::Interrupted => 1,
            SessionEnd::NotSaved => 2,
        }
    }
}
