//! Date types produced by the extraction engine.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A normalized expiration date.
///
/// Always semantically valid: the only way to build one is from a
/// [`NaiveDate`], so the day count is consistent with the month and
/// year by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryDate {
    /// Four-digit calendar year.
    pub year: i32,
    /// Month number (1-12).
    pub month: u32,
    /// Day of month (1-31).
    pub day: u32,
}

impl ExpiryDate {
    /// Convert back to a `chrono` date.
    pub fn to_naive(self) -> NaiveDate {
        // Fields came from a NaiveDate, so this cannot fail.
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(1970, 1, 1).unwrap())
    }
}

impl From<NaiveDate> for ExpiryDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Outcome of a single extraction call.
///
/// `NotFound` covers both "no date substring present" and "a substring
/// matched but was not a real calendar date" - the engine never errors
/// for bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "date", rename_all = "snake_case")]
pub enum ExtractionResult {
    /// A valid date was extracted.
    Found(ExpiryDate),
    /// No usable date in the input.
    NotFound,
}

impl ExtractionResult {
    /// Whether a date was extracted.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The extracted date, if any.
    pub fn date(&self) -> Option<ExpiryDate> {
        match self {
            Self::Found(date) => Some(*date),
            Self::NotFound => None,
        }
    }
}

impl From<Option<NaiveDate>> for ExtractionResult {
    fn from(date: Option<NaiveDate>) -> Self {
        match date {
            Some(d) => Self::Found(d.into()),
            None => Self::NotFound,
        }
    }
}

/// Boundary-level report for one scanned text blob.
///
/// Carries the extraction result plus everything the caller may want
/// to surface to a user: non-fatal warnings and timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Extraction outcome.
    pub result: ExtractionResult,
    /// Non-fatal warnings (invalid matches, upstream failures).
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}
