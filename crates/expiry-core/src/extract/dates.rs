//! Date candidate interpretation for expiry extraction.

use chrono::NaiveDate;
use regex::Captures;

use crate::error::ExtractionError;

use super::patterns::{MONTH_NAME_DATE, NUMERIC_DATE};
use super::{ExtractionMatch, FieldExtractor};

/// Which pattern produced a capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureKind {
    /// `M/D/YY` or `M/D/YYYY`.
    Numeric,
    /// `MON D YY` or `MON D YYYY`.
    MonthName,
}

/// A syntactic date match, before calendar validation.
///
/// Named fields instead of positional group indices; the regex groups
/// never leak past this module.
#[derive(Debug, Clone)]
pub struct DateCapture {
    pub kind: CaptureKind,
    /// Month digits, or a 3-letter abbreviation for `MonthName`.
    pub month_raw: String,
    pub day_raw: String,
    pub year_raw: String,
    /// Full matched substring.
    pub source: String,
    /// Byte span within the normalized (uppercased) text.
    pub span: (usize, usize),
}

impl DateCapture {
    pub(crate) fn numeric(caps: &Captures<'_>) -> Self {
        let full = caps.get(0).unwrap();
        Self {
            kind: CaptureKind::Numeric,
            month_raw: caps[1].to_string(),
            day_raw: caps[2].to_string(),
            year_raw: caps[3].to_string(),
            source: full.as_str().to_string(),
            span: (full.start(), full.end()),
        }
    }

    pub(crate) fn month_name(caps: &Captures<'_>) -> Self {
        let full = caps.get(0).unwrap();
        Self {
            kind: CaptureKind::MonthName,
            month_raw: caps[1].to_string(),
            day_raw: caps[2].to_string(),
            year_raw: caps[3].to_string(),
            source: full.as_str().to_string(),
            span: (full.start(), full.end()),
        }
    }

    /// Resolve the capture into a real calendar date.
    ///
    /// Fails with `InvalidCalendarDate` when the matched digits do not
    /// form a valid date under either year interpretation.
    pub fn interpret(&self, century_base: i32) -> Result<NaiveDate, ExtractionError> {
        let month = match self.kind {
            CaptureKind::Numeric => self.month_raw.parse::<u32>().unwrap_or(0),
            CaptureKind::MonthName => month_abbrev_to_number(&self.month_raw),
        };
        let day: u32 = self.day_raw.parse().unwrap_or(0);

        let invalid = || ExtractionError::InvalidCalendarDate {
            source_text: self.source.clone(),
        };

        let year = expand_year(&self.year_raw, century_base).ok_or_else(invalid)?;

        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
    }
}

/// Expand a matched year to a four-digit calendar year.
///
/// Four digits are taken as-is; one or two digits get `century_base`
/// added (no 1900s pivot). Three digits fit neither interpretation.
pub fn expand_year(raw: &str, century_base: i32) -> Option<i32> {
    let value: i32 = raw.parse().ok()?;
    match raw.len() {
        4 => Some(value),
        1 | 2 => Some(century_base + value),
        _ => None,
    }
}

/// Map a 3-letter month abbreviation to its month number.
///
/// Returns 0 for anything outside the fixed 12-entry table, which then
/// fails calendar validation.
pub fn month_abbrev_to_number(abbrev: &str) -> u32 {
    match abbrev {
        "JAN" => 1,
        "FEB" => 2,
        "MAR" => 3,
        "APR" => 4,
        "MAY" => 5,
        "JUN" => 6,
        "JUL" => 7,
        "AUG" => 8,
        "SEP" => 9,
        "OCT" => 10,
        "NOV" => 11,
        "DEC" => 12,
        _ => 0,
    }
}

/// Date field extractor listing every valid candidate in a text.
///
/// Numeric candidates are reported before month-name candidates. The
/// single-date policy (first occurrence wins, fallthrough handling)
/// lives in [`ExpiryParser`](super::ExpiryParser); this extractor is
/// the "show all dates" view.
pub struct DateExtractor {
    century_base: i32,
}

impl DateExtractor {
    pub fn new() -> Self {
        Self { century_base: 2000 }
    }

    /// Set the base century for two-digit year expansion.
    pub fn with_century_base(mut self, century_base: i32) -> Self {
        self.century_base = century_base;
        self
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = ExtractionMatch<NaiveDate>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let text = text.to_uppercase();
        let mut results = Vec::new();

        for caps in NUMERIC_DATE.captures_iter(&text) {
            let capture = DateCapture::numeric(&caps);
            if let Ok(date) = capture.interpret(self.century_base) {
                results.push(
                    ExtractionMatch::new(date, 0.9, &capture.source)
                        .with_position(capture.span.0, capture.span.1),
                );
            }
        }

        for caps in MONTH_NAME_DATE.captures_iter(&text) {
            let capture = DateCapture::month_name(&caps);
            if let Ok(date) = capture.interpret(self.century_base) {
                // Skip if already found via the numeric pattern
                if results.iter().any(|r| r.value == date) {
                    continue;
                }
                results.push(
                    ExtractionMatch::new(date, 0.8, &capture.source)
                        .with_position(capture.span.0, capture.span.1),
                );
            }
        }

        results
    }
}
