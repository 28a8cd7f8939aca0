//! Expiry date parser implementing the ordered extraction algorithm.

use std::time::Instant;

use tracing::{debug, warn};

use crate::error::{ExtractionError, UpstreamError};
use crate::models::config::ExtractionConfig;
use crate::models::date::{ExpiryDate, ExtractionResult, ScanReport};

use super::dates::DateCapture;
use super::patterns::{MONTH_NAME_DATE, NUMERIC_DATE};

/// Extracts a single expiry date from raw OCR text.
///
/// Pure and stateless: each call is an independent scan of the input,
/// so a parser can be shared freely across threads. Matching is
/// ordered - the leftmost numeric date wins over any month-name date.
#[derive(Debug, Clone)]
pub struct ExpiryParser {
    /// Continue to month-name matching when the numeric match is not a
    /// valid calendar date.
    numeric_fallthrough: bool,
    /// Base century for two-digit year expansion.
    century_base: i32,
}

impl ExpiryParser {
    /// Create a parser with default settings (fallthrough enabled,
    /// two-digit years expanded into the 2000s).
    pub fn new() -> Self {
        Self {
            numeric_fallthrough: true,
            century_base: 2000,
        }
    }

    /// Build a parser from an extraction config section.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            numeric_fallthrough: config.numeric_fallthrough,
            century_base: config.century_base,
        }
    }

    /// Set the invalid-numeric-match fallthrough policy.
    pub fn with_numeric_fallthrough(mut self, enabled: bool) -> Self {
        self.numeric_fallthrough = enabled;
        self
    }

    /// Set the base century for two-digit year expansion.
    pub fn with_century_base(mut self, century_base: i32) -> Self {
        self.century_base = century_base;
        self
    }

    /// Extract the expiry date from a text blob.
    ///
    /// Never panics and never errors: malformed input yields
    /// [`ExtractionResult::NotFound`].
    pub fn extract(&self, text: &str) -> ExtractionResult {
        let mut warnings = Vec::new();
        self.run(text, &mut warnings)
    }

    /// Fallible variant of [`extract`](Self::extract) for callers that
    /// want the failure kind instead of a tagged result.
    pub fn try_extract(&self, text: &str) -> Result<ExpiryDate, ExtractionError> {
        match self.extract(text) {
            ExtractionResult::Found(date) => Ok(date),
            ExtractionResult::NotFound => Err(ExtractionError::NoMatch),
        }
    }

    /// Extract with a full report: result, warnings, and timing.
    pub fn scan(&self, text: &str) -> ScanReport {
        let start = Instant::now();
        let mut warnings = Vec::new();

        debug!("scanning {} characters of OCR text", text.len());
        let result = self.run(text, &mut warnings);

        match &result {
            ExtractionResult::Found(date) => debug!("extracted expiry date {}", date),
            ExtractionResult::NotFound => debug!("no expiry date found"),
        }

        ScanReport {
            result,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }

    /// Boundary entry point for text produced by a fallible upstream
    /// step (OCR, image decode).
    ///
    /// An upstream failure never aborts the caller's workflow: it is
    /// logged, recorded as a warning, and reported as `NotFound`.
    pub fn scan_ocr(&self, ocr: Result<String, UpstreamError>) -> ScanReport {
        match ocr {
            Ok(text) => self.scan(&text),
            Err(err) => {
                warn!("upstream failure before extraction: {}", err);
                ScanReport {
                    result: ExtractionResult::NotFound,
                    warnings: vec![err.to_string()],
                    processing_time_ms: 0,
                }
            }
        }
    }

    /// The ordered algorithm: uppercase, first numeric occurrence,
    /// then first month-name occurrence.
    fn run(&self, text: &str, warnings: &mut Vec<String>) -> ExtractionResult {
        let text = text.to_uppercase();

        // Numeric dates take priority; only the leftmost occurrence is
        // ever consulted.
        if let Some(caps) = NUMERIC_DATE.captures(&text) {
            let capture = DateCapture::numeric(&caps);
            match capture.interpret(self.century_base) {
                Ok(date) => return ExtractionResult::Found(date.into()),
                Err(err) => {
                    warnings.push(err.to_string());
                    if !self.numeric_fallthrough {
                        debug!("numeric match {:?} invalid, fallthrough disabled", capture.source);
                        return ExtractionResult::NotFound;
                    }
                }
            }
        }

        if let Some(caps) = MONTH_NAME_DATE.captures(&text) {
            let capture = DateCapture::month_name(&caps);
            match capture.interpret(self.century_base) {
                Ok(date) => return ExtractionResult::Found(date.into()),
                Err(err) => warnings.push(err.to_string()),
            }
        }

        ExtractionResult::NotFound
    }
}

impl Default for ExpiryParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn found(year: i32, month: u32, day: u32) -> ExtractionResult {
        ExtractionResult::Found(ExpiryDate { year, month, day })
    }

    #[test]
    fn test_numeric_four_digit_year_in_noise() {
        let parser = ExpiryParser::new();
        let result = parser.extract("Lot 993 Best Before: 10/15/2025 Keep refrigerated");
        assert_eq!(result, found(2025, 10, 15));
    }

    #[test]
    fn test_numeric_two_digit_year_expands_to_2000s() {
        let parser = ExpiryParser::new();
        assert_eq!(parser.extract("Exp 09/05/25 Lot#4"), found(2025, 9, 5));
        // month/day order, not day/month
        assert_eq!(parser.extract("1/2/99"), found(2099, 1, 2));
    }

    #[test]
    fn test_numeric_order_is_month_first() {
        let parser = ExpiryParser::new();
        assert_eq!(parser.extract("3/4/2026"), found(2026, 3, 4));
        assert_eq!(parser.extract("12/1/2026"), found(2026, 12, 1));
    }

    #[test]
    fn test_month_name_with_arbitrary_prefix() {
        let parser = ExpiryParser::new();
        assert_eq!(parser.extract("BEST BY: OCT 15 2025"), found(2025, 10, 15));
        assert_eq!(parser.extract("BB JAN 3 26"), found(2026, 1, 3));
        assert_eq!(parser.extract("drink before SEP 1 2027 see lid"), found(2027, 9, 1));
    }

    #[test]
    fn test_empty_and_dateless_input() {
        let parser = ExpiryParser::new();
        assert_eq!(parser.extract(""), ExtractionResult::NotFound);
        assert_eq!(parser.extract("no date here"), ExtractionResult::NotFound);
    }

    #[test]
    fn test_impossible_date_is_not_found() {
        let parser = ExpiryParser::new();
        assert_eq!(parser.extract("13/45/2025"), ExtractionResult::NotFound);
    }

    #[test]
    fn test_case_insensitive() {
        let parser = ExpiryParser::new();
        assert_eq!(
            parser.extract("best before oct 15 2025"),
            parser.extract("BEST BEFORE OCT 15 2025")
        );
        assert_eq!(parser.extract("jan 3 26"), found(2026, 1, 3));
    }

    #[test]
    fn test_numeric_wins_over_month_name() {
        let parser = ExpiryParser::new();
        let result = parser.extract("JAN 3 26 and also 09/05/25");
        assert_eq!(result, found(2025, 9, 5));
    }

    #[test]
    fn test_leftmost_numeric_match_wins() {
        let parser = ExpiryParser::new();
        let result = parser.extract("09/05/25 then 10/10/2030");
        assert_eq!(result, found(2025, 9, 5));
    }

    #[test]
    fn test_fallthrough_enabled_recovers_month_name() {
        let parser = ExpiryParser::new().with_numeric_fallthrough(true);
        let result = parser.extract("13/45/2025 BEST BY OCT 15 2025");
        assert_eq!(result, found(2025, 10, 15));
    }

    #[test]
    fn test_fallthrough_disabled_stops_at_invalid_numeric() {
        let parser = ExpiryParser::new().with_numeric_fallthrough(false);
        let result = parser.extract("13/45/2025 BEST BY OCT 15 2025");
        assert_eq!(result, ExtractionResult::NotFound);
    }

    #[test]
    fn test_idempotent() {
        let parser = ExpiryParser::new();
        let input = "Exp 09/05/25 Lot#4";
        assert_eq!(parser.extract(input), parser.extract(input));
    }

    #[test]
    fn test_try_extract_reports_no_match() {
        let parser = ExpiryParser::new();
        assert_eq!(
            parser.try_extract("nothing useful"),
            Err(ExtractionError::NoMatch)
        );
        assert_eq!(
            parser.try_extract("OCT 15 2025").unwrap(),
            ExpiryDate { year: 2025, month: 10, day: 15 }
        );
    }

    #[test]
    fn test_scan_records_invalid_match_warning() {
        let parser = ExpiryParser::new();
        let report = parser.scan("13/45/2025");
        assert_eq!(report.result, ExtractionResult::NotFound);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("13/45/2025"));
    }

    #[test]
    fn test_scan_ocr_absorbs_upstream_failure() {
        let parser = ExpiryParser::new();
        let report = parser.scan_ocr(Err(UpstreamError::Ocr("tesseract exited 1".into())));
        assert_eq!(report.result, ExtractionResult::NotFound);
        assert!(report.warnings[0].contains("OCR failed"));
    }

    #[test]
    fn test_scan_ocr_passes_text_through() {
        let parser = ExpiryParser::new();
        let report = parser.scan_ocr(Ok("USE BY 10/15/2025".to_string()));
        assert_eq!(report.result, found(2025, 10, 15));
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_from_config() {
        let config = ExtractionConfig {
            numeric_fallthrough: false,
            century_base: 1900,
        };
        let parser = ExpiryParser::from_config(&config);
        assert_eq!(parser.extract("09/05/25"), found(1925, 9, 5));
    }

    #[test]
    fn test_three_digit_year_rejected() {
        let parser = ExpiryParser::new();
        // 345 is neither a four-digit year nor a two-digit expansion
        assert_eq!(parser.extract("1/2/345"), ExtractionResult::NotFound);
    }
}
