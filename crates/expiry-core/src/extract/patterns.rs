//! Compiled regex patterns for expiry date extraction.
//!
//! All patterns are matched against text that has already been
//! uppercased, so the month alternation carries no `(?i)` flag.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Numeric dates: M/D/YYYY or M/D/YY, single-digit month/day accepted
    pub static ref NUMERIC_DATE: Regex = Regex::new(
        r"(\d{1,2})/(\d{1,2})/(\d{2,4})"
    ).unwrap();

    // Abbreviated month dates: "OCT 15 2025", "JAN 3 26". Any label
    // prefix ("BEST BY:", "BB") is skipped by the search itself.
    pub static ref MONTH_NAME_DATE: Regex = Regex::new(
        r"(JAN|FEB|MAR|APR|MAY|JUN|JUL|AUG|SEP|OCT|NOV|DEC)\s+(\d{1,2})\s+(\d{2,4})"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_date_leftmost_match() {
        let caps = NUMERIC_DATE.captures("Exp 09/05/25 Lot#4 10/10/2030").unwrap();
        assert_eq!(&caps[1], "09");
        assert_eq!(&caps[2], "05");
        assert_eq!(&caps[3], "25");
    }

    #[test]
    fn test_numeric_date_single_digits() {
        let caps = NUMERIC_DATE.captures("1/2/2025").unwrap();
        assert_eq!(&caps[1], "1");
        assert_eq!(&caps[2], "2");
        assert_eq!(&caps[3], "2025");
    }

    #[test]
    fn test_month_name_with_prefix() {
        let caps = MONTH_NAME_DATE.captures("BEST BY: OCT 15 2025").unwrap();
        assert_eq!(&caps[1], "OCT");
        assert_eq!(&caps[2], "15");
        assert_eq!(&caps[3], "2025");
    }

    #[test]
    fn test_month_name_requires_uppercase_input() {
        assert!(MONTH_NAME_DATE.captures("best by oct 15 2025").is_none());
        assert!(MONTH_NAME_DATE.captures("BEST BY OCT 15 2025").is_some());
    }
}
