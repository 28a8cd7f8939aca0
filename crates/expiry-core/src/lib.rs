//! Core library for expiry date extraction from OCR text.
//!
//! This crate provides:
//! - The extraction engine: noisy OCR text in, normalized date or
//!   not-found out, never an error for malformed input
//! - Numeric (`M/D/YY`, `M/D/YYYY`) and month-name (`OCT 15 2025`)
//!   date patterns with two-digit year expansion
//! - Calendar validation of every match via `chrono`
//!
//! The OCR step itself, item storage, and any user interface are
//! external collaborators that call [`ExpiryParser::extract`] with a
//! text blob.

pub mod error;
pub mod extract;
pub mod models;

pub use error::{ExpiryError, ExtractionError, Result, UpstreamError};
pub use extract::{DateExtractor, ExpiryParser, ExtractionMatch, FieldExtractor};
pub use models::config::{ExpiryConfig, ExtractionConfig};
pub use models::date::{ExpiryDate, ExtractionResult, ScanReport};
