//! Error types for the expiry-core library.

use thiserror::Error;

/// Main error type for the expiry library.
#[derive(Error, Debug)]
pub enum ExpiryError {
    /// Date extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Upstream OCR/image failure reported by a collaborator.
    #[error("upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to expiry date extraction.
///
/// These never escape the extraction engine: both kinds are absorbed
/// into a `NotFound` result, optionally with a warning in the report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// No recognizable date substring found.
    #[error("no date found")]
    NoMatch,

    /// A pattern matched syntactically but the day/month/year
    /// combination is not a real calendar date.
    #[error("invalid calendar date: {source_text}")]
    InvalidCalendarDate { source_text: String },
}

/// Errors that occur before text ever reaches the engine.
///
/// Produced by the OCR/image collaborators; the engine absorbs them at
/// the `scan_ocr` boundary as a warning plus `NotFound`.
#[derive(Error, Debug, Clone)]
pub enum UpstreamError {
    /// The OCR step failed to produce text.
    #[error("OCR failed: {0}")]
    Ocr(String),

    /// The image could not be decoded before OCR ran.
    #[error("image decode failed: {0}")]
    ImageDecode(String),
}

/// Result type for the expiry library.
pub type Result<T> = std::result::Result<T, ExpiryError>;
