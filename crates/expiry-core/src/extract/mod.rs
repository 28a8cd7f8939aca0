//! Expiry date extraction module.

mod dates;
mod parser;
pub mod patterns;

pub use dates::{expand_year, month_abbrev_to_number, CaptureKind, DateCapture, DateExtractor};
pub use parser::ExpiryParser;

/// Seam between the date rules and their callers.
///
/// [`DateExtractor`] is the one implementor today; the trait keeps the
/// candidate-listing surface (`--all` in the CLI) decoupled from the
/// single-date policy in [`ExpiryParser`].
pub trait FieldExtractor {
    /// Value produced per match, with its context.
    type Output;

    /// First candidate in the text, if any.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Every candidate in the text, in reporting order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// One extracted date candidate with match context.
#[derive(Debug, Clone)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Confidence score (0.0 - 1.0).
    pub confidence: f32,
    /// Byte position in the normalized source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, confidence: f32, source: impl Into<String>) -> Self {
        Self {
            value,
            confidence,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
