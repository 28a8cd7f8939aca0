//! Data models for the expiry library.

pub mod config;
pub mod date;

pub use config::{ExpiryConfig, ExtractionConfig};
pub use date::{ExpiryDate, ExtractionResult, ScanReport};
