//! Error types for storehours-core.
//!
//! The engine is total over well-typed inputs; errors only arise at the
//! boundaries where strings are turned into zones, dates, and civil times.

use thiserror::Error;

/// The main error type for store-hours operations.
#[derive(Debug, Error)]
pub enum StoreHoursError {
    /// Invalid IANA timezone name provided.
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Error parsing a date, time, or schedule input.
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Result type alias for store-hours operations.
pub type Result<T> = std::result::Result<T, StoreHoursError>;
