//! Error types for tadjust-core.
//!
//! This module defines the error type shared by every adjuster, with
//! separate categories for malformed input, calendar windows that lack the
//! requested occurrence, argument binding failures, and arithmetic that
//! leaves the representable date range.

use thiserror::Error;

/// The main error type for adjuster operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdjustError {
    /// Malformed weekday specification or an ordinal outside its valid range.
    ///
    /// Raised before any date arithmetic takes place.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A well-formed request whose month or year has no such occurrence
    /// (e.g. a fifth Saturday in a month with only four).
    #[error("No such occurrence: {0}")]
    NoSuchOccurrence(String),

    /// Supplied arguments do not fit the parameter list of a named operation.
    #[error("Binding error: {0}")]
    Binding(String),

    /// Date arithmetic left the representable calendar range.
    #[error("Out of range: {0}")]
    OutOfRange(String),
}

impl AdjustError {
    /// Short machine-readable tag for the error category.
    pub fn kind(&self) -> &'static str {
        match self {
            AdjustError::InvalidArgument(_) => "invalid_argument",
            AdjustError::NoSuchOccurrence(_) => "no_such_occurrence",
            AdjustError::Binding(_) => "binding",
            AdjustError::OutOfRange(_) => "out_of_range",
        }
    }
}

/// Result type alias for adjuster operations.
pub type Result<T> = std::result::Result<T, AdjustError>;
