//! Period error types.

use iftatax_shared::AppError;
use thiserror::Error;

/// Errors for quarter/year-month arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    /// Quarter number outside 1..=4.
    #[error("Invalid quarter: {0} (expected 1-4)")]
    InvalidQuarter(i32),

    /// Month number outside 1..=12.
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    /// Year outside the representable calendar range.
    #[error("Invalid year: {0}")]
    InvalidYear(i32),

    /// Year-month string that does not parse as `YYYY-MM`.
    #[error("Malformed year-month: {0} (expected YYYY-MM)")]
    MalformedYearMonth(String),
}

impl From<PeriodError> for AppError {
    fn from(err: PeriodError) -> Self {
        Self::Validation(err.to_string())
    }
}
