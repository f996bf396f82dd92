//! Reporting orchestration error types.

use iftatax_shared::AppError;
use thiserror::Error;

use crate::period::PeriodError;
use crate::rollup::RollupError;
use crate::source::SourceError;

/// Errors from assembling a quarterly report end to end.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportingError {
    /// Invalid quarter or year.
    #[error(transparent)]
    Period(#[from] PeriodError),

    /// Invalid trip record encountered during aggregation.
    #[error(transparent)]
    Rollup(#[from] RollupError),

    /// The record source failed.
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl From<ReportingError> for AppError {
    fn from(err: ReportingError) -> Self {
        match err {
            ReportingError::Period(e) => e.into(),
            ReportingError::Rollup(e) => e.into(),
            ReportingError::Source(e) => e.into(),
        }
    }
}
