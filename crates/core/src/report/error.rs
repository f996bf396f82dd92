//! Report lifecycle error types.

use iftatax_shared::AppError;
use thiserror::Error;

use super::types::ReportStatus;

/// Errors for report lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// Attempted a status transition that is not allowed.
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition {
        /// Current status.
        from: ReportStatus,
        /// Requested status.
        to: ReportStatus,
    },

    /// A report past `in_progress` must belong to a quarterly report.
    #[error("Submitted report is not linked to a quarterly report")]
    NotLinkedToQuarter,
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        Self::BusinessRule(err.to_string())
    }
}
