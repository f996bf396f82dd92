//! Monthly and quarterly report lifecycle types.

pub mod error;
pub mod types;

pub use error::ReportError;
pub use types::{MonthlyReport, QuarterKey, QuarterlyReport, ReportStatus};
