//! Quarter and year-month calendar arithmetic.
//!
//! IFTA reporting runs on calendar quarters. This module provides the pure
//! date math the aggregation and declaration layers rely on: quarter date
//! ranges, previous-quarter computation, and the `YearMonth` grouping key.

pub mod error;
pub mod month;
pub mod quarter;

pub use error::PeriodError;
pub use month::YearMonth;
pub use quarter::Quarter;
