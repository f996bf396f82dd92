//! Rollup error types.

use iftatax_shared::{AppError, types::TripId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during aggregation.
///
/// Validation is eager: a single invalid record fails the whole aggregation
/// rather than producing a partial rollup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RollupError {
    /// A record with negative miles.
    #[error("Invalid record {trip_id}: negative miles ({miles})")]
    NegativeMiles {
        /// Offending trip.
        trip_id: TripId,
        /// The negative distance.
        miles: Decimal,
    },

    /// A record with negative gallons.
    #[error("Invalid record {trip_id}: negative gallons ({gallons})")]
    NegativeGallons {
        /// Offending trip.
        trip_id: TripId,
        /// The negative fuel volume.
        gallons: Decimal,
    },
}

impl From<RollupError> for AppError {
    fn from(err: RollupError) -> Self {
        Self::Validation(err.to_string())
    }
}
