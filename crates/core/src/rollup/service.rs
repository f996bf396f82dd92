//! Aggregation service.

use rust_decimal::Decimal;

use super::error::RollupError;
use super::types::{MilesGallons, Rollup};
use crate::trip::TripRecord;

/// Service that reduces trip records into a nested rollup.
pub struct RollupService;

impl RollupService {
    /// Aggregates trip records into vehicle/jurisdiction/month totals.
    ///
    /// Cancelled trips are always excluded before validation; they neither
    /// contribute nor fail the aggregation. Record order is irrelevant.
    ///
    /// # Errors
    ///
    /// Returns `RollupError` if any included record carries negative miles
    /// or gallons. Validation is eager; no partial rollup is produced.
    pub fn aggregate(records: &[TripRecord]) -> Result<Rollup, RollupError> {
        let mut rollup = Rollup::default();

        for record in records.iter().filter(|r| r.is_reportable()) {
            let amounts = Self::validate(record)?;
            rollup.add(
                record.vehicle_id,
                record.year_month(),
                record.taxing_jurisdiction(),
                amounts,
            );
        }

        Ok(rollup)
    }

    fn validate(record: &TripRecord) -> Result<MilesGallons, RollupError> {
        if record.miles < Decimal::ZERO {
            return Err(RollupError::NegativeMiles {
                trip_id: record.id,
                miles: record.miles,
            });
        }

        if record.gallons < Decimal::ZERO {
            return Err(RollupError::NegativeGallons {
                trip_id: record.id,
                gallons: record.gallons,
            });
        }

        Ok(MilesGallons::recorded(record.miles, record.gallons))
    }
}
