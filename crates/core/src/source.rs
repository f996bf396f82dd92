//! Dependency-injected trip record source.
//!
//! The core never reaches for a global database handle; callers construct a
//! `TripSource` (backed by the real store in production, in-memory here and
//! in tests) and pass it in explicitly.

use chrono::NaiveDate;
use iftatax_shared::{AppError, types::CompanyId};
use thiserror::Error;

use crate::trip::TripRecord;

/// Errors from the record source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The underlying store could not be reached or queried.
    #[error("Record source unavailable: {0}")]
    Unavailable(String),
}

impl From<SourceError> for AppError {
    fn from(err: SourceError) -> Self {
        Self::Database(err.to_string())
    }
}

/// Supplier of trip records for aggregation.
pub trait TripSource {
    /// Returns a company's trip records within an inclusive date range.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the underlying store fails.
    fn trips_between(
        &self,
        company_id: CompanyId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TripRecord>, SourceError>;
}

/// In-memory record source over an owned snapshot of trips.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTripSource {
    trips: Vec<TripRecord>,
}

impl InMemoryTripSource {
    /// Creates a source over the given trips.
    #[must_use]
    pub fn new(trips: Vec<TripRecord>) -> Self {
        Self { trips }
    }
}

impl TripSource for InMemoryTripSource {
    fn trips_between(
        &self,
        company_id: CompanyId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TripRecord>, SourceError> {
        Ok(self
            .trips
            .iter()
            .filter(|trip| {
                trip.company_id == company_id && trip.date >= start && trip.date <= end
            })
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::{Jurisdiction, TripStatus};
    use iftatax_shared::types::{TripId, VehicleId};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn trip(company_id: CompanyId, date: NaiveDate) -> TripRecord {
        TripRecord {
            id: TripId::new(),
            company_id,
            vehicle_id: VehicleId::from_uuid(Uuid::from_u128(1)),
            date,
            origin: Jurisdiction::Ok,
            destination: Jurisdiction::Tx,
            miles: dec!(100),
            gallons: dec!(10),
            status: TripStatus::Completed,
        }
    }

    #[test]
    fn test_filters_by_company_and_inclusive_range() {
        let company = CompanyId::new();
        let other = CompanyId::new();
        let date = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();

        let source = InMemoryTripSource::new(vec![
            trip(company, date(1)),
            trip(company, date(15)),
            trip(company, date(31)),
            trip(other, date(15)),
            trip(company, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()),
        ]);

        let trips = source.trips_between(company, date(1), date(31)).unwrap();
        assert_eq!(trips.len(), 3);
        assert!(trips.iter().all(|t| t.company_id == company));
    }
}
