//! Trip/fuel record types.

use chrono::NaiveDate;
use iftatax_shared::types::{CompanyId, TripId, VehicleId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::jurisdiction::Jurisdiction;
use crate::period::YearMonth;

/// Status of a trip record.
///
/// A trip is immutable once finalized except for these transitions;
/// cancelled trips never contribute to aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    /// Trip has been recorded but not finalized.
    Pending,
    /// Trip is finalized.
    Completed,
    /// Trip was cancelled and is excluded from all reports.
    Cancelled,
}

impl TripStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a status from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

impl std::fmt::Display for TripStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single trip/fuel record as supplied by the record source.
///
/// All fields are required; optionality and loose shapes from upstream feeds
/// are resolved before a record reaches this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRecord {
    /// Unique identifier.
    pub id: TripId,
    /// Owning company.
    pub company_id: CompanyId,
    /// Vehicle that drove the trip.
    pub vehicle_id: VehicleId,
    /// Date the trip took place.
    pub date: NaiveDate,
    /// Jurisdiction where the trip started.
    pub origin: Jurisdiction,
    /// Jurisdiction where the trip ended.
    pub destination: Jurisdiction,
    /// Distance driven in miles.
    pub miles: Decimal,
    /// Fuel consumed in gallons.
    pub gallons: Decimal,
    /// Current status.
    pub status: TripStatus,
}

impl TripRecord {
    /// Returns the jurisdiction this trip's miles and gallons accrue to.
    ///
    /// Trips are recorded per leg in the source feed; the destination is the
    /// taxing jurisdiction of the leg.
    #[must_use]
    pub const fn taxing_jurisdiction(&self) -> Jurisdiction {
        self.destination
    }

    /// Returns the year-month grouping key derived from the trip date.
    #[must_use]
    pub fn year_month(&self) -> YearMonth {
        YearMonth::from_date(self.date)
    }

    /// Returns true if this trip participates in aggregation.
    #[must_use]
    pub const fn is_reportable(&self) -> bool {
        !matches!(self.status, TripStatus::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(status: TripStatus) -> TripRecord {
        TripRecord {
            id: TripId::new(),
            company_id: CompanyId::new(),
            vehicle_id: VehicleId::new(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            origin: Jurisdiction::Ok,
            destination: Jurisdiction::Tx,
            miles: dec!(100),
            gallons: dec!(10),
            status,
        }
    }

    #[test]
    fn test_status_roundtrip() {
        for status in [
            TripStatus::Pending,
            TripStatus::Completed,
            TripStatus::Cancelled,
        ] {
            assert_eq!(TripStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(TripStatus::parse("voided"), None);
    }

    #[test]
    fn test_taxing_jurisdiction_is_destination() {
        let trip = record(TripStatus::Completed);
        assert_eq!(trip.taxing_jurisdiction(), Jurisdiction::Tx);
    }

    #[test]
    fn test_year_month_from_date() {
        let trip = record(TripStatus::Completed);
        assert_eq!(trip.year_month().to_string(), "2024-01");
    }

    #[test]
    fn test_reportable() {
        assert!(record(TripStatus::Pending).is_reportable());
        assert!(record(TripStatus::Completed).is_reportable());
        assert!(!record(TripStatus::Cancelled).is_reportable());
    }
}
