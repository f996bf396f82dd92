//! Quarterly reporting orchestration.

use iftatax_shared::types::{CompanyId, VehicleId};
use tracing::debug;

use super::error::ReportingError;
use crate::declaration::{Declaration, DeclarationService};
use crate::period::Quarter;
use crate::rollup::{Rollup, RollupService};
use crate::source::TripSource;

/// Service wiring the record source, aggregation, and document assembly.
///
/// Each call is an independent read-only computation over its own input
/// snapshot; concurrent invocations need no coordination.
pub struct ReportingService;

impl ReportingService {
    /// Builds the quarterly declaration for a single vehicle.
    ///
    /// A vehicle with no reportable trips in the quarter yields an empty
    /// declaration, not an error.
    ///
    /// # Errors
    ///
    /// Returns `ReportingError` on an invalid year, a failing record
    /// source, or an invalid record.
    pub fn quarterly_declaration(
        source: &dyn TripSource,
        company_id: CompanyId,
        vehicle_id: VehicleId,
        quarter: Quarter,
        year: i32,
    ) -> Result<Declaration, ReportingError> {
        let rollup = Self::company_quarter_rollup(source, company_id, quarter, year)?;
        let vehicle_rollup = rollup.vehicle(vehicle_id).cloned().unwrap_or_default();

        debug!(
            %vehicle_id,
            %quarter,
            year,
            has_data = !vehicle_rollup.is_empty(),
            "assembling quarterly declaration"
        );
        Ok(DeclarationService::build(
            &vehicle_rollup,
            vehicle_id,
            quarter,
            year,
        ))
    }

    /// Aggregates a company's whole quarter across all vehicles, the basis
    /// of the quarterly company report.
    ///
    /// # Errors
    ///
    /// Returns `ReportingError` on an invalid year, a failing record
    /// source, or an invalid record.
    pub fn company_quarter_rollup(
        source: &dyn TripSource,
        company_id: CompanyId,
        quarter: Quarter,
        year: i32,
    ) -> Result<Rollup, ReportingError> {
        let (start, end) = quarter.date_range(year)?;
        let trips = source.trips_between(company_id, start, end)?;
        debug!(%company_id, %quarter, year, trip_count = trips.len(), "aggregating quarter");

        Ok(RollupService::aggregate(&trips)?)
    }
}
