//! Rollup data types.
//!
//! All containers are ordered maps so iteration is deterministic:
//! jurisdictions by display name (via `Jurisdiction`'s `Ord`), months
//! chronologically, vehicles by ID. Totals and mpg are always recomputed
//! from the stored miles/gallons, never persisted.

use std::collections::BTreeMap;

use iftatax_shared::types::VehicleId;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::period::{Quarter, YearMonth};
use crate::trip::Jurisdiction;

/// Fractional digits of miles at the storage boundary.
pub const MILES_SCALE: u32 = 2;
/// Fractional digits of gallons at the storage boundary.
pub const GALLONS_SCALE: u32 = 3;
/// Fractional digits of derived miles-per-gallon values.
const MPG_SCALE: u32 = 2;

/// Summed miles and gallons for one aggregation cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilesGallons {
    /// Total miles driven.
    pub miles: Decimal,
    /// Total gallons consumed.
    pub gallons: Decimal,
}

impl MilesGallons {
    /// The zero aggregate.
    pub const ZERO: Self = Self {
        miles: Decimal::ZERO,
        gallons: Decimal::ZERO,
    };

    /// Creates an aggregate from recorded quantities, normalizing to the
    /// storage precision (miles 2dp, gallons 3dp, midpoint away from zero).
    #[must_use]
    pub fn recorded(miles: Decimal, gallons: Decimal) -> Self {
        Self {
            miles: miles.round_dp_with_strategy(MILES_SCALE, RoundingStrategy::MidpointAwayFromZero),
            gallons: gallons
                .round_dp_with_strategy(GALLONS_SCALE, RoundingStrategy::MidpointAwayFromZero),
        }
    }

    /// Adds another aggregate into this one. Decimal addition is exact, so
    /// summation introduces no drift beyond the boundary precision.
    pub fn accumulate(&mut self, other: Self) {
        self.miles += other.miles;
        self.gallons += other.gallons;
    }

    /// Miles per gallon, derived on read and never stored.
    ///
    /// Zero gallons yields zero rather than a division error.
    #[must_use]
    pub fn mpg(&self) -> Decimal {
        if self.gallons > Decimal::ZERO {
            (self.miles / self.gallons)
                .round_dp_with_strategy(MPG_SCALE, RoundingStrategy::MidpointAwayFromZero)
        } else {
            Decimal::ZERO
        }
    }

    /// Returns true if both quantities are zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.miles.is_zero() && self.gallons.is_zero()
    }
}

/// Per-jurisdiction totals for a single vehicle-month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRollup {
    jurisdictions: BTreeMap<Jurisdiction, MilesGallons>,
}

impl MonthRollup {
    pub(crate) fn add(&mut self, jurisdiction: Jurisdiction, amounts: MilesGallons) {
        self.jurisdictions
            .entry(jurisdiction)
            .or_default()
            .accumulate(amounts);
    }

    /// Returns the totals for one jurisdiction, if present.
    #[must_use]
    pub fn jurisdiction(&self, jurisdiction: Jurisdiction) -> Option<&MilesGallons> {
        self.jurisdictions.get(&jurisdiction)
    }

    /// Iterates jurisdictions in display-name order.
    pub fn jurisdictions(&self) -> impl Iterator<Item = (Jurisdiction, &MilesGallons)> {
        self.jurisdictions.iter().map(|(j, mg)| (*j, mg))
    }

    /// Month subtotal across all jurisdictions.
    #[must_use]
    pub fn total(&self) -> MilesGallons {
        let mut total = MilesGallons::ZERO;
        for amounts in self.jurisdictions.values() {
            total.accumulate(*amounts);
        }
        total
    }

    /// Returns true if no jurisdiction has data this month.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jurisdictions.is_empty()
    }
}

/// Month-keyed rollup for a single vehicle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRollup {
    months: BTreeMap<YearMonth, MonthRollup>,
}

impl VehicleRollup {
    pub(crate) fn add(
        &mut self,
        month: YearMonth,
        jurisdiction: Jurisdiction,
        amounts: MilesGallons,
    ) {
        self.months.entry(month).or_default().add(jurisdiction, amounts);
    }

    pub(crate) fn merge_from(&mut self, other: Self) {
        for (month, rollup) in other.months {
            for (jurisdiction, amounts) in rollup.jurisdictions {
                self.months.entry(month).or_default().add(jurisdiction, amounts);
            }
        }
    }

    /// Returns one month's rollup, if present.
    #[must_use]
    pub fn month(&self, month: YearMonth) -> Option<&MonthRollup> {
        self.months.get(&month)
    }

    /// Iterates months chronologically.
    pub fn months(&self) -> impl Iterator<Item = (YearMonth, &MonthRollup)> {
        self.months.iter().map(|(ym, r)| (*ym, r))
    }

    /// Total across all months.
    #[must_use]
    pub fn total(&self) -> MilesGallons {
        let mut total = MilesGallons::ZERO;
        for rollup in self.months.values() {
            total.accumulate(rollup.total());
        }
        total
    }

    /// Total across the three months of a quarter.
    #[must_use]
    pub fn quarter_total(&self, quarter: Quarter, year: i32) -> MilesGallons {
        let mut total = MilesGallons::ZERO;
        for month in quarter.months(year) {
            if let Some(rollup) = self.months.get(&month) {
                total.accumulate(rollup.total());
            }
        }
        total
    }

    /// Quarter total for a single jurisdiction.
    #[must_use]
    pub fn quarter_jurisdiction_total(
        &self,
        quarter: Quarter,
        year: i32,
        jurisdiction: Jurisdiction,
    ) -> MilesGallons {
        let mut total = MilesGallons::ZERO;
        for month in quarter.months(year) {
            if let Some(amounts) = self.months.get(&month).and_then(|r| r.jurisdiction(jurisdiction))
            {
                total.accumulate(*amounts);
            }
        }
        total
    }

    /// Returns true if no month has data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

/// The full nested rollup: vehicle -> month -> jurisdiction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rollup {
    vehicles: BTreeMap<VehicleId, VehicleRollup>,
}

impl Rollup {
    pub(crate) fn add(
        &mut self,
        vehicle_id: VehicleId,
        month: YearMonth,
        jurisdiction: Jurisdiction,
        amounts: MilesGallons,
    ) {
        self.vehicles
            .entry(vehicle_id)
            .or_default()
            .add(month, jurisdiction, amounts);
    }

    /// Returns one vehicle's rollup, if present.
    #[must_use]
    pub fn vehicle(&self, vehicle_id: VehicleId) -> Option<&VehicleRollup> {
        self.vehicles.get(&vehicle_id)
    }

    /// Iterates vehicles in ID order.
    pub fn vehicles(&self) -> impl Iterator<Item = (VehicleId, &VehicleRollup)> {
        self.vehicles.iter().map(|(id, r)| (*id, r))
    }

    /// Grand total across all vehicles, months, and jurisdictions.
    #[must_use]
    pub fn grand_total(&self) -> MilesGallons {
        let mut total = MilesGallons::ZERO;
        for rollup in self.vehicles.values() {
            total.accumulate(rollup.total());
        }
        total
    }

    /// Combines two rollups cell-by-cell. Aggregation is additive:
    /// aggregating a record set equals merging the rollups of any partition
    /// of it.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        for (vehicle_id, rollup) in other.vehicles {
            self.vehicles.entry(vehicle_id).or_default().merge_from(rollup);
        }
        self
    }

    /// Returns true if no vehicle has data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}
