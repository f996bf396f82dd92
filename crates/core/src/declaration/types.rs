//! Declaration document model.
//!
//! The assembler produces a print-ready row sequence; an external rendering
//! collaborator (PDF/HTML layout) consumes it. Rows carry raw decimals so
//! display formatting never alters stored values.

use iftatax_shared::config::ReportingConfig;
use iftatax_shared::types::VehicleId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::period::{Quarter, YearMonth};
use crate::trip::Jurisdiction;

/// One row of the quarterly declaration summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeclarationRow {
    /// Header opening a month section (e.g., "January 2024").
    MonthHeader {
        /// The month this section covers.
        month: YearMonth,
    },
    /// Per-jurisdiction miles and gallons within a month.
    Data {
        /// Taxing jurisdiction.
        jurisdiction: Jurisdiction,
        /// Miles accrued in the jurisdiction this month.
        miles: Decimal,
        /// Gallons consumed in the jurisdiction this month.
        gallons: Decimal,
    },
    /// Subtotal closing a month section.
    MonthTotal {
        /// The month being totalled.
        month: YearMonth,
        /// Month total miles.
        miles: Decimal,
        /// Month total gallons.
        gallons: Decimal,
    },
    /// Grand total across the whole quarter.
    GrandTotal {
        /// Quarter total miles.
        miles: Decimal,
        /// Quarter total gallons.
        gallons: Decimal,
    },
}

/// The assembled declaration for one vehicle and quarter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Reporting unit (vehicle).
    pub vehicle_id: VehicleId,
    /// Reporting quarter.
    pub quarter: Quarter,
    /// Reporting year.
    pub year: i32,
    /// Ordered row sequence; empty when the vehicle has no data in the
    /// quarter (a "no data" state, not an error).
    pub rows: Vec<DeclarationRow>,
}

impl Declaration {
    /// Returns true if the quarter had no reportable data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Display precision for declaration rendering.
///
/// Controls the minimum fractional digits shown; extra non-zero precision is
/// never rounded away, only trailing zeros are trimmed down to the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowFormat {
    /// Minimum fractional digits for miles (declaration view default: 2).
    pub miles_min_decimals: u32,
    /// Minimum fractional digits for gallons (declaration view default: 1).
    pub gallons_min_decimals: u32,
}

impl Default for RowFormat {
    fn default() -> Self {
        Self {
            miles_min_decimals: 2,
            gallons_min_decimals: 1,
        }
    }
}

impl From<&ReportingConfig> for RowFormat {
    fn from(config: &ReportingConfig) -> Self {
        Self {
            miles_min_decimals: config.miles_display_decimals,
            gallons_min_decimals: config.gallons_display_decimals,
        }
    }
}

impl RowFormat {
    /// Renders a miles value for display.
    #[must_use]
    pub fn miles(&self, value: Decimal) -> String {
        super::format::format_quantity(value, self.miles_min_decimals)
    }

    /// Renders a gallons value for display.
    #[must_use]
    pub fn gallons(&self, value: Decimal) -> String {
        super::format::format_quantity(value, self.gallons_min_decimals)
    }
}
