//! Declaration document assembly.

use iftatax_shared::types::VehicleId;

use super::types::{Declaration, DeclarationRow};
use crate::period::Quarter;
use crate::rollup::{MilesGallons, VehicleRollup};

/// Service that projects a vehicle's rollup into the declaration row model.
pub struct DeclarationService;

impl DeclarationService {
    /// Builds the declaration row sequence for one vehicle and quarter.
    ///
    /// Months appear chronologically, restricted to the quarter;
    /// jurisdictions within a month appear in display-name order. Zero-value
    /// jurisdiction entries and empty months are omitted. Each month section
    /// is a header, its data rows, and a subtotal; a single grand-total row
    /// closes the document. A quarter with no data yields an empty row
    /// sequence, which callers render as a "no data" state.
    #[must_use]
    pub fn build(
        rollup: &VehicleRollup,
        vehicle_id: VehicleId,
        quarter: Quarter,
        year: i32,
    ) -> Declaration {
        let mut rows = Vec::new();
        let mut grand_total = MilesGallons::ZERO;

        for month in quarter.months(year) {
            let Some(month_rollup) = rollup.month(month) else {
                continue;
            };

            let mut month_total = MilesGallons::ZERO;
            let mut data_rows = Vec::new();

            for (jurisdiction, amounts) in month_rollup.jurisdictions() {
                if amounts.is_zero() {
                    continue;
                }
                month_total.accumulate(*amounts);
                data_rows.push(DeclarationRow::Data {
                    jurisdiction,
                    miles: amounts.miles,
                    gallons: amounts.gallons,
                });
            }

            if data_rows.is_empty() {
                continue;
            }

            grand_total.accumulate(month_total);
            rows.push(DeclarationRow::MonthHeader { month });
            rows.extend(data_rows);
            rows.push(DeclarationRow::MonthTotal {
                month,
                miles: month_total.miles,
                gallons: month_total.gallons,
            });
        }

        if !rows.is_empty() {
            rows.push(DeclarationRow::GrandTotal {
                miles: grand_total.miles,
                gallons: grand_total.gallons,
            });
        }

        Declaration {
            vehicle_id,
            quarter,
            year,
            rows,
        }
    }
}
