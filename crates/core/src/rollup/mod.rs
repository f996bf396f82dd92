//! Aggregation of trip records into nested rollups.
//!
//! This module implements the core IFTA bookkeeping: a flat list of trip
//! records becomes vehicle -> jurisdiction -> month miles/gallons totals,
//! with monthly, quarterly, and grand totals derived on demand. The
//! reduction is pure, order-invariant, and additive.

pub mod error;
pub mod service;
pub mod types;


pub use error::RollupError;
pub use service::RollupService;
pub use types::{MilesGallons, MonthRollup, Rollup, VehicleRollup};
