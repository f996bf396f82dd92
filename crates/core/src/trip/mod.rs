//! Trip/fuel records and IFTA jurisdictions.

pub mod jurisdiction;
pub mod types;

pub use jurisdiction::{Jurisdiction, UnknownJurisdiction};
pub use types::{TripRecord, TripStatus};
