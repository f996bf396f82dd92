//! Core business logic for IFTA Easy Tax.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, validation rules, and calculations live
//! here.
//!
//! # Modules
//!
//! - `period` - Quarter and year-month calendar arithmetic
//! - `trip` - Trip/fuel records and IFTA jurisdictions
//! - `rollup` - Aggregation of trips into vehicle/jurisdiction/month totals
//! - `declaration` - Quarterly tax declaration document assembly
//! - `report` - Monthly and quarterly report lifecycle types
//! - `source` - Dependency-injected trip record source
//! - `reporting` - Orchestration of source -> rollup -> declaration

pub mod declaration;
pub mod period;
pub mod report;
pub mod reporting;
pub mod rollup;
pub mod source;
pub mod trip;
