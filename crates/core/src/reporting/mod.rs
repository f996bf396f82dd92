//! Orchestration of source -> rollup -> declaration.

pub mod error;
pub mod service;


pub use error::ReportingError;
pub use service::ReportingService;
