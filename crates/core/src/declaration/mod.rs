//! Quarterly tax declaration document assembly.
//!
//! A pure projection from aggregated data to a display/print model; no
//! network or persistence side effects.

pub mod format;
pub mod service;
pub mod types;


pub use format::format_quantity;
pub use service::DeclarationService;
pub use types::{Declaration, DeclarationRow, RowFormat};
