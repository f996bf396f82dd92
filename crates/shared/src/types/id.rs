//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `VehicleId` where a
//! `CompanyId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(CompanyId, "Unique identifier for a trucking company.");
typed_id!(VehicleId, "Unique identifier for a vehicle.");
typed_id!(TripId, "Unique identifier for a trip/fuel record.");
typed_id!(ReportId, "Unique identifier for a per-vehicle monthly report.");
typed_id!(
    QuarterlyReportId,
    "Unique identifier for a company quarterly report."
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_typed_id_creation() {
        let id = VehicleId::new();
        assert!(!id.to_string().is_empty());
    }

    #[test]
    fn test_typed_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = CompanyId::from_uuid(uuid);
        assert_eq!(id.into_inner(), uuid);
    }

    #[test]
    fn test_typed_id_display_roundtrip() {
        let id = TripId::new();
        let parsed = TripId::from_str(&id.to_string()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_typed_id_from_str_rejects_garbage() {
        assert!(ReportId::from_str("not-a-uuid").is_err());
    }

    #[test]
    fn test_typed_id_serde_transparent() {
        let uuid = Uuid::new_v4();
        let id = QuarterlyReportId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{uuid}\""));
    }

    #[test]
    fn test_v7_ids_are_time_ordered() {
        let first = TripId::new();
        let second = TripId::new();
        assert!(first <= second);
    }
}
