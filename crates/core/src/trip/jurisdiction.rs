//! IFTA member jurisdictions.
//!
//! The 58 IFTA members: the 48 contiguous US states plus 10 Canadian
//! provinces. Alaska, Hawaii, and the District of Columbia are not members.
//!
//! Ordering is by display name (case-sensitive ascending), which is the row
//! order of the declaration document. Note this differs from code order:
//! "AK"/"AL" would sort before "Alabama"/"Alaska" flips.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A two-letter code that does not identify an IFTA member jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown jurisdiction code: {0}")]
pub struct UnknownJurisdiction(pub String);

/// Macro to generate the jurisdiction enum and its code/name tables.
macro_rules! jurisdictions {
    ($($variant:ident => ($code:literal, $name:literal)),+ $(,)?) => {
        /// An IFTA member taxing jurisdiction (US state or Canadian province).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum Jurisdiction {
            $(#[doc = $name] $variant,)+
        }

        impl Jurisdiction {
            /// Every member jurisdiction.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Returns the two-letter jurisdiction code.
            #[must_use]
            pub const fn code(self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            /// Returns the display name used for report row ordering.
            #[must_use]
            pub const fn display_name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            /// Parses a two-letter code (case-insensitive).
            ///
            /// # Errors
            ///
            /// Returns `UnknownJurisdiction` for codes that are not IFTA
            /// members, including the empty string.
            pub fn from_code(code: &str) -> Result<Self, UnknownJurisdiction> {
                match code.to_uppercase().as_str() {
                    $($code => Ok(Self::$variant),)+
                    other => Err(UnknownJurisdiction(other.to_string())),
                }
            }
        }
    };
}

jurisdictions! {
    // United States (48 contiguous states)
    Al => ("AL", "Alabama"),
    Az => ("AZ", "Arizona"),
    Ar => ("AR", "Arkansas"),
    Ca => ("CA", "California"),
    Co => ("CO", "Colorado"),
    Ct => ("CT", "Connecticut"),
    De => ("DE", "Delaware"),
    Fl => ("FL", "Florida"),
    Ga => ("GA", "Georgia"),
    Id => ("ID", "Idaho"),
    Il => ("IL", "Illinois"),
    In => ("IN", "Indiana"),
    Ia => ("IA", "Iowa"),
    Ks => ("KS", "Kansas"),
    Ky => ("KY", "Kentucky"),
    La => ("LA", "Louisiana"),
    Me => ("ME", "Maine"),
    Md => ("MD", "Maryland"),
    Ma => ("MA", "Massachusetts"),
    Mi => ("MI", "Michigan"),
    Mn => ("MN", "Minnesota"),
    Ms => ("MS", "Mississippi"),
    Mo => ("MO", "Missouri"),
    Mt => ("MT", "Montana"),
    Ne => ("NE", "Nebraska"),
    Nv => ("NV", "Nevada"),
    Nh => ("NH", "New Hampshire"),
    Nj => ("NJ", "New Jersey"),
    Nm => ("NM", "New Mexico"),
    Ny => ("NY", "New York"),
    Nc => ("NC", "North Carolina"),
    Nd => ("ND", "North Dakota"),
    Oh => ("OH", "Ohio"),
    Ok => ("OK", "Oklahoma"),
    Or => ("OR", "Oregon"),
    Pa => ("PA", "Pennsylvania"),
    Ri => ("RI", "Rhode Island"),
    Sc => ("SC", "South Carolina"),
    Sd => ("SD", "South Dakota"),
    Tn => ("TN", "Tennessee"),
    Tx => ("TX", "Texas"),
    Ut => ("UT", "Utah"),
    Vt => ("VT", "Vermont"),
    Va => ("VA", "Virginia"),
    Wa => ("WA", "Washington"),
    Wv => ("WV", "West Virginia"),
    Wi => ("WI", "Wisconsin"),
    Wy => ("WY", "Wyoming"),
    // Canada (10 provinces)
    Ab => ("AB", "Alberta"),
    Bc => ("BC", "British Columbia"),
    Mb => ("MB", "Manitoba"),
    Nb => ("NB", "New Brunswick"),
    Nl => ("NL", "Newfoundland and Labrador"),
    Ns => ("NS", "Nova Scotia"),
    On => ("ON", "Ontario"),
    Pe => ("PE", "Prince Edward Island"),
    Qc => ("QC", "Quebec"),
    Sk => ("SK", "Saskatchewan"),
}

impl Ord for Jurisdiction {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.display_name()
            .cmp(other.display_name())
            .then_with(|| self.code().cmp(other.code()))
    }
}

impl PartialOrd for Jurisdiction {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Jurisdiction {
    type Err = UnknownJurisdiction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl TryFrom<String> for Jurisdiction {
    type Error = UnknownJurisdiction;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_code(&s)
    }
}

impl From<Jurisdiction> for String {
    fn from(j: Jurisdiction) -> Self {
        j.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_count() {
        assert_eq!(Jurisdiction::ALL.len(), 58);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Jurisdiction::from_code("TX").unwrap(), Jurisdiction::Tx);
        assert_eq!(Jurisdiction::from_code("tx").unwrap(), Jurisdiction::Tx);
        assert_eq!(Jurisdiction::from_code("QC").unwrap(), Jurisdiction::Qc);
    }

    #[test]
    fn test_non_members_rejected() {
        // Alaska, Hawaii, and DC are not IFTA members.
        assert!(Jurisdiction::from_code("AK").is_err());
        assert!(Jurisdiction::from_code("HI").is_err());
        assert!(Jurisdiction::from_code("DC").is_err());
        assert!(Jurisdiction::from_code("").is_err());
    }

    #[test]
    fn test_code_and_display_name() {
        assert_eq!(Jurisdiction::Tx.code(), "TX");
        assert_eq!(Jurisdiction::Tx.display_name(), "Texas");
        assert_eq!(Jurisdiction::Nl.display_name(), "Newfoundland and Labrador");
    }

    #[test]
    fn test_ordering_is_by_display_name() {
        // Code order and name order disagree: Arizona ("AZ") sorts before
        // Arkansas ("AR") by name even though "AR" < "AZ" by code.
        assert!(Jurisdiction::Az < Jurisdiction::Ar);

        let mut sorted = Jurisdiction::ALL.to_vec();
        sorted.sort();
        let mut by_name = Jurisdiction::ALL.to_vec();
        by_name.sort_by(|a, b| a.display_name().cmp(b.display_name()));
        assert_eq!(sorted, by_name);
        assert_eq!(sorted.first().copied(), Some(Jurisdiction::Al)); // Alabama
    }

    #[test]
    fn test_serde_as_code() {
        let json = serde_json::to_string(&Jurisdiction::Bc).unwrap();
        assert_eq!(json, "\"BC\"");
        let back: Jurisdiction = serde_json::from_str("\"MT\"").unwrap();
        assert_eq!(back, Jurisdiction::Mt);
        assert!(serde_json::from_str::<Jurisdiction>("\"ZZ\"").is_err());
    }
}
