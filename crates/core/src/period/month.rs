//! Year-month grouping key.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::PeriodError;
use super::quarter::Quarter;

/// A calendar year-month, the grouping key for monthly aggregates.
///
/// Ordered chronologically; serialized as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a year-month, validating the month number.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::InvalidMonth` for months outside 1..=12.
    pub const fn new(year: i32, month: u32) -> Result<Self, PeriodError> {
        if matches!(month, 1..=12) {
            Ok(Self { year, month })
        } else {
            Err(PeriodError::InvalidMonth(month))
        }
    }

    /// Constructor for callers that already hold a valid month (1..=12).
    pub(crate) const fn from_parts(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Derives the year-month from a calendar date.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the calendar year.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the month number (1-12).
    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// Returns the quarter this month belongs to.
    #[must_use]
    pub const fn quarter(self) -> Quarter {
        match self.month {
            1..=3 => Quarter::Q1,
            4..=6 => Quarter::Q2,
            7..=9 => Quarter::Q3,
            _ => Quarter::Q4,
        }
    }

    /// Returns the English month name.
    #[must_use]
    pub const fn month_name(self) -> &'static str {
        match self.month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            _ => "December",
        }
    }

    /// Returns a human-readable label (e.g., "January 2024").
    #[must_use]
    pub fn label(self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for YearMonth {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || PeriodError::MalformedYearMonth(s.to_string());
        let (year_str, month_str) = s.split_once('-').ok_or_else(malformed)?;
        let year: i32 = year_str.parse().map_err(|_| malformed())?;
        let month: u32 = month_str.parse().map_err(|_| malformed())?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = PeriodError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<YearMonth> for String {
    fn from(ym: YearMonth) -> Self {
        ym.to_string()
    }
}
