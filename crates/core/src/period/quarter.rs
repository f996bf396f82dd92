//! Calendar quarters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::PeriodError;
use super::month::YearMonth;

/// A calendar quarter (3-month IFTA reporting period).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Quarter {
    /// January - March.
    Q1,
    /// April - June.
    Q2,
    /// July - September.
    Q3,
    /// October - December.
    Q4,
}

impl Quarter {
    /// Parses a quarter from its number.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::InvalidQuarter` for numbers outside 1..=4.
    pub const fn from_number(n: i32) -> Result<Self, PeriodError> {
        match n {
            1 => Ok(Self::Q1),
            2 => Ok(Self::Q2),
            3 => Ok(Self::Q3),
            4 => Ok(Self::Q4),
            _ => Err(PeriodError::InvalidQuarter(n)),
        }
    }

    /// Returns the quarter number (1-4).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Q1 => 1,
            Self::Q2 => 2,
            Self::Q3 => 3,
            Self::Q4 => 4,
        }
    }

    /// Returns the preceding quarter, rolling the year back across Q1.
    #[must_use]
    pub const fn previous(self, year: i32) -> (Self, i32) {
        match self {
            Self::Q1 => (Self::Q4, year - 1),
            Self::Q2 => (Self::Q1, year),
            Self::Q3 => (Self::Q2, year),
            Self::Q4 => (Self::Q3, year),
        }
    }

    /// Returns the first month of the quarter (1, 4, 7, or 10).
    #[must_use]
    pub const fn start_month(self) -> u32 {
        match self {
            Self::Q1 => 1,
            Self::Q2 => 4,
            Self::Q3 => 7,
            Self::Q4 => 10,
        }
    }

    /// Returns the inclusive calendar date range of the quarter.
    ///
    /// The end date is the last calendar day of the third month, so Q1 ends
    /// on March 31 and February's length never matters here; leap years only
    /// affect dates inside the range.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::InvalidYear` if the year is outside the
    /// representable calendar range.
    pub fn date_range(self, year: i32) -> Result<(NaiveDate, NaiveDate), PeriodError> {
        let start = NaiveDate::from_ymd_opt(year, self.start_month(), 1)
            .ok_or(PeriodError::InvalidYear(year))?;

        // Last day of the quarter: first day of the next quarter minus one.
        let (next_year, next_month) = match self {
            Self::Q4 => (year + 1, 1),
            _ => (year, self.start_month() + 3),
        };
        let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .ok_or(PeriodError::InvalidYear(year))?;

        Ok((start, end))
    }

    /// Returns the three months of the quarter in chronological order.
    #[must_use]
    pub fn months(self, year: i32) -> [YearMonth; 3] {
        let first = self.start_month();
        // Month numbers inside a quarter are always valid (1..=12).
        [
            YearMonth::from_parts(year, first),
            YearMonth::from_parts(year, first + 1),
            YearMonth::from_parts(year, first + 2),
        ]
    }

    /// Returns true if the given year-month falls inside this quarter.
    #[must_use]
    pub fn contains(self, year: i32, ym: YearMonth) -> bool {
        ym.year() == year && ym.quarter() == self
    }
}

impl std::fmt::Display for Quarter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Q{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, Quarter::Q1)]
    #[case(2, Quarter::Q2)]
    #[case(3, Quarter::Q3)]
    #[case(4, Quarter::Q4)]
    fn test_from_number_valid(#[case] n: i32, #[case] expected: Quarter) {
        assert_eq!(Quarter::from_number(n).unwrap(), expected);
        assert_eq!(expected.number(), u8::try_from(n).unwrap());
    }

    #[rstest]
    #[case(0)]
    #[case(5)]
    #[case(-1)]
    #[case(42)]
    fn test_from_number_invalid(#[case] n: i32) {
        assert_eq!(Quarter::from_number(n), Err(PeriodError::InvalidQuarter(n)));
    }

    #[test]
    fn test_previous_wraps_across_year() {
        assert_eq!(Quarter::Q1.previous(2024), (Quarter::Q4, 2023));
    }

    #[rstest]
    #[case(Quarter::Q2, Quarter::Q1)]
    #[case(Quarter::Q3, Quarter::Q2)]
    #[case(Quarter::Q4, Quarter::Q3)]
    fn test_previous_same_year(#[case] q: Quarter, #[case] expected: Quarter) {
        assert_eq!(q.previous(2024), (expected, 2024));
    }

    #[rstest]
    #[case(Quarter::Q1, 2024, (2024, 1, 1), (2024, 3, 31))]
    #[case(Quarter::Q2, 2024, (2024, 4, 1), (2024, 6, 30))]
    #[case(Quarter::Q3, 2024, (2024, 7, 1), (2024, 9, 30))]
    #[case(Quarter::Q4, 2024, (2024, 10, 1), (2024, 12, 31))]
    // Non-leap year Q1 has the same boundaries; Feb length is interior.
    #[case(Quarter::Q1, 2023, (2023, 1, 1), (2023, 3, 31))]
    fn test_date_range(
        #[case] q: Quarter,
        #[case] year: i32,
        #[case] start: (i32, u32, u32),
        #[case] end: (i32, u32, u32),
    ) {
        let (s, e) = q.date_range(year).unwrap();
        assert_eq!(s, NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap());
        assert_eq!(e, NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap());
    }

    #[test]
    fn test_date_range_contains_leap_day() {
        let (start, end) = Quarter::Q1.date_range(2024).unwrap();
        let leap_day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert!(start <= leap_day && leap_day <= end);
        // Leap-year Q1 spans 91 days, non-leap 90.
        let (s23, e23) = Quarter::Q1.date_range(2023).unwrap();
        assert_eq!((end - start).num_days(), 90);
        assert_eq!((e23 - s23).num_days(), 89);
    }

    #[test]
    fn test_date_range_invalid_year() {
        assert_eq!(
            Quarter::Q1.date_range(300_000),
            Err(PeriodError::InvalidYear(300_000))
        );
    }

    #[test]
    fn test_months_chronological() {
        let months = Quarter::Q3.months(2024);
        assert_eq!(months[0], YearMonth::new(2024, 7).unwrap());
        assert_eq!(months[1], YearMonth::new(2024, 8).unwrap());
        assert_eq!(months[2], YearMonth::new(2024, 9).unwrap());
        assert!(months[0] < months[1] && months[1] < months[2]);
    }

    #[test]
    fn test_contains() {
        let feb = YearMonth::new(2024, 2).unwrap();
        assert!(Quarter::Q1.contains(2024, feb));
        assert!(!Quarter::Q2.contains(2024, feb));
        assert!(!Quarter::Q1.contains(2023, feb));
    }

    #[test]
    fn test_display() {
        assert_eq!(Quarter::Q1.to_string(), "Q1");
        assert_eq!(Quarter::Q4.to_string(), "Q4");
    }
}
