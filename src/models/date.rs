//! Calendar date for purchases
//!
//! A plain day/month/year triple. Validation is range-based only: any day
//! from 1 to 31 is accepted for any month, so `31-Feb-2020` is a valid
//! `Date`. Use [`Date::to_naive_date`] when a real calendar date is needed.

use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{BudgetError, BudgetResult};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// An immutable day/month/year value
///
/// Field order matters: the derived ordering compares year, then month,
/// then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Date {
    year: i32,
    month: u32,
    day: u32,
}

impl Date {
    /// Create a date, rejecting out-of-range components
    pub fn new(day: i32, month: i32, year: i32) -> BudgetResult<Self> {
        if !(1..=31).contains(&day) {
            return Err(BudgetError::InvalidDate(
                "Day must be between 1 and 31".into(),
            ));
        }
        if !(1..=12).contains(&month) {
            return Err(BudgetError::InvalidDate(
                "Month must be between 1 and 12".into(),
            ));
        }
        if year < 1 {
            return Err(BudgetError::InvalidDate("Year must be greater than 0".into()));
        }

        Ok(Self {
            year,
            month: month as u32,
            day: day as u32,
        })
    }

    /// Parse a date from three separate text fields
    pub fn parse_parts(day: &str, month: &str, year: &str) -> BudgetResult<Self> {
        let component = |s: &str| {
            s.trim().parse::<i32>().map_err(|_| {
                BudgetError::InvalidDate(format!("'{}' is not a whole number", s.trim()))
            })
        };
        Self::new(component(day)?, component(month)?, component(year)?)
    }

    /// Today's date in the local time zone
    pub fn today() -> Self {
        Self::from(Local::now().date_naive())
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Convert to a calendar date, if this day exists in its month
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year().max(1),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl FromStr for Date {
    type Err = BudgetError;

    /// Accepts `YYYY-MM-DD` or `D/M/YYYY`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parts: Vec<&str> = if s.contains('-') {
            s.split('-').collect()
        } else {
            s.split('/').collect()
        };

        if parts.len() != 3 {
            return Err(BudgetError::InvalidDate(format!(
                "'{}' is not in YYYY-MM-DD or D/M/YYYY form",
                s
            )));
        }

        if s.contains('-') {
            Self::parse_parts(parts[2], parts[1], parts[0])
        } else {
            Self::parse_parts(parts[0], parts[1], parts[2])
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.day,
            MONTH_NAMES[(self.month - 1) as usize],
            self.year
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_valid_bounds() {
        assert!(Date::new(1, 1, 1).is_ok());
        assert!(Date::new(31, 12, 9999).is_ok());
        // Not calendar-accurate by design of the format
        assert!(Date::new(31, 2, 2020).is_ok());
    }

    #[test]
    fn test_invalid_components() {
        for (d, m, y) in [(0, 1, 2020), (32, 1, 2020), (1, 0, 2020), (1, 13, 2020), (1, 1, 0), (1, 1, -5)] {
            let err = Date::new(d, m, y).unwrap_err();
            assert!(matches!(err, BudgetError::InvalidDate(_)), "{d}/{m}/{y}");
        }
    }

    #[test]
    fn test_ordering_is_year_month_day() {
        let a = Date::new(31, 12, 2019).unwrap();
        let b = Date::new(1, 1, 2020).unwrap();
        let c = Date::new(2, 1, 2020).unwrap();
        let d = Date::new(1, 2, 2020).unwrap();

        assert!(a < b);
        assert!(b < c);
        assert!(c < d);
        assert_eq!(b.cmp(&a), a.cmp(&b).reverse());
        assert_eq!(c.cmp(&c), Ordering::Equal);
    }

    #[test]
    fn test_equality_by_value() {
        assert_eq!(Date::new(5, 1, 2020).unwrap(), Date::new(5, 1, 2020).unwrap());
        assert_ne!(Date::new(5, 1, 2020).unwrap(), Date::new(5, 1, 2021).unwrap());
    }

    #[test]
    fn test_display() {
        assert_eq!(Date::new(5, 1, 2020).unwrap().to_string(), "5-Jan-2020");
        assert_eq!(Date::new(25, 12, 1999).unwrap().to_string(), "25-Dec-1999");
    }

    #[test]
    fn test_parse_parts() {
        assert_eq!(
            Date::parse_parts("5", " 1", "2020").unwrap(),
            Date::new(5, 1, 2020).unwrap()
        );
        assert!(matches!(
            Date::parse_parts("five", "1", "2020"),
            Err(BudgetError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_from_str_formats() {
        let expected = Date::new(15, 3, 2024).unwrap();
        assert_eq!("2024-03-15".parse::<Date>().unwrap(), expected);
        assert_eq!("15/3/2024".parse::<Date>().unwrap(), expected);
        assert!("2024-03".parse::<Date>().is_err());
        assert!("2024-13-01".parse::<Date>().is_err());
    }

    #[test]
    fn test_naive_date_conversion() {
        let date = Date::new(29, 2, 2024).unwrap();
        assert_eq!(date.to_naive_date(), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert!(Date::new(31, 4, 2024).unwrap().to_naive_date().is_none());

        let naive = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        assert_eq!(Date::from(naive), Date::new(15, 1, 2025).unwrap());
    }
}
