//! The `Date` type.
//!
//! A type-safe calendar-date wrapper around `chrono::NaiveDate` with
//! ISO 8601 parsing/formatting and the arithmetic used by schedule
//! generation: whole-day offsets and whole-month rolls.
//!
//! # Examples
//!
//! ```
//! use notes_core::types::Date;
//!
//! let trade = Date::from_ymd(2024, 1, 15).unwrap();
//! let first_observation = trade.add_months(3).unwrap();
//! assert_eq!(first_observation, Date::from_ymd(2024, 4, 15).unwrap());
//!
//! // Day subtraction yields calendar days
//! assert_eq!(first_observation - trade, 91);
//! ```

use chrono::{Datelike, Days, Local, Months, NaiveDate, Weekday};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around `chrono::NaiveDate`.
///
/// Provides ISO 8601 serialisation and the date arithmetic needed for
/// observation-schedule construction. Month rolls clamp to the end of the
/// target month (2024-01-31 + 1 month = 2024-02-29), matching market
/// convention for monthly observation dates.
///
/// # Examples
///
/// ```
/// use notes_core::types::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
///
/// // Parse from ISO 8601
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Saturday
/// assert!(date.is_weekend());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a `Date` from year, month, and day components.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` for impossible component
    /// combinations (February 30th, month 13, ...).
    ///
    /// # Examples
    ///
    /// ```
    /// use notes_core::types::Date;
    ///
    /// assert!(Date::from_ymd(2024, 2, 29).is_ok()); // leap year
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Returns today's date based on local system time.
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    /// Parses a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    /// Returns `DateError::Parse` when the string is not a valid ISO date.
    ///
    /// # Examples
    ///
    /// ```
    /// use notes_core::types::Date;
    ///
    /// let date = Date::parse("2024-06-15").unwrap();
    /// assert_eq!(date.month(), 6);
    /// assert!(Date::parse("15/06/2024").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::Parse(e.to_string()))
    }

    /// Returns the underlying `NaiveDate` for access to chrono's full API.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns whether this date falls on a Saturday or Sunday.
    ///
    /// # Examples
    ///
    /// ```
    /// use notes_core::types::Date;
    ///
    /// assert!(Date::from_ymd(2024, 6, 15).unwrap().is_weekend()); // Sat
    /// assert!(!Date::from_ymd(2024, 6, 17).unwrap().is_weekend()); // Mon
    /// ```
    #[inline]
    pub fn is_weekend(&self) -> bool {
        matches!(self.0.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Returns this date shifted by a signed number of calendar days.
    ///
    /// # Errors
    /// Returns `DateError::ArithmeticOverflow` if the shift leaves the
    /// representable date range.
    ///
    /// # Examples
    ///
    /// ```
    /// use notes_core::types::Date;
    ///
    /// let date = Date::from_ymd(2024, 2, 28).unwrap();
    /// assert_eq!(date.add_days(2).unwrap(), Date::from_ymd(2024, 3, 1).unwrap());
    /// assert_eq!(date.add_days(-28).unwrap(), Date::from_ymd(2024, 1, 31).unwrap());
    /// ```
    pub fn add_days(self, days: i64) -> Result<Self, DateError> {
        let shifted = if days >= 0 {
            self.0.checked_add_days(Days::new(days as u64))
        } else {
            self.0.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        shifted
            .map(Date)
            .ok_or_else(|| DateError::ArithmeticOverflow {
                reason: format!("{} + {} days", self, days),
            })
    }

    /// Returns this date rolled forward by a number of whole months,
    /// clamping to the last day of the target month where necessary.
    ///
    /// # Errors
    /// Returns `DateError::ArithmeticOverflow` if the roll leaves the
    /// representable date range.
    ///
    /// # Examples
    ///
    /// ```
    /// use notes_core::types::Date;
    ///
    /// let date = Date::from_ymd(2024, 1, 31).unwrap();
    /// assert_eq!(date.add_months(1).unwrap(), Date::from_ymd(2024, 2, 29).unwrap());
    /// assert_eq!(date.add_months(12).unwrap(), Date::from_ymd(2025, 1, 31).unwrap());
    /// ```
    pub fn add_months(self, months: u32) -> Result<Self, DateError> {
        self.0
            .checked_add_months(Months::new(months))
            .map(Date)
            .ok_or_else(|| DateError::ArithmeticOverflow {
                reason: format!("{} + {} months", self, months),
            })
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of calendar days between two dates.
    ///
    /// Positive when `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date from an ISO 8601 string (YYYY-MM-DD).
    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
