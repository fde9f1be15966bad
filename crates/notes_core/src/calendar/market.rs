//! Market jurisdictions and their holiday tables.

use std::fmt;
use std::str::FromStr;

use super::error::CalendarError;
use crate::types::Date;

/// A market jurisdiction used for holiday adjustment.
///
/// Each jurisdiction carries a hardcoded table of observed exchange holidays
/// for 2023–2027. Extend the tables as new years are published.
///
/// # Examples
///
/// ```
/// use notes_core::calendar::MarketCalendar;
///
/// let us: MarketCalendar = "US".parse().unwrap();
/// assert_eq!(us, MarketCalendar::UnitedStates);
/// assert_eq!(us.code(), "US");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarketCalendar {
    /// United States (NYSE holiday schedule).
    UnitedStates,
    /// Eurozone (TARGET closing days).
    Eurozone,
    /// United Kingdom (LSE / bank holidays).
    UnitedKingdom,
}

// Holiday tables, encoded as (year, month, day) for readability.

const US_HOLIDAYS: &[(i32, u32, u32)] = &[
    // ── 2023 ──
    (2023, 1, 2),   // New Year's Day (observed Mon)
    (2023, 1, 16),  // MLK Day
    (2023, 2, 20),  // Presidents' Day
    (2023, 4, 7),   // Good Friday
    (2023, 5, 29),  // Memorial Day
    (2023, 6, 19),  // Juneteenth
    (2023, 7, 4),   // Independence Day
    (2023, 9, 4),   // Labor Day
    (2023, 11, 23), // Thanksgiving
    (2023, 12, 25), // Christmas
    // ── 2024 ──
    (2024, 1, 1),   // New Year's Day
    (2024, 1, 15),  // MLK Day
    (2024, 2, 19),  // Presidents' Day
    (2024, 3, 29),  // Good Friday
    (2024, 5, 27),  // Memorial Day
    (2024, 6, 19),  // Juneteenth
    (2024, 7, 4),   // Independence Day
    (2024, 9, 2),   // Labor Day
    (2024, 11, 28), // Thanksgiving
    (2024, 12, 25), // Christmas
    // ── 2025 ──
    (2025, 1, 1),   // New Year's Day
    (2025, 1, 20),  // MLK Day
    (2025, 2, 17),  // Presidents' Day
    (2025, 4, 18),  // Good Friday
    (2025, 5, 26),  // Memorial Day
    (2025, 6, 19),  // Juneteenth
    (2025, 7, 4),   // Independence Day
    (2025, 9, 1),   // Labor Day
    (2025, 11, 27), // Thanksgiving
    (2025, 12, 25), // Christmas
    // ── 2026 ──
    (2026, 1, 1),   // New Year's Day
    (2026, 1, 19),  // MLK Day
    (2026, 2, 16),  // Presidents' Day
    (2026, 4, 3),   // Good Friday
    (2026, 5, 25),  // Memorial Day
    (2026, 6, 19),  // Juneteenth
    (2026, 7, 3),   // Independence Day (observed — July 4 is a Saturday)
    (2026, 9, 7),   // Labor Day
    (2026, 11, 26), // Thanksgiving
    (2026, 12, 25), // Christmas
    // ── 2027 ──
    (2027, 1, 1),   // New Year's Day
    (2027, 1, 18),  // MLK Day
    (2027, 2, 15),  // Presidents' Day
    (2027, 3, 26),  // Good Friday
    (2027, 5, 31),  // Memorial Day
    (2027, 6, 18),  // Juneteenth (observed — June 19 is a Saturday)
    (2027, 7, 5),   // Independence Day (observed — July 4 is a Sunday)
    (2027, 9, 6),   // Labor Day
    (2027, 11, 25), // Thanksgiving
    (2027, 12, 24), // Christmas (observed — December 25 is a Saturday)
];

const EU_HOLIDAYS: &[(i32, u32, u32)] = &[
    // ── 2023 ──
    (2023, 4, 7),   // Good Friday
    (2023, 4, 10),  // Easter Monday
    (2023, 5, 1),   // Labour Day
    (2023, 12, 25), // Christmas
    (2023, 12, 26), // Christmas Holiday
    // ── 2024 ──
    (2024, 1, 1),   // New Year's Day
    (2024, 3, 29),  // Good Friday
    (2024, 4, 1),   // Easter Monday
    (2024, 5, 1),   // Labour Day
    (2024, 12, 25), // Christmas
    (2024, 12, 26), // Christmas Holiday
    // ── 2025 ──
    (2025, 1, 1),   // New Year's Day
    (2025, 4, 18),  // Good Friday
    (2025, 4, 21),  // Easter Monday
    (2025, 5, 1),   // Labour Day
    (2025, 12, 25), // Christmas
    (2025, 12, 26), // Christmas Holiday
    // ── 2026 ──
    (2026, 1, 1),   // New Year's Day
    (2026, 4, 3),   // Good Friday
    (2026, 4, 6),   // Easter Monday
    (2026, 5, 1),   // Labour Day
    (2026, 12, 25), // Christmas
    // ── 2027 ──
    (2027, 1, 1),   // New Year's Day
    (2027, 3, 26),  // Good Friday
    (2027, 3, 29),  // Easter Monday
    // May 1st 2027 is a Saturday
];

const GB_HOLIDAYS: &[(i32, u32, u32)] = &[
    // ── 2023 ──
    (2023, 1, 2),   // New Year's Day (observed Mon)
    (2023, 4, 7),   // Good Friday
    (2023, 4, 10),  // Easter Monday
    (2023, 5, 1),   // Early May bank holiday
    (2023, 5, 8),   // Coronation bank holiday
    (2023, 5, 29),  // Spring bank holiday
    (2023, 8, 28),  // Summer bank holiday
    (2023, 12, 25), // Christmas
    (2023, 12, 26), // Boxing Day
    // ── 2024 ──
    (2024, 1, 1),   // New Year's Day
    (2024, 3, 29),  // Good Friday
    (2024, 4, 1),   // Easter Monday
    (2024, 5, 6),   // Early May bank holiday
    (2024, 5, 27),  // Spring bank holiday
    (2024, 8, 26),  // Summer bank holiday
    (2024, 12, 25), // Christmas
    (2024, 12, 26), // Boxing Day
    // ── 2025 ──
    (2025, 1, 1),   // New Year's Day
    (2025, 4, 18),  // Good Friday
    (2025, 4, 21),  // Easter Monday
    (2025, 5, 5),   // Early May bank holiday
    (2025, 5, 26),  // Spring bank holiday
    (2025, 8, 25),  // Summer bank holiday
    (2025, 12, 25), // Christmas
    (2025, 12, 26), // Boxing Day
    // ── 2026 ──
    (2026, 1, 1),   // New Year's Day
    (2026, 4, 3),   // Good Friday
    (2026, 4, 6),   // Easter Monday
    (2026, 5, 4),   // Early May bank holiday
    (2026, 5, 25),  // Spring bank holiday
    (2026, 8, 31),  // Summer bank holiday
    (2026, 12, 25), // Christmas
    (2026, 12, 28), // Boxing Day (observed — December 26 is a Saturday)
    // ── 2027 ──
    (2027, 1, 1),   // New Year's Day
    (2027, 3, 26),  // Good Friday
    (2027, 3, 29),  // Easter Monday
    (2027, 5, 3),   // Early May bank holiday
    (2027, 5, 31),  // Spring bank holiday
    (2027, 8, 30),  // Summer bank holiday
    (2027, 12, 27), // Christmas (observed — December 25 is a Saturday)
    (2027, 12, 28), // Boxing Day (observed — December 26 is a Sunday)
];

impl MarketCalendar {
    /// Returns the jurisdiction code.
    ///
    /// # Examples
    ///
    /// ```
    /// use notes_core::calendar::MarketCalendar;
    ///
    /// assert_eq!(MarketCalendar::UnitedStates.code(), "US");
    /// assert_eq!(MarketCalendar::Eurozone.code(), "EU");
    /// assert_eq!(MarketCalendar::UnitedKingdom.code(), "GB");
    /// ```
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            MarketCalendar::UnitedStates => "US",
            MarketCalendar::Eurozone => "EU",
            MarketCalendar::UnitedKingdom => "GB",
        }
    }

    /// Returns the human-readable jurisdiction name.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            MarketCalendar::UnitedStates => "United States",
            MarketCalendar::Eurozone => "Eurozone",
            MarketCalendar::UnitedKingdom => "United Kingdom",
        }
    }

    /// Returns this jurisdiction's holiday table.
    fn holidays(&self) -> &'static [(i32, u32, u32)] {
        match self {
            MarketCalendar::UnitedStates => US_HOLIDAYS,
            MarketCalendar::Eurozone => EU_HOLIDAYS,
            MarketCalendar::UnitedKingdom => GB_HOLIDAYS,
        }
    }

    /// Returns whether the given date is a holiday in this jurisdiction.
    ///
    /// Weekends are not holidays; they are handled separately by
    /// [`super::TradingCalendar::is_trading_day`].
    ///
    /// # Examples
    ///
    /// ```
    /// use notes_core::calendar::MarketCalendar;
    /// use notes_core::types::Date;
    ///
    /// let july4 = Date::from_ymd(2024, 7, 4).unwrap();
    /// assert!(MarketCalendar::UnitedStates.is_holiday(july4));
    /// assert!(!MarketCalendar::UnitedKingdom.is_holiday(july4));
    /// ```
    pub fn is_holiday(&self, date: Date) -> bool {
        self.holidays()
            .contains(&(date.year(), date.month(), date.day()))
    }
}

impl fmt::Display for MarketCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for MarketCalendar {
    type Err = CalendarError;

    /// Parses a jurisdiction from its code or name (case-insensitive).
    ///
    /// Accepted spellings:
    /// - US: "US", "USA", "United States"
    /// - EU: "EU", "Eurozone"
    /// - GB: "GB", "UK", "United Kingdom"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace([' ', '_', '-'], "").as_str() {
            "US" | "USA" | "UNITEDSTATES" => Ok(MarketCalendar::UnitedStates),
            "EU" | "EUROZONE" => Ok(MarketCalendar::Eurozone),
            "GB" | "UK" | "UNITEDKINGDOM" => Ok(MarketCalendar::UnitedKingdom),
            _ => Err(CalendarError::UnknownMarket(s.to_string())),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::MarketCalendar;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for MarketCalendar {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.code())
        }
    }

    impl<'de> Deserialize<'de> for MarketCalendar {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            MarketCalendar::from_str(&s).map_err(de::Error::custom)
        }
    }
}
