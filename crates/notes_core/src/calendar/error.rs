//! Calendar adjustment error types.

use crate::types::Date;
use thiserror::Error;

/// Errors from calendar lookups and trading-day adjustment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// Forward rolling found no trading day within the bounded horizon.
    ///
    /// This indicates corrupt holiday data: real holiday tables never
    /// produce non-trading runs this long.
    #[error("No trading day within {horizon_days} days of {start}")]
    NoTradingDayWithinHorizon {
        /// The date adjustment started from.
        start: Date,
        /// The horizon that was exhausted, in calendar days.
        horizon_days: u32,
    },

    /// Unknown market jurisdiction code.
    #[error("Unknown market calendar: {0}")]
    UnknownMarket(String),

    /// Date arithmetic failed while rolling.
    #[error(transparent)]
    Date(#[from] crate::types::DateError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_trading_day_display() {
        let err = CalendarError::NoTradingDayWithinHorizon {
            start: Date::from_ymd(2024, 6, 15).unwrap(),
            horizon_days: 30,
        };
        assert_eq!(
            format!("{}", err),
            "No trading day within 30 days of 2024-06-15"
        );
    }

    #[test]
    fn test_unknown_market_display() {
        let err = CalendarError::UnknownMarket("XX".to_string());
        assert_eq!(format!("{}", err), "Unknown market calendar: XX");
    }
}
