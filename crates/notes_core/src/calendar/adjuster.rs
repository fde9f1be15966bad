//! Trading-day tests and forward rolling over a set of jurisdictions.

use super::error::CalendarError;
use super::market::MarketCalendar;
use crate::types::Date;

/// Maximum number of calendar days [`TradingCalendar::roll_forward`] will
/// advance before reporting a data-integrity error.
///
/// Real holiday tables never produce non-trading runs anywhere near this
/// long; exhausting the horizon means the tables are corrupt.
pub const MAX_ROLL_DAYS: u32 = 30;

/// Trading-day adjustment over a set of market jurisdictions.
///
/// A date is a trading day only if it is a weekday and not a holiday in
/// **any** of the selected jurisdictions (conservative union, not
/// intersection).
///
/// The adjuster is stateless apart from its jurisdiction set: all methods
/// are pure, deterministic, and safe to call concurrently.
///
/// # Examples
///
/// ```
/// use notes_core::calendar::{MarketCalendar, TradingCalendar};
/// use notes_core::types::Date;
///
/// let calendar = TradingCalendar::new(vec![MarketCalendar::UnitedStates]);
///
/// // Saturday rolls to Monday
/// let saturday = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(
///     calendar.roll_forward(saturday).unwrap(),
///     Date::from_ymd(2024, 6, 17).unwrap(),
/// );
///
/// // Trading days are left alone
/// let monday = Date::from_ymd(2024, 6, 17).unwrap();
/// assert_eq!(calendar.roll_forward(monday).unwrap(), monday);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TradingCalendar {
    /// The jurisdictions whose holidays are unioned.
    markets: Vec<MarketCalendar>,
}

impl TradingCalendar {
    /// Creates a trading calendar over the given jurisdictions.
    ///
    /// An empty jurisdiction set is allowed and adjusts for weekends only.
    pub fn new(markets: Vec<MarketCalendar>) -> Self {
        Self { markets }
    }

    /// Returns the selected jurisdictions.
    #[inline]
    pub fn markets(&self) -> &[MarketCalendar] {
        &self.markets
    }

    /// Returns whether the given date is a trading day.
    ///
    /// False on Saturdays, Sundays, and any date that is a holiday in at
    /// least one selected jurisdiction.
    ///
    /// # Examples
    ///
    /// ```
    /// use notes_core::calendar::{MarketCalendar, TradingCalendar};
    /// use notes_core::types::Date;
    ///
    /// let us_only = TradingCalendar::new(vec![MarketCalendar::UnitedStates]);
    /// let us_gb = TradingCalendar::new(vec![
    ///     MarketCalendar::UnitedStates,
    ///     MarketCalendar::UnitedKingdom,
    /// ]);
    ///
    /// // Boxing Day 2024: open in New York, closed in London
    /// let boxing = Date::from_ymd(2024, 12, 26).unwrap();
    /// assert!(us_only.is_trading_day(boxing));
    /// assert!(!us_gb.is_trading_day(boxing));
    /// ```
    pub fn is_trading_day(&self, date: Date) -> bool {
        !date.is_weekend() && !self.markets.iter().any(|m| m.is_holiday(date))
    }

    /// Rolls a date forward to the next trading day.
    ///
    /// Returns the date unchanged when it already is a trading day,
    /// otherwise advances one calendar day at a time. Iteration is capped at
    /// [`MAX_ROLL_DAYS`]; exhausting the cap is a data-integrity error.
    ///
    /// # Errors
    /// - [`CalendarError::NoTradingDayWithinHorizon`] when no trading day
    ///   exists within [`MAX_ROLL_DAYS`] calendar days
    /// - [`CalendarError::Date`] when date arithmetic overflows
    pub fn roll_forward(&self, date: Date) -> Result<Date, CalendarError> {
        let mut candidate = date;
        for _ in 0..=MAX_ROLL_DAYS {
            if self.is_trading_day(candidate) {
                return Ok(candidate);
            }
            candidate = candidate.add_days(1)?;
        }
        Err(CalendarError::NoTradingDayWithinHorizon {
            start: date,
            horizon_days: MAX_ROLL_DAYS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn us() -> TradingCalendar {
        TradingCalendar::new(vec![MarketCalendar::UnitedStates])
    }

    fn all_markets() -> TradingCalendar {
        TradingCalendar::new(vec![
            MarketCalendar::UnitedStates,
            MarketCalendar::Eurozone,
            MarketCalendar::UnitedKingdom,
        ])
    }

    #[test]
    fn test_weekday_is_trading_day() {
        let wednesday = Date::from_ymd(2024, 6, 12).unwrap();
        assert!(us().is_trading_day(wednesday));
        assert!(all_markets().is_trading_day(wednesday));
    }

    #[test]
    fn test_weekend_is_not_trading_day() {
        let saturday = Date::from_ymd(2024, 6, 15).unwrap();
        let sunday = Date::from_ymd(2024, 6, 16).unwrap();
        assert!(!us().is_trading_day(saturday));
        assert!(!us().is_trading_day(sunday));
    }

    #[test]
    fn test_holiday_union_is_conservative() {
        // Boxing Day 2024 is a GB/EU holiday but a US trading day.
        let boxing = Date::from_ymd(2024, 12, 26).unwrap();
        assert!(us().is_trading_day(boxing));
        assert!(!all_markets().is_trading_day(boxing));
    }

    #[test]
    fn test_empty_market_set_adjusts_weekends_only() {
        let calendar = TradingCalendar::new(vec![]);
        let christmas = Date::from_ymd(2024, 12, 25).unwrap(); // Wednesday
        assert!(calendar.is_trading_day(christmas));

        let saturday = Date::from_ymd(2024, 12, 28).unwrap();
        assert!(!calendar.is_trading_day(saturday));
    }

    #[test]
    fn test_roll_forward_identity_on_trading_day() {
        let monday = Date::from_ymd(2024, 6, 17).unwrap();
        assert_eq!(us().roll_forward(monday).unwrap(), monday);
    }

    #[test]
    fn test_roll_forward_over_weekend() {
        let saturday = Date::from_ymd(2024, 6, 15).unwrap();
        assert_eq!(
            us().roll_forward(saturday).unwrap(),
            Date::from_ymd(2024, 6, 17).unwrap()
        );
    }

    #[test]
    fn test_roll_forward_over_christmas_cluster() {
        // 2024-12-25 Wed (closed everywhere), 26 Thu (GB/EU holiday),
        // 27 Fri open.
        let christmas = Date::from_ymd(2024, 12, 25).unwrap();
        assert_eq!(
            all_markets().roll_forward(christmas).unwrap(),
            Date::from_ymd(2024, 12, 27).unwrap()
        );
        // US alone reopens on the 26th.
        assert_eq!(
            us().roll_forward(christmas).unwrap(),
            Date::from_ymd(2024, 12, 26).unwrap()
        );
    }

    #[test]
    fn test_roll_forward_over_easter() {
        // Good Friday 2024-03-29 through Easter Monday 2024-04-01.
        let good_friday = Date::from_ymd(2024, 3, 29).unwrap();
        // NYSE reopens on the Monday (Easter Monday is not a US holiday).
        assert_eq!(
            us().roll_forward(good_friday).unwrap(),
            Date::from_ymd(2024, 4, 1).unwrap()
        );
        // European markets stay shut through Easter Monday.
        assert_eq!(
            all_markets().roll_forward(good_friday).unwrap(),
            Date::from_ymd(2024, 4, 2).unwrap()
        );
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn date_strategy() -> impl Strategy<Value = Date> {
            (2023i32..2027i32, 1u32..13u32, 1u32..29u32)
                .prop_map(|(y, m, d)| Date::from_ymd(y, m, d).unwrap())
        }

        fn market_set_strategy() -> impl Strategy<Value = Vec<MarketCalendar>> {
            proptest::sample::subsequence(
                vec![
                    MarketCalendar::UnitedStates,
                    MarketCalendar::Eurozone,
                    MarketCalendar::UnitedKingdom,
                ],
                0..=3,
            )
        }

        proptest! {
            #[test]
            fn test_roll_forward_lands_on_trading_day(
                date in date_strategy(),
                markets in market_set_strategy(),
            ) {
                let calendar = TradingCalendar::new(markets);
                let adjusted = calendar.roll_forward(date).unwrap();
                prop_assert!(calendar.is_trading_day(adjusted));
                prop_assert!(adjusted >= date);
                prop_assert!(adjusted - date <= i64::from(MAX_ROLL_DAYS));
            }

            #[test]
            fn test_roll_forward_is_idempotent(
                date in date_strategy(),
                markets in market_set_strategy(),
            ) {
                let calendar = TradingCalendar::new(markets);
                let once = calendar.roll_forward(date).unwrap();
                let twice = calendar.roll_forward(once).unwrap();
                prop_assert_eq!(once, twice);
            }
        }
    }
}
