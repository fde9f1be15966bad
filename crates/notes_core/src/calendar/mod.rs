//! Market calendars and trading-day adjustment.
//!
//! This module provides:
//! - [`MarketCalendar`]: a market jurisdiction with its holiday table
//! - [`TradingCalendar`]: trading-day tests and forward rolling over a set
//!   of jurisdictions
//! - [`CalendarError`]: bounded-adjustment and parse failures
//!
//! A date is a non-trading day when it falls on a weekend or on a holiday in
//! **any** jurisdiction in the selected set (conservative union — a date
//! closed in just one of US/EU/GB is skipped for the whole set).
//!
//! # Examples
//!
//! ```
//! use notes_core::calendar::{MarketCalendar, TradingCalendar};
//! use notes_core::types::Date;
//!
//! let calendar = TradingCalendar::new(vec![
//!     MarketCalendar::UnitedStates,
//!     MarketCalendar::UnitedKingdom,
//! ]);
//!
//! // Christmas Day 2024 is closed everywhere
//! let christmas = Date::from_ymd(2024, 12, 25).unwrap();
//! assert!(!calendar.is_trading_day(christmas));
//!
//! // Rolls past the 26th too (UK Boxing Day)
//! let adjusted = calendar.roll_forward(christmas).unwrap();
//! assert_eq!(adjusted, Date::from_ymd(2024, 12, 27).unwrap());
//! ```

mod adjuster;
mod error;
mod market;

pub use adjuster::{TradingCalendar, MAX_ROLL_DAYS};
pub use error::CalendarError;
pub use market::MarketCalendar;
