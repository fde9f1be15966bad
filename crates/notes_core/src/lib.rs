//! # Notes Core (L1: Foundation)
//!
//! Foundation types for the phoenix-rust structured-note engine.
//!
//! This crate provides:
//! - [`types::time::Date`]: type-safe date wrapper with the arithmetic the
//!   schedule generator needs (day offsets, month rolling)
//! - [`calendar::MarketCalendar`]: market jurisdictions with holiday tables
//! - [`calendar::TradingCalendar`]: trading-day tests and forward rolling
//!   over a set of jurisdictions
//!
//! ## Design Principles
//!
//! - Pure, deterministic functions; no IO, no wall-clock dependence beyond
//!   the explicit [`types::time::Date::today`] convenience
//! - Conservative calendars: a date is a non-trading day if any selected
//!   jurisdiction closes on it
//! - Bounded adjustment: forward rolling is capped rather than unbounded, so
//!   corrupt holiday data surfaces as an error instead of a hang

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod calendar;
pub mod types;
