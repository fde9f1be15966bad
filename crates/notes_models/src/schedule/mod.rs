//! Observation schedules: value types and generation.
//!
//! This module provides:
//! - [`Frequency`]: observation spacing for the standard variant
//! - [`ObservationPeriod`]: one observation/value-date pair with its
//!   callability terms
//! - [`ObservationSchedule`]: the validated, ordered period list
//! - [`generate`]: the schedule generator for both template variants
//!
//! # Examples
//!
//! ```
//! use notes_core::types::Date;
//! use notes_models::product::{BarrierSchedule, CouponSchedule, ProductConfig, Underlying};
//! use notes_models::schedule::{generate, Frequency};
//!
//! let config = ProductConfig::builder()
//!     .trade_date(Date::from_ymd(2024, 1, 15).unwrap())
//!     .final_observation_date(Date::from_ymd(2025, 1, 15).unwrap())
//!     .frequency(Frequency::Quarterly)
//!     .coupon_barrier(BarrierSchedule::Flat(70.0))
//!     .coupon_rate(CouponSchedule::Flat(1.25))
//!     .protection_barrier(60.0)
//!     .underlying(Underlying::new("SX5E", 4_900.0))
//!     .build()
//!     .unwrap();
//!
//! let schedule = generate(&config).unwrap();
//! assert_eq!(schedule.len(), 4);
//! assert!(schedule.final_period().is_final());
//! ```

mod error;
mod frequency;
mod generator;
mod period;
#[allow(clippy::module_inception)]
mod schedule;

pub use error::ScheduleError;
pub use frequency::Frequency;
pub use generator::generate;
pub use period::ObservationPeriod;
pub use schedule::ObservationSchedule;
