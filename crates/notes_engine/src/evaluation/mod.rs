//! Per-period outcome evaluation.
//!
//! This module provides:
//! - [`OutcomeEvaluator`]: the incremental evaluator, enforcing strict
//!   period order and absorbing terminal states
//! - [`evaluate`]: the one-shot fold over a schedule and observed history
//! - [`ObservationOutcome`] / [`EvaluationStatus`] / [`RedemptionRegime`]:
//!   the produced records
//! - [`MemoryCouponState`]: the coupon-memory accumulator, modelled as an
//!   explicit fold state so the reset-on-payout invariant is mechanically
//!   checkable
//! - [`MarketHistory`]: observed performances keyed by period index
//!
//! # Examples
//!
//! ```
//! use notes_core::types::Date;
//! use notes_models::basket::UnderlyingPerformance;
//! use notes_models::product::{BarrierSchedule, CouponSchedule, ProductConfig, Underlying};
//! use notes_models::schedule::{generate, Frequency};
//! use notes_engine::evaluation::{evaluate, EvaluationStatus, MarketHistory};
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
//! let schedule = generate(&config).unwrap();
//!
//! let mut history = MarketHistory::new();
//! // Period 1 closes above the autocall level: the note is called.
//! history.insert(1, vec![UnderlyingPerformance::new("SX5E", 103.0)]);
//!
//! let report = evaluate(&config, &schedule, &history).unwrap();
//! assert!(matches!(report.status, EvaluationStatus::Called { period_index: 1 }));
//! assert_eq!(report.outcomes.len(), 1);
//! ```

mod error;
mod evaluator;
mod history;
mod memory;
mod outcome;

pub use error::EvaluationError;
pub use evaluator::{evaluate, EvaluationReport, OutcomeEvaluator};
pub use history::MarketHistory;
pub use memory::MemoryCouponState;
pub use outcome::{EvaluationStatus, ObservationOutcome, RedemptionRegime};
