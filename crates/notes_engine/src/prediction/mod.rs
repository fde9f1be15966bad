//! Forward-looking classification of the next upcoming observation.
//!
//! Predictions are advisory and ephemeral: recomputed on every live price
//! refresh, never persisted, and never written into the outcome history.
//! [`predict_next`] is a pure function — identical inputs produce identical
//! results.

use notes_models::product::{ProductConfig, TemplateVariant};
use notes_models::schedule::ObservationSchedule;

use crate::evaluation::{ObservationOutcome, RedemptionRegime};

use std::fmt;

/// The most likely outcome of the next observation at the live level.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PredictedOutcome {
    /// The live level meets the period's autocall level.
    Autocall,
    /// The live level meets the period's coupon barrier.
    Coupon,
    /// Below the barrier with coupon memory enabled: the coupon would
    /// accrue.
    MemoryAdded,
    /// The final period would redeem under the given regime.
    FinalRedemption {
        /// The speculative redemption regime at the live level.
        regime: RedemptionRegime,
    },
    /// Nothing would happen at the live level.
    NoEvent,
}

impl fmt::Display for PredictedOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictedOutcome::Autocall => write!(f, "likely autocall"),
            PredictedOutcome::Coupon => write!(f, "likely coupon"),
            PredictedOutcome::MemoryAdded => write!(f, "likely memory accrual"),
            PredictedOutcome::FinalRedemption { regime } => {
                write!(f, "likely final redemption ({})", regime)
            }
            PredictedOutcome::NoEvent => write!(f, "no event"),
        }
    }
}

/// The prediction for the first unresolved period of a product.
///
/// Ephemeral: it has no identity beyond "the prediction for the next
/// period at this live level" and is recomputed on demand.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NextObservationPrediction {
    /// The predicted period's 1-based index.
    pub period_index: u32,
    /// The classified outcome at the live level.
    pub outcome: PredictedOutcome,
    /// The live basket level used, in percent.
    pub current_basket_level: f64,
    /// Signed distance from the live level to the lowest applicable
    /// barrier (autocall level when callable, coupon barrier otherwise).
    pub distance_to_barrier: f64,
}

/// Classifies the likely outcome of the first period with no recorded
/// outcome.
///
/// Returns `None` when there is nothing to predict:
/// - every period already has an outcome, or a terminal outcome exists
/// - the product is a Himalaya note (no barrier semantics to classify)
///
/// `outcomes` must be the append-only history produced by the evaluator
/// (contiguous from period 1); the next period is the one following the
/// last outcome.
///
/// # Examples
///
/// ```
/// use notes_core::types::Date;
/// use notes_models::product::{BarrierSchedule, CouponSchedule, ProductConfig, Underlying};
/// use notes_models::schedule::{generate, Frequency};
/// use notes_engine::prediction::{predict_next, PredictedOutcome};
///
/// let config = ProductConfig::builder()
///     .trade_date(Date::from_ymd(2024, 1, 15).unwrap())
///     .final_observation_date(Date::from_ymd(2025, 1, 15).unwrap())
///     .frequency(Frequency::Quarterly)
///     .cool_off_periods(1)
///     .coupon_barrier(BarrierSchedule::Flat(70.0))
///     .coupon_rate(CouponSchedule::Flat(1.25))
///     .coupon_memory_enabled(true)
///     .protection_barrier(60.0)
///     .underlying(Underlying::new("SX5E", 4_900.0))
///     .build()
///     .unwrap();
/// let schedule = generate(&config).unwrap();
///
/// // Period 1 is in cool-off, so the coupon barrier applies: a live level
/// // of 68 sits 2 points below the 70 barrier.
/// let prediction = predict_next(&config, &schedule, &[], 68.0).unwrap();
/// assert_eq!(prediction.outcome, PredictedOutcome::MemoryAdded);
/// assert_eq!(prediction.distance_to_barrier, -2.0);
/// ```
pub fn predict_next(
    config: &ProductConfig,
    schedule: &ObservationSchedule,
    outcomes: &[ObservationOutcome],
    live_basket_level: f64,
) -> Option<NextObservationPrediction> {
    // The Himalaya variant carries no autocall or coupon barriers; there is
    // no barrier-relative outcome to classify.
    if config.variant == TemplateVariant::Himalaya {
        return None;
    }

    // Fully resolved products have nothing upcoming.
    if outcomes.iter().any(|o| o.is_terminal) {
        return None;
    }

    let next_index = outcomes.len() as u32 + 1;
    let period = schedule.period(next_index)?;

    let autocall_level = period.autocall_level().filter(|_| period.is_callable());
    let coupon_barrier = period.coupon_barrier();

    // Distance against the barrier that applies first: the autocall level
    // when callable, the coupon barrier otherwise.
    let reference = autocall_level.or(coupon_barrier)?;
    let distance_to_barrier = live_basket_level - reference;

    let outcome = if autocall_level.is_some_and(|level| live_basket_level >= level) {
        PredictedOutcome::Autocall
    } else if coupon_barrier.is_some_and(|barrier| live_basket_level >= barrier) {
        PredictedOutcome::Coupon
    } else if config.coupon_memory_enabled {
        PredictedOutcome::MemoryAdded
    } else if period.is_final() {
        PredictedOutcome::FinalRedemption {
            regime: RedemptionRegime::decide(live_basket_level, config.protection_barrier),
        }
    } else {
        PredictedOutcome::NoEvent
    };

    Some(NextObservationPrediction {
        period_index: next_index,
        outcome,
        current_basket_level: live_basket_level,
        distance_to_barrier,
    })
}
