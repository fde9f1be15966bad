//! The outcome evaluator.

use notes_models::basket::{aggregate, BasketError, HimalayaBasket, UnderlyingPerformance};
use notes_models::product::{HimalayaLockPolicy, ProductConfig, TemplateVariant};
use notes_models::schedule::{ObservationPeriod, ObservationSchedule};

use super::error::EvaluationError;
use super::history::MarketHistory;
use super::memory::MemoryCouponState;
use super::outcome::{EvaluationStatus, ObservationOutcome, RedemptionRegime};

/// Variant-specific evaluator state.
#[derive(Debug, Clone)]
enum VariantState {
    Standard,
    Himalaya(HimalayaBasket),
}

/// The incremental per-period evaluator for one product.
///
/// Periods must be applied in strict index order, starting at 1; the
/// evaluator enforces this and refuses any work after a terminal state.
/// Within a product evaluation is therefore strictly sequential, while
/// distinct products share nothing and evaluate freely in parallel.
///
/// For the common "replay the whole observed history" case, use
/// [`evaluate`].
///
/// # Examples
///
/// ```
/// use notes_core::types::Date;
/// use notes_models::basket::UnderlyingPerformance;
/// use notes_models::product::{BarrierSchedule, CouponSchedule, ProductConfig, Underlying};
/// use notes_models::schedule::{generate, Frequency};
/// use notes_engine::evaluation::OutcomeEvaluator;
///
/// let config = ProductConfig::builder()
///     .trade_date(Date::from_ymd(2024, 1, 15).unwrap())
///     .final_observation_date(Date::from_ymd(2025, 1, 15).unwrap())
///     .frequency(Frequency::Quarterly)
///     .cool_off_periods(1)
///     .coupon_barrier(BarrierSchedule::Flat(70.0))
///     .coupon_rate(CouponSchedule::Flat(1.25))
///     .protection_barrier(60.0)
///     .underlying(Underlying::new("SX5E", 4_900.0))
///     .build()
///     .unwrap();
/// let schedule = generate(&config).unwrap();
///
/// let mut evaluator = OutcomeEvaluator::new(&config, &schedule).unwrap();
/// let outcome = evaluator
///     .apply_period(1, &[UnderlyingPerformance::new("SX5E", 85.0)])
///     .unwrap();
///
/// // Above the coupon barrier: coupon paid, nothing to memory.
/// assert_eq!(outcome.coupon_paid, 1.25);
/// assert_eq!(outcome.coupon_added_to_memory, 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct OutcomeEvaluator<'a> {
    config: &'a ProductConfig,
    schedule: &'a ObservationSchedule,
    memory: MemoryCouponState,
    status: EvaluationStatus,
    variant_state: VariantState,
    outcomes: Vec<ObservationOutcome>,
}

impl<'a> OutcomeEvaluator<'a> {
    /// Creates an evaluator over a config and its generated schedule.
    ///
    /// # Errors
    /// Returns a basket error when the Himalaya member set is invalid
    /// (empty or duplicated identifiers).
    pub fn new(
        config: &'a ProductConfig,
        schedule: &'a ObservationSchedule,
    ) -> Result<Self, EvaluationError> {
        let variant_state = match config.variant {
            TemplateVariant::Standard => VariantState::Standard,
            TemplateVariant::Himalaya => {
                let ids = config.underlyings.iter().map(|u| u.id.clone()).collect();
                VariantState::Himalaya(HimalayaBasket::new(ids)?)
            }
        };

        Ok(Self {
            config,
            schedule,
            memory: MemoryCouponState::new(),
            status: EvaluationStatus::Active,
            variant_state,
            outcomes: Vec::new(),
        })
    }

    /// Returns the outcomes produced so far, in period order.
    #[inline]
    pub fn outcomes(&self) -> &[ObservationOutcome] {
        &self.outcomes
    }

    /// Returns the current lifecycle status.
    #[inline]
    pub fn status(&self) -> &EvaluationStatus {
        &self.status
    }

    /// Returns the current coupon-memory state.
    #[inline]
    pub fn memory(&self) -> MemoryCouponState {
        self.memory
    }

    /// Returns the next unresolved period index, or `None` once the
    /// product is terminal or fully observed.
    pub fn next_period_index(&self) -> Option<u32> {
        if self.status.is_terminal() {
            return None;
        }
        let next = self.outcomes.len() as u32 + 1;
        (next as usize <= self.schedule.len()).then_some(next)
    }

    /// Resolves one period from its observed performances.
    ///
    /// # Errors
    /// - [`EvaluationError::TerminalState`] after an autocall or maturity
    /// - [`EvaluationError::SequenceViolation`] for an out-of-order index
    /// - [`EvaluationError::UnknownPeriod`] for an index beyond the
    ///   schedule
    /// - [`EvaluationError::Basket`] when aggregation fails; the
    ///   evaluator's state is unchanged on any error
    pub fn apply_period(
        &mut self,
        period_index: u32,
        performances: &[UnderlyingPerformance],
    ) -> Result<ObservationOutcome, EvaluationError> {
        if self.status.is_terminal() {
            return Err(EvaluationError::TerminalState { period_index });
        }

        let expected = self.outcomes.len() as u32 + 1;
        if period_index != expected {
            return Err(EvaluationError::SequenceViolation {
                expected,
                got: period_index,
            });
        }

        let period = self
            .schedule
            .period(period_index)
            .ok_or(EvaluationError::UnknownPeriod { period_index })?;

        let (memory, status, outcome) = match &mut self.variant_state {
            VariantState::Standard => {
                resolve_standard(self.config, period, performances, self.memory)?
            }
            VariantState::Himalaya(basket) => resolve_himalaya(
                self.config.himalaya_lock_policy,
                basket,
                period,
                performances,
            )?,
        };

        self.memory = memory;
        self.status = status;
        self.outcomes.push(outcome.clone());
        Ok(outcome)
    }

    /// Consumes the evaluator into a report.
    pub fn into_report(self) -> EvaluationReport {
        EvaluationReport {
            outcomes: self.outcomes,
            status: self.status,
            memory: self.memory,
            total_periods: self.schedule.len(),
        }
    }
}

/// One standard-variant fold step: `(memory, period, level) -> (memory',
/// status, outcome)`.
fn resolve_standard(
    config: &ProductConfig,
    period: &ObservationPeriod,
    performances: &[UnderlyingPerformance],
    memory: MemoryCouponState,
) -> Result<(MemoryCouponState, EvaluationStatus, ObservationOutcome), EvaluationError> {
    let period_index = period.period_index();
    let basket_level = aggregate(performances, config.basket_mode)?;
    let coupon_rate = config
        .coupon_rate
        .rate_for_period(period_index)
        .ok_or(EvaluationError::MissingCouponRate { period_index })?;

    // Autocall takes precedence and always pays the current coupon.
    let autocalled = period.is_callable()
        && period
            .autocall_level()
            .is_some_and(|level| basket_level >= level);
    if autocalled {
        let outcome = ObservationOutcome {
            period_index,
            basket_level,
            product_called: true,
            coupon_paid: coupon_rate,
            coupon_added_to_memory: 0.0,
            is_terminal: true,
            locked_underlying: None,
        };
        return Ok((
            MemoryCouponState::new(),
            EvaluationStatus::Called { period_index },
            outcome,
        ));
    }

    let barrier = period
        .coupon_barrier()
        .ok_or(EvaluationError::MissingBarrier { period_index })?;

    let (memory, coupon_paid, coupon_added_to_memory) = if basket_level >= barrier {
        // Released memory is zero unless memory coupons accrued earlier.
        let (released, memory) = memory.release();
        (memory, coupon_rate + released, 0.0)
    } else if config.coupon_memory_enabled {
        (memory.accrue(coupon_rate), 0.0, coupon_rate)
    } else {
        // Coupon forfeited.
        (memory, 0.0, 0.0)
    };

    let status = if period.is_final() {
        EvaluationStatus::Matured {
            redemption: RedemptionRegime::decide(basket_level, config.protection_barrier),
        }
    } else {
        EvaluationStatus::Active
    };

    let outcome = ObservationOutcome {
        period_index,
        basket_level,
        product_called: false,
        coupon_paid,
        coupon_added_to_memory,
        is_terminal: period.is_final(),
        locked_underlying: None,
    };

    Ok((memory, status, outcome))
}

/// One Himalaya fold step: lock in and remove the best remaining member.
fn resolve_himalaya(
    lock_policy: HimalayaLockPolicy,
    basket: &mut HimalayaBasket,
    period: &ObservationPeriod,
    performances: &[UnderlyingPerformance],
) -> Result<(MemoryCouponState, EvaluationStatus, ObservationOutcome), EvaluationError> {
    let period_index = period.period_index();
    let locked = basket.observe(period_index, performances)?;

    let status = if period.is_final() {
        let average = match lock_policy {
            HimalayaLockPolicy::AtRemoval => basket
                .final_average()
                .ok_or(EvaluationError::Basket(BasketError::EmptyBasket))?,
            // Re-marked from the quotes supplied at the final observation.
            HimalayaLockPolicy::RemarkAtMaturity => {
                basket.final_average_remarked(performances)?
            }
        };
        EvaluationStatus::Matured {
            redemption: RedemptionRegime::BasketAverage { average },
        }
    } else {
        EvaluationStatus::Active
    };

    let outcome = ObservationOutcome {
        period_index,
        basket_level: locked.performance,
        product_called: false,
        coupon_paid: 0.0,
        coupon_added_to_memory: 0.0,
        is_terminal: period.is_final(),
        locked_underlying: Some(locked.underlying_id),
    };

    Ok((MemoryCouponState::new(), status, outcome))
}

/// The result of replaying a product's observed history.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluationReport {
    /// Outcomes for the resolved periods, in period order.
    pub outcomes: Vec<ObservationOutcome>,
    /// The lifecycle status after the replay.
    pub status: EvaluationStatus,
    /// The coupon-memory state after the replay.
    pub memory: MemoryCouponState,
    /// The total number of scheduled periods.
    pub total_periods: usize,
}

impl EvaluationReport {
    /// Returns whether the product needs no further observations.
    pub fn is_complete(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the period indices that remain unresolved.
    ///
    /// Empty once the product is terminal; otherwise every scheduled index
    /// after the last resolved outcome, including periods that have
    /// occurred but lack market data.
    pub fn unresolved_periods(&self) -> Vec<u32> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        (self.outcomes.len() as u32 + 1..=self.total_periods as u32).collect()
    }

    /// Returns the total coupons paid across resolved periods.
    pub fn total_coupons_paid(&self) -> f64 {
        self.outcomes.iter().map(|o| o.coupon_paid).sum()
    }
}

/// Replays a product's observed history over its schedule.
///
/// Walks periods in order, stopping at the first period with no entry in
/// `history` (those periods stay unresolved — outcomes are never
/// fabricated from missing data) or at a terminal outcome. Re-running with
/// the same inputs yields the same report.
///
/// # Errors
/// Propagates aggregation and configuration errors from the per-period
/// step; sequence violations cannot occur on this path.
pub fn evaluate(
    config: &ProductConfig,
    schedule: &ObservationSchedule,
    history: &MarketHistory,
) -> Result<EvaluationReport, EvaluationError> {
    let mut evaluator = OutcomeEvaluator::new(config, schedule)?;

    for period in schedule.iter() {
        if evaluator.status().is_terminal() {
            break;
        }
        match history.get(period.period_index()) {
            Some(performances) => {
                evaluator.apply_period(period.period_index(), performances)?;
            }
            // Missing market data: this and later periods stay unresolved.
            None => break,
        }
    }

    Ok(evaluator.into_report())
}

#[cfg(test)]
mod tests {
    use super::*;
    use notes_core::types::Date;
    use notes_models::product::{BarrierSchedule, CouponSchedule, Underlying};
    use notes_models::schedule::{generate, Frequency};

    const COUPON: f64 = 1.25;

    fn config_with(memory: bool) -> ProductConfig {
        ProductConfig::builder()
            .trade_date(Date::from_ymd(2024, 1, 15).unwrap())
            .final_observation_date(Date::from_ymd(2025, 1, 15).unwrap())
            .frequency(Frequency::Quarterly)
            .cool_off_periods(1)
            .initial_autocall_level(100.0)
            .step_down_per_period(-5.0)
            .coupon_barrier(BarrierSchedule::Flat(70.0))
            .coupon_rate(CouponSchedule::Flat(COUPON))
            .coupon_memory_enabled(memory)
            .protection_barrier(60.0)
            .underlying(Underlying::new("SX5E", 4_900.0))
            .build()
            .unwrap()
    }

    fn level(value: f64) -> Vec<UnderlyingPerformance> {
        vec![UnderlyingPerformance::new("SX5E", value)]
    }

    #[test]
    fn test_autocall_halts_evaluation() {
        let config = config_with(false);
        let schedule = generate(&config).unwrap();
        let mut evaluator = OutcomeEvaluator::new(&config, &schedule).unwrap();

        // Period 1 is in cool-off: 96 above barrier pays a coupon only.
        let outcome = evaluator.apply_period(1, &level(96.0)).unwrap();
        assert!(!outcome.product_called);
        assert_eq!(outcome.coupon_paid, COUPON);

        // Period 2 is callable at 100; 101 triggers the autocall.
        let outcome = evaluator.apply_period(2, &level(101.0)).unwrap();
        assert!(outcome.product_called);
        assert_eq!(outcome.coupon_paid, COUPON);
        assert!(outcome.is_terminal);
        assert_eq!(
            *evaluator.status(),
            EvaluationStatus::Called { period_index: 2 }
        );

        // Later levels produce no outcomes.
        let result = evaluator.apply_period(3, &level(120.0));
        assert!(matches!(
            result,
            Err(EvaluationError::TerminalState { period_index: 3 })
        ));
        assert_eq!(evaluator.outcomes().len(), 2);
    }

    #[test]
    fn test_autocall_at_stepped_level() {
        // Period 3 steps down to 95: a 96 close calls the note there.
        let config = config_with(false);
        let schedule = generate(&config).unwrap();
        let mut evaluator = OutcomeEvaluator::new(&config, &schedule).unwrap();

        evaluator.apply_period(1, &level(80.0)).unwrap();
        let p2 = evaluator.apply_period(2, &level(96.0)).unwrap();
        assert!(!p2.product_called); // 96 < 100

        let p3 = evaluator.apply_period(3, &level(96.0)).unwrap();
        assert!(p3.product_called); // 96 >= 95
    }

    #[test]
    fn test_memory_accrues_and_releases() {
        let config = config_with(true);
        let schedule = generate(&config).unwrap();
        let mut evaluator = OutcomeEvaluator::new(&config, &schedule).unwrap();

        // Below the barrier: coupon missed, memory accrues.
        let p1 = evaluator.apply_period(1, &level(60.0)).unwrap();
        assert_eq!(p1.coupon_paid, 0.0);
        assert_eq!(p1.coupon_added_to_memory, COUPON);
        assert_eq!(evaluator.memory().accumulated(), COUPON);

        // Back above the barrier (but below autocall): current coupon plus
        // the released memory, and the accumulator resets in the same step.
        let p2 = evaluator.apply_period(2, &level(75.0)).unwrap();
        assert!(!p2.product_called);
        assert_eq!(p2.coupon_paid, 2.0 * COUPON);
        assert_eq!(p2.coupon_added_to_memory, 0.0);
        assert!(evaluator.memory().is_empty());
    }

    #[test]
    fn test_memory_disabled_forfeits_coupon() {
        let config = config_with(false);
        let schedule = generate(&config).unwrap();
        let mut evaluator = OutcomeEvaluator::new(&config, &schedule).unwrap();

        let p1 = evaluator.apply_period(1, &level(60.0)).unwrap();
        assert_eq!(p1.coupon_paid, 0.0);
        assert_eq!(p1.coupon_added_to_memory, 0.0);
        assert!(evaluator.memory().is_empty());

        let p2 = evaluator.apply_period(2, &level(75.0)).unwrap();
        assert_eq!(p2.coupon_paid, COUPON); // nothing released
    }

    #[test]
    fn test_autocall_resets_memory() {
        let config = config_with(true);
        let schedule = generate(&config).unwrap();
        let mut evaluator = OutcomeEvaluator::new(&config, &schedule).unwrap();

        evaluator.apply_period(1, &level(60.0)).unwrap();
        assert_eq!(evaluator.memory().accumulated(), COUPON);

        let p2 = evaluator.apply_period(2, &level(105.0)).unwrap();
        assert!(p2.product_called);
        assert!(evaluator.memory().is_empty());
    }

    #[test]
    fn test_maturity_decides_redemption_regime() {
        let config = config_with(false);
        let schedule = generate(&config).unwrap();

        // Protected: final level above the protection barrier.
        let mut evaluator = OutcomeEvaluator::new(&config, &schedule).unwrap();
        for k in 1..=3 {
            evaluator.apply_period(k, &level(65.0)).unwrap();
        }
        let p4 = evaluator.apply_period(4, &level(80.0)).unwrap();
        assert!(p4.is_terminal);
        assert_eq!(
            *evaluator.status(),
            EvaluationStatus::Matured {
                redemption: RedemptionRegime::FullCapitalReturn
            }
        );

        // At risk: final level below the protection barrier.
        let mut evaluator = OutcomeEvaluator::new(&config, &schedule).unwrap();
        for k in 1..=3 {
            evaluator.apply_period(k, &level(65.0)).unwrap();
        }
        evaluator.apply_period(4, &level(55.0)).unwrap();
        assert_eq!(
            *evaluator.status(),
            EvaluationStatus::Matured {
                redemption: RedemptionRegime::CapitalAtRisk { basket_level: 55.0 }
            }
        );
    }

    #[test]
    fn test_out_of_order_application_fails_loudly() {
        let config = config_with(false);
        let schedule = generate(&config).unwrap();
        let mut evaluator = OutcomeEvaluator::new(&config, &schedule).unwrap();

        let result = evaluator.apply_period(2, &level(96.0));
        assert!(matches!(
            result,
            Err(EvaluationError::SequenceViolation {
                expected: 1,
                got: 2
            })
        ));
        // Nothing was recorded.
        assert!(evaluator.outcomes().is_empty());
        assert!(evaluator.memory().is_empty());
    }

    #[test]
    fn test_per_period_coupon_rates_are_honoured() {
        let config = ProductConfig::builder()
            .trade_date(Date::from_ymd(2024, 1, 15).unwrap())
            .final_observation_date(Date::from_ymd(2025, 1, 15).unwrap())
            .frequency(Frequency::Quarterly)
            .coupon_barrier(BarrierSchedule::Flat(70.0))
            .coupon_rate(CouponSchedule::PerPeriod(vec![1.0, 1.5, 2.0, 2.5]))
            .protection_barrier(60.0)
            .underlying(Underlying::new("SX5E", 4_900.0))
            .initial_autocall_level(200.0) // never calls
            .build()
            .unwrap();
        let schedule = generate(&config).unwrap();
        let mut evaluator = OutcomeEvaluator::new(&config, &schedule).unwrap();

        assert_eq!(
            evaluator.apply_period(1, &level(80.0)).unwrap().coupon_paid,
            1.0
        );
        assert_eq!(
            evaluator.apply_period(2, &level(80.0)).unwrap().coupon_paid,
            1.5
        );
    }

    #[test]
    fn test_per_period_barriers_drive_coupon_decisions() {
        // Barrier steps down; a 66 close misses the first barrier but
        // clears the third.
        let config = ProductConfig::builder()
            .trade_date(Date::from_ymd(2024, 1, 15).unwrap())
            .final_observation_date(Date::from_ymd(2025, 1, 15).unwrap())
            .frequency(Frequency::Quarterly)
            .coupon_barrier(BarrierSchedule::PerPeriod(vec![70.0, 68.0, 65.0, 60.0]))
            .coupon_rate(CouponSchedule::Flat(COUPON))
            .protection_barrier(60.0)
            .underlying(Underlying::new("SX5E", 4_900.0))
            .initial_autocall_level(200.0)
            .build()
            .unwrap();
        let schedule = generate(&config).unwrap();
        let mut evaluator = OutcomeEvaluator::new(&config, &schedule).unwrap();

        assert_eq!(
            evaluator.apply_period(1, &level(66.0)).unwrap().coupon_paid,
            0.0
        );
        assert_eq!(
            evaluator.apply_period(2, &level(66.0)).unwrap().coupon_paid,
            0.0
        );
        assert_eq!(
            evaluator.apply_period(3, &level(66.0)).unwrap().coupon_paid,
            COUPON
        );
    }

    #[test]
    fn test_evaluate_stops_at_missing_data() {
        let config = config_with(false);
        let schedule = generate(&config).unwrap();

        let mut history = MarketHistory::new();
        history.insert(1, level(80.0));
        // No entry for period 2; period 3 data must not be consumed.
        history.insert(3, level(80.0));

        let report = evaluate(&config, &schedule, &history).unwrap();
        assert_eq!(report.outcomes.len(), 1);
        assert_eq!(report.status, EvaluationStatus::Active);
        assert!(!report.is_complete());
        assert_eq!(report.unresolved_periods(), vec![2, 3, 4]);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let config = config_with(true);
        let schedule = generate(&config).unwrap();

        let mut history = MarketHistory::new();
        history.insert(1, level(60.0));
        history.insert(2, level(75.0));

        let first = evaluate(&config, &schedule, &history).unwrap();
        let second = evaluate(&config, &schedule, &history).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.total_coupons_paid(), 2.0 * COUPON);
    }

    #[test]
    fn test_report_empty_history() {
        let config = config_with(false);
        let schedule = generate(&config).unwrap();
        let report = evaluate(&config, &schedule, &MarketHistory::new()).unwrap();
        assert!(report.outcomes.is_empty());
        assert_eq!(report.unresolved_periods(), vec![1, 2, 3, 4]);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_report_json_roundtrip() {
            let config = config_with(true);
            let schedule = generate(&config).unwrap();

            let mut history = MarketHistory::new();
            history.insert(1, level(60.0));
            history.insert(2, level(75.0));
            let report = evaluate(&config, &schedule, &history).unwrap();

            let json = serde_json::to_string(&report).unwrap();
            let parsed: EvaluationReport = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, report);
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn levels_strategy() -> impl Strategy<Value = Vec<f64>> {
            proptest::collection::vec(40.0f64..130.0f64, 4)
        }

        proptest! {
            #[test]
            fn test_memory_resets_exactly_when_paid(levels in levels_strategy()) {
                let config = config_with(true);
                let schedule = generate(&config).unwrap();
                let mut evaluator = OutcomeEvaluator::new(&config, &schedule).unwrap();

                let mut previous_accumulated = 0.0f64;
                for (i, basket_level) in levels.iter().enumerate() {
                    let period_index = i as u32 + 1;
                    if evaluator.status().is_terminal() {
                        break;
                    }
                    let outcome = evaluator
                        .apply_period(period_index, &level(*basket_level))
                        .unwrap();

                    let accumulated = evaluator.memory().accumulated();
                    prop_assert!(accumulated >= 0.0);

                    if outcome.coupon_paid > 0.0 {
                        // Reset in the same step that pays.
                        prop_assert_eq!(accumulated, 0.0);
                    } else {
                        // Monotonically non-decreasing between payouts.
                        prop_assert!(accumulated >= previous_accumulated);
                    }
                    previous_accumulated = accumulated;
                }
            }

            #[test]
            fn test_no_outcomes_after_terminal(levels in levels_strategy()) {
                let config = config_with(false);
                let schedule = generate(&config).unwrap();
                let mut evaluator = OutcomeEvaluator::new(&config, &schedule).unwrap();

                let mut terminal_seen = false;
                for (i, basket_level) in levels.iter().enumerate() {
                    let period_index = i as u32 + 1;
                    let result = evaluator.apply_period(period_index, &level(*basket_level));
                    if terminal_seen {
                        let is_terminal_err = matches!(
                            result,
                            Err(EvaluationError::TerminalState { .. })
                        );
                        prop_assert!(is_terminal_err);
                    } else {
                        let outcome = result.unwrap();
                        terminal_seen = outcome.is_terminal;
                    }
                }

                // Outcome count never exceeds the first terminal index.
                let terminal_count = evaluator
                    .outcomes()
                    .iter()
                    .filter(|o| o.is_terminal)
                    .count();
                prop_assert!(terminal_count <= 1);
            }
        }
    }
}
