//! Rayon-parallel evaluation across independent products.
//!
//! Each product's evaluation is independent of every other product's —
//! there is no shared mutable state — so a portfolio fans out freely with
//! Rayon. Within a product evaluation stays strictly sequential by period
//! index (the coupon memory carries forward). Because the evaluator is a
//! pure function over its input snapshot, re-running a refresh cannot race
//! with an earlier run: two refreshes of the same snapshot produce the
//! same report.

use rayon::prelude::*;
use thiserror::Error;

use notes_models::product::ProductConfig;
use notes_models::schedule::{generate, ScheduleError};

use crate::evaluation::{evaluate, EvaluationError, EvaluationReport, MarketHistory};

/// Errors from whole-product evaluation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PortfolioError {
    /// Schedule generation failed.
    #[error("Schedule generation failed: {0}")]
    Schedule(#[from] ScheduleError),

    /// Outcome evaluation failed.
    #[error("Evaluation failed: {0}")]
    Evaluation(#[from] EvaluationError),
}

/// One product's immutable evaluation input: its configuration and the
/// observed market history.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductSnapshot {
    /// Caller-assigned product identifier.
    pub product_id: String,
    /// The product configuration.
    pub config: ProductConfig,
    /// Observed performances per occurred period.
    pub history: MarketHistory,
}

/// One product's evaluation result within a portfolio run.
#[derive(Debug, Clone)]
pub struct ProductEvaluation {
    /// The product identifier from the snapshot.
    pub product_id: String,
    /// The report, or the error that stopped this product.
    pub result: Result<EvaluationReport, PortfolioError>,
}

/// Counters for a portfolio evaluation run.
#[derive(Debug, Clone, Default)]
pub struct PortfolioStats {
    /// Total products processed.
    pub products_processed: usize,
    /// Products that produced a report.
    pub succeeded: usize,
    /// Products that stopped with an error.
    pub failed: usize,
}

impl PortfolioStats {
    /// Returns the success rate as a percentage.
    #[inline]
    pub fn success_rate(&self) -> f64 {
        if self.products_processed == 0 {
            0.0
        } else {
            self.succeeded as f64 / self.products_processed as f64 * 100.0
        }
    }
}

/// Evaluates every product in parallel.
///
/// Failures are collected per product rather than aborting the run; the
/// output order matches the input order.
///
/// # Examples
///
/// ```
/// use notes_core::types::Date;
/// use notes_engine::evaluation::MarketHistory;
/// use notes_engine::portfolio::{evaluate_portfolio, ProductSnapshot};
/// use notes_models::product::{BarrierSchedule, CouponSchedule, ProductConfig, Underlying};
/// use notes_models::schedule::Frequency;
///
/// let config = ProductConfig::builder()
///     .trade_date(Date::from_ymd(2024, 1, 15).unwrap())
///     .final_observation_date(Date::from_ymd(2025, 1, 15).unwrap())
///     .frequency(Frequency::Quarterly)
///     .coupon_barrier(BarrierSchedule::Flat(70.0))
///     .coupon_rate(CouponSchedule::Flat(1.25))
///     .protection_barrier(60.0)
///     .underlying(Underlying::new("SX5E", 4_900.0))
///     .build()
///     .unwrap();
///
/// let snapshots = vec![ProductSnapshot {
///     product_id: "NOTE-1".to_string(),
///     config,
///     history: MarketHistory::new(),
/// }];
///
/// let (evaluations, stats) = evaluate_portfolio(&snapshots);
/// assert_eq!(stats.products_processed, 1);
/// assert_eq!(stats.succeeded, 1);
/// assert!(evaluations[0].result.is_ok());
/// ```
pub fn evaluate_portfolio(snapshots: &[ProductSnapshot]) -> (Vec<ProductEvaluation>, PortfolioStats) {
    let evaluations: Vec<ProductEvaluation> = snapshots
        .par_iter()
        .map(|snapshot| {
            let result = evaluate_snapshot(snapshot);
            ProductEvaluation {
                product_id: snapshot.product_id.clone(),
                result,
            }
        })
        .collect();

    let succeeded = evaluations.iter().filter(|e| e.result.is_ok()).count();
    let stats = PortfolioStats {
        products_processed: evaluations.len(),
        succeeded,
        failed: evaluations.len() - succeeded,
    };

    (evaluations, stats)
}

/// Generates the schedule and replays the history for one product.
fn evaluate_snapshot(snapshot: &ProductSnapshot) -> Result<EvaluationReport, PortfolioError> {
    let schedule = generate(&snapshot.config)?;
    let report = evaluate(&snapshot.config, &schedule, &snapshot.history)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use notes_core::types::Date;
    use notes_models::basket::UnderlyingPerformance;
    use notes_models::product::{BarrierSchedule, CouponSchedule, Underlying};
    use notes_models::schedule::Frequency;

    fn snapshot(id: &str, trade: Date, maturity: Date) -> ProductSnapshot {
        let config = ProductConfig::builder()
            .trade_date(trade)
            .final_observation_date(maturity)
            .frequency(Frequency::Quarterly)
            .coupon_barrier(BarrierSchedule::Flat(70.0))
            .coupon_rate(CouponSchedule::Flat(1.25))
            .protection_barrier(60.0)
            .underlying(Underlying::new("SX5E", 4_900.0))
            .build()
            .unwrap();

        let mut history = MarketHistory::new();
        history.insert(1, vec![UnderlyingPerformance::new("SX5E", 85.0)]);

        ProductSnapshot {
            product_id: id.to_string(),
            config,
            history,
        }
    }

    #[test]
    fn test_portfolio_preserves_order_and_counts() {
        let trade = Date::from_ymd(2024, 1, 15).unwrap();
        let maturity = Date::from_ymd(2025, 1, 15).unwrap();
        let snapshots: Vec<ProductSnapshot> = (0..8)
            .map(|i| snapshot(&format!("NOTE-{}", i), trade, maturity))
            .collect();

        let (evaluations, stats) = evaluate_portfolio(&snapshots);

        assert_eq!(evaluations.len(), 8);
        assert_eq!(stats.products_processed, 8);
        assert_eq!(stats.succeeded, 8);
        assert_eq!(stats.failed, 0);
        assert!((stats.success_rate() - 100.0).abs() < 1e-12);
        for (i, evaluation) in evaluations.iter().enumerate() {
            assert_eq!(evaluation.product_id, format!("NOTE-{}", i));
        }
    }

    #[test]
    fn test_failures_are_collected_not_fatal() {
        let trade = Date::from_ymd(2024, 1, 15).unwrap();
        let maturity = Date::from_ymd(2025, 1, 15).unwrap();

        let good = snapshot("GOOD", trade, maturity);
        // A config that deserialised with reversed dates fails schedule
        // generation, not the whole run.
        let mut bad = snapshot("BAD", trade, maturity);
        bad.config.final_observation_date = Date::from_ymd(2023, 1, 15).unwrap();

        let (evaluations, stats) = evaluate_portfolio(&[good, bad]);

        assert_eq!(stats.succeeded, 1);
        assert_eq!(stats.failed, 1);
        assert!(evaluations[0].result.is_ok());
        assert!(matches!(
            evaluations[1].result,
            Err(PortfolioError::Schedule(_))
        ));
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let trade = Date::from_ymd(2024, 1, 15).unwrap();
        let maturity = Date::from_ymd(2025, 1, 15).unwrap();
        let snapshots = vec![snapshot("NOTE-1", trade, maturity)];

        let (first, _) = evaluate_portfolio(&snapshots);
        let (second, _) = evaluate_portfolio(&snapshots);

        let first_report = first[0].result.as_ref().unwrap();
        let second_report = second[0].result.as_ref().unwrap();
        assert_eq!(first_report, second_report);
    }

    #[test]
    fn test_empty_portfolio() {
        let (evaluations, stats) = evaluate_portfolio(&[]);
        assert!(evaluations.is_empty());
        assert_eq!(stats.products_processed, 0);
        assert_eq!(stats.success_rate(), 0.0);
    }
}
