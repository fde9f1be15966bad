//! Product configuration error types.

use notes_core::types::Date;
use thiserror::Error;

/// Errors from invalid or inconsistent product configuration.
///
/// Configuration errors are surfaced before any schedule or outcome work
/// starts; the engine performs no partial work on a bad config.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Missing required field in the builder.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Trade date must be strictly before the final observation date.
    #[error("Trade date {trade_date} must be before final observation date {final_observation_date}")]
    InvalidDateRange {
        /// The trade date.
        trade_date: Date,
        /// The final observation date.
        final_observation_date: Date,
    },

    /// The product has no underlyings.
    #[error("Product has no underlyings")]
    EmptyBasket,

    /// An underlying strike must be strictly positive.
    #[error("Underlying {underlying} has non-positive strike {strike}")]
    NonPositiveStrike {
        /// The offending underlying identifier.
        underlying: String,
        /// The strike that was supplied.
        strike: f64,
    },

    /// A percentage level that must be strictly positive was not.
    #[error("{field} must be strictly positive, got {value}")]
    NonPositiveLevel {
        /// The name of the offending field.
        field: &'static str,
        /// The value that was supplied.
        value: f64,
    },

    /// A coupon rate was negative.
    #[error("Coupon rate for period {period_index} is negative: {rate}")]
    NegativeCouponRate {
        /// The 1-based period index.
        period_index: u32,
        /// The rate that was supplied.
        rate: f64,
    },

    /// A per-period coupon schedule does not cover the generated schedule.
    #[error("Coupon schedule has {rates} entries but the schedule has {periods} periods")]
    CouponCountMismatch {
        /// Number of generated periods.
        periods: usize,
        /// Number of coupon rates supplied.
        rates: usize,
    },

    /// A per-period barrier schedule ran out before the final period.
    #[error("Coupon barrier schedule has {barriers} entries but period {period_index} was generated")]
    BarrierCountMismatch {
        /// The 1-based period index with no barrier entry.
        period_index: u32,
        /// Number of barrier entries supplied.
        barriers: usize,
    },
}
