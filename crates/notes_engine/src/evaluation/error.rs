//! Evaluation error types.

use notes_models::basket::BasketError;
use thiserror::Error;

/// Errors from outcome evaluation.
///
/// Sequence and terminal-state violations are programming errors in the
/// caller: periods must be applied in strict index order and never after a
/// terminal state. They should not be caught-and-ignored.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvaluationError {
    /// A period was applied out of order.
    #[error("Period {got} applied out of order: expected period {expected}")]
    SequenceViolation {
        /// The next unresolved period index.
        expected: u32,
        /// The index that was supplied.
        got: u32,
    },

    /// A period was applied after the product reached a terminal state.
    #[error("Period {period_index} applied after a terminal state")]
    TerminalState {
        /// The index that was supplied.
        period_index: u32,
    },

    /// The supplied index does not exist in the schedule.
    #[error("No period with index {period_index} in the schedule")]
    UnknownPeriod {
        /// The requested period index.
        period_index: u32,
    },

    /// No coupon rate is configured for a period.
    #[error("No coupon rate configured for period {period_index}")]
    MissingCouponRate {
        /// The period without a rate.
        period_index: u32,
    },

    /// A standard-variant period carries no coupon barrier.
    #[error("No coupon barrier on period {period_index}")]
    MissingBarrier {
        /// The period without a barrier.
        period_index: u32,
    },

    /// Basket aggregation failed.
    #[error(transparent)]
    Basket(#[from] BasketError),
}
