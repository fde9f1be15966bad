//! Basket aggregation error types.

use thiserror::Error;

/// Errors from basket aggregation.
///
/// All validation happens before any state mutation: a Himalaya basket that
/// rejects an observation is left exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BasketError {
    /// No performances were supplied.
    #[error("Cannot aggregate an empty basket")]
    EmptyBasket,

    /// Some but not all members carry explicit weights.
    #[error("Either every basket member must carry a weight or none may")]
    InconsistentWeights,

    /// The explicit weights do not sum to a positive number.
    #[error("Basket weights must sum to a positive number")]
    NonPositiveWeightSum,

    /// A duplicate underlying identifier was supplied.
    #[error("Duplicate underlying in basket: {underlying_id}")]
    DuplicateUnderlying {
        /// The repeated identifier.
        underlying_id: String,
    },

    /// Every member has already been locked in and removed.
    #[error("All basket members have already been removed")]
    Exhausted,

    /// No quote was supplied for any member still in the basket.
    #[error("No performance supplied for any remaining basket member at period {period_index}")]
    NoQuotesForRemaining {
        /// The 1-based period index of the observation.
        period_index: u32,
    },

    /// A required member quote is missing.
    #[error("Missing performance for underlying {underlying_id}")]
    MissingQuote {
        /// The member without a quote.
        underlying_id: String,
    },
}
