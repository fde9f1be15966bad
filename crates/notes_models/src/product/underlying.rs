//! Basket underlyings.

use std::fmt;

/// A basket member: an underlying asset with its strike level and an
/// optional basket weight.
///
/// Performance is always expressed as a percentage of strike
/// (100 = strike parity).
///
/// # Examples
///
/// ```
/// use notes_models::product::Underlying;
///
/// let underlying = Underlying::new("SX5E", 4_900.0);
/// assert_eq!(underlying.performance(4_410.0), 90.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Underlying {
    /// Underlying identifier (ticker or internal id).
    pub id: String,
    /// Strike (initial reference) level in price units.
    pub strike: f64,
    /// Optional basket weight, used by weighted-average aggregation.
    #[cfg_attr(feature = "serde", serde(default))]
    pub weight: Option<f64>,
}

impl Underlying {
    /// Creates an equal-weighted underlying.
    pub fn new(id: impl Into<String>, strike: f64) -> Self {
        Self {
            id: id.into(),
            strike,
            weight: None,
        }
    }

    /// Creates an underlying with an explicit basket weight.
    pub fn with_weight(id: impl Into<String>, strike: f64, weight: f64) -> Self {
        Self {
            id: id.into(),
            strike,
            weight: Some(weight),
        }
    }

    /// Returns the performance of an observed price as a percentage of
    /// strike.
    ///
    /// The strike is validated to be strictly positive at configuration
    /// build time.
    #[inline]
    pub fn performance(&self, price: f64) -> f64 {
        price / self.strike * 100.0
    }
}

impl fmt::Display for Underlying {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.id, self.strike)
    }
}
