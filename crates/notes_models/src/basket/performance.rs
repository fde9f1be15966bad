//! Strike-relative underlying performances.

use std::fmt;

use crate::product::Underlying;

/// One underlying's performance at an observation, as a percentage of its
/// strike (100 = parity).
///
/// # Examples
///
/// ```
/// use notes_models::basket::UnderlyingPerformance;
/// use notes_models::product::Underlying;
///
/// let underlying = Underlying::new("SX5E", 4_900.0);
/// let perf = UnderlyingPerformance::from_price(&underlying, 4_410.0);
/// assert_eq!(perf.performance, 90.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnderlyingPerformance {
    /// Underlying identifier.
    pub id: String,
    /// Performance in percent of strike.
    pub performance: f64,
    /// Optional basket weight, carried from the underlying definition.
    #[cfg_attr(feature = "serde", serde(default))]
    pub weight: Option<f64>,
}

impl UnderlyingPerformance {
    /// Creates an unweighted performance.
    pub fn new(id: impl Into<String>, performance: f64) -> Self {
        Self {
            id: id.into(),
            performance,
            weight: None,
        }
    }

    /// Creates a weighted performance.
    pub fn with_weight(id: impl Into<String>, performance: f64, weight: f64) -> Self {
        Self {
            id: id.into(),
            performance,
            weight: Some(weight),
        }
    }

    /// Computes a member's performance from an observed price, carrying the
    /// member's weight.
    pub fn from_price(underlying: &Underlying, price: f64) -> Self {
        Self {
            id: underlying.id.clone(),
            performance: underlying.performance(price),
            weight: underlying.weight,
        }
    }
}

impl fmt::Display for UnderlyingPerformance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}%", self.id, self.performance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_price() {
        let underlying = Underlying::with_weight("UKX", 8_000.0, 0.5);
        let perf = UnderlyingPerformance::from_price(&underlying, 8_400.0);
        assert_eq!(perf.id, "UKX");
        assert_eq!(perf.performance, 105.0);
        assert_eq!(perf.weight, Some(0.5));
    }

    #[test]
    fn test_display() {
        let perf = UnderlyingPerformance::new("SX5E", 92.456);
        assert_eq!(format!("{}", perf), "SX5E: 92.46%");
    }
}
