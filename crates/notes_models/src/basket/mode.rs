//! Basket aggregation modes and the aggregation function.

use std::fmt;
use std::str::FromStr;

use super::error::BasketError;
use super::performance::UnderlyingPerformance;

/// How multiple underlying performances reduce to one basket level.
///
/// The Himalaya removal rule is not a mode: it is a separate, stateful
/// mechanism ([`super::HimalayaBasket`]) selected by the product's template
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BasketMode {
    /// Basket level is the minimum performance.
    #[default]
    WorstOf,
    /// Basket level is the maximum performance.
    BestOf,
    /// Basket level is the (optionally weighted) arithmetic mean.
    Average,
}

impl BasketMode {
    /// Returns the conventional name for this mode.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            BasketMode::WorstOf => "Worst-Of",
            BasketMode::BestOf => "Best-Of",
            BasketMode::Average => "Average",
        }
    }
}

impl fmt::Display for BasketMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BasketMode {
    type Err = String;

    /// Parses an aggregation mode from string (case-insensitive).
    ///
    /// Supported spellings:
    /// - WorstOf: "worst-of", "worstof", "min"
    /// - BestOf: "best-of", "bestof", "max"
    /// - Average: "average", "mean", "basket"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "worstof" | "min" => Ok(BasketMode::WorstOf),
            "bestof" | "max" => Ok(BasketMode::BestOf),
            "average" | "mean" | "basket" => Ok(BasketMode::Average),
            _ => Err(format!("Unknown basket mode: {}", s)),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::BasketMode;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for BasketMode {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for BasketMode {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            BasketMode::from_str(&s).map_err(de::Error::custom)
        }
    }
}

/// Reduces a set of underlying performances to one basket level.
///
/// - `WorstOf`: minimum performance
/// - `BestOf`: maximum performance
/// - `Average`: equal-weighted mean when no member carries a weight,
///   weighted mean when every member does; anything in between is rejected
///
/// # Errors
/// - [`BasketError::EmptyBasket`] for an empty performance set
/// - [`BasketError::InconsistentWeights`] when only some members carry
///   weights
/// - [`BasketError::NonPositiveWeightSum`] when explicit weights sum to a
///   non-positive number
///
/// # Examples
///
/// ```
/// use notes_models::basket::{aggregate, BasketMode, UnderlyingPerformance};
///
/// let performances = vec![
///     UnderlyingPerformance::with_weight("A", 90.0, 0.75),
///     UnderlyingPerformance::with_weight("B", 110.0, 0.25),
/// ];
/// let level = aggregate(&performances, BasketMode::Average).unwrap();
/// assert_eq!(level, 95.0);
/// ```
pub fn aggregate(
    performances: &[UnderlyingPerformance],
    mode: BasketMode,
) -> Result<f64, BasketError> {
    if performances.is_empty() {
        return Err(BasketError::EmptyBasket);
    }

    match mode {
        BasketMode::WorstOf => Ok(performances
            .iter()
            .map(|p| p.performance)
            .fold(f64::INFINITY, f64::min)),
        BasketMode::BestOf => Ok(performances
            .iter()
            .map(|p| p.performance)
            .fold(f64::NEG_INFINITY, f64::max)),
        BasketMode::Average => {
            let weighted = performances.iter().filter(|p| p.weight.is_some()).count();
            if weighted == 0 {
                let sum: f64 = performances.iter().map(|p| p.performance).sum();
                Ok(sum / performances.len() as f64)
            } else if weighted == performances.len() {
                let weight_sum: f64 = performances.iter().filter_map(|p| p.weight).sum();
                if weight_sum <= 0.0 {
                    return Err(BasketError::NonPositiveWeightSum);
                }
                let weighted_sum: f64 = performances
                    .iter()
                    .map(|p| p.performance * p.weight.unwrap_or(0.0))
                    .sum();
                Ok(weighted_sum / weight_sum)
            } else {
                Err(BasketError::InconsistentWeights)
            }
        }
    }
}
