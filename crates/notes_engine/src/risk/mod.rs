//! Three-zone distance-to-barrier classification.
//!
//! Stateless: a pure function of the signed distance between the live
//! basket level and the applicable barrier, used to bucket
//! underlying-product pairs for portfolio-wide risk dashboards.

use std::fmt;
use std::str::FromStr;

/// Distance above which a position counts as safe, in percentage points.
pub const SAFE_DISTANCE_THRESHOLD: f64 = 10.0;

/// The three-zone risk bucket for a distance to barrier.
///
/// # Examples
///
/// ```
/// use notes_engine::risk::RiskZone;
///
/// assert_eq!(RiskZone::from_distance(25.0), RiskZone::Safe);
/// assert_eq!(RiskZone::from_distance(4.0), RiskZone::Warning);
/// assert_eq!(RiskZone::from_distance(-2.0), RiskZone::BelowBarrier);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskZone {
    /// Comfortably above the barrier (distance > 10).
    Safe,
    /// Within 10 points of the barrier (0 ≤ distance ≤ 10).
    Warning,
    /// Below the barrier (distance < 0).
    BelowBarrier,
}

impl RiskZone {
    /// Classifies a signed distance to barrier.
    #[inline]
    pub fn from_distance(distance: f64) -> Self {
        if distance < 0.0 {
            RiskZone::BelowBarrier
        } else if distance <= SAFE_DISTANCE_THRESHOLD {
            RiskZone::Warning
        } else {
            RiskZone::Safe
        }
    }

    /// Returns the conventional name for this zone.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            RiskZone::Safe => "Safe",
            RiskZone::Warning => "Warning",
            RiskZone::BelowBarrier => "Below Barrier",
        }
    }
}

impl fmt::Display for RiskZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for RiskZone {
    type Err = String;

    /// Parses a risk zone from its name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '_', '-'], "").as_str() {
            "safe" => Ok(RiskZone::Safe),
            "warning" => Ok(RiskZone::Warning),
            "belowbarrier" => Ok(RiskZone::BelowBarrier),
            _ => Err(format!("Unknown risk zone: {}", s)),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::RiskZone;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for RiskZone {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for RiskZone {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            RiskZone::from_str(&s).map_err(de::Error::custom)
        }
    }
}
