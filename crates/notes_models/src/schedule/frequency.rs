//! Observation frequency enumeration.

use std::fmt;
use std::str::FromStr;

/// Observation frequency for standard-variant schedules.
///
/// Defines the spacing, in whole months, between contractual observation
/// dates.
///
/// # Examples
///
/// ```
/// use notes_models::schedule::Frequency;
///
/// let freq = Frequency::Quarterly;
/// assert_eq!(freq.months_between_observations(), 3);
/// assert_eq!(freq.observations_per_year(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    /// Monthly observations.
    Monthly,
    /// Quarterly observations.
    Quarterly,
    /// Semi-annual observations.
    SemiAnnual,
    /// Annual observations.
    Annual,
}

impl Frequency {
    /// Returns the number of whole months between observation dates.
    ///
    /// # Examples
    ///
    /// ```
    /// use notes_models::schedule::Frequency;
    ///
    /// assert_eq!(Frequency::Monthly.months_between_observations(), 1);
    /// assert_eq!(Frequency::Quarterly.months_between_observations(), 3);
    /// assert_eq!(Frequency::SemiAnnual.months_between_observations(), 6);
    /// assert_eq!(Frequency::Annual.months_between_observations(), 12);
    /// ```
    #[inline]
    pub fn months_between_observations(&self) -> u32 {
        match self {
            Frequency::Monthly => 1,
            Frequency::Quarterly => 3,
            Frequency::SemiAnnual => 6,
            Frequency::Annual => 12,
        }
    }

    /// Returns the number of observations per year.
    #[inline]
    pub fn observations_per_year(&self) -> u32 {
        match self {
            Frequency::Monthly => 12,
            Frequency::Quarterly => 4,
            Frequency::SemiAnnual => 2,
            Frequency::Annual => 1,
        }
    }

    /// Returns the standard name for this frequency.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::Annual => "Annual",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Frequency {
    type Err = String;

    /// Parses frequency from string (case-insensitive).
    ///
    /// Supported spellings:
    /// - Monthly: "monthly", "1m"
    /// - Quarterly: "quarterly", "3m"
    /// - SemiAnnual: "semi-annual", "semiannually", "6m"
    /// - Annual: "annual", "annually", "12m", "1y"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "monthly" | "1m" => Ok(Frequency::Monthly),
            "quarterly" | "3m" => Ok(Frequency::Quarterly),
            "semiannual" | "semiannually" | "6m" => Ok(Frequency::SemiAnnual),
            "annual" | "annually" | "yearly" | "12m" | "1y" => Ok(Frequency::Annual),
            _ => Err(format!("Unknown frequency: {}", s)),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Frequency;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for Frequency {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for Frequency {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Frequency::from_str(&s).map_err(de::Error::custom)
        }
    }
}
