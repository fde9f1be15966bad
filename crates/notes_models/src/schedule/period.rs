//! Observation period definition.

use notes_core::types::Date;
use std::fmt;

/// A single observation period in a note's schedule.
///
/// Value record: one contractual observation date with its settlement date
/// and callability terms. Periods are 1-indexed and strictly time-ordered
/// within an [`super::ObservationSchedule`].
///
/// For the Himalaya variant the barrier fields carry no meaning and are
/// `None`, with `is_callable` conventionally `true`.
///
/// # Examples
///
/// ```
/// use notes_core::types::Date;
/// use notes_models::schedule::ObservationPeriod;
///
/// let period = ObservationPeriod::new(
///     2,
///     Date::from_ymd(2024, 7, 15).unwrap(),
///     Date::from_ymd(2024, 7, 17).unwrap(),
///     true,
///     Some(100.0),
///     Some(70.0),
///     false,
/// );
///
/// assert!(period.is_callable());
/// assert_eq!(period.autocall_level(), Some(100.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObservationPeriod {
    /// 1-based position in the schedule.
    period_index: u32,
    /// Adjusted observation date.
    observation_date: Date,
    /// Adjusted settlement date.
    value_date: Date,
    /// Whether autocall can trigger on this period.
    is_callable: bool,
    /// Autocall level in percent; `None` while not callable.
    autocall_level: Option<f64>,
    /// Coupon barrier in percent; `None` for the Himalaya variant.
    coupon_barrier: Option<f64>,
    /// Whether this is the last period of the schedule.
    is_final: bool,
}

impl ObservationPeriod {
    /// Creates a new observation period.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        period_index: u32,
        observation_date: Date,
        value_date: Date,
        is_callable: bool,
        autocall_level: Option<f64>,
        coupon_barrier: Option<f64>,
        is_final: bool,
    ) -> Self {
        Self {
            period_index,
            observation_date,
            value_date,
            is_callable,
            autocall_level,
            coupon_barrier,
            is_final,
        }
    }

    /// Returns the 1-based period index.
    #[inline]
    pub fn period_index(&self) -> u32 {
        self.period_index
    }

    /// Returns the adjusted observation date.
    #[inline]
    pub fn observation_date(&self) -> Date {
        self.observation_date
    }

    /// Returns the adjusted value (settlement) date.
    #[inline]
    pub fn value_date(&self) -> Date {
        self.value_date
    }

    /// Returns whether autocall can trigger on this period.
    #[inline]
    pub fn is_callable(&self) -> bool {
        self.is_callable
    }

    /// Returns the autocall level, `None` while not callable.
    #[inline]
    pub fn autocall_level(&self) -> Option<f64> {
        self.autocall_level
    }

    /// Returns the coupon barrier, `None` for the Himalaya variant.
    #[inline]
    pub fn coupon_barrier(&self) -> Option<f64> {
        self.coupon_barrier
    }

    /// Returns whether this is the final period.
    #[inline]
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// Returns this period with different observation and value dates.
    ///
    /// Used by manual schedule edits; the containing schedule re-validates
    /// ordering.
    pub fn with_dates(mut self, observation_date: Date, value_date: Date) -> Self {
        self.observation_date = observation_date;
        self.value_date = value_date;
        self
    }
}

impl fmt::Display for ObservationPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Period {} (obs {}, value {}{}{})",
            self.period_index,
            self.observation_date,
            self.value_date,
            match self.autocall_level {
                Some(level) => format!(", autocall {}", level),
                None => String::new(),
            },
            if self.is_final { ", final" } else { "" },
        )
    }
}
