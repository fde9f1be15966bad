//! The validated observation schedule.

use notes_core::types::Date;

use super::error::ScheduleError;
use super::period::ObservationPeriod;

/// The ordered, validated list of observation periods for one product.
///
/// Invariants, enforced at construction:
/// - at least one period
/// - period indices contiguous, 1-based
/// - observation dates strictly increasing
/// - every value date on or after its observation date
/// - exactly the last period flagged final
///
/// Schedules are immutable values; a manual date edit produces a new,
/// re-validated schedule via [`ObservationSchedule::with_edited_dates`].
///
/// # Examples
///
/// ```
/// use notes_core::types::Date;
/// use notes_models::schedule::{ObservationPeriod, ObservationSchedule};
///
/// let schedule = ObservationSchedule::new(vec![
///     ObservationPeriod::new(
///         1,
///         Date::from_ymd(2024, 4, 15).unwrap(),
///         Date::from_ymd(2024, 4, 17).unwrap(),
///         false,
///         None,
///         Some(70.0),
///         false,
///     ),
///     ObservationPeriod::new(
///         2,
///         Date::from_ymd(2024, 7, 15).unwrap(),
///         Date::from_ymd(2024, 7, 17).unwrap(),
///         true,
///         Some(100.0),
///         Some(70.0),
///         true,
///     ),
/// ])
/// .unwrap();
///
/// assert_eq!(schedule.len(), 2);
/// assert_eq!(schedule.final_period().period_index(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObservationSchedule {
    periods: Vec<ObservationPeriod>,
}

impl ObservationSchedule {
    /// Creates a schedule from a list of periods, validating the invariants.
    ///
    /// # Errors
    /// Returns the specific [`ScheduleError`] for the first violated
    /// invariant; violations are never silently repaired.
    pub fn new(periods: Vec<ObservationPeriod>) -> Result<Self, ScheduleError> {
        if periods.is_empty() {
            return Err(ScheduleError::Empty);
        }

        for (position, period) in periods.iter().enumerate() {
            let expected = position as u32 + 1;
            if period.period_index() != expected {
                return Err(ScheduleError::NonContiguousIndices {
                    expected,
                    got: period.period_index(),
                });
            }

            if period.value_date() < period.observation_date() {
                return Err(ScheduleError::ValueBeforeObservation {
                    period_index: period.period_index(),
                    value_date: period.value_date(),
                    observation_date: period.observation_date(),
                });
            }

            if position > 0 {
                let previous = &periods[position - 1];
                if period.observation_date() <= previous.observation_date() {
                    return Err(ScheduleError::NonMonotonicDates {
                        period_index: period.period_index(),
                        observation_date: period.observation_date(),
                        previous_date: previous.observation_date(),
                    });
                }
            }

            let should_be_final = position == periods.len() - 1;
            if period.is_final() != should_be_final {
                return Err(ScheduleError::MisplacedFinalFlag);
            }
        }

        Ok(Self { periods })
    }

    /// Returns the periods in order.
    #[inline]
    pub fn periods(&self) -> &[ObservationPeriod] {
        &self.periods
    }

    /// Returns the number of periods.
    #[inline]
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Returns whether the schedule is empty (never true for a validated
    /// schedule; present for container-API completeness).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Returns an iterator over the periods.
    pub fn iter(&self) -> impl Iterator<Item = &ObservationPeriod> {
        self.periods.iter()
    }

    /// Returns the period with the given 1-based index, if present.
    pub fn period(&self, period_index: u32) -> Option<&ObservationPeriod> {
        period_index
            .checked_sub(1)
            .and_then(|i| self.periods.get(i as usize))
    }

    /// Returns the final period.
    pub fn final_period(&self) -> &ObservationPeriod {
        // Validated construction guarantees at least one period.
        &self.periods[self.periods.len() - 1]
    }

    /// Returns the first observation date.
    pub fn first_observation_date(&self) -> Date {
        self.periods[0].observation_date()
    }

    /// Returns the last observation date.
    pub fn last_observation_date(&self) -> Date {
        self.final_period().observation_date()
    }

    /// Returns a new schedule with one period's dates replaced.
    ///
    /// Supports manual edits to individual observation/value dates; the
    /// edited schedule is re-validated in full, so an edit that breaks
    /// strict ordering is rejected rather than reordered.
    ///
    /// # Errors
    /// - [`ScheduleError::UnknownPeriod`] when no period has the index
    /// - any validation error the edited schedule violates
    pub fn with_edited_dates(
        &self,
        period_index: u32,
        observation_date: Date,
        value_date: Date,
    ) -> Result<Self, ScheduleError> {
        let position = period_index
            .checked_sub(1)
            .map(|i| i as usize)
            .filter(|&i| i < self.periods.len())
            .ok_or(ScheduleError::UnknownPeriod { period_index })?;

        let mut periods = self.periods.clone();
        periods[position] = periods[position].with_dates(observation_date, value_date);
        Self::new(periods)
    }
}
