//! Schedule generation and validation error types.

use notes_core::calendar::CalendarError;
use notes_core::types::{Date, DateError};
use thiserror::Error;

use crate::product::ConfigError;

/// Errors from schedule generation and schedule edits.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScheduleError {
    /// The product configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Trading-day adjustment failed (data-integrity class).
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Date arithmetic failed while rolling observation dates.
    #[error(transparent)]
    Date(#[from] DateError),

    /// A schedule with no periods was constructed.
    #[error("Schedule has no periods")]
    Empty,

    /// Period indices are not contiguous starting at 1.
    #[error("Period indices must be contiguous from 1: expected {expected}, got {got}")]
    NonContiguousIndices {
        /// The expected index at this position.
        expected: u32,
        /// The index actually present.
        got: u32,
    },

    /// Observation dates are not strictly increasing.
    #[error("Observation dates out of order at period {period_index}: {observation_date} does not follow {previous_date}")]
    NonMonotonicDates {
        /// The 1-based index of the offending period.
        period_index: u32,
        /// The offending observation date.
        observation_date: Date,
        /// The preceding period's observation date.
        previous_date: Date,
    },

    /// A value date precedes its observation date.
    #[error("Value date {value_date} precedes observation date {observation_date} at period {period_index}")]
    ValueBeforeObservation {
        /// The 1-based index of the offending period.
        period_index: u32,
        /// The offending value date.
        value_date: Date,
        /// The period's observation date.
        observation_date: Date,
    },

    /// The final-period flag is missing or misplaced.
    #[error("Exactly the last period must be flagged final")]
    MisplacedFinalFlag,

    /// An edit referenced a period index not present in the schedule.
    #[error("No period with index {period_index}")]
    UnknownPeriod {
        /// The requested 1-based period index.
        period_index: u32,
    },
}
