//! Date error types.

use thiserror::Error;

/// Errors from date construction, parsing, and arithmetic.
///
/// # Examples
/// ```
/// use notes_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-02-30");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year component.
        year: i32,
        /// Month component (1-12).
        month: u32,
        /// Day component (1-31).
        day: u32,
    },

    /// Failed to parse a date string.
    #[error("Date parse error: {0}")]
    Parse(String),

    /// Date arithmetic left the representable range.
    #[error("Date arithmetic overflow: {reason}")]
    ArithmeticOverflow {
        /// Description of the offending operation.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_display() {
        let err = DateError::InvalidDate {
            year: 2024,
            month: 2,
            day: 30,
        };
        assert_eq!(format!("{}", err), "Invalid date: 2024-02-30");
    }

    #[test]
    fn test_parse_error_display() {
        let err = DateError::Parse("bad input".to_string());
        assert_eq!(format!("{}", err), "Date parse error: bad input");
    }

    #[test]
    fn test_overflow_display() {
        let err = DateError::ArithmeticOverflow {
            reason: "adding 1 day".to_string(),
        };
        assert_eq!(format!("{}", err), "Date arithmetic overflow: adding 1 day");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = DateError::Parse("x".to_string());
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = DateError::InvalidDate {
            year: 2024,
            month: 2,
            day: 30,
        };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
