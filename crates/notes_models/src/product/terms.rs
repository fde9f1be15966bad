//! Coupon and barrier terms: flat or per-period.

/// A coupon rate term: one flat rate, or an explicit rate per period.
///
/// Rates are monetary amounts per observation period (in the note's payout
/// currency per unit notional); the evaluator pays, accrues, or forfeits
/// them according to the barrier rules.
///
/// # Examples
///
/// ```
/// use notes_models::product::CouponSchedule;
///
/// let flat = CouponSchedule::Flat(1.25);
/// assert_eq!(flat.rate_for_period(7), Some(1.25));
///
/// let stepped = CouponSchedule::PerPeriod(vec![1.0, 1.5, 2.0]);
/// assert_eq!(stepped.rate_for_period(2), Some(1.5));
/// assert_eq!(stepped.rate_for_period(4), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum CouponSchedule {
    /// The same rate applies to every period.
    Flat(f64),
    /// One rate per period, indexed by 1-based period index.
    PerPeriod(Vec<f64>),
}

impl CouponSchedule {
    /// Returns the rate for a 1-based period index, or `None` when a
    /// per-period schedule does not cover that index.
    pub fn rate_for_period(&self, period_index: u32) -> Option<f64> {
        match self {
            CouponSchedule::Flat(rate) => Some(*rate),
            CouponSchedule::PerPeriod(rates) => {
                rates.get(period_index.checked_sub(1)? as usize).copied()
            }
        }
    }

    /// Returns whether this schedule provides a rate for every one of
    /// `periods` periods.
    pub fn covers(&self, periods: usize) -> bool {
        match self {
            CouponSchedule::Flat(_) => true,
            CouponSchedule::PerPeriod(rates) => rates.len() >= periods,
        }
    }

    /// Returns the number of explicit entries (`None` for a flat schedule).
    pub fn explicit_len(&self) -> Option<usize> {
        match self {
            CouponSchedule::Flat(_) => None,
            CouponSchedule::PerPeriod(rates) => Some(rates.len()),
        }
    }
}

/// A coupon barrier term: one flat barrier, or an explicit barrier per
/// period.
///
/// Barriers are percentages of the initial basket level (100 = strike
/// parity).
///
/// # Examples
///
/// ```
/// use notes_models::product::BarrierSchedule;
///
/// let flat = BarrierSchedule::Flat(70.0);
/// assert_eq!(flat.level_for_period(3), Some(70.0));
///
/// let stepped = BarrierSchedule::PerPeriod(vec![70.0, 65.0]);
/// assert_eq!(stepped.level_for_period(2), Some(65.0));
/// assert_eq!(stepped.level_for_period(3), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum BarrierSchedule {
    /// The same barrier applies to every period.
    Flat(f64),
    /// One barrier per period, indexed by 1-based period index.
    PerPeriod(Vec<f64>),
}

impl BarrierSchedule {
    /// Returns the barrier for a 1-based period index, or `None` when a
    /// per-period schedule does not cover that index.
    pub fn level_for_period(&self, period_index: u32) -> Option<f64> {
        match self {
            BarrierSchedule::Flat(level) => Some(*level),
            BarrierSchedule::PerPeriod(levels) => {
                levels.get(period_index.checked_sub(1)? as usize).copied()
            }
        }
    }

    /// Returns the number of explicit entries (`None` for a flat schedule).
    pub fn explicit_len(&self) -> Option<usize> {
        match self {
            BarrierSchedule::Flat(_) => None,
            BarrierSchedule::PerPeriod(levels) => Some(levels.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_coupon_covers_everything() {
        let flat = CouponSchedule::Flat(1.25);
        assert_eq!(flat.rate_for_period(1), Some(1.25));
        assert_eq!(flat.rate_for_period(100), Some(1.25));
        assert!(flat.covers(1000));
        assert_eq!(flat.explicit_len(), None);
    }

    #[test]
    fn test_per_period_coupon_indexing() {
        let stepped = CouponSchedule::PerPeriod(vec![1.0, 1.5, 2.0]);
        assert_eq!(stepped.rate_for_period(1), Some(1.0));
        assert_eq!(stepped.rate_for_period(3), Some(2.0));
        assert_eq!(stepped.rate_for_period(4), None);
        assert_eq!(stepped.rate_for_period(0), None);
        assert!(stepped.covers(3));
        assert!(!stepped.covers(4));
        assert_eq!(stepped.explicit_len(), Some(3));
    }

    #[test]
    fn test_flat_barrier() {
        let flat = BarrierSchedule::Flat(70.0);
        assert_eq!(flat.level_for_period(1), Some(70.0));
        assert_eq!(flat.level_for_period(99), Some(70.0));
    }

    #[test]
    fn test_per_period_barrier_indexing() {
        let stepped = BarrierSchedule::PerPeriod(vec![70.0, 65.0, 60.0]);
        assert_eq!(stepped.level_for_period(2), Some(65.0));
        assert_eq!(stepped.level_for_period(0), None);
        assert_eq!(stepped.level_for_period(4), None);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_flat_coupon_deserialises_from_number() {
            let parsed: CouponSchedule = serde_json::from_str("1.25").unwrap();
            assert_eq!(parsed, CouponSchedule::Flat(1.25));
        }

        #[test]
        fn test_per_period_coupon_deserialises_from_array() {
            let parsed: CouponSchedule = serde_json::from_str("[1.0, 1.5]").unwrap();
            assert_eq!(parsed, CouponSchedule::PerPeriod(vec![1.0, 1.5]));
        }

        #[test]
        fn test_barrier_roundtrip() {
            let barrier = BarrierSchedule::PerPeriod(vec![70.0, 65.0]);
            let json = serde_json::to_string(&barrier).unwrap();
            let parsed: BarrierSchedule = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, barrier);
        }
    }
}
