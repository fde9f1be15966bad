//! The Himalaya removal basket.

use std::cmp::Ordering;

use super::error::BasketError;
use super::performance::UnderlyingPerformance;

/// One locked-in selection: the best remaining performer at an observation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LockedPerformance {
    /// The 1-based period index of the observation.
    pub period_index: u32,
    /// The member that was locked in and removed.
    pub underlying_id: String,
    /// The member's performance at the removal observation.
    pub performance: f64,
}

/// The stateful Himalaya basket: at each observation the best-performing
/// remaining member is locked in and removed.
///
/// The final payout aggregates all locked-in performances by simple
/// average, computed once after all periods have occurred — it is a
/// property of the completed history, not of any single period.
///
/// # Examples
///
/// ```
/// use notes_models::basket::{HimalayaBasket, UnderlyingPerformance};
///
/// let mut basket = HimalayaBasket::new(vec![
///     "A".to_string(),
///     "B".to_string(),
/// ])
/// .unwrap();
///
/// let locked = basket
///     .observe(1, &[
///         UnderlyingPerformance::new("A", 104.0),
///         UnderlyingPerformance::new("B", 97.0),
///     ])
///     .unwrap();
/// assert_eq!(locked.underlying_id, "A");
///
/// // A is gone; B wins the next observation by default.
/// let locked = basket
///     .observe(2, &[
///         UnderlyingPerformance::new("A", 120.0),
///         UnderlyingPerformance::new("B", 95.0),
///     ])
///     .unwrap();
/// assert_eq!(locked.underlying_id, "B");
///
/// assert_eq!(basket.final_average(), Some((104.0 + 95.0) / 2.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HimalayaBasket {
    /// Members not yet locked in.
    remaining: Vec<String>,
    /// Locked-in selections, in observation order.
    locked_in: Vec<LockedPerformance>,
}

impl HimalayaBasket {
    /// Creates a basket over the given member identifiers.
    ///
    /// # Errors
    /// - [`BasketError::EmptyBasket`] for an empty member list
    /// - [`BasketError::DuplicateUnderlying`] for repeated identifiers
    pub fn new(underlying_ids: Vec<String>) -> Result<Self, BasketError> {
        if underlying_ids.is_empty() {
            return Err(BasketError::EmptyBasket);
        }
        for (i, id) in underlying_ids.iter().enumerate() {
            if underlying_ids[..i].contains(id) {
                return Err(BasketError::DuplicateUnderlying {
                    underlying_id: id.clone(),
                });
            }
        }
        Ok(Self {
            remaining: underlying_ids,
            locked_in: Vec::new(),
        })
    }

    /// Returns the members not yet locked in.
    #[inline]
    pub fn remaining(&self) -> &[String] {
        &self.remaining
    }

    /// Returns the locked-in selections, in observation order.
    #[inline]
    pub fn locked_in(&self) -> &[LockedPerformance] {
        &self.locked_in
    }

    /// Returns whether every member has been locked in.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Locks in and removes the best-performing remaining member.
    ///
    /// Only quotes for members still in the basket are considered; quotes
    /// for removed members are ignored. On error the basket is left
    /// unchanged.
    ///
    /// # Errors
    /// - [`BasketError::Exhausted`] when every member is already removed
    /// - [`BasketError::NoQuotesForRemaining`] when no supplied quote
    ///   matches a remaining member
    pub fn observe(
        &mut self,
        period_index: u32,
        performances: &[UnderlyingPerformance],
    ) -> Result<LockedPerformance, BasketError> {
        if self.remaining.is_empty() {
            return Err(BasketError::Exhausted);
        }

        let best = performances
            .iter()
            .filter(|p| self.remaining.contains(&p.id))
            .max_by(|a, b| {
                a.performance
                    .partial_cmp(&b.performance)
                    .unwrap_or(Ordering::Equal)
            })
            .ok_or(BasketError::NoQuotesForRemaining { period_index })?;

        let locked = LockedPerformance {
            period_index,
            underlying_id: best.id.clone(),
            performance: best.performance,
        };

        self.remaining.retain(|id| id != &locked.underlying_id);
        self.locked_in.push(locked.clone());
        Ok(locked)
    }

    /// Returns the simple average of locked-in performances, or `None`
    /// before any observation has occurred.
    ///
    /// Meaningful as the final payout level only once all periods have
    /// occurred.
    pub fn final_average(&self) -> Option<f64> {
        if self.locked_in.is_empty() {
            return None;
        }
        let sum: f64 = self.locked_in.iter().map(|l| l.performance).sum();
        Some(sum / self.locked_in.len() as f64)
    }

    /// Returns the locked-in average re-marked from final prices: each
    /// locked member contributes its performance in `final_performances`
    /// instead of the level frozen at removal.
    ///
    /// Used by the `RemarkAtMaturity` lock policy.
    ///
    /// # Errors
    /// - [`BasketError::EmptyBasket`] before any observation has occurred
    /// - [`BasketError::MissingQuote`] when a locked member has no final
    ///   quote
    pub fn final_average_remarked(
        &self,
        final_performances: &[UnderlyingPerformance],
    ) -> Result<f64, BasketError> {
        if self.locked_in.is_empty() {
            return Err(BasketError::EmptyBasket);
        }

        let mut sum = 0.0;
        for locked in &self.locked_in {
            let current = final_performances
                .iter()
                .find(|p| p.id == locked.underlying_id)
                .ok_or_else(|| BasketError::MissingQuote {
                    underlying_id: locked.underlying_id.clone(),
                })?;
            sum += current.performance;
        }
        Ok(sum / self.locked_in.len() as f64)
    }
}
