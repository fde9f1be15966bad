//! Observed market performances keyed by period index.

use std::collections::BTreeMap;

use notes_models::basket::UnderlyingPerformance;

/// Observed underlying performances for a product's occurred periods.
///
/// Supplied by the caller (market-data ingestion is an external
/// collaborator); the evaluator consumes entries in period order and stops
/// at the first gap — a period without data stays unresolved rather than
/// being evaluated against a fabricated level.
///
/// # Examples
///
/// ```
/// use notes_engine::evaluation::MarketHistory;
/// use notes_models::basket::UnderlyingPerformance;
///
/// let mut history = MarketHistory::new();
/// history.insert(1, vec![UnderlyingPerformance::new("SX5E", 96.0)]);
///
/// assert!(history.contains(1));
/// assert!(!history.contains(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketHistory {
    observations: BTreeMap<u32, Vec<UnderlyingPerformance>>,
}

impl MarketHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the performances observed at a period, replacing any
    /// previous entry for that index.
    pub fn insert(&mut self, period_index: u32, performances: Vec<UnderlyingPerformance>) {
        self.observations.insert(period_index, performances);
    }

    /// Returns the performances observed at a period, if recorded.
    pub fn get(&self, period_index: u32) -> Option<&[UnderlyingPerformance]> {
        self.observations.get(&period_index).map(Vec::as_slice)
    }

    /// Returns whether a period has an entry.
    pub fn contains(&self, period_index: u32) -> bool {
        self.observations.contains_key(&period_index)
    }

    /// Returns the number of recorded periods.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Returns whether no periods are recorded.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

impl FromIterator<(u32, Vec<UnderlyingPerformance>)> for MarketHistory {
    fn from_iter<I: IntoIterator<Item = (u32, Vec<UnderlyingPerformance>)>>(iter: I) -> Self {
        Self {
            observations: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut history = MarketHistory::new();
        assert!(history.is_empty());

        history.insert(1, vec![UnderlyingPerformance::new("A", 96.0)]);
        history.insert(2, vec![UnderlyingPerformance::new("A", 88.0)]);

        assert_eq!(history.len(), 2);
        assert_eq!(history.get(1).unwrap()[0].performance, 96.0);
        assert!(history.get(3).is_none());
    }

    #[test]
    fn test_insert_replaces() {
        let mut history = MarketHistory::new();
        history.insert(1, vec![UnderlyingPerformance::new("A", 96.0)]);
        history.insert(1, vec![UnderlyingPerformance::new("A", 97.0)]);
        assert_eq!(history.len(), 1);
        assert_eq!(history.get(1).unwrap()[0].performance, 97.0);
    }

    #[test]
    fn test_from_iterator() {
        let history: MarketHistory = (1..=3)
            .map(|k| (k, vec![UnderlyingPerformance::new("A", 100.0)]))
            .collect();
        assert_eq!(history.len(), 3);
    }
}
