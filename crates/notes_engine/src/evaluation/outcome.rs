//! Outcome records and the product state machine.

use std::fmt;

/// The redemption regime decided at maturity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RedemptionRegime {
    /// Final basket level at or above the protection barrier: full capital
    /// return.
    FullCapitalReturn,
    /// Final basket level below the protection barrier: capital reduced
    /// proportionally to the basket level.
    CapitalAtRisk {
        /// The final basket level in percent.
        basket_level: f64,
    },
    /// Himalaya redemption: the average of locked-in performances.
    BasketAverage {
        /// The locked-in average in percent.
        average: f64,
    },
}

impl RedemptionRegime {
    /// Decides the protected vs at-risk regime for a standard note.
    ///
    /// The exact monetary redemption formula is product configuration
    /// outside this engine; the regime decision is the engine's.
    ///
    /// # Examples
    ///
    /// ```
    /// use notes_engine::evaluation::RedemptionRegime;
    ///
    /// assert_eq!(
    ///     RedemptionRegime::decide(75.0, 60.0),
    ///     RedemptionRegime::FullCapitalReturn,
    /// );
    /// assert_eq!(
    ///     RedemptionRegime::decide(55.0, 60.0),
    ///     RedemptionRegime::CapitalAtRisk { basket_level: 55.0 },
    /// );
    /// ```
    pub fn decide(basket_level: f64, protection_barrier: f64) -> Self {
        if basket_level >= protection_barrier {
            RedemptionRegime::FullCapitalReturn
        } else {
            RedemptionRegime::CapitalAtRisk { basket_level }
        }
    }
}

impl fmt::Display for RedemptionRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RedemptionRegime::FullCapitalReturn => write!(f, "full capital return"),
            RedemptionRegime::CapitalAtRisk { basket_level } => {
                write!(f, "capital at risk ({:.2}%)", basket_level)
            }
            RedemptionRegime::BasketAverage { average } => {
                write!(f, "locked-in average ({:.2}%)", average)
            }
        }
    }
}

/// The product lifecycle state machine.
///
/// `Active` → `Called` | `Matured`; the two latter states are terminal and
/// absorbing — once reached, no further outcome is ever produced. A product
/// whose schedule still has unobserved periods simply remains `Active`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EvaluationStatus {
    /// Not yet called or matured; later periods may still resolve.
    Active,
    /// Autocalled early on the given period.
    Called {
        /// The period on which the autocall triggered.
        period_index: u32,
    },
    /// Reached the final period without being called.
    Matured {
        /// The redemption regime decided at maturity.
        redemption: RedemptionRegime,
    },
}

impl EvaluationStatus {
    /// Returns whether this is an absorbing terminal state.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, EvaluationStatus::Active)
    }
}

impl fmt::Display for EvaluationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationStatus::Active => write!(f, "active"),
            EvaluationStatus::Called { period_index } => {
                write!(f, "called at period {}", period_index)
            }
            EvaluationStatus::Matured { redemption } => {
                write!(f, "matured ({})", redemption)
            }
        }
    }
}

/// One resolved observation: the outcome of a period that has occurred.
///
/// Append-only history: outcomes are produced in period order and never
/// rewritten.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObservationOutcome {
    /// The resolved period's 1-based index.
    pub period_index: u32,
    /// The aggregated basket level at the observation, in percent.
    pub basket_level: f64,
    /// Whether the note autocalled on this period.
    pub product_called: bool,
    /// Coupon amount paid, including any released memory.
    pub coupon_paid: f64,
    /// Coupon amount added to memory this period.
    pub coupon_added_to_memory: f64,
    /// Whether this outcome terminated the product (autocall or final
    /// period).
    pub is_terminal: bool,
    /// Himalaya only: the member locked in and removed this period.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    #[cfg_attr(feature = "serde", serde(default))]
    pub locked_underlying: Option<String>,
}

impl fmt::Display for ObservationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Period {}: basket {:.2}%",
            self.period_index, self.basket_level
        )?;
        if self.product_called {
            write!(f, ", called")?;
        }
        if self.coupon_paid > 0.0 {
            write!(f, ", coupon {:.4}", self.coupon_paid)?;
        }
        if self.coupon_added_to_memory > 0.0 {
            write!(f, ", {:.4} to memory", self.coupon_added_to_memory)?;
        }
        if let Some(id) = &self.locked_underlying {
            write!(f, ", locked {}", id)?;
        }
        Ok(())
    }
}
