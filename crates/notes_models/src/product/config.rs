//! Product configuration and its builder.

use notes_core::calendar::MarketCalendar;
use notes_core::types::Date;

use super::error::ConfigError;
use super::terms::{BarrierSchedule, CouponSchedule};
use super::underlying::Underlying;
use crate::basket::BasketMode;
use crate::schedule::Frequency;

/// Payoff template variant.
///
/// The Himalaya variant replaces the autocall/barrier semantics with the
/// best-performer removal rule and derives its observation count from the
/// number of underlyings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TemplateVariant {
    /// Autocallable note with coupon barrier and optional coupon memory.
    #[default]
    Standard,
    /// Himalaya removal basket: best performer locked in and removed at
    /// each observation.
    Himalaya,
}

/// When a Himalaya locked-in performance is marked.
///
/// The observed upstream behaviour freezes the performance at the removal
/// observation; re-marking at maturity is kept as an explicit alternative
/// pending product-owner confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HimalayaLockPolicy {
    /// Performance frozen at the price observed when the member is removed.
    #[default]
    AtRemoval,
    /// Locked members re-marked from final prices at maturity.
    RemarkAtMaturity,
}

/// Immutable product configuration: the input to schedule generation and
/// outcome evaluation.
///
/// Construct via [`ProductConfigBuilder`] (which validates on `build()`),
/// or deserialise and call [`ProductConfig::validate`] before use —
/// the generator re-validates either way.
///
/// # Examples
///
/// ```
/// use notes_core::types::Date;
/// use notes_models::product::{
///     BarrierSchedule, CouponSchedule, ProductConfig, Underlying,
/// };
/// use notes_models::schedule::Frequency;
///
/// let config = ProductConfig::builder()
///     .trade_date(Date::from_ymd(2024, 1, 15).unwrap())
///     .final_observation_date(Date::from_ymd(2025, 1, 15).unwrap())
///     .frequency(Frequency::Quarterly)
///     .cool_off_periods(1)
///     .initial_autocall_level(100.0)
///     .step_down_per_period(-5.0)
///     .coupon_barrier(BarrierSchedule::Flat(70.0))
///     .coupon_rate(CouponSchedule::Flat(1.25))
///     .protection_barrier(60.0)
///     .underlying(Underlying::new("SX5E", 4_900.0))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.cool_off_periods, 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductConfig {
    /// Trade (strike) date.
    pub trade_date: Date,
    /// Final observation date; also the maturity observation.
    pub final_observation_date: Date,
    /// Observation frequency.
    pub frequency: Frequency,
    /// Calendar days from observation date to value (settlement) date,
    /// before trading-day adjustment.
    #[cfg_attr(feature = "serde", serde(default))]
    pub delay_days: u32,
    /// Number of leading non-callable periods.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cool_off_periods: u32,
    /// Autocall level for the first callable period, as a percentage of
    /// strike (100 = parity).
    #[cfg_attr(feature = "serde", serde(default = "default_parity"))]
    pub initial_autocall_level: f64,
    /// Signed step applied to the autocall level per callable period.
    #[cfg_attr(feature = "serde", serde(default))]
    pub step_down_per_period: f64,
    /// Coupon barrier, flat or per period.
    pub coupon_barrier: BarrierSchedule,
    /// Coupon rate, flat or per period.
    pub coupon_rate: CouponSchedule,
    /// Whether missed coupons accrue for later payout.
    #[cfg_attr(feature = "serde", serde(default))]
    pub coupon_memory_enabled: bool,
    /// Capital protection barrier, as a percentage of strike.
    pub protection_barrier: f64,
    /// How multiple underlying performances reduce to one basket level.
    #[cfg_attr(feature = "serde", serde(default))]
    pub basket_mode: BasketMode,
    /// The basket members.
    pub underlyings: Vec<Underlying>,
    /// Market jurisdictions used for trading-day adjustment.
    #[cfg_attr(feature = "serde", serde(default))]
    pub calendars: Vec<MarketCalendar>,
    /// Payoff template variant.
    #[cfg_attr(feature = "serde", serde(default))]
    pub variant: TemplateVariant,
    /// Himalaya lock-in marking policy (ignored for the standard variant).
    #[cfg_attr(feature = "serde", serde(default))]
    pub himalaya_lock_policy: HimalayaLockPolicy,
}

#[cfg(feature = "serde")]
fn default_parity() -> f64 {
    100.0
}

impl ProductConfig {
    /// Returns a new [`ProductConfigBuilder`].
    pub fn builder() -> ProductConfigBuilder {
        ProductConfigBuilder::new()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when:
    /// - the trade date is not strictly before the final observation date
    /// - the basket is empty
    /// - any strike, barrier, or autocall level is not strictly positive
    /// - any coupon rate is negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trade_date >= self.final_observation_date {
            return Err(ConfigError::InvalidDateRange {
                trade_date: self.trade_date,
                final_observation_date: self.final_observation_date,
            });
        }

        if self.underlyings.is_empty() {
            return Err(ConfigError::EmptyBasket);
        }

        for underlying in &self.underlyings {
            if underlying.strike <= 0.0 {
                return Err(ConfigError::NonPositiveStrike {
                    underlying: underlying.id.clone(),
                    strike: underlying.strike,
                });
            }
        }

        if self.initial_autocall_level <= 0.0 {
            return Err(ConfigError::NonPositiveLevel {
                field: "initial_autocall_level",
                value: self.initial_autocall_level,
            });
        }

        if self.protection_barrier <= 0.0 {
            return Err(ConfigError::NonPositiveLevel {
                field: "protection_barrier",
                value: self.protection_barrier,
            });
        }

        match &self.coupon_barrier {
            BarrierSchedule::Flat(level) => {
                if *level <= 0.0 {
                    return Err(ConfigError::NonPositiveLevel {
                        field: "coupon_barrier",
                        value: *level,
                    });
                }
            }
            BarrierSchedule::PerPeriod(levels) => {
                for level in levels {
                    if *level <= 0.0 {
                        return Err(ConfigError::NonPositiveLevel {
                            field: "coupon_barrier",
                            value: *level,
                        });
                    }
                }
            }
        }

        match &self.coupon_rate {
            CouponSchedule::Flat(rate) => {
                if *rate < 0.0 {
                    return Err(ConfigError::NegativeCouponRate {
                        period_index: 1,
                        rate: *rate,
                    });
                }
            }
            CouponSchedule::PerPeriod(rates) => {
                for (i, rate) in rates.iter().enumerate() {
                    if *rate < 0.0 {
                        return Err(ConfigError::NegativeCouponRate {
                            period_index: i as u32 + 1,
                            rate: *rate,
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

/// Builder for [`ProductConfig`] with validation on `build()`.
///
/// Required fields: trade date, final observation date, frequency, coupon
/// barrier, coupon rate, protection barrier, and at least one underlying.
/// Everything else has the conventional default (no settlement delay, no
/// cool-off, parity autocall, no step-down, no memory, worst-of basket,
/// weekend-only calendar, standard variant).
///
/// # Examples
///
/// ```
/// use notes_core::types::Date;
/// use notes_models::product::{
///     BarrierSchedule, ConfigError, CouponSchedule, ProductConfig, Underlying,
/// };
/// use notes_models::schedule::Frequency;
///
/// let result = ProductConfig::builder()
///     .trade_date(Date::from_ymd(2024, 1, 15).unwrap())
///     .frequency(Frequency::Quarterly)
///     .coupon_barrier(BarrierSchedule::Flat(70.0))
///     .coupon_rate(CouponSchedule::Flat(1.25))
///     .protection_barrier(60.0)
///     .underlying(Underlying::new("SX5E", 4_900.0))
///     .build();
///
/// // final observation date missing
/// assert!(matches!(
///     result,
///     Err(ConfigError::MissingField { field: "final_observation_date" })
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct ProductConfigBuilder {
    trade_date: Option<Date>,
    final_observation_date: Option<Date>,
    frequency: Option<Frequency>,
    delay_days: u32,
    cool_off_periods: u32,
    initial_autocall_level: f64,
    step_down_per_period: f64,
    coupon_barrier: Option<BarrierSchedule>,
    coupon_rate: Option<CouponSchedule>,
    coupon_memory_enabled: bool,
    protection_barrier: Option<f64>,
    basket_mode: BasketMode,
    underlyings: Vec<Underlying>,
    calendars: Vec<MarketCalendar>,
    variant: TemplateVariant,
    himalaya_lock_policy: HimalayaLockPolicy,
}

impl Default for ProductConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductConfigBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            trade_date: None,
            final_observation_date: None,
            frequency: None,
            delay_days: 0,
            cool_off_periods: 0,
            initial_autocall_level: 100.0,
            step_down_per_period: 0.0,
            coupon_barrier: None,
            coupon_rate: None,
            coupon_memory_enabled: false,
            protection_barrier: None,
            basket_mode: BasketMode::default(),
            underlyings: Vec::new(),
            calendars: Vec::new(),
            variant: TemplateVariant::default(),
            himalaya_lock_policy: HimalayaLockPolicy::default(),
        }
    }

    /// Sets the trade (strike) date.
    pub fn trade_date(mut self, date: Date) -> Self {
        self.trade_date = Some(date);
        self
    }

    /// Sets the final observation date.
    pub fn final_observation_date(mut self, date: Date) -> Self {
        self.final_observation_date = Some(date);
        self
    }

    /// Sets the observation frequency.
    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    /// Sets the observation-to-settlement delay in calendar days.
    pub fn delay_days(mut self, days: u32) -> Self {
        self.delay_days = days;
        self
    }

    /// Sets the number of leading non-callable periods.
    pub fn cool_off_periods(mut self, periods: u32) -> Self {
        self.cool_off_periods = periods;
        self
    }

    /// Sets the autocall level for the first callable period.
    pub fn initial_autocall_level(mut self, level: f64) -> Self {
        self.initial_autocall_level = level;
        self
    }

    /// Sets the signed autocall step per callable period.
    pub fn step_down_per_period(mut self, step: f64) -> Self {
        self.step_down_per_period = step;
        self
    }

    /// Sets the coupon barrier.
    pub fn coupon_barrier(mut self, barrier: BarrierSchedule) -> Self {
        self.coupon_barrier = Some(barrier);
        self
    }

    /// Sets the coupon rate.
    pub fn coupon_rate(mut self, rate: CouponSchedule) -> Self {
        self.coupon_rate = Some(rate);
        self
    }

    /// Enables or disables coupon memory.
    pub fn coupon_memory_enabled(mut self, enabled: bool) -> Self {
        self.coupon_memory_enabled = enabled;
        self
    }

    /// Sets the capital protection barrier.
    pub fn protection_barrier(mut self, barrier: f64) -> Self {
        self.protection_barrier = Some(barrier);
        self
    }

    /// Sets the basket aggregation mode.
    pub fn basket_mode(mut self, mode: BasketMode) -> Self {
        self.basket_mode = mode;
        self
    }

    /// Adds one underlying to the basket.
    pub fn underlying(mut self, underlying: Underlying) -> Self {
        self.underlyings.push(underlying);
        self
    }

    /// Replaces the basket with the given underlyings.
    pub fn underlyings(mut self, underlyings: Vec<Underlying>) -> Self {
        self.underlyings = underlyings;
        self
    }

    /// Adds one market jurisdiction for trading-day adjustment.
    pub fn calendar(mut self, market: MarketCalendar) -> Self {
        self.calendars.push(market);
        self
    }

    /// Replaces the jurisdiction set.
    pub fn calendars(mut self, markets: Vec<MarketCalendar>) -> Self {
        self.calendars = markets;
        self
    }

    /// Sets the payoff template variant.
    pub fn variant(mut self, variant: TemplateVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the Himalaya lock-in marking policy.
    pub fn himalaya_lock_policy(mut self, policy: HimalayaLockPolicy) -> Self {
        self.himalaya_lock_policy = policy;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] for an unset required field,
    /// then everything [`ProductConfig::validate`] rejects.
    pub fn build(self) -> Result<ProductConfig, ConfigError> {
        let config = ProductConfig {
            trade_date: self.trade_date.ok_or(ConfigError::MissingField {
                field: "trade_date",
            })?,
            final_observation_date: self.final_observation_date.ok_or(
                ConfigError::MissingField {
                    field: "final_observation_date",
                },
            )?,
            frequency: self.frequency.ok_or(ConfigError::MissingField {
                field: "frequency",
            })?,
            delay_days: self.delay_days,
            cool_off_periods: self.cool_off_periods,
            initial_autocall_level: self.initial_autocall_level,
            step_down_per_period: self.step_down_per_period,
            coupon_barrier: self.coupon_barrier.ok_or(ConfigError::MissingField {
                field: "coupon_barrier",
            })?,
            coupon_rate: self.coupon_rate.ok_or(ConfigError::MissingField {
                field: "coupon_rate",
            })?,
            coupon_memory_enabled: self.coupon_memory_enabled,
            protection_barrier: self.protection_barrier.ok_or(ConfigError::MissingField {
                field: "protection_barrier",
            })?,
            basket_mode: self.basket_mode,
            underlyings: self.underlyings,
            calendars: self.calendars,
            variant: self.variant,
            himalaya_lock_policy: self.himalaya_lock_policy,
        };

        config.validate()?;
        Ok(config)
    }
}
