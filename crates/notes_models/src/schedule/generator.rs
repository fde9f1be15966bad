//! Schedule generation for both template variants.

use notes_core::calendar::TradingCalendar;

use super::error::ScheduleError;
use super::period::ObservationPeriod;
use super::schedule::ObservationSchedule;
use crate::product::{ConfigError, ProductConfig, TemplateVariant};

/// Generates the observation schedule for a product.
///
/// The configuration is validated first; no partial schedule is ever
/// produced from a bad config.
///
/// Standard variant: observation candidates at trade date + k × frequency
/// months, clamped to the final observation date (which marks the final
/// period), then rolled forward to trading days. Value dates are
/// observation dates + the settlement delay in calendar days, rolled
/// forward. Callability starts after the cool-off, with the autocall level
/// stepped per callable period.
///
/// Himalaya variant: one observation per underlying, evenly spaced in real
/// days between trade date and final observation date (rounded, then
/// rolled forward); no autocall or barrier terms.
///
/// # Errors
/// - [`ScheduleError::Config`] for an invalid configuration, including a
///   per-period coupon or barrier schedule that does not cover the
///   generated periods
/// - [`ScheduleError::Calendar`] when trading-day adjustment exhausts its
///   horizon
/// - validation errors from [`ObservationSchedule::new`] if adjustment
///   collapses ordering (only possible with pathological inputs)
///
/// # Examples
///
/// ```
/// use notes_core::types::Date;
/// use notes_models::product::{BarrierSchedule, CouponSchedule, ProductConfig, Underlying};
/// use notes_models::schedule::{generate, Frequency};
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
/// let schedule = generate(&config).unwrap();
/// assert_eq!(schedule.len(), 4);
/// assert_eq!(schedule.period(1).unwrap().autocall_level(), None);
/// assert_eq!(schedule.period(3).unwrap().autocall_level(), Some(95.0));
/// ```
pub fn generate(config: &ProductConfig) -> Result<ObservationSchedule, ScheduleError> {
    config.validate()?;

    let calendar = TradingCalendar::new(config.calendars.clone());

    let periods = match config.variant {
        TemplateVariant::Standard => standard_periods(config, &calendar)?,
        TemplateVariant::Himalaya => himalaya_periods(config, &calendar)?,
    };

    ObservationSchedule::new(periods)
}

fn standard_periods(
    config: &ProductConfig,
    calendar: &TradingCalendar,
) -> Result<Vec<ObservationPeriod>, ScheduleError> {
    let months = config.frequency.months_between_observations();
    let mut periods = Vec::new();
    let mut k: u32 = 1;

    loop {
        let candidate = config.trade_date.add_months(k * months)?;
        let is_final = candidate >= config.final_observation_date;
        let candidate = if candidate > config.final_observation_date {
            config.final_observation_date
        } else {
            candidate
        };

        let observation_date = calendar.roll_forward(candidate)?;
        let value_date =
            calendar.roll_forward(observation_date.add_days(i64::from(config.delay_days))?)?;

        let is_callable = k > config.cool_off_periods;
        let autocall_level = if is_callable {
            let callable_index = k - config.cool_off_periods - 1;
            Some(config.initial_autocall_level
                + config.step_down_per_period * f64::from(callable_index))
        } else {
            None
        };

        let coupon_barrier = config.coupon_barrier.level_for_period(k).ok_or_else(|| {
            ConfigError::BarrierCountMismatch {
                period_index: k,
                barriers: config.coupon_barrier.explicit_len().unwrap_or(0),
            }
        })?;

        periods.push(ObservationPeriod::new(
            k,
            observation_date,
            value_date,
            is_callable,
            autocall_level,
            Some(coupon_barrier),
            is_final,
        ));

        if is_final {
            break;
        }
        k += 1;
    }

    if !config.coupon_rate.covers(periods.len()) {
        return Err(ConfigError::CouponCountMismatch {
            periods: periods.len(),
            rates: config.coupon_rate.explicit_len().unwrap_or(0),
        }
        .into());
    }

    Ok(periods)
}

fn himalaya_periods(
    config: &ProductConfig,
    calendar: &TradingCalendar,
) -> Result<Vec<ObservationPeriod>, ScheduleError> {
    // One observation per underlying; validation guarantees a non-empty
    // basket.
    let observations = config.underlyings.len();
    let total_days = (config.final_observation_date - config.trade_date) as f64;
    let interval = total_days / observations as f64;

    let mut periods = Vec::with_capacity(observations);
    for k in 1..=observations {
        let offset = (interval * k as f64).round() as i64;
        let candidate = config.trade_date.add_days(offset)?;
        let observation_date = calendar.roll_forward(candidate)?;
        let value_date =
            calendar.roll_forward(observation_date.add_days(i64::from(config.delay_days))?)?;

        periods.push(ObservationPeriod::new(
            k as u32,
            observation_date,
            value_date,
            true,
            None,
            None,
            k == observations,
        ));
    }

    Ok(periods)
}
